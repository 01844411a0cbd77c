use std::fs;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Certificate, Client, StatusCode, Url};

use crate::models::{ApiError, ClusterConfig, ConfigError, Version, VersionInfo};

/// 支持的最低集群版本
///
/// 低于此版本的服务器缺少本系统依赖的API行为。
/// 作为默认值注入 [`ClusterApi`],可通过
/// [`ClusterApi::with_minimum_version`] 覆盖。
pub const MIN_API_VERSION: Version = Version::new(1, 8, 0);

/// 集群API客户端
///
/// 职责:
/// - 基于配置构建带认证的HTTP客户端
/// - 获取并校验服务器版本信息
/// - 检查命名空间是否存在
/// - 构造命名空间作用域的资源URL
///
/// 版本解析与比较本身是纯函数 ([`Version`]),
/// 本服务只负责I/O编排与错误呈现。
pub struct ClusterApi {
    config: ClusterConfig,
    minimum_version: Version,
}

impl ClusterApi {
    /// 创建新的API客户端
    ///
    /// # 参数
    /// - `config`: 集群连接配置,构造时立即校验
    ///
    /// # 错误
    /// - `ConfigError::MissingHost` / `ConfigError::InvalidHost`: 配置无效
    pub fn new(config: ClusterConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        tracing::info!(
            host = %config.host,
            timeout_secs = %config.timeout_secs,
            has_token = %config.bearer_token.is_some(),
            "Cluster API client initialized"
        );

        Ok(Self {
            config,
            minimum_version: MIN_API_VERSION,
        })
    }

    /// 覆盖最低版本要求 (构建器模式)
    ///
    /// 默认使用 [`MIN_API_VERSION`]。
    pub fn with_minimum_version(mut self, minimum: Version) -> Self {
        self.minimum_version = minimum;
        self
    }

    /// 当前生效的最低版本要求
    pub fn minimum_version(&self) -> Version {
        self.minimum_version
    }

    /// 集群主机地址
    pub fn host(&self) -> &str {
        &self.config.host
    }

    /// 构建带认证的HTTP客户端
    ///
    /// 应用配置中的超时、Bearer令牌与CA证书。
    /// 客户端内部维护连接池,可克隆后在多个任务中并发使用。
    ///
    /// # 错误
    /// - `ApiError::ClientBuildFailed`: 令牌非法、CA证书不可读或TLS配置失败
    pub fn new_client(&self) -> Result<Client, ApiError> {
        let mut builder = Client::builder()
            .timeout(Duration::from_secs(self.config.timeout_secs))
            .danger_accept_invalid_certs(self.config.accept_invalid_certs);

        if let Some(token) = &self.config.bearer_token {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| ApiError::ClientBuildFailed(format!("认证头无效: {}", e)))?;
            // 标记为敏感,避免令牌出现在调试输出中
            value.set_sensitive(true);

            let mut headers = HeaderMap::new();
            headers.insert(AUTHORIZATION, value);
            builder = builder.default_headers(headers);
        }

        if let Some(path) = &self.config.ca_cert_path {
            let pem = fs::read(path).map_err(|e| {
                ApiError::ClientBuildFailed(format!("无法读取CA证书 {}: {}", path, e))
            })?;
            let certificate = Certificate::from_pem(&pem)
                .map_err(|e| ApiError::ClientBuildFailed(format!("CA证书格式无效: {}", e)))?;
            builder = builder.add_root_certificate(certificate);
        }

        builder
            .build()
            .map_err(|e| ApiError::ClientBuildFailed(e.to_string()))
    }

    /// 获取服务器版本信息
    ///
    /// 请求 `GET {host}/version`,解析JSON响应。
    ///
    /// # 错误
    /// - `ApiError::NetworkFailed`: 请求超时或连接失败
    /// - `ApiError::HttpStatusError`: 服务器返回非200状态码
    /// - `ApiError::JsonParseFailed`: 响应体不是预期的JSON结构
    pub async fn get_version_info(&self, client: &Client) -> Result<VersionInfo, ApiError> {
        let endpoint = self.endpoint_url("/version")?;

        tracing::debug!(endpoint = %endpoint, "Fetching server version info");

        let response = client.get(endpoint).send().await?;
        let status = response.status();

        if status != StatusCode::OK {
            let message = response.text().await.unwrap_or_default();
            tracing::error!(
                status = %status,
                message = %message,
                "Unexpected response from version endpoint"
            );
            return Err(ApiError::HttpStatusError {
                status: status.as_u16(),
                message,
            });
        }

        let info: VersionInfo = response
            .json()
            .await
            .map_err(|e| ApiError::JsonParseFailed(e.to_string()))?;

        tracing::info!(
            git_version = %info.git_version,
            platform = %info.platform,
            "Server version info retrieved"
        );

        Ok(info)
    }

    /// 校验服务器版本兼容性
    ///
    /// 解析 `gitVersion` 字段并与最低版本比较。
    ///
    /// # 错误
    /// - `ApiError::VersionUnparseable`: 版本字符串无法解析
    /// - `ApiError::IncompatibleVersion`: 版本低于最低要求,
    ///   错误信息同时包含实际版本与最低版本
    pub fn check_version(&self, info: &VersionInfo) -> Result<(), ApiError> {
        let actual = Version::parse(&info.git_version)?;

        if !actual.satisfies(&self.minimum_version) {
            tracing::warn!(
                actual = %actual,
                minimum = %self.minimum_version,
                "Server version below supported minimum"
            );
            return Err(ApiError::IncompatibleVersion {
                actual,
                minimum: self.minimum_version,
            });
        }

        tracing::debug!(
            actual = %actual,
            minimum = %self.minimum_version,
            "Server version is compatible"
        );

        Ok(())
    }

    /// 检查命名空间是否存在
    ///
    /// 请求 `GET {host}/api/v1/namespaces/{namespace}`:
    /// - 200: 存在
    /// - 404: 不存在
    /// - 其他状态码: 错误 (如401认证失败不应被解释为"不存在")
    pub async fn namespace_exists(
        &self,
        client: &Client,
        namespace: &str,
    ) -> Result<bool, ApiError> {
        let endpoint = self.url_for(namespace, "")?;

        tracing::debug!(
            namespace = %namespace,
            endpoint = %endpoint,
            "Checking namespace existence"
        );

        let response = client.get(endpoint).send().await?;
        let status = response.status();

        match status {
            StatusCode::OK => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            _ => {
                let message = response.text().await.unwrap_or_default();
                tracing::error!(
                    namespace = %namespace,
                    status = %status,
                    "Unexpected response from namespace endpoint"
                );
                Err(ApiError::HttpStatusError {
                    status: status.as_u16(),
                    message,
                })
            }
        }
    }

    /// 构造命名空间作用域的资源URL
    ///
    /// 生成 `{host}/api/v1/namespaces/{namespace}{extra_path}`。
    ///
    /// # 参数
    /// - `namespace`: 命名空间名称
    /// - `extra_path`: 附加路径,非空时必须以 `/` 开头 (如 "/pods")
    ///
    /// # 错误
    /// - `ApiError::InvalidUrl`: 附加路径格式错误或拼接结果不是合法URL
    pub fn url_for(&self, namespace: &str, extra_path: &str) -> Result<Url, ApiError> {
        if !extra_path.is_empty() && !extra_path.starts_with('/') {
            return Err(ApiError::InvalidUrl(format!(
                "附加路径必须以 '/' 开头: {}",
                extra_path
            )));
        }

        self.endpoint_url(&format!("/api/v1/namespaces/{}{}", namespace, extra_path))
    }

    /// 拼接主机地址与路径并解析为URL
    fn endpoint_url(&self, path: &str) -> Result<Url, ApiError> {
        let raw = format!("{}{}", self.config.host, path);
        Url::parse(&raw).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", raw, e)))
    }
}

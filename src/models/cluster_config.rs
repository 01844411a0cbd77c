use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::models::errors::ConfigError;

/// 默认请求超时 (秒)
///
/// 版本查询与命名空间检查都是轻量GET请求,5秒足够覆盖正常网络抖动
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// 集群连接配置
///
/// 封装访问集群API所需的全部参数。
/// 每个字段都服务于连接建立、安全认证和请求控制。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterConfig {
    /// API服务器地址
    ///
    /// 示例: "https://cluster.example.com:6443"
    /// 末尾斜杠在构造时被规范化移除,保证URL拼接稳定
    pub host: String,

    /// Bearer认证令牌 (可选)
    ///
    /// 如果API服务器要求认证,此字段必需。
    /// 注意: 令牌值不记录到日志
    pub bearer_token: Option<String>,

    /// 额外的CA证书路径 (可选,PEM格式)
    ///
    /// 私有集群通常使用自签发CA,需要显式信任
    pub ca_cert_path: Option<String>,

    /// 请求超时 (秒)
    pub timeout_secs: u64,

    /// 是否跳过TLS证书校验
    ///
    /// 仅用于开发环境调试,生产环境应配置 `ca_cert_path`
    pub accept_invalid_certs: bool,
}

impl ClusterConfig {
    /// 创建新的集群配置
    ///
    /// # 参数
    /// - `host`: API服务器地址,末尾斜杠自动移除
    ///
    /// # 示例
    /// ```
    /// use kube_access::models::ClusterConfig;
    ///
    /// let config = ClusterConfig::new("https://cluster.example.com:6443/".to_string());
    /// assert_eq!(config.host, "https://cluster.example.com:6443");
    /// ```
    pub fn new(host: String) -> Self {
        Self {
            host: host.trim_end_matches('/').to_string(),
            bearer_token: None,
            ca_cert_path: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            accept_invalid_certs: false,
        }
    }

    /// 设置Bearer令牌 (构建器模式)
    pub fn with_bearer_token(mut self, token: String) -> Self {
        self.bearer_token = Some(token);
        self
    }

    /// 设置CA证书路径 (构建器模式)
    pub fn with_ca_cert_path(mut self, path: String) -> Self {
        self.ca_cert_path = Some(path);
        self
    }

    /// 设置请求超时 (构建器模式)
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// 跳过TLS证书校验 (构建器模式)
    pub fn with_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// 校验配置有效性
    ///
    /// 主机地址必须是绝对的 http/https URL。
    ///
    /// # 错误
    /// - `ConfigError::MissingHost`: 主机地址为空
    /// - `ConfigError::InvalidHost`: 无法解析为URL或协议不是http(s)
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.is_empty() {
            return Err(ConfigError::MissingHost);
        }

        let url = Url::parse(&self.host)
            .map_err(|e| ConfigError::InvalidHost(format!("{}: {}", self.host, e)))?;

        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(ConfigError::InvalidHost(format!(
                "不支持的协议 '{}': {}",
                other, self.host
            ))),
        }
    }
}

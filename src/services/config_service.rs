use std::env;

use crate::models::{ClusterConfig, ConfigError};
use crate::models::cluster_config::DEFAULT_TIMEOUT_SECS;

/// 环境变量: API服务器地址 (必需)
pub const ENV_HOST: &str = "KUBE_API_HOST";
/// 环境变量: Bearer认证令牌
pub const ENV_TOKEN: &str = "KUBE_API_TOKEN";
/// 环境变量: CA证书路径 (PEM格式)
pub const ENV_CA_CERT: &str = "KUBE_API_CA_CERT";
/// 环境变量: 请求超时秒数
pub const ENV_TIMEOUT_SECS: &str = "KUBE_API_TIMEOUT_SECS";
/// 环境变量: 跳过TLS证书校验 ("true"/"1" 开启)
pub const ENV_ACCEPT_INVALID_CERTS: &str = "KUBE_API_ACCEPT_INVALID_CERTS";

/// 配置服务
///
/// 管理集群连接配置的加载,职责单一:
/// - 从 .env 文件与环境变量读取连接参数
/// - 校验后返回可用的 [`ClusterConfig`]
///
/// 认证机制本身 (kubeconfig、云厂商插件等) 不在职责范围内,
/// 只透传已配置的令牌与CA证书。
pub struct ConfigService;

impl ConfigService {
    /// 加载集群连接配置
    ///
    /// 先尝试加载 .env 文件 (不存在则忽略),再读取环境变量。
    ///
    /// # 错误
    /// - `ConfigError::MissingHost`: 未设置 KUBE_API_HOST
    /// - `ConfigError::InvalidHost`: 主机地址不是合法的 http(s) URL
    pub fn load() -> Result<ClusterConfig, ConfigError> {
        // .env 不存在不是错误,环境变量可能直接设置
        dotenvy::dotenv().ok();

        let host = env::var(ENV_HOST).map_err(|_| ConfigError::MissingHost)?;
        let mut config = ClusterConfig::new(host);

        if let Ok(token) = env::var(ENV_TOKEN) {
            if !token.is_empty() {
                config = config.with_bearer_token(token);
            }
        }

        if let Ok(path) = env::var(ENV_CA_CERT) {
            if !path.is_empty() {
                config = config.with_ca_cert_path(path);
            }
        }

        if let Ok(raw) = env::var(ENV_TIMEOUT_SECS) {
            match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => config = config.with_timeout_secs(secs),
                _ => {
                    tracing::warn!(
                        value = %raw,
                        default = %DEFAULT_TIMEOUT_SECS,
                        "Invalid timeout value, falling back to default"
                    );
                }
            }
        }

        if let Ok(raw) = env::var(ENV_ACCEPT_INVALID_CERTS) {
            let enabled = matches!(raw.trim(), "true" | "1");
            if enabled {
                tracing::warn!("TLS certificate verification disabled by configuration");
            }
            config = config.with_accept_invalid_certs(enabled);
        }

        config.validate()?;

        tracing::info!(
            host = %config.host,
            timeout_secs = %config.timeout_secs,
            has_token = %config.bearer_token.is_some(),
            has_ca_cert = %config.ca_cert_path.is_some(),
            "Cluster configuration loaded"
        );

        Ok(config)
    }
}

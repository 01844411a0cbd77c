use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::version::Version;

/// 版本解析相关错误
///
/// 只针对主版本号报错: minor/patch 的解析是刻意宽松的
/// (真实服务器会在这些字段附加构建元数据,严格失败会拒绝有效输入)。
/// 版本字符串不是瞬态数据,解析失败不重试,直接上报调用方。
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[serde(tag = "error", content = "details")]
pub enum VersionError {
    /// 输入为空
    ///
    /// 版本字符串中没有可提取的主版本号数字序列
    #[error("版本字符串为空或缺少主版本号")]
    Empty,

    /// 主版本号无效
    ///
    /// 主版本号段存在但不是纯非负整数
    #[error("主版本号无效: {0}")]
    InvalidMajor(String),
}

/// API调用相关错误
///
/// 处理与集群API交互时的各种失败场景。
/// 每个错误都包含足够的上下文信息,帮助调试和恢复。
#[derive(Debug, Error, Serialize, Deserialize)]
#[serde(tag = "error", content = "details")]
pub enum ApiError {
    /// 网络请求失败
    ///
    /// 可能原因:
    /// - 网络连接中断
    /// - API服务器不可达
    /// - DNS解析失败
    #[error("网络请求失败: {0}")]
    NetworkFailed(String),

    /// HTTP客户端构建失败
    ///
    /// 认证头、CA证书或TLS配置无法应用
    #[error("API客户端构建失败: {0}")]
    ClientBuildFailed(String),

    /// HTTP状态码错误
    ///
    /// 集群API返回了非预期的状态码
    #[error("集群API响应异常 (状态码 {status}): {message}")]
    HttpStatusError { status: u16, message: String },

    /// JSON解析失败
    ///
    /// 集群API返回的数据格式不符合预期
    #[error("响应数据解析失败: {0}")]
    JsonParseFailed(String),

    /// 资源URL构造失败
    ///
    /// 主机地址与路径片段无法拼接为合法URL
    #[error("无效的资源URL: {0}")]
    InvalidUrl(String),

    /// 服务器版本号无法解析
    ///
    /// `/version` 返回的版本字符串不符合任何已知格式
    #[error("无法解析服务器版本号: {0}")]
    VersionUnparseable(#[from] VersionError),

    /// 服务器版本过低
    ///
    /// 错误信息同时包含检测到的版本与要求的最低版本,
    /// 便于用户直接判断需要升级到哪个版本
    #[error("集群版本为 {actual},要求 {minimum} 或更高版本")]
    IncompatibleVersion {
        /// 服务器实际版本
        actual: Version,
        /// 要求的最低版本 (包含边界)
        minimum: Version,
    },
}

/// 集群连接配置相关错误
///
/// 处理配置加载与校验过程中的失败场景
#[derive(Debug, Error, Serialize, Deserialize)]
#[serde(tag = "error", content = "details")]
pub enum ConfigError {
    /// 缺少主机地址
    ///
    /// 环境变量 KUBE_API_HOST 未设置且 .env 中不存在
    #[error("缺少集群主机地址 (设置 KUBE_API_HOST)")]
    MissingHost,

    /// 主机地址无效
    ///
    /// 主机地址不是合法的 http(s) 绝对URL
    #[error("无效的集群主机地址: {0}")]
    InvalidHost(String),

    /// I/O错误
    ///
    /// 读取CA证书等配置文件时的文件系统错误
    #[error("I/O错误: {0}")]
    IoError(String),
}

/// 实现从reqwest::Error到ApiError的转换
impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::NetworkFailed("请求超时".to_string())
        } else if err.is_connect() {
            ApiError::NetworkFailed("无法连接到服务器".to_string())
        } else {
            ApiError::NetworkFailed(err.to_string())
        }
    }
}

/// 实现从serde_json::Error到ApiError的转换
impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::JsonParseFailed(err.to_string())
    }
}

/// 实现从std::io::Error到ConfigError的转换
impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::IoError(err.to_string())
    }
}

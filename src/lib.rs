//! Kubernetes集群API访问层
//!
//! 提供对远程集群管理API的最小访问能力:
//! - 构建带认证的HTTP客户端
//! - 获取服务器版本信息并校验最低兼容版本
//! - 检查命名空间是否存在
//! - 构造命名空间作用域的资源URL
//!
//! # 核心设计
//!
//! 版本解析与比较是本crate唯一包含设计内容的部分,
//! 以纯函数形式独立于网络I/O ([`models::Version`]),
//! 可在无网络环境下完整测试。
//! 其余部分是对HTTP传输的直接编排 ([`services::ClusterApi`])。

pub mod models;
pub mod services;
pub mod utils;

// 重导出常用类型,简化外部引用
pub use models::{ApiError, ClusterConfig, ConfigError, Version, VersionError, VersionInfo};
pub use services::{ClusterApi, ConfigService, MIN_API_VERSION};

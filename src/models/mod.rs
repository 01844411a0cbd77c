//! 数据模型模块
//!
//! 包含所有核心数据结构:
//! - errors: 错误类型定义 (API、版本解析、配置错误)
//! - version: 版本三元组解析与比较 (本crate的核心逻辑)
//! - cluster_config: 集群连接配置 (主机地址、认证、超时)
//!
//! # 设计原则
//!
//! 1. **存在即合理**: 每个字段都有明确目的,无冗余
//! 2. **优雅即简约**: 类型名自文档化,代码自我阐述
//! 3. **错误处理**: 所有解析返回 Result,提供完整上下文
//! 4. **日志安全**: 敏感数据不记录到日志 (如 bearer token)

pub mod cluster_config;
pub mod errors;
pub mod version;

// 重导出常用类型,简化外部引用
pub use cluster_config::ClusterConfig;
pub use errors::{ApiError, ConfigError, VersionError};
pub use version::{Version, VersionInfo};

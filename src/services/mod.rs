//! 服务层模块
//!
//! 包含所有对外编排逻辑:
//! - `cluster_api`: 集群API客户端,版本检查与命名空间访问
//! - `config_service`: 配置加载服务,从环境变量/.env读取连接参数
//!
//! # 设计原则
//!
//! 1. **存在即合理**: 每个服务都有单一职责,互不重叠
//! 2. **优雅即简约**: 方法签名清晰,易于理解和使用
//! 3. **错误处理**: 所有外部调用都有完整错误处理和日志
//! 4. **日志安全**: 记录关键操作,不记录敏感数据 (如 bearer token)
//!
//! # 服务架构
//!
//! ```text
//! ┌──────────────────┐
//! │  ConfigService   │  环境变量 -> ClusterConfig
//! └────────┬─────────┘
//!          │
//!          ▼
//! ┌──────────────────┐      ┌─────────────────────┐
//! │   ClusterApi     │─────▶│  models::Version    │
//! │  (HTTP编排)       │      │  (纯解析/比较核心)    │
//! └──────────────────┘      └─────────────────────┘
//! ```

pub mod cluster_api;
pub mod config_service;

// 重导出常用类型,简化外部引用
pub use cluster_api::{ClusterApi, MIN_API_VERSION};
pub use config_service::ConfigService;

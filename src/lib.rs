//! Catalog - 商品与分类目录持久化核心
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Catalog Context: 商品名、分类名、价格值对象与分页规则
//!
//! 应用层 (application/):
//! - Ports: 端口定义（CategoryRepository, ProductRepository）
//! - Commands: CQRS 命令处理器
//! - Queries: CQRS 查询处理器
//!
//! 基础设施层 (infrastructure/):
//! - Persistence: SQLite 存储（事务写入、聚合读取）
//! - State: 供路由层持有的 Handler 集合

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};

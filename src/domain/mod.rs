//! Domain Layer - 领域层
//!
//! 包含一个限界上下文:
//! - Catalog Context: 商品与分类

pub mod catalog;

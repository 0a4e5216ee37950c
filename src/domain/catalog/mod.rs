//! Catalog Context - 商品目录限界上下文
//!
//! 职责:
//! - 商品 / 分类的值对象与校验规则
//! - 分页参数解析与分页元数据

mod errors;
mod pagination;
mod value_objects;

pub use errors::CatalogError;
pub use pagination::{PageRequest, PaginationMeta, DEFAULT_LIMIT, DEFAULT_PAGE};
pub use value_objects::{CategoryName, Price, ProductName};

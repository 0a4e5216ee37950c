//! Catalog Context - Errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("无效的商品名称: {0}")]
    InvalidProductName(&'static str),

    #[error("无效的分类名称: {0}")]
    InvalidCategoryName(&'static str),

    #[error("无效的价格: {0}")]
    InvalidPrice(&'static str),
}

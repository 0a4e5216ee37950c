//! Product Queries

use crate::domain::catalog::PageRequest;

/// 分页列出商品查询
#[derive(Debug, Clone, Default)]
pub struct ListProducts {
    pub page: PageRequest,
}

/// 获取商品详情查询
#[derive(Debug, Clone)]
pub struct GetProduct {
    pub product_id: i64,
}

//! Category Queries

use crate::domain::catalog::PageRequest;

/// 列出所有分类查询
#[derive(Debug, Clone)]
pub struct ListCategories;

/// 获取分类详情查询
#[derive(Debug, Clone)]
pub struct GetCategory {
    pub category_id: i64,
}

/// 分页获取分类下商品查询
#[derive(Debug, Clone)]
pub struct GetCategoryProducts {
    pub category_id: i64,
    pub page: PageRequest,
}

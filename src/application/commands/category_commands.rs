//! Category Commands

use crate::application::ports::{CategoryChanges, NewCategory};

/// 创建分类命令
#[derive(Debug, Clone)]
pub struct CreateCategory {
    pub category: NewCategory,
}

/// 更新分类命令
#[derive(Debug, Clone)]
pub struct UpdateCategory {
    pub category_id: i64,
    pub changes: CategoryChanges,
}

/// 删除分类命令
#[derive(Debug, Clone)]
pub struct DeleteCategory {
    pub category_id: i64,
}

//! Category Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateCategory, DeleteCategory, UpdateCategory};
use crate::application::error::ApplicationError;
use crate::application::ports::{
    CategoryChanges, CategoryRecord, CategoryRepositoryPort, Created, NewCategory,
};
use crate::domain::catalog::CategoryName;

// ============================================================================
// CreateCategory
// ============================================================================

/// CreateCategory Handler
pub struct CreateCategoryHandler {
    category_repo: Arc<dyn CategoryRepositoryPort>,
}

impl CreateCategoryHandler {
    pub fn new(category_repo: Arc<dyn CategoryRepositoryPort>) -> Self {
        Self { category_repo }
    }

    pub async fn handle(
        &self,
        command: CreateCategory,
    ) -> Result<Created<NewCategory>, ApplicationError> {
        let category = NewCategory {
            name: CategoryName::new(command.category.name)?.into_inner(),
            ..command.category
        };

        let id = self.category_repo.create(&category).await?;

        tracing::info!(category_id = id, name = %category.name, "Category created");

        Ok(Created { id, data: category })
    }
}

// ============================================================================
// UpdateCategory
// ============================================================================

/// UpdateCategory Handler
///
/// 更新后重新读取，返回最新的分类记录
pub struct UpdateCategoryHandler {
    category_repo: Arc<dyn CategoryRepositoryPort>,
}

impl UpdateCategoryHandler {
    pub fn new(category_repo: Arc<dyn CategoryRepositoryPort>) -> Self {
        Self { category_repo }
    }

    pub async fn handle(&self, command: UpdateCategory) -> Result<CategoryRecord, ApplicationError> {
        let category_id = command.category_id;
        let changes = CategoryChanges {
            name: command
                .changes
                .name
                .map(|name| CategoryName::new(name).map(CategoryName::into_inner))
                .transpose()?,
            ..command.changes
        };

        self.category_repo
            .find_by_id(category_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Category", category_id))?;

        self.category_repo.update(category_id, &changes).await?;

        let updated = self
            .category_repo
            .find_by_id(category_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Category", category_id))?;

        tracing::info!(category_id, name = %updated.name, "Category updated");

        Ok(updated)
    }
}

// ============================================================================
// DeleteCategory
// ============================================================================

/// DeleteCategory Handler
pub struct DeleteCategoryHandler {
    category_repo: Arc<dyn CategoryRepositoryPort>,
}

impl DeleteCategoryHandler {
    pub fn new(category_repo: Arc<dyn CategoryRepositoryPort>) -> Self {
        Self { category_repo }
    }

    pub async fn handle(&self, command: DeleteCategory) -> Result<(), ApplicationError> {
        let category_id = command.category_id;

        // 检查分类是否存在
        let category = self
            .category_repo
            .find_by_id(category_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Category", category_id))?;

        self.category_repo.delete(category_id).await?;

        tracing::info!(category_id, name = %category.name, "Category deleted");

        Ok(())
    }
}

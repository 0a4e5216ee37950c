//! Category Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{CategoryRecord, CategoryRepositoryPort, ProductPage};
use crate::application::queries::{GetCategory, GetCategoryProducts, ListCategories};

/// ListCategories Handler
pub struct ListCategoriesHandler {
    category_repo: Arc<dyn CategoryRepositoryPort>,
}

impl ListCategoriesHandler {
    pub fn new(category_repo: Arc<dyn CategoryRepositoryPort>) -> Self {
        Self { category_repo }
    }

    pub async fn handle(
        &self,
        _query: ListCategories,
    ) -> Result<Vec<CategoryRecord>, ApplicationError> {
        Ok(self.category_repo.find_all().await?)
    }
}

/// GetCategory Handler
pub struct GetCategoryHandler {
    category_repo: Arc<dyn CategoryRepositoryPort>,
}

impl GetCategoryHandler {
    pub fn new(category_repo: Arc<dyn CategoryRepositoryPort>) -> Self {
        Self { category_repo }
    }

    pub async fn handle(&self, query: GetCategory) -> Result<CategoryRecord, ApplicationError> {
        let category = self
            .category_repo
            .find_by_id(query.category_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Category", query.category_id))?;

        Ok(category)
    }
}

/// GetCategoryProducts Handler
///
/// 分类不存在时返回 NotFound，而不是空列表
pub struct GetCategoryProductsHandler {
    category_repo: Arc<dyn CategoryRepositoryPort>,
}

impl GetCategoryProductsHandler {
    pub fn new(category_repo: Arc<dyn CategoryRepositoryPort>) -> Self {
        Self { category_repo }
    }

    pub async fn handle(&self, query: GetCategoryProducts) -> Result<ProductPage, ApplicationError> {
        self.category_repo
            .find_by_id(query.category_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Category", query.category_id))?;

        Ok(self
            .category_repo
            .find_products(query.category_id, query.page)
            .await?)
    }
}

//! Catalog State
//!
//! 包含所有 Command/Query Handlers 的应用状态，供路由层持有

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreateCategoryHandler, CreateProductHandler, DeleteCategoryHandler, DeleteProductHandler,
    UpdateCategoryHandler, UpdateProductHandler,
    // Query handlers
    GetCategoryHandler, GetCategoryProductsHandler, GetProductHandler, ListCategoriesHandler,
    ListProductsHandler,
    // Ports
    CategoryRepositoryPort, ProductRepositoryPort,
};
use crate::infrastructure::persistence::sqlite::{
    DbPool, SqliteCategoryRepository, SqliteProductRepository,
};

/// 目录应用状态
pub struct CatalogState {
    // ========== Ports ==========
    pub category_repo: Arc<dyn CategoryRepositoryPort>,
    pub product_repo: Arc<dyn ProductRepositoryPort>,

    // ========== Command Handlers ==========
    pub create_product_handler: CreateProductHandler,
    pub update_product_handler: UpdateProductHandler,
    pub delete_product_handler: DeleteProductHandler,
    pub create_category_handler: CreateCategoryHandler,
    pub update_category_handler: UpdateCategoryHandler,
    pub delete_category_handler: DeleteCategoryHandler,

    // ========== Query Handlers ==========
    pub list_products_handler: ListProductsHandler,
    pub get_product_handler: GetProductHandler,
    pub list_categories_handler: ListCategoriesHandler,
    pub get_category_handler: GetCategoryHandler,
    pub get_category_products_handler: GetCategoryProductsHandler,
}

impl CatalogState {
    /// 创建应用状态
    pub fn new(
        category_repo: Arc<dyn CategoryRepositoryPort>,
        product_repo: Arc<dyn ProductRepositoryPort>,
    ) -> Self {
        Self {
            // Ports
            category_repo: category_repo.clone(),
            product_repo: product_repo.clone(),

            // Command handlers
            create_product_handler: CreateProductHandler::new(product_repo.clone()),
            update_product_handler: UpdateProductHandler::new(product_repo.clone()),
            delete_product_handler: DeleteProductHandler::new(product_repo.clone()),
            create_category_handler: CreateCategoryHandler::new(category_repo.clone()),
            update_category_handler: UpdateCategoryHandler::new(category_repo.clone()),
            delete_category_handler: DeleteCategoryHandler::new(category_repo.clone()),

            // Query handlers
            list_products_handler: ListProductsHandler::new(product_repo.clone()),
            get_product_handler: GetProductHandler::new(product_repo),
            list_categories_handler: ListCategoriesHandler::new(category_repo.clone()),
            get_category_handler: GetCategoryHandler::new(category_repo.clone()),
            get_category_products_handler: GetCategoryProductsHandler::new(category_repo),
        }
    }

    /// 基于同一连接池创建 SQLite 实现的应用状态
    pub fn from_pool(pool: DbPool) -> Self {
        Self::new(
            Arc::new(SqliteCategoryRepository::new(pool.clone())),
            Arc::new(SqliteProductRepository::new(pool)),
        )
    }
}

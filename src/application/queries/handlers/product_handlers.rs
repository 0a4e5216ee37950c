//! Product Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{ProductPage, ProductRecord, ProductRepositoryPort};
use crate::application::queries::{GetProduct, ListProducts};

/// ListProducts Handler
pub struct ListProductsHandler {
    product_repo: Arc<dyn ProductRepositoryPort>,
}

impl ListProductsHandler {
    pub fn new(product_repo: Arc<dyn ProductRepositoryPort>) -> Self {
        Self { product_repo }
    }

    pub async fn handle(&self, query: ListProducts) -> Result<ProductPage, ApplicationError> {
        Ok(self.product_repo.find_page(query.page).await?)
    }
}

/// GetProduct Handler
pub struct GetProductHandler {
    product_repo: Arc<dyn ProductRepositoryPort>,
}

impl GetProductHandler {
    pub fn new(product_repo: Arc<dyn ProductRepositoryPort>) -> Self {
        Self { product_repo }
    }

    pub async fn handle(&self, query: GetProduct) -> Result<ProductRecord, ApplicationError> {
        let product = self
            .product_repo
            .find_by_id(query.product_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Product", query.product_id))?;

        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::NewProduct;
    use crate::domain::catalog::PageRequest;
    use crate::infrastructure::persistence::sqlite::{memory_pool, SqliteProductRepository};
    use rust_decimal::Decimal;

    async fn seeded(count: usize) -> Arc<dyn ProductRepositoryPort> {
        let repo: Arc<dyn ProductRepositoryPort> =
            Arc::new(SqliteProductRepository::new(memory_pool().await));
        for i in 0..count {
            repo.create(NewProduct {
                name: format!("item-{i}"),
                price: Decimal::new(999, 2),
                features: vec![format!("feature-{i}")],
                ..Default::default()
            })
            .await
            .unwrap();
        }
        repo
    }

    #[tokio::test]
    async fn test_list_products_uses_defaults() {
        let handler = ListProductsHandler::new(seeded(12).await);

        let page = handler.handle(ListProducts::default()).await.unwrap();
        assert_eq!(page.products.len(), 10);
        assert_eq!(page.pagination.total, 12);
        assert_eq!(page.pagination.total_pages, 2);
        assert_eq!(page.pagination.current_page, 1);
        assert_eq!(page.pagination.limit, 10);
    }

    #[tokio::test]
    async fn test_list_products_past_last_page_is_empty() {
        let handler = ListProductsHandler::new(seeded(3).await);

        let page = handler
            .handle(ListProducts {
                page: PageRequest::new(4, 2),
            })
            .await
            .unwrap();
        assert!(page.products.is_empty());
        assert_eq!(page.pagination.total, 3);
        assert_eq!(page.pagination.current_page, 4);
    }

    #[tokio::test]
    async fn test_get_product() {
        let repo = seeded(2).await;
        let handler = GetProductHandler::new(repo);

        let product = handler.handle(GetProduct { product_id: 2 }).await.unwrap();
        assert_eq!(product.name, "item-1");
        assert_eq!(product.features, vec!["feature-1"]);

        let err = handler
            .handle(GetProduct { product_id: 42 })
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Product not found: 42");
    }
}

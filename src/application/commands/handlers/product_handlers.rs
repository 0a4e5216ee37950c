//! Product Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateProduct, DeleteProduct, UpdateProduct};
use crate::application::error::ApplicationError;
use crate::application::ports::{Created, NewProduct, ProductChanges, ProductRepositoryPort};
use crate::domain::catalog::{CategoryName, Price, ProductName};

// ============================================================================
// CreateProduct
// ============================================================================

/// CreateProduct Handler
pub struct CreateProductHandler {
    product_repo: Arc<dyn ProductRepositoryPort>,
}

impl CreateProductHandler {
    pub fn new(product_repo: Arc<dyn ProductRepositoryPort>) -> Self {
        Self { product_repo }
    }

    pub async fn handle(
        &self,
        command: CreateProduct,
    ) -> Result<Created<NewProduct>, ApplicationError> {
        let product = validate_new_product(command.product)?;

        let created = self.product_repo.create(product).await?;

        tracing::info!(
            product_id = created.id,
            name = %created.data.name,
            category = ?created.data.category,
            images = created.data.images.len(),
            features = created.data.features.len(),
            "Product created"
        );

        Ok(created)
    }
}

fn validate_new_product(product: NewProduct) -> Result<NewProduct, ApplicationError> {
    let category = match product.category {
        // 空分类名视为未提供
        Some(name) if name.is_empty() => None,
        Some(name) => Some(CategoryName::new(name)?.into_inner()),
        None => None,
    };

    Ok(NewProduct {
        name: ProductName::new(product.name)?.into_inner(),
        price: Price::new(product.price)?.value(),
        category,
        ..product
    })
}

// ============================================================================
// UpdateProduct
// ============================================================================

/// UpdateProduct Handler
pub struct UpdateProductHandler {
    product_repo: Arc<dyn ProductRepositoryPort>,
}

impl UpdateProductHandler {
    pub fn new(product_repo: Arc<dyn ProductRepositoryPort>) -> Self {
        Self { product_repo }
    }

    pub async fn handle(&self, command: UpdateProduct) -> Result<(), ApplicationError> {
        let product_id = command.product_id;
        let changes = validate_changes(command.changes)?;

        // 检查商品是否存在
        self.product_repo
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Product", product_id))?;

        self.product_repo.update(product_id, &changes).await?;

        tracing::info!(
            product_id,
            scalar_fields = changes.has_scalar_changes(),
            category = ?changes.category,
            images_replaced = changes.images.is_some(),
            features_replaced = changes.features.is_some(),
            "Product updated"
        );

        Ok(())
    }
}

fn validate_changes(changes: ProductChanges) -> Result<ProductChanges, ApplicationError> {
    let name = changes
        .name
        .map(|name| ProductName::new(name).map(ProductName::into_inner))
        .transpose()?;
    let price = changes
        .price
        .map(|price| Price::new(price).map(|p| p.value()))
        .transpose()?;
    let category = match changes.category {
        Some(Some(name)) => Some(Some(CategoryName::new(name)?.into_inner())),
        other => other,
    };

    Ok(ProductChanges {
        name,
        price,
        category,
        ..changes
    })
}

// ============================================================================
// DeleteProduct
// ============================================================================

/// DeleteProduct Handler
pub struct DeleteProductHandler {
    product_repo: Arc<dyn ProductRepositoryPort>,
}

impl DeleteProductHandler {
    pub fn new(product_repo: Arc<dyn ProductRepositoryPort>) -> Self {
        Self { product_repo }
    }

    pub async fn handle(&self, command: DeleteProduct) -> Result<(), ApplicationError> {
        let product_id = command.product_id;

        let product = self
            .product_repo
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Product", product_id))?;

        self.product_repo.delete(product_id).await?;

        tracing::info!(product_id, name = %product.name, "Product deleted");

        Ok(())
    }
}

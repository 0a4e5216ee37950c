//! Product Commands

use crate::application::ports::{NewProduct, ProductChanges};

/// 创建商品命令
#[derive(Debug, Clone)]
pub struct CreateProduct {
    pub product: NewProduct,
}

/// 更新商品命令
#[derive(Debug, Clone)]
pub struct UpdateProduct {
    pub product_id: i64,
    pub changes: ProductChanges,
}

/// 删除商品命令
#[derive(Debug, Clone)]
pub struct DeleteProduct {
    pub product_id: i64,
}

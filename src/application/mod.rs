//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（CategoryRepository、ProductRepository）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    // Category commands
    CreateCategory,
    DeleteCategory,
    UpdateCategory,
    // Product commands
    CreateProduct,
    DeleteProduct,
    UpdateProduct,
    // Handlers
    handlers::{
        CreateCategoryHandler, CreateProductHandler, DeleteCategoryHandler, DeleteProductHandler,
        UpdateCategoryHandler, UpdateProductHandler,
    },
};

pub use error::ApplicationError;

pub use ports::{
    CategoryChanges, CategoryRecord, CategoryRepositoryPort, Created, NewCategory, NewProduct,
    ProductChanges, ProductPage, ProductRecord, ProductRepositoryPort, RepositoryError,
};

pub use queries::{
    // Category queries
    GetCategory,
    GetCategoryProducts,
    ListCategories,
    // Product queries
    GetProduct,
    ListProducts,
    // Handlers
    handlers::{
        GetCategoryHandler, GetCategoryProductsHandler, GetProductHandler, ListCategoriesHandler,
        ListProductsHandler,
    },
};

//! Query Handlers 实现

mod category_handlers;
mod product_handlers;

pub use category_handlers::*;
pub use product_handlers::*;

//! Command Handlers 实现
//!
//! 所有 CommandHandler 的具体实现

mod category_handlers;
mod product_handlers;

pub use category_handlers::*;
pub use product_handlers::*;

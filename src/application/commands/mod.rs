//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：处理所有写操作

mod category_commands;
mod product_commands;

pub mod handlers;

pub use category_commands::*;
pub use product_commands::*;

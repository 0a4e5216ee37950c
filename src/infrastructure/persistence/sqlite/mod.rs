//! SQLite Persistence - SQLite 数据库持久化实现

mod aggregate;
mod category_repo;
mod database;
mod product_repo;

pub use category_repo::*;
pub use database::*;
pub use product_repo::*;

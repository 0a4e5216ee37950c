//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（如 SQLite）

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::domain::catalog::{PageRequest, PaginationMeta};

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Duplicate entity: {0}")]
    Duplicate(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// 创建结果：输入数据 + 生成的 ID
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Created<T> {
    pub id: i64,
    #[serde(flatten)]
    pub data: T,
}

// ============================================================================
// Category Repository
// ============================================================================

/// 分类实体（用于持久化）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryRecord {
    pub id: i64,
    pub name: String,
    pub image: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// 新建分类
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// 分类部分更新
///
/// 外层 None 表示字段缺失（不修改），`Some(None)` 表示显式置空
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct CategoryChanges {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub image: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
}

impl CategoryChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.image.is_none() && self.description.is_none()
    }
}

/// Category Repository Port
#[async_trait]
pub trait CategoryRepositoryPort: Send + Sync {
    /// 获取所有分类（按名称升序）
    async fn find_all(&self) -> Result<Vec<CategoryRecord>, RepositoryError>;

    /// 根据 ID 查找分类
    async fn find_by_id(&self, id: i64) -> Result<Option<CategoryRecord>, RepositoryError>;

    /// 创建分类，返回新 ID
    async fn create(&self, category: &NewCategory) -> Result<i64, RepositoryError>;

    /// 部分更新分类
    async fn update(&self, id: i64, changes: &CategoryChanges) -> Result<(), RepositoryError>;

    /// 删除分类（关联商品的分类引用置空）
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;

    /// 分页获取分类下的商品
    async fn find_products(
        &self,
        category_id: i64,
        page: PageRequest,
    ) -> Result<ProductPage, RepositoryError>;

    /// 分类总数
    async fn count(&self) -> Result<i64, RepositoryError>;
}

// ============================================================================
// Product Repository
// ============================================================================

/// 商品视图（反规范化：分类名、图片、特性已合并）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRecord {
    pub id: i64,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub description: Option<String>,
    #[serde(rename = "shortDescription")]
    pub short_description: Option<String>,
    pub category: Option<String>,
    #[serde(rename = "inStock")]
    pub in_stock: bool,
    pub created_at: DateTime<Utc>,
    pub images: Vec<String>,
    pub features: Vec<String>,
}

/// 商品分页结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductPage {
    pub products: Vec<ProductRecord>,
    pub pagination: PaginationMeta,
}

/// 新建商品
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        rename = "shortDescription",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub short_description: Option<String>,
    /// 分类名称（不存在时自动创建）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// 缺省为 true
    #[serde(rename = "inStock", default, skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,
    /// null 视为空列表
    #[serde(default, deserialize_with = "nullable_list")]
    pub images: Vec<String>,
    #[serde(default, deserialize_with = "nullable_list")]
    pub features: Vec<String>,
}

/// 商品部分更新
///
/// 子集合（images / features）采用“整体替换或跳过”语义：
/// - `None`：字段缺失，保留现有行
/// - `Some(list)`：删除现有行后按顺序插入 list（空列表即清空）
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ProductChanges {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
    #[serde(rename = "shortDescription", default, deserialize_with = "present")]
    pub short_description: Option<Option<String>>,
    /// 缺失: 不修改；null: 解除关联；名称: get-or-create
    #[serde(default, deserialize_with = "present")]
    pub category: Option<Option<String>>,
    #[serde(rename = "inStock", default)]
    pub in_stock: Option<bool>,
    #[serde(default, deserialize_with = "replacement")]
    pub images: Option<Vec<String>>,
    #[serde(default, deserialize_with = "replacement")]
    pub features: Option<Vec<String>>,
}

impl ProductChanges {
    /// 是否包含 products 表本身的列更新
    pub fn has_scalar_changes(&self) -> bool {
        self.name.is_some()
            || self.price.is_some()
            || self.description.is_some()
            || self.short_description.is_some()
            || self.category.is_some()
            || self.in_stock.is_some()
    }
}

/// Product Repository Port
#[async_trait]
pub trait ProductRepositoryPort: Send + Sync {
    /// 分页获取商品
    async fn find_page(&self, page: PageRequest) -> Result<ProductPage, RepositoryError>;

    /// 根据 ID 查找商品
    async fn find_by_id(&self, id: i64) -> Result<Option<ProductRecord>, RepositoryError>;

    /// 事务内创建商品及其图片、特性
    async fn create(&self, product: NewProduct) -> Result<Created<NewProduct>, RepositoryError>;

    /// 事务内部分更新商品
    async fn update(&self, id: i64, changes: &ProductChanges) -> Result<(), RepositoryError>;

    /// 删除商品（图片、特性级联删除）
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}

// ============================================================================
// serde helpers
// ============================================================================

/// 字段出现即为 Some，配合 `#[serde(default)]` 区分“缺失”与“显式 null”
fn present<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// 集合字段 null 视为空列表
fn nullable_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<String>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// 集合字段出现即替换，null 视为空列表
fn replacement<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    nullable_list(deserializer).map(Some)
}

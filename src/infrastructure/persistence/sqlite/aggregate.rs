//! Product Aggregation - 商品聚合读取
//!
//! 计数 -> 分页 -> 关联分类名 -> 逐行并发加载图片与特性
//! 商品列表与分类商品列表共用此流程

use chrono::{DateTime, Utc};
use futures_util::future::try_join_all;
use rust_decimal::Decimal;
use sqlx::{FromRow, QueryBuilder, Sqlite, SqliteConnection};

use super::{db_error, DbPool};
use crate::application::ports::{ProductPage, ProductRecord, RepositoryError};
use crate::domain::catalog::{PageRequest, PaginationMeta};

/// 每条批量 INSERT 的最大行数
const BATCH_SIZE: usize = 500;

const PRODUCT_SELECT: &str = "SELECT p.id, p.name, p.price, p.description, p.short_description, \
     p.in_stock, p.created_at, c.name AS category_name \
     FROM products p LEFT JOIN categories c ON p.category_id = c.id";

/// 商品查询过滤条件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ProductFilter {
    All,
    Category(i64),
}

impl ProductFilter {
    fn push_where(&self, builder: &mut QueryBuilder<'_, Sqlite>) {
        if let ProductFilter::Category(category_id) = self {
            builder.push(" WHERE p.category_id = ").push_bind(*category_id);
        }
    }
}

/// 商品子集合表
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ChildTable {
    Images,
    Features,
}

impl ChildTable {
    fn table(self) -> &'static str {
        match self {
            ChildTable::Images => "product_images",
            ChildTable::Features => "product_features",
        }
    }

    fn column(self) -> &'static str {
        match self {
            ChildTable::Images => "image_url",
            ChildTable::Features => "feature",
        }
    }

    /// 按插入顺序读取某商品的子集合
    async fn fetch(self, pool: &DbPool, product_id: i64) -> Result<Vec<String>, RepositoryError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE product_id = ? ORDER BY id",
            self.column(),
            self.table()
        );

        sqlx::query_scalar::<_, String>(&sql)
            .bind(product_id)
            .fetch_all(pool)
            .await
            .map_err(db_error)
    }

    /// 批量插入子集合（保持输入顺序）
    pub(super) async fn insert(
        self,
        conn: &mut SqliteConnection,
        product_id: i64,
        values: &[String],
    ) -> Result<(), RepositoryError> {
        for chunk in values.chunks(BATCH_SIZE) {
            let mut builder = QueryBuilder::<Sqlite>::new(format!(
                "INSERT INTO {} (product_id, {}) ",
                self.table(),
                self.column()
            ));
            builder.push_values(chunk.iter(), |mut row, value| {
                row.push_bind(product_id).push_bind(value);
            });
            builder.build().execute(&mut *conn).await.map_err(db_error)?;
        }

        Ok(())
    }

    /// 删除某商品的全部子集合行
    pub(super) async fn clear(
        self,
        conn: &mut SqliteConnection,
        product_id: i64,
    ) -> Result<(), RepositoryError> {
        let sql = format!("DELETE FROM {} WHERE product_id = ?", self.table());

        sqlx::query(&sql)
            .bind(product_id)
            .execute(&mut *conn)
            .await
            .map_err(db_error)?;

        Ok(())
    }
}

#[derive(FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    price: String,
    description: Option<String>,
    short_description: Option<String>,
    in_stock: bool,
    created_at: String,
    category_name: Option<String>,
}

impl ProductRow {
    fn into_record(
        self,
        images: Vec<String>,
        features: Vec<String>,
    ) -> Result<ProductRecord, RepositoryError> {
        Ok(ProductRecord {
            id: self.id,
            name: self.name,
            price: self
                .price
                .parse::<Decimal>()
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?,
            description: self.description,
            short_description: self.short_description,
            category: self.category_name,
            in_stock: self.in_stock,
            created_at: DateTime::parse_from_rfc3339(&self.created_at)
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?
                .with_timezone(&Utc),
            images,
            features,
        })
    }
}

/// 分页读取商品
pub(super) async fn fetch_product_page(
    pool: &DbPool,
    filter: ProductFilter,
    page: PageRequest,
) -> Result<ProductPage, RepositoryError> {
    let mut count = QueryBuilder::<Sqlite>::new("SELECT COUNT(*) FROM products p");
    filter.push_where(&mut count);
    let total: i64 = count
        .build_query_scalar::<i64>()
        .fetch_one(pool)
        .await
        .map_err(db_error)?;

    let mut select = QueryBuilder::<Sqlite>::new(PRODUCT_SELECT);
    filter.push_where(&mut select);
    select
        .push(" ORDER BY p.id LIMIT ")
        .push_bind(i64::from(page.limit()))
        .push(" OFFSET ")
        .push_bind(page.offset());

    let rows: Vec<ProductRow> = select
        .build_query_as()
        .fetch_all(pool)
        .await
        .map_err(db_error)?;

    tracing::debug!(?filter, total, rows = rows.len(), page = page.page(), "Product page fetched");

    let products = attach_children_all(pool, rows).await?;

    Ok(ProductPage {
        products,
        pagination: PaginationMeta::new(total, page),
    })
}

/// 读取单个商品
pub(super) async fn fetch_product(
    pool: &DbPool,
    product_id: i64,
) -> Result<Option<ProductRecord>, RepositoryError> {
    let mut select = QueryBuilder::<Sqlite>::new(PRODUCT_SELECT);
    select.push(" WHERE p.id = ").push_bind(product_id);

    let row: Option<ProductRow> = select
        .build_query_as()
        .fetch_optional(pool)
        .await
        .map_err(db_error)?;

    match row {
        Some(row) => attach_children(pool, row).await.map(Some),
        None => Ok(None),
    }
}

/// 并发加载所有行的子集合；任一失败即返回首个错误
async fn attach_children_all(
    pool: &DbPool,
    rows: Vec<ProductRow>,
) -> Result<Vec<ProductRecord>, RepositoryError> {
    try_join_all(rows.into_iter().map(|row| attach_children(pool, row))).await
}

async fn attach_children(pool: &DbPool, row: ProductRow) -> Result<ProductRecord, RepositoryError> {
    let (images, features) = tokio::try_join!(
        ChildTable::Images.fetch(pool, row.id),
        ChildTable::Features.fetch(pool, row.id)
    )?;

    row.into_record(images, features)
}

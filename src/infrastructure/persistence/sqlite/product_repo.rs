//! SQLite Product Repository

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{QueryBuilder, Sqlite, SqliteConnection, Transaction};

use super::aggregate::{fetch_product, fetch_product_page, ChildTable, ProductFilter};
use super::{db_error, DbPool};
use crate::application::ports::{
    Created, NewProduct, ProductChanges, ProductPage, ProductRecord, ProductRepositoryPort,
    RepositoryError,
};
use crate::domain::catalog::PageRequest;

/// SQLite Product Repository
pub struct SqliteProductRepository {
    pool: DbPool,
}

impl SqliteProductRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepositoryPort for SqliteProductRepository {
    async fn find_page(&self, page: PageRequest) -> Result<ProductPage, RepositoryError> {
        fetch_product_page(&self.pool, ProductFilter::All, page).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ProductRecord>, RepositoryError> {
        fetch_product(&self.pool, id).await
    }

    async fn create(&self, product: NewProduct) -> Result<Created<NewProduct>, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(db_error)?;

        match insert_product(&mut *tx, &product).await {
            Ok(id) => {
                tx.commit().await.map_err(db_error)?;
                tracing::debug!(product_id = id, "Product row and children committed");
                Ok(Created { id, data: product })
            }
            Err(err) => {
                rollback(tx, &err).await;
                Err(err)
            }
        }
    }

    async fn update(&self, id: i64, changes: &ProductChanges) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(db_error)?;

        match apply_changes(&mut *tx, id, changes).await {
            Ok(()) => {
                tx.commit().await.map_err(db_error)?;
                tracing::debug!(product_id = id, "Product changes committed");
                Ok(())
            }
            Err(err) => {
                rollback(tx, &err).await;
                Err(err)
            }
        }
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        // product_images / product_features 由外键级联删除
        sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(())
    }
}

/// 回滚事务，保留原始错误
async fn rollback(tx: Transaction<'_, Sqlite>, cause: &RepositoryError) {
    match tx.rollback().await {
        Ok(()) => tracing::warn!(error = %cause, "Transaction rolled back"),
        Err(e) => tracing::error!(error = %cause, rollback_error = %e, "Transaction rollback failed"),
    }
}

/// 按名称查找分类，不存在则创建，返回分类 ID
///
/// categories.name 唯一，并发写入同名分类时由 ON CONFLICT 吸收
async fn get_or_create_category(
    conn: &mut SqliteConnection,
    name: &str,
) -> Result<i64, RepositoryError> {
    sqlx::query(
        "INSERT INTO categories (name, created_at) VALUES (?, ?) ON CONFLICT(name) DO NOTHING",
    )
    .bind(name)
    .bind(Utc::now().to_rfc3339())
    .execute(&mut *conn)
    .await
    .map_err(db_error)?;

    sqlx::query_scalar::<_, i64>("SELECT id FROM categories WHERE name = ?")
        .bind(name)
        .fetch_one(&mut *conn)
        .await
        .map_err(db_error)
}

async fn insert_product(
    conn: &mut SqliteConnection,
    product: &NewProduct,
) -> Result<i64, RepositoryError> {
    // 空分类名等同于未提供
    let category_id = match product.category.as_deref().filter(|name| !name.is_empty()) {
        Some(name) => Some(get_or_create_category(conn, name).await?),
        None => None,
    };

    let product_id = sqlx::query(
        r#"
        INSERT INTO products (name, price, description, short_description, category_id, in_stock, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&product.name)
    .bind(product.price.to_string())
    .bind(&product.description)
    .bind(&product.short_description)
    .bind(category_id)
    .bind(product.in_stock.unwrap_or(true))
    .bind(Utc::now().to_rfc3339())
    .execute(&mut *conn)
    .await
    .map_err(db_error)?
    .last_insert_rowid();

    ChildTable::Images
        .insert(conn, product_id, &product.images)
        .await?;
    ChildTable::Features
        .insert(conn, product_id, &product.features)
        .await?;

    Ok(product_id)
}

async fn apply_changes(
    conn: &mut SqliteConnection,
    product_id: i64,
    changes: &ProductChanges,
) -> Result<(), RepositoryError> {
    // 外层 None: 不修改关联；Some(None): 解除关联
    let category_link = match &changes.category {
        None => None,
        Some(None) => Some(None),
        Some(Some(name)) => Some(Some(get_or_create_category(conn, name).await?)),
    };

    if changes.has_scalar_changes() {
        let mut builder = QueryBuilder::<Sqlite>::new("UPDATE products SET ");
        let mut fields = builder.separated(", ");

        if let Some(name) = &changes.name {
            fields.push("name = ").push_bind_unseparated(name.clone());
        }
        if let Some(price) = &changes.price {
            fields.push("price = ").push_bind_unseparated(price.to_string());
        }
        if let Some(description) = &changes.description {
            fields
                .push("description = ")
                .push_bind_unseparated(description.clone());
        }
        if let Some(short_description) = &changes.short_description {
            fields
                .push("short_description = ")
                .push_bind_unseparated(short_description.clone());
        }
        if let Some(category_id) = category_link {
            fields.push("category_id = ").push_bind_unseparated(category_id);
        }
        if let Some(in_stock) = changes.in_stock {
            fields.push("in_stock = ").push_bind_unseparated(in_stock);
        }

        builder.push(" WHERE id = ").push_bind(product_id);
        builder.build().execute(&mut *conn).await.map_err(db_error)?;
    }

    // 子集合：提供即整体替换，缺失则保留
    if let Some(images) = &changes.images {
        ChildTable::Images.clear(conn, product_id).await?;
        ChildTable::Images.insert(conn, product_id, images).await?;
    }
    if let Some(features) = &changes.features {
        ChildTable::Features.clear(conn, product_id).await?;
        ChildTable::Features
            .insert(conn, product_id, features)
            .await?;
    }

    Ok(())
}

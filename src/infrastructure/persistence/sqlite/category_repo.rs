//! SQLite Category Repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite};

use super::aggregate::{fetch_product_page, ProductFilter};
use super::{db_error, DbPool};
use crate::application::ports::{
    CategoryChanges, CategoryRecord, CategoryRepositoryPort, NewCategory, ProductPage,
    RepositoryError,
};
use crate::domain::catalog::PageRequest;

/// SQLite Category Repository
pub struct SqliteCategoryRepository {
    pool: DbPool,
}

impl SqliteCategoryRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct CategoryRow {
    id: i64,
    name: String,
    image: Option<String>,
    description: Option<String>,
    created_at: String,
}

impl TryFrom<CategoryRow> for CategoryRecord {
    type Error = RepositoryError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        Ok(CategoryRecord {
            id: row.id,
            name: row.name,
            image: row.image,
            description: row.description,
            created_at: DateTime::parse_from_rfc3339(&row.created_at)
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?
                .with_timezone(&Utc),
        })
    }
}

#[async_trait]
impl CategoryRepositoryPort for SqliteCategoryRepository {
    async fn find_all(&self) -> Result<Vec<CategoryRecord>, RepositoryError> {
        let rows: Vec<CategoryRow> = sqlx::query_as(
            "SELECT id, name, image, description, created_at FROM categories ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;

        rows.into_iter().map(CategoryRecord::try_from).collect()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<CategoryRecord>, RepositoryError> {
        let row: Option<CategoryRow> = sqlx::query_as(
            "SELECT id, name, image, description, created_at FROM categories WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?;

        row.map(CategoryRecord::try_from).transpose()
    }

    async fn create(&self, category: &NewCategory) -> Result<i64, RepositoryError> {
        let id = sqlx::query(
            r#"
            INSERT INTO categories (name, image, description, created_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&category.name)
        .bind(&category.image)
        .bind(&category.description)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(db_error)?
        .last_insert_rowid();

        Ok(id)
    }

    async fn update(&self, id: i64, changes: &CategoryChanges) -> Result<(), RepositoryError> {
        if changes.is_empty() {
            return Ok(());
        }

        let mut builder = QueryBuilder::<Sqlite>::new("UPDATE categories SET ");
        let mut fields = builder.separated(", ");

        if let Some(name) = &changes.name {
            fields.push("name = ").push_bind_unseparated(name.clone());
        }
        if let Some(image) = &changes.image {
            fields.push("image = ").push_bind_unseparated(image.clone());
        }
        if let Some(description) = &changes.description {
            fields
                .push("description = ")
                .push_bind_unseparated(description.clone());
        }

        builder.push(" WHERE id = ").push_bind(id);
        builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        // products.category_id 由外键 ON DELETE SET NULL 置空
        sqlx::query("DELETE FROM categories WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(())
    }

    async fn find_products(
        &self,
        category_id: i64,
        page: PageRequest,
    ) -> Result<ProductPage, RepositoryError> {
        fetch_product_page(&self.pool, ProductFilter::Category(category_id), page).await
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM categories")
            .fetch_one(&self.pool)
            .await
            .map_err(db_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{NewProduct, ProductRepositoryPort};
    use crate::infrastructure::persistence::sqlite::{memory_pool, SqliteProductRepository};
    use rust_decimal::Decimal;

    fn category(name: &str) -> NewCategory {
        NewCategory {
            name: name.to_string(),
            ..Default::default()
        }
    }

    fn product(name: &str, category: Option<&str>) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            price: Decimal::new(2500, 2),
            category: category.map(str::to_string),
            images: vec![format!("{name}.png")],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_category_crud() {
        let repo = SqliteCategoryRepository::new(memory_pool().await);

        let id = repo
            .create(&NewCategory {
                name: "Accessories".to_string(),
                image: Some("https://cdn.example.com/acc.png".to_string()),
                description: Some("Small things".to_string()),
            })
            .await
            .unwrap();

        let found = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(found.name, "Accessories");
        assert_eq!(found.image.as_deref(), Some("https://cdn.example.com/acc.png"));

        let changes = CategoryChanges {
            name: Some("Gear".to_string()),
            image: Some(None),
            ..Default::default()
        };
        repo.update(id, &changes).await.unwrap();

        let found = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(found.name, "Gear");
        assert_eq!(found.image, None);
        assert_eq!(found.description.as_deref(), Some("Small things"));

        // 空更新不报错
        repo.update(id, &CategoryChanges::default()).await.unwrap();

        repo.delete(id).await.unwrap();
        assert!(repo.find_by_id(id).await.unwrap().is_none());
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_find_all_ordered_by_name() {
        let repo = SqliteCategoryRepository::new(memory_pool().await);
        for name in ["Watches", "Accessories", "Kitchen"] {
            repo.create(&category(name)).await.unwrap();
        }

        let names: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Accessories", "Kitchen", "Watches"]);
    }

    #[tokio::test]
    async fn test_duplicate_name_is_rejected() {
        let repo = SqliteCategoryRepository::new(memory_pool().await);
        repo.create(&category("Tools")).await.unwrap();

        let err = repo.create(&category("Tools")).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Duplicate(_)));
    }

    #[tokio::test]
    async fn test_find_products_filters_by_category() {
        let pool = memory_pool().await;
        let categories = SqliteCategoryRepository::new(pool.clone());
        let products = SqliteProductRepository::new(pool);

        for i in 0..3 {
            products
                .create(product(&format!("watch-{i}"), Some("Watches")))
                .await
                .unwrap();
        }
        products.create(product("pan", Some("Kitchen"))).await.unwrap();
        products.create(product("loose", None)).await.unwrap();

        let watches = categories
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .find(|c| c.name == "Watches")
            .unwrap();

        let page = categories
            .find_products(watches.id, PageRequest::new(1, 2))
            .await
            .unwrap();
        assert_eq!(page.pagination.total, 3);
        assert_eq!(page.pagination.total_pages, 2);
        assert_eq!(page.products.len(), 2);
        assert!(page
            .products
            .iter()
            .all(|p| p.category.as_deref() == Some("Watches")));
        assert_eq!(page.products[0].images, vec!["watch-0.png"]);

        let rest = categories
            .find_products(watches.id, PageRequest::new(2, 2))
            .await
            .unwrap();
        assert_eq!(rest.products.len(), 1);
        assert_eq!(rest.products[0].name, "watch-2");
    }

    #[tokio::test]
    async fn test_delete_category_nulls_product_links() {
        let pool = memory_pool().await;
        let categories = SqliteCategoryRepository::new(pool.clone());
        let products = SqliteProductRepository::new(pool);

        let id = products
            .create(product("mug", Some("Kitchen")))
            .await
            .unwrap()
            .id;
        let kitchen = categories.find_all().await.unwrap().remove(0);

        categories.delete(kitchen.id).await.unwrap();

        let mug = products.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(mug.category, None);
        assert_eq!(mug.images, vec!["mug.png"]);
    }
}

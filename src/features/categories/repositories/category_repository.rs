//! Category store access.
//!
//! The loader and the navigation query both talk to the store through
//! [`CategoryRepository`], so the handle is injected rather than shared
//! globally. [`PgCategoryRepository`] is the Postgres implementation.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::categories::models::{Category, Level, NewCategory};

const CATEGORY_COLUMNS: &str = "id, parent_id, name, slug, color, created_at, updated_at";

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Remove every category regardless of level. Returns the number removed.
    async fn delete_all(&self) -> Result<u64>;

    /// Insert a batch and return the stored records in input order.
    async fn insert_many(&self, categories: &[NewCategory]) -> Result<Vec<Category>>;

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>>;

    /// Categories without a parent, ordered by name.
    async fn find_top_level(&self) -> Result<Vec<Category>>;

    /// Direct children of the given parents, in insertion order.
    async fn find_children(&self, parent_ids: &[Uuid]) -> Result<Vec<Category>>;

    async fn count(&self, level: Level) -> Result<i64>;

    /// First `limit` records in insertion order.
    async fn sample(&self, limit: i64) -> Result<Vec<Category>>;
}

pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn delete_all(&self) -> Result<u64> {
        // A single statement, so parent/child references are checked only at the end.
        let result = sqlx::query("DELETE FROM categories")
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete categories: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(result.rows_affected())
    }

    async fn insert_many(&self, categories: &[NewCategory]) -> Result<Vec<Category>> {
        if categories.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("INSERT INTO categories (name, slug, color, parent_id) ");
        builder.push_values(categories, |mut row, category| {
            row.push_bind(category.name.clone())
                .push_bind(category.slug.clone())
                .push_bind(category.color.clone())
                .push_bind(category.parent_id);
        });
        builder.push(" RETURNING ");
        builder.push(CATEGORY_COLUMNS);

        builder
            .build_query_as::<Category>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert categories: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>> {
        sqlx::query_as::<_, Category>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories WHERE slug = $1"
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get category by slug: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn find_top_level(&self) -> Result<Vec<Category>> {
        sqlx::query_as::<_, Category>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories WHERE parent_id IS NULL ORDER BY name"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list top-level categories: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn find_children(&self, parent_ids: &[Uuid]) -> Result<Vec<Category>> {
        if parent_ids.is_empty() {
            return Ok(Vec::new());
        }

        sqlx::query_as::<_, Category>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories WHERE parent_id = ANY($1) ORDER BY created_at, id"
        ))
        .bind(parent_ids.to_vec())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list subcategories: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn count(&self, level: Level) -> Result<i64> {
        let sql = match level {
            Level::All => "SELECT COUNT(*) FROM categories",
            Level::TopLevel => "SELECT COUNT(*) FROM categories WHERE parent_id IS NULL",
            Level::Children => "SELECT COUNT(*) FROM categories WHERE parent_id IS NOT NULL",
        };

        sqlx::query_scalar::<_, i64>(sql)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count categories: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn sample(&self, limit: i64) -> Result<Vec<Category>> {
        sqlx::query_as::<_, Category>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories ORDER BY created_at, id LIMIT $1"
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to sample categories: {:?}", e);
            AppError::Database(e)
        })
    }
}

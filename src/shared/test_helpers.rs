use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::categories::models::{Category, Level, NewCategory};
use crate::features::categories::repositories::CategoryRepository;

/// Top-level category record with a fresh id
pub fn category(name: &str, slug: &str) -> Category {
    let now = Utc::now();
    Category {
        id: Uuid::new_v4(),
        parent_id: None,
        name: name.to_string(),
        slug: slug.to_string(),
        color: None,
        created_at: now,
        updated_at: now,
    }
}

/// Category store kept in a `Vec`, in insertion order
#[derive(Default)]
pub struct InMemoryCategoryRepository {
    categories: Mutex<Vec<Category>>,
    dropped_slugs: Mutex<HashSet<String>>,
    unavailable: AtomicBool,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails as if the store were unreachable
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Inserts of this slug silently do nothing
    pub fn drop_inserts_of(&self, slug: &str) {
        self.dropped_slugs.lock().unwrap().insert(slug.to_string());
    }

    pub fn snapshot(&self) -> Vec<Category> {
        self.categories.lock().unwrap().clone()
    }

    fn ensure_available(&self) -> Result<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AppError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn delete_all(&self) -> Result<u64> {
        self.ensure_available()?;
        let mut categories = self.categories.lock().unwrap();
        let deleted = categories.len() as u64;
        categories.clear();
        Ok(deleted)
    }

    async fn insert_many(&self, new: &[NewCategory]) -> Result<Vec<Category>> {
        self.ensure_available()?;
        let dropped = self.dropped_slugs.lock().unwrap().clone();
        let mut categories = self.categories.lock().unwrap();

        let mut inserted = Vec::with_capacity(new.len());
        for item in new {
            if categories.iter().any(|c| c.slug == item.slug) {
                return Err(AppError::Conflict(format!("Duplicate slug '{}'", item.slug)));
            }
            if dropped.contains(&item.slug) {
                continue;
            }

            let now = Utc::now();
            let record = Category {
                id: Uuid::new_v4(),
                parent_id: item.parent_id,
                name: item.name.clone(),
                slug: item.slug.clone(),
                color: item.color.clone(),
                created_at: now,
                updated_at: now,
            };
            categories.push(record.clone());
            inserted.push(record);
        }
        Ok(inserted)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>> {
        self.ensure_available()?;
        Ok(self
            .categories
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.slug == slug)
            .cloned())
    }

    async fn find_top_level(&self) -> Result<Vec<Category>> {
        self.ensure_available()?;
        let mut parents: Vec<Category> = self
            .categories
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.parent_id.is_none())
            .cloned()
            .collect();
        parents.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(parents)
    }

    async fn find_children(&self, parent_ids: &[Uuid]) -> Result<Vec<Category>> {
        self.ensure_available()?;
        Ok(self
            .categories
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.parent_id.is_some_and(|id| parent_ids.contains(&id)))
            .cloned()
            .collect())
    }

    async fn count(&self, level: Level) -> Result<i64> {
        self.ensure_available()?;
        let categories = self.categories.lock().unwrap();
        let count = match level {
            Level::All => categories.len(),
            Level::TopLevel => categories.iter().filter(|c| c.is_top_level()).count(),
            Level::Children => categories.iter().filter(|c| !c.is_top_level()).count(),
        };
        Ok(count as i64)
    }

    async fn sample(&self, limit: i64) -> Result<Vec<Category>> {
        self.ensure_available()?;
        let limit = usize::try_from(limit).unwrap_or(0);
        Ok(self
            .categories
            .lock()
            .unwrap()
            .iter()
            .take(limit)
            .cloned()
            .collect())
    }
}

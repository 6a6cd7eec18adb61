use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for category
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Category {
    pub id: Uuid,
    /// `None` for top-level categories
    pub parent_id: Option<Uuid>,
    pub name: String,
    pub slug: String,
    pub color: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    pub fn is_top_level(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Insert payload; the store assigns `id` and timestamps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub name: String,
    pub slug: String,
    pub color: Option<String>,
    pub parent_id: Option<Uuid>,
}

impl NewCategory {
    pub fn top_level(name: impl Into<String>, slug: impl Into<String>, color: Option<String>) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
            color,
            parent_id: None,
        }
    }

    /// Subcategories never carry a color
    pub fn child_of(parent_id: Uuid, name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
            color: None,
            parent_id: Some(parent_id),
        }
    }
}

/// Which part of the hierarchy a count covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    All,
    TopLevel,
    Children,
}

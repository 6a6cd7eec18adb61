use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::categories::models::Category;

/// Response DTO for category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponseDto {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub color: Option<String>,
    /// Parent category id, `null` for top-level categories
    pub parent: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Category> for CategoryResponseDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
            slug: c.slug,
            color: c.color,
            parent: c.parent_id,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

/// Top-level category with its direct subcategories embedded, for navigation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryNavigationDto {
    #[serde(flatten)]
    pub category: CategoryResponseDto,
    /// Always present; empty when the category has no children
    pub subcategories: Vec<CategoryResponseDto>,
}

impl CategoryNavigationDto {
    pub fn new(parent: Category, children: Vec<Category>) -> Self {
        Self {
            category: parent.into(),
            subcategories: children.into_iter().map(Into::into).collect(),
        }
    }
}

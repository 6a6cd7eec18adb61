use std::collections::HashMap;
use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{CategoryNavigationDto, CategoryResponseDto};
use crate::features::categories::models::Category;
use crate::features::categories::ordering::PreferredOrder;
use crate::features::categories::repositories::CategoryRepository;

/// Service for category read operations
pub struct CategoryService {
    repository: Arc<dyn CategoryRepository>,
    order: PreferredOrder,
}

impl CategoryService {
    pub fn new(repository: Arc<dyn CategoryRepository>, order: PreferredOrder) -> Self {
        Self { repository, order }
    }

    /// Top-level categories in navigation order, each with its direct
    /// subcategories. Children keep store order and are not expanded further.
    pub async fn list_navigation(&self) -> Result<Vec<CategoryNavigationDto>> {
        let mut parents = self.repository.find_top_level().await?;
        self.order.sort(&mut parents);

        let parent_ids: Vec<Uuid> = parents.iter().map(|p| p.id).collect();
        let children = self.repository.find_children(&parent_ids).await?;

        let mut by_parent: HashMap<Uuid, Vec<Category>> = HashMap::new();
        for child in children {
            if let Some(parent_id) = child.parent_id {
                by_parent.entry(parent_id).or_default().push(child);
            }
        }

        Ok(parents
            .into_iter()
            .map(|parent| {
                let subcategories = by_parent.remove(&parent.id).unwrap_or_default();
                CategoryNavigationDto::new(parent, subcategories)
            })
            .collect())
    }

    /// Get category by slug
    pub async fn get_by_slug(&self, slug: &str) -> Result<CategoryResponseDto> {
        self.repository
            .find_by_slug(slug)
            .await?
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound(format!("Category '{}' not found", slug)))
    }
}

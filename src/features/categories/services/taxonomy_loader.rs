use std::sync::Arc;

use crate::core::error::Result;
use crate::features::categories::models::{Category, Level, NewCategory};
use crate::features::categories::repositories::CategoryRepository;
use crate::features::categories::taxonomy::TaxonomyDefinition;
use crate::shared::constants::LOAD_SAMPLE_SIZE;

/// Children inserted under one parent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentLoad {
    pub parent_slug: String,
    pub children_inserted: u64,
}

/// Counts re-read from the store after a load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreCounts {
    pub total: i64,
    pub parents: i64,
    pub children: i64,
}

/// Outcome of one taxonomy load
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub deleted: u64,
    pub parents_inserted: u64,
    pub children: Vec<ParentLoad>,
    /// Parents whose lookup by slug came back empty; their children were skipped
    pub missing_parents: Vec<String>,
    pub verification: StoreCounts,
    pub sample: Vec<Category>,
}

impl LoadReport {
    pub fn children_inserted(&self) -> u64 {
        self.children.iter().map(|c| c.children_inserted).sum()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_parents.is_empty()
    }
}

/// Resets the category store to a canonical taxonomy.
///
/// Not atomic: the delete and the inserts are separate statements, so a
/// failure part way leaves whatever had been written so far. Run it from a
/// maintenance context where nothing else writes categories.
pub struct TaxonomyLoader {
    repository: Arc<dyn CategoryRepository>,
}

impl TaxonomyLoader {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }

    pub async fn apply(&self, definition: &TaxonomyDefinition) -> Result<LoadReport> {
        definition.check()?;

        tracing::info!(
            "Applying {} taxonomy: {} categories, {} subcategories",
            definition.label,
            definition.categories.len(),
            definition.subcategory_count()
        );

        tracing::info!("Deleting existing categories...");
        let deleted = self.repository.delete_all().await?;
        tracing::info!("Deleted {} existing categories", deleted);

        tracing::info!("Inserting parent categories...");
        let parents: Vec<NewCategory> = definition
            .categories
            .iter()
            .map(|spec| NewCategory::top_level(&spec.name, &spec.slug, spec.color.clone()))
            .collect();
        let parents_inserted = self.repository.insert_many(&parents).await?.len() as u64;
        tracing::info!("Inserted {} parent categories", parents_inserted);

        tracing::info!("Creating subcategories...");
        let mut children = Vec::new();
        let mut missing_parents = Vec::new();

        for spec in definition
            .categories
            .iter()
            .filter(|spec| !spec.subcategories.is_empty())
        {
            let Some(parent) = self.repository.find_by_slug(&spec.slug).await? else {
                tracing::error!(
                    "Parent category '{}' not found, skipping its subcategories",
                    spec.slug
                );
                missing_parents.push(spec.slug.clone());
                continue;
            };

            let docs: Vec<NewCategory> = spec
                .subcategories
                .iter()
                .map(|sub| NewCategory::child_of(parent.id, &sub.name, &sub.slug))
                .collect();
            let inserted = self.repository.insert_many(&docs).await?.len() as u64;
            tracing::info!("Created {} subcategories for {}", inserted, spec.slug);

            children.push(ParentLoad {
                parent_slug: spec.slug.clone(),
                children_inserted: inserted,
            });
        }

        let verification = StoreCounts {
            total: self.repository.count(Level::All).await?,
            parents: self.repository.count(Level::TopLevel).await?,
            children: self.repository.count(Level::Children).await?,
        };
        let sample = self.repository.sample(LOAD_SAMPLE_SIZE).await?;

        let report = LoadReport {
            deleted,
            parents_inserted,
            children,
            missing_parents,
            verification,
            sample,
        };
        log_summary(&report);

        Ok(report)
    }
}

fn log_summary(report: &LoadReport) {
    tracing::info!("Total subcategories created: {}", report.children_inserted());
    tracing::info!(
        total = report.verification.total,
        parents = report.verification.parents,
        subcategories = report.verification.children,
        "Taxonomy load summary"
    );

    for category in &report.sample {
        let kind = if category.is_top_level() {
            "[parent]"
        } else {
            "[subcategory]"
        };
        tracing::info!("  - {} ({}) {}", category.name, category.slug, kind);
    }

    if !report.is_complete() {
        tracing::warn!(
            "Subcategories skipped for missing parents: {}",
            report.missing_parents.join(", ")
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppError;
    use crate::features::categories::taxonomy::{CategorySpec, SubcategorySpec};
    use crate::shared::test_helpers::InMemoryCategoryRepository;
    use std::collections::{BTreeSet, HashSet};

    fn loader(repo: &Arc<InMemoryCategoryRepository>) -> TaxonomyLoader {
        TaxonomyLoader::new(repo.clone())
    }

    /// (slug, parent slug, color) for every stored record
    fn structure(repo: &InMemoryCategoryRepository) -> BTreeSet<(String, Option<String>, Option<String>)> {
        let all = repo.snapshot();
        all.iter()
            .map(|c| {
                let parent_slug = c
                    .parent_id
                    .and_then(|id| all.iter().find(|p| p.id == id))
                    .map(|p| p.slug.clone());
                (c.slug.clone(), parent_slug, c.color.clone())
            })
            .collect()
    }

    fn grid_definition(parents: usize, children_each: usize) -> TaxonomyDefinition {
        TaxonomyDefinition {
            label: "grid".to_string(),
            categories: (0..parents)
                .map(|p| CategorySpec {
                    name: format!("Parent {}", p),
                    slug: format!("parent-{}", p),
                    color: Some("#123456".to_string()),
                    subcategories: (0..children_each)
                        .map(|c| SubcategorySpec {
                            name: format!("Child {} {}", p, c),
                            slug: format!("child-{}-{}", p, c),
                        })
                        .collect(),
                })
                .collect(),
        }
    }

    #[tokio::test]
    async fn test_apply_canonical_into_empty_store() {
        let repo = Arc::new(InMemoryCategoryRepository::new());
        let definition = TaxonomyDefinition::migration();

        let report = loader(&repo).apply(&definition).await.unwrap();

        assert_eq!(report.deleted, 0);
        assert_eq!(report.parents_inserted, 8);
        assert_eq!(report.children_inserted(), 35);
        assert_eq!(report.children.len(), 7);
        assert!(report.children.iter().all(|c| c.children_inserted == 5));
        assert!(report.is_complete());
        assert_eq!(
            report.verification,
            StoreCounts {
                total: 43,
                parents: 8,
                children: 35
            }
        );
        assert_eq!(report.sample.len(), 5);
    }

    #[tokio::test]
    async fn test_apply_grid_reports_expected_counts() {
        let repo = Arc::new(InMemoryCategoryRepository::new());

        let report = loader(&repo).apply(&grid_definition(8, 5)).await.unwrap();

        assert_eq!(report.parents_inserted, 8);
        assert_eq!(report.children_inserted(), 40);
        assert_eq!(report.verification.total, 48);
        assert_eq!(report.verification.parents, 8);
        assert_eq!(report.verification.children, 40);
    }

    #[tokio::test]
    async fn test_apply_replaces_existing_records() {
        let repo = Arc::new(InMemoryCategoryRepository::new());
        let stale = repo
            .insert_many(&[NewCategory::top_level("Old", "old", None)])
            .await
            .unwrap();
        repo.insert_many(&[NewCategory::child_of(stale[0].id, "Older", "older")])
            .await
            .unwrap();

        let report = loader(&repo)
            .apply(&TaxonomyDefinition::seed())
            .await
            .unwrap();

        assert_eq!(report.deleted, 2);
        let stored = repo.snapshot();
        assert_eq!(stored.len(), 43);
        assert!(stored.iter().all(|c| c.slug != "old" && c.slug != "older"));
    }

    #[tokio::test]
    async fn test_apply_links_children_and_clears_colors() {
        let repo = Arc::new(InMemoryCategoryRepository::new());
        let definition = TaxonomyDefinition::migration();
        loader(&repo).apply(&definition).await.unwrap();

        let stored = repo.snapshot();
        let slugs: HashSet<&str> = stored.iter().map(|c| c.slug.as_str()).collect();
        assert_eq!(slugs.len(), stored.len());

        for spec in &definition.categories {
            let parent = stored.iter().find(|c| c.slug == spec.slug).unwrap();
            assert!(parent.parent_id.is_none());
            assert_eq!(parent.color, spec.color);
            assert_eq!(parent.name, spec.name);

            for sub in &spec.subcategories {
                let child = stored.iter().find(|c| c.slug == sub.slug).unwrap();
                assert_eq!(child.parent_id, Some(parent.id));
                assert!(child.color.is_none());
            }
        }

        // one nesting level only
        for child in stored.iter().filter(|c| c.parent_id.is_some()) {
            let parent = stored.iter().find(|c| Some(c.id) == child.parent_id).unwrap();
            assert!(parent.parent_id.is_none());
        }
    }

    #[tokio::test]
    async fn test_apply_twice_is_structurally_idempotent() {
        let repo = Arc::new(InMemoryCategoryRepository::new());
        let definition = TaxonomyDefinition::seed();

        loader(&repo).apply(&definition).await.unwrap();
        let first = structure(&repo);
        let first_ids: HashSet<_> = repo.snapshot().iter().map(|c| c.id).collect();

        let report = loader(&repo).apply(&definition).await.unwrap();
        let second = structure(&repo);

        assert_eq!(report.deleted, 43);
        assert_eq!(first, second);
        assert!(repo.snapshot().iter().all(|c| !first_ids.contains(&c.id)));
    }

    #[tokio::test]
    async fn test_missing_parent_is_skipped_and_reported() {
        let repo = Arc::new(InMemoryCategoryRepository::new());
        repo.drop_inserts_of("posters");

        let report = loader(&repo)
            .apply(&TaxonomyDefinition::migration())
            .await
            .unwrap();

        assert_eq!(report.missing_parents, vec!["posters".to_string()]);
        assert!(!report.is_complete());
        assert_eq!(report.parents_inserted, 7);
        assert_eq!(report.children_inserted(), 30);
        assert!(report.children.iter().all(|c| c.parent_slug != "posters"));
        assert_eq!(report.verification.total, 37);
    }

    #[tokio::test]
    async fn test_invalid_definition_leaves_store_untouched() {
        let repo = Arc::new(InMemoryCategoryRepository::new());
        loader(&repo)
            .apply(&TaxonomyDefinition::migration())
            .await
            .unwrap();

        let mut definition = TaxonomyDefinition::migration();
        definition.categories[2].subcategories[0].slug = "clothes".to_string();
        let result = loader(&repo).apply(&definition).await;

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(repo.snapshot().len(), 43);
    }

    #[tokio::test]
    async fn test_store_failure_aborts_run() {
        let repo = Arc::new(InMemoryCategoryRepository::new());
        repo.set_unavailable(true);

        let result = loader(&repo).apply(&TaxonomyDefinition::migration()).await;

        assert!(matches!(result, Err(AppError::Database(_))));
    }
}

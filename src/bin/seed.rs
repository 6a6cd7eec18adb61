//! Populate a development database: admin tenant, admin user and the seed
//! taxonomy.
//!
//! Usage: `DATABASE_URL=postgres://... seed`

use std::sync::Arc;

use ferment_core::core::config::{load_dotenv, DatabaseConfig};
use ferment_core::core::{database, logging};
use ferment_core::features::categories::services::LoadReport;
use ferment_core::features::categories::{
    PgCategoryRepository, TaxonomyDefinition, TaxonomyLoader,
};
use ferment_core::features::tenants::dtos::AdminBootstrapDto;
use ferment_core::features::tenants::TenantService;
use sqlx::PgPool;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();
    logging::init();

    let config = DatabaseConfig::from_env().map_err(|e| anyhow::anyhow!(e))?;
    let pool = database::create_pool(&config).await?;
    tracing::info!("Connected to {}", config.redacted_url());

    let result = seed(&pool).await;

    pool.close().await;
    tracing::info!("Database connection closed");

    match result {
        Ok(report) => {
            tracing::info!(
                "Seeding completed: {} categories, {} subcategories",
                report.parents_inserted,
                report.children_inserted()
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!("Error during seeding: {}", e);
            Err(e)
        }
    }
}

async fn seed(pool: &PgPool) -> anyhow::Result<LoadReport> {
    database::run_migrations(pool).await?;

    TenantService::new(pool.clone())
        .bootstrap_admin(&AdminBootstrapDto::demo())
        .await?;

    let loader = TaxonomyLoader::new(Arc::new(PgCategoryRepository::new(pool.clone())));
    let report = loader.apply(&TaxonomyDefinition::seed()).await?;

    Ok(report)
}

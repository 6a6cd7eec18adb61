//! Reset the category store to the canonical FERMENT taxonomy.
//!
//! Usage: `DATABASE_URL=postgres://... migrate-categories`

use std::sync::Arc;

use ferment_core::core::config::{load_dotenv, DatabaseConfig};
use ferment_core::core::{database, logging};
use ferment_core::features::categories::services::LoadReport;
use ferment_core::features::categories::taxonomy::TAXONOMY_VERSION;
use ferment_core::features::categories::{
    PgCategoryRepository, TaxonomyDefinition, TaxonomyLoader,
};
use sqlx::PgPool;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();
    logging::init();

    tracing::info!("Starting FERMENT category migration (taxonomy {})", TAXONOMY_VERSION);

    let config = DatabaseConfig::from_env().map_err(|e| anyhow::anyhow!(e))?;
    let pool = database::create_pool(&config).await.map_err(|e| {
        tracing::error!("Migration failed: could not connect to {}: {}", config.redacted_url(), e);
        anyhow::anyhow!("Database connection failed: {}", e)
    })?;
    tracing::info!("Connected to {}", config.redacted_url());

    let result = migrate(&pool).await;

    pool.close().await;
    tracing::info!("Database connection closed");

    let report = result.map_err(|e| {
        tracing::error!("Migration failed: {}", e);
        e
    })?;

    if report.is_complete() {
        tracing::info!("FERMENT category migration completed successfully");
    } else {
        tracing::warn!(
            "FERMENT category migration finished with {} missing parent(s)",
            report.missing_parents.len()
        );
    }

    Ok(())
}

async fn migrate(pool: &PgPool) -> anyhow::Result<LoadReport> {
    database::run_migrations(pool).await?;

    let loader = TaxonomyLoader::new(Arc::new(PgCategoryRepository::new(pool.clone())));
    let report = loader.apply(&TaxonomyDefinition::migration()).await?;

    Ok(report)
}

use sqlx::PgPool;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::tenants::dtos::{AdminBootstrapDto, AdminBootstrapResult};
use crate::features::tenants::models::{Tenant, User};

/// Service for tenant and account provisioning
pub struct TenantService {
    pool: PgPool,
}

impl TenantService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create or refresh the admin tenant, its admin user and the membership.
    ///
    /// Keyed on tenant slug and user email, so re-running is harmless.
    pub async fn bootstrap_admin(&self, dto: &AdminBootstrapDto) -> Result<AdminBootstrapResult> {
        dto.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let tenant = sqlx::query_as::<_, Tenant>(
            r#"
            INSERT INTO tenants (name, slug)
            VALUES ($1, $2)
            ON CONFLICT (slug)
            DO UPDATE SET name = EXCLUDED.name, updated_at = NOW()
            RETURNING id, name, slug, payment_account_id, created_at, updated_at
            "#,
        )
        .bind(&dto.tenant_name)
        .bind(&dto.tenant_slug)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to upsert tenant: {:?}", e);
            AppError::Database(e)
        })?;

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, username, roles)
            VALUES ($1, $2, $3)
            ON CONFLICT (email)
            DO UPDATE SET username = EXCLUDED.username, roles = EXCLUDED.roles
            RETURNING id, email, username, roles, created_at
            "#,
        )
        .bind(&dto.email)
        .bind(&dto.username)
        .bind(&dto.roles)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to upsert user: {:?}", e);
            AppError::Database(e)
        })?;

        sqlx::query(
            r#"
            INSERT INTO user_tenants (user_id, tenant_id)
            VALUES ($1, $2)
            ON CONFLICT (user_id, tenant_id) DO NOTHING
            "#,
        )
        .bind(user.id)
        .bind(tenant.id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to link user to tenant: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Admin bootstrap complete: tenant={} ({}), user={} ({})",
            tenant.slug,
            tenant.id,
            user.email,
            user.id
        );

        Ok(AdminBootstrapResult { tenant, user })
    }
}

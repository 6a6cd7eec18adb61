use validator::Validate;

use crate::features::tenants::models::{Tenant, User};
use crate::shared::constants::ROLE_SUPER_ADMIN;
use crate::shared::validation::{SLUG_REGEX, USERNAME_REGEX};

/// Admin tenant and account created by the seed load
#[derive(Debug, Clone, Validate)]
pub struct AdminBootstrapDto {
    #[validate(length(min = 1, max = 255, message = "Tenant name must be 1-255 characters"))]
    pub tenant_name: String,

    #[validate(regex(path = *SLUG_REGEX, message = "Tenant slug must be lowercase words joined by hyphens"))]
    pub tenant_slug: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(regex(path = *USERNAME_REGEX, message = "Invalid username"))]
    pub username: String,

    #[validate(length(min = 1, message = "At least one role is required"))]
    pub roles: Vec<String>,
}

impl AdminBootstrapDto {
    /// Demo super admin used for local development
    pub fn demo() -> Self {
        Self {
            tenant_name: "admin".to_string(),
            tenant_slug: "admin".to_string(),
            email: "admin@demo.com".to_string(),
            username: "admin".to_string(),
            roles: vec![ROLE_SUPER_ADMIN.to_string()],
        }
    }
}

/// Records written by an admin bootstrap
#[derive(Debug, Clone)]
pub struct AdminBootstrapResult {
    pub tenant: Tenant,
    pub user: User,
}

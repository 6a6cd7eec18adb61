/// Top-level category slugs that lead the navigation list, in display order
pub const DEFAULT_PREFERRED_ORDER: &[&str] = &[
    "all",
    "clothes",
    "jewelery",
    "posters",
    "pottery",
    "tattoos",
    "music",
    "accessories",
];

/// Number of records echoed back in a taxonomy load summary
pub const LOAD_SAMPLE_SIZE: i64 = 5;

// =============================================================================
// ROLE CONSTANTS
// =============================================================================

/// Super admin role - full control over every tenant
pub const ROLE_SUPER_ADMIN: &str = "super-admin";

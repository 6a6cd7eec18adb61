//! Product category taxonomy.
//!
//! A two-level hierarchy: top-level categories with `parent = null` and
//! subcategories pointing at exactly one parent. The canonical content lives
//! in [`taxonomy`] and is written by [`TaxonomyLoader`]; [`CategoryService`]
//! serves it back in navigation order.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/categories` | No | Ordered top-level categories with subcategories |
//! | GET | `/api/categories/{slug}` | No | Get category by slug |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod ordering;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod taxonomy;

pub use ordering::PreferredOrder;
pub use repositories::{CategoryRepository, PgCategoryRepository};
pub use services::{CategoryService, TaxonomyLoader};
pub use taxonomy::TaxonomyDefinition;

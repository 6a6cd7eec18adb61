mod category_service;
mod taxonomy_loader;

pub use category_service::CategoryService;
pub use taxonomy_loader::{LoadReport, ParentLoad, StoreCounts, TaxonomyLoader};

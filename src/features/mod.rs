pub mod categories;
pub mod tenants;

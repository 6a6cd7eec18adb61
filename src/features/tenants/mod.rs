//! Seller tenants and their accounts.
//!
//! Only the bootstrap used by the seed load lives here. Payment account
//! provisioning and credentials belong to external systems, so
//! `payment_account_id` starts out empty and no password is stored.

pub mod dtos;
pub mod models;
pub mod services;

pub use services::TenantService;

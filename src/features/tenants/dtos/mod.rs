mod admin_bootstrap_dto;

pub use admin_bootstrap_dto::{AdminBootstrapDto, AdminBootstrapResult};

pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod middleware;
pub mod openapi;

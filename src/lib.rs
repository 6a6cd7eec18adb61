//! Ferment marketplace core: the product category taxonomy and the
//! tooling that loads it.
//!
//! Three binaries share this library:
//! - `ferment-core` serves the category API
//! - `migrate-categories` resets the taxonomy to its canonical state
//! - `seed` bootstraps the admin tenant and loads the seed taxonomy

pub mod core;
pub mod features;
pub mod shared;

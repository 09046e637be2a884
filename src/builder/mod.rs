//! Builder API for assembling a store.
//!
//! The builder starts from the built-in sample data and default config; any
//! part can be replaced before `build()` validates the seed.

pub mod error;
pub mod store;

pub use error::BuildError;
pub use store::StoreBuilder;

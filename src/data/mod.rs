//! Data layer module
//!
//! Internal entity models and the store interface they are read through:
//! - Entity models with partially hydrated relations
//! - `Store` trait implemented by the persistence layer

mod models;
mod store;

pub use models::*;
#[cfg(test)]
pub use store::MockStore;
pub use store::{Store, StoreResult};

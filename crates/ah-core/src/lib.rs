//! ah-core
//!
//! Domain models, the storage port, and the data-access layer for AcademicHub.

pub mod accounts;
pub mod error;
pub mod keys;
pub mod models;
pub mod search;
pub mod store;
pub mod traits;

#[cfg(test)]
mod test_support;

// Re-exporting for easier access in other crates
pub use error::*;
pub use keys::*;
pub use models::*;
pub use search::{ResourceSummary, SearchCriteria, SortBy};
pub use store::PersistentStore;
pub use traits::*;

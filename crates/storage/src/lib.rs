//! Storage access for the water-rights services.
//!
//! Provides:
//! - Dynamic predicate composition for filtered queries
//! - PostgreSQL row access and row-to-domain decoding
//!
//! The store is strictly read-only; errors propagate to the caller wrapped
//! with the failing operation's name and are never retried here.

pub mod predicate;
pub mod rows;
pub mod store;

pub use predicate::{compose, ComposedQuery, FilterValue, LocationFilter};
pub use store::RightsStore;

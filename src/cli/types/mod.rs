//! Type-safe wrappers and enums for player lookups.

pub mod ids;
pub mod source;

pub use ids::PlayerId;
pub use source::DataSource;

//! Type definitions shared across crates
//!
//! - `pagination` - Offset/size pagination for list queries

pub mod pagination;

pub use pagination::Pagination;

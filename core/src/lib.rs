//! # ShareIt Core
//!
//! Domain layer of the ShareIt lending service: entities, repository
//! interfaces with in-memory implementations, the domain error type and the
//! services implementing users, items, bookings and item requests.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;

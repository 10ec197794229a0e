//! Shared utilities and common types for the ShareIt server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Tracing bootstrap
//! - Error response structures
//! - Pagination and validation helpers

pub mod config;
pub mod errors;
pub mod logging;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, Environment, LogFormat, LoggingConfig, PaginationConfig};
pub use errors::{error_codes, ApiResult, ErrorResponse, IntoErrorResponse};
pub use logging::init_tracing;
pub use types::Pagination;
pub use utils::validation;

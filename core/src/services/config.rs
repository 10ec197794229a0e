//! Configuration shared by the domain services

use shareit_shared::{AppConfig, Pagination, PaginationConfig};

use crate::errors::{DomainError, DomainResult};

/// Settings the services read at call time
#[derive(Debug, Clone, Default)]
pub struct ServiceConfig {
    /// Limits applied to `from`/`size` listing parameters
    pub pagination: PaginationConfig,
}

impl ServiceConfig {
    /// Page covering the `from` offset
    ///
    /// # Returns
    /// * `Err(DomainError::Validation)` - `size` exceeds the configured maximum
    pub fn page(&self, from: u32, size: u32) -> DomainResult<Pagination> {
        if !self.pagination.allows(size) {
            return Err(DomainError::validation(format!(
                "Size must not exceed {}",
                self.pagination.max_size.unwrap_or(size)
            )));
        }
        Ok(Pagination::from_offset(from, size))
    }

    /// Values a boundary layer passes to listings when the caller omits them
    pub fn listing_defaults(&self, from: Option<u32>, size: Option<u32>) -> (u32, u32) {
        (
            from.unwrap_or(self.pagination.default_from),
            size.unwrap_or(self.pagination.default_size),
        )
    }
}

impl From<&AppConfig> for ServiceConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            pagination: config.pagination.clone(),
        }
    }
}

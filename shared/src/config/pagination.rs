//! Pagination configuration module

use serde::{Deserialize, Serialize};

/// Defaults and limits for the `from`/`size` list parameters
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PaginationConfig {
    /// Offset used when the caller omits `from`
    #[serde(default)]
    pub default_from: u32,

    /// Page length used when the caller omits `size`
    #[serde(default = "default_size")]
    pub default_size: u32,

    /// Largest `size` a caller may ask for; unlimited when absent
    #[serde(default)]
    pub max_size: Option<u32>,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_from: 0,
            default_size: default_size(),
            max_size: None,
        }
    }
}

impl PaginationConfig {
    /// Set the maximum page length
    pub fn with_max_size(mut self, max_size: u32) -> Self {
        self.max_size = Some(max_size.max(1));
        self
    }

    /// Whether a caller supplied `size` is within the configured limit
    pub fn allows(&self, size: u32) -> bool {
        self.max_size.map_or(true, |max| size <= max)
    }
}

fn default_size() -> u32 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_config_defaults() {
        let config = PaginationConfig::default();
        assert_eq!(config.default_from, 0);
        assert_eq!(config.default_size, 10);
        assert_eq!(config.max_size, None);
        assert!(config.allows(10_000));
    }

    #[test]
    fn test_pagination_config_partial_deserialization() {
        let config: PaginationConfig = serde_json::from_str(r#"{"max_size": 20}"#).unwrap();
        assert_eq!(config.default_size, 10);
        assert_eq!(config.max_size, Some(20));
        assert!(config.allows(20));
        assert!(!config.allows(21));
    }

    #[test]
    fn test_with_max_size_never_zero() {
        let config = PaginationConfig::default().with_max_size(0);
        assert_eq!(config.max_size, Some(1));
    }
}

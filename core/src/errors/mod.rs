//! Domain error type shared by every service and repository.
//!
//! Messages are fixed, human-readable strings; the boundary layer exposes
//! them unchanged and picks the transport status from [`DomainError::status_code`].

use shareit_shared::{error_codes, ErrorResponse, IntoErrorResponse};
use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Referenced entity is absent, or an ownership rule that is reported
    /// as absence to avoid leaking existence
    #[error("{message}")]
    NotFound { message: String },

    /// Business precondition failed on existing, accessible entities
    #[error("{message}")]
    Validation { message: String },

    /// Caller may not act on an existing resource
    #[error("{message}")]
    Forbidden { message: String },

    /// Write lost against a concurrent change or a uniqueness rule
    #[error("{message}")]
    Conflict { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn not_found(message: impl Into<String>) -> Self {
        DomainError::NotFound {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation {
            message: message.into(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        DomainError::Forbidden {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        DomainError::Conflict {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        DomainError::Internal {
            message: message.into(),
        }
    }

    /// Suggested HTTP status for the boundary layer
    pub fn status_code(&self) -> u16 {
        match self {
            DomainError::NotFound { .. } => 404,
            DomainError::Validation { .. } => 400,
            DomainError::Forbidden { .. } => 403,
            DomainError::Conflict { .. } => 409,
            DomainError::Internal { .. } => 500,
        }
    }

    /// Stable error code for the response envelope
    pub fn error_code(&self) -> &'static str {
        match self {
            DomainError::NotFound { .. } => error_codes::NOT_FOUND,
            DomainError::Validation { .. } => error_codes::VALIDATION_ERROR,
            DomainError::Forbidden { .. } => error_codes::FORBIDDEN,
            DomainError::Conflict { .. } => error_codes::CONFLICT,
            DomainError::Internal { .. } => error_codes::INTERNAL_ERROR,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::NotFound { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, DomainError::Validation { .. })
    }
}

impl IntoErrorResponse for DomainError {
    fn to_error_response(&self) -> ErrorResponse {
        // Storage details stay in the logs
        let message = match self {
            DomainError::Internal { .. } => String::from("Internal server error"),
            other => other.to_string(),
        };
        ErrorResponse::new(self.error_code(), message)
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_the_bare_message() {
        assert_eq!(DomainError::not_found("Booking not found").to_string(), "Booking not found");
        assert_eq!(DomainError::validation("Start in past").to_string(), "Start in past");
        assert_eq!(
            DomainError::internal("pool closed").to_string(),
            "Internal error: pool closed"
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(DomainError::not_found("x").status_code(), 404);
        assert_eq!(DomainError::validation("x").status_code(), 400);
        assert_eq!(DomainError::forbidden("x").status_code(), 403);
        assert_eq!(DomainError::conflict("x").status_code(), 409);
        assert_eq!(DomainError::internal("x").status_code(), 500);
    }

    #[test]
    fn test_error_response_conversion() {
        let response = DomainError::validation("Item is not available").to_error_response();
        assert_eq!(response.error, "VALIDATION_ERROR");
        assert_eq!(response.message, "Item is not available");

        let hidden = DomainError::internal("connection reset").to_error_response();
        assert_eq!(hidden.error, "INTERNAL_ERROR");
        assert!(!hidden.message.contains("connection reset"));
    }
}

//! Common validation utilities

use once_cell::sync::Lazy;
use regex::Regex;

// local@domain.tld, no whitespace
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex is valid")
});

/// Check if a string contains anything besides whitespace
pub fn not_blank(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Check if an optional string is present and not blank
pub fn present_and_not_blank(value: Option<&str>) -> bool {
    value.map(not_blank).unwrap_or(false)
}

/// Check if an email address is valid (basic structural check)
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email.trim())
}

/// Case-insensitive containment used by text search
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

//! Item request: a user asking the community for something they need.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::item::Item;
use super::user::User;

/// Item request entity, immutable once created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRequest {
    /// Unique identifier, assigned on save (0 until persisted)
    pub id: i64,

    /// What the requester is looking for, never blank
    pub description: String,

    pub requester: User,

    pub created: DateTime<Utc>,
}

impl ItemRequest {
    /// Creates a new request stamped with the current time
    pub fn new(description: impl Into<String>, requester: User) -> Self {
        Self {
            id: 0,
            description: description.into(),
            requester,
            created: Utc::now(),
        }
    }

    /// Sets the identifier, used by repositories when persisting
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    /// Checks whether the user authored this request
    pub fn is_requested_by(&self, user_id: i64) -> bool {
        self.requester.id == user_id
    }
}

/// Caller supplied data for a new request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRequestDraft {
    /// Missing and blank descriptions are rejected alike
    pub description: Option<String>,
}

impl ItemRequestDraft {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
        }
    }
}

/// Request together with the items offered in response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRequestWithItems {
    pub request: ItemRequest,
    pub items: Vec<Item>,
}

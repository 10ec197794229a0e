//! Comment left on an item by a former booker.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::User;

/// Comment entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Unique identifier, assigned on save (0 until persisted)
    pub id: i64,

    pub text: String,

    /// Commented item
    pub item_id: i64,

    pub author: User,

    pub created: DateTime<Utc>,
}

impl Comment {
    /// Creates a new comment stamped with the current time
    pub fn new(text: impl Into<String>, item_id: i64, author: User) -> Self {
        Self {
            id: 0,
            text: text.into(),
            item_id,
            author,
            created: Utc::now(),
        }
    }

    /// Sets the identifier, used by repositories when persisting
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }
}

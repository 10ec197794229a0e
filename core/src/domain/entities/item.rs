//! Item entity: something a user is willing to lend.

use serde::{Deserialize, Serialize};

use super::booking::Booking;
use super::comment::Comment;
use super::user::User;

/// Item entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier, assigned on save (0 until persisted)
    pub id: i64,

    pub name: String,

    pub description: String,

    /// Whether the item can currently be booked
    pub available: bool,

    /// Owning user
    pub owner: User,

    /// Request this item was created in response to, if any
    pub request_id: Option<i64>,
}

impl Item {
    /// Creates a new, not yet persisted item
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        available: bool,
        owner: User,
    ) -> Self {
        Self {
            id: 0,
            name: name.into(),
            description: description.into(),
            available,
            owner,
            request_id: None,
        }
    }

    /// Links the item to the request it answers
    pub fn in_response_to(mut self, request_id: i64) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Sets the identifier, used by repositories when persisting
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    /// Checks whether the given user owns this item
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.owner.id == user_id
    }
}

/// Data required to create an item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub name: String,
    pub description: String,
    pub available: bool,
    #[serde(default)]
    pub request_id: Option<i64>,
}

/// Partial item update; absent fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub available: Option<bool>,
}

impl ItemPatch {
    /// Apply the patch to an item
    pub fn apply_to(&self, item: &mut Item) {
        if let Some(name) = &self.name {
            item.name = name.clone();
        }
        if let Some(description) = &self.description {
            item.description = description.clone();
        }
        if let Some(available) = self.available {
            item.available = available;
        }
    }
}

/// Item enriched with booking and comment information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDetails {
    pub item: Item,

    /// Most recent approved booking that already started (owner view only)
    pub last_booking: Option<Booking>,

    /// Earliest approved booking that has not started yet (owner view only)
    pub next_booking: Option<Booking>,

    pub comments: Vec<Comment>,
}

impl ItemDetails {
    pub fn new(item: Item) -> Self {
        Self {
            item,
            last_booking: None,
            next_booking: None,
            comments: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owner() -> User {
        User::new("Name", "test@test.ru").with_id(1)
    }

    #[test]
    fn test_item_ownership() {
        let item = Item::new("Клей", "Секундный клей момент", true, owner());
        assert!(item.is_owned_by(1));
        assert!(!item.is_owned_by(2));
        assert_eq!(item.request_id, None);
    }

    #[test]
    fn test_patch_keeps_missing_fields() {
        let mut item = Item::new("Клей", "Секундный клей момент", true, owner()).in_response_to(3);
        ItemPatch {
            available: Some(false),
            ..Default::default()
        }
        .apply_to(&mut item);

        assert!(!item.available);
        assert_eq!(item.name, "Клей");
        assert_eq!(item.request_id, Some(3));
    }
}

//! User entity representing a registered ShareIt member.

use serde::{Deserialize, Serialize};

/// User entity representing a registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user, assigned on save (0 until persisted)
    pub id: i64,

    /// Display name
    pub name: String,

    /// Contact address, unique across users
    pub email: String,
}

impl User {
    /// Creates a new, not yet persisted user
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            email: email.into(),
        }
    }

    /// Sets the identifier, used by repositories when persisting
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    /// Checks whether the user has been persisted
    pub fn is_persisted(&self) -> bool {
        self.id > 0
    }
}

/// Data required to register a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

/// Partial user update; absent fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UserPatch {
    /// Apply the patch to a user
    pub fn apply_to(&self, user: &mut User) {
        if let Some(name) = &self.name {
            user.name = name.clone();
        }
        if let Some(email) = &self.email {
            user.email = email.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_is_not_persisted() {
        let user = User::new("Name", "test@test.ru");
        assert_eq!(user.id, 0);
        assert!(!user.is_persisted());
        assert!(user.with_id(1).is_persisted());
    }

    #[test]
    fn test_patch_only_touches_present_fields() {
        let mut user = User::new("Name", "test@test.ru").with_id(1);
        UserPatch {
            name: Some("Name 2".to_string()),
            email: None,
        }
        .apply_to(&mut user);

        assert_eq!(user.name, "Name 2");
        assert_eq!(user.email, "test@test.ru");
    }
}

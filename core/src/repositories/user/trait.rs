//! User repository trait defining the interface for user persistence.
//!
//! Services only ever see this trait; the storage behind it (relational
//! database, in-memory map) is chosen by whoever wires the services.

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their identifier
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with the given id
    /// * `Err(DomainError)` - Storage error occurred
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError>;

    /// Find a user by contact address (exact match)
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// All users ordered by id
    async fn find_all(&self) -> Result<Vec<User>, DomainError>;

    /// Insert (`id == 0`) or update a user
    ///
    /// # Returns
    /// * `Ok(User)` - The stored user, with its assigned id on insert
    /// * `Err(DomainError::Conflict)` - Another user already has this email
    /// * `Err(DomainError::NotFound)` - Update of an unknown id
    async fn save(&self, user: User) -> Result<User, DomainError>;

    /// Delete a user
    ///
    /// # Returns
    /// * `Ok(true)` - User was deleted
    /// * `Ok(false)` - User not found
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}

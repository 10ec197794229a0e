//! User directory service

use std::sync::Arc;

use shareit_shared::validation::{is_valid_email, not_blank};

use crate::domain::entities::user::{NewUser, User, UserPatch};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::lookup::{require_user, USER_NOT_FOUND};

/// Service for registering and looking up users
pub struct UserService<U>
where
    U: UserRepository,
{
    user_repository: Arc<U>,
}

impl<U> UserService<U>
where
    U: UserRepository,
{
    /// Create a new user service
    pub fn new(user_repository: Arc<U>) -> Self {
        Self { user_repository }
    }

    /// Register a user
    ///
    /// # Returns
    /// * `Err(DomainError::Validation)` - Blank name or malformed email
    /// * `Err(DomainError::Conflict)` - Email already taken
    pub async fn create(&self, new_user: NewUser) -> DomainResult<User> {
        validate_name(&new_user.name)?;
        validate_email(&new_user.email)?;
        self.ensure_email_free(&new_user.email, None).await?;

        let user = self
            .user_repository
            .save(User::new(new_user.name.trim(), new_user.email.trim()))
            .await?;

        tracing::info!(user_id = user.id, event = "user_created", "Registered user");
        Ok(user)
    }

    /// Get a user by id
    pub async fn get_by_id(&self, id: i64) -> DomainResult<User> {
        require_user(self.user_repository.as_ref(), id).await
    }

    /// Apply a partial update to a user
    pub async fn update(&self, id: i64, patch: UserPatch) -> DomainResult<User> {
        let mut user = self.get_by_id(id).await?;

        if let Some(name) = &patch.name {
            validate_name(name)?;
        }
        if let Some(email) = &patch.email {
            validate_email(email)?;
            self.ensure_email_free(email, Some(id)).await?;
        }

        patch.apply_to(&mut user);
        let user = self.user_repository.save(user).await?;

        tracing::info!(user_id = user.id, event = "user_updated", "Updated user");
        Ok(user)
    }

    /// Delete a user
    pub async fn delete(&self, id: i64) -> DomainResult<()> {
        if !self.user_repository.delete(id).await? {
            return Err(DomainError::not_found(USER_NOT_FOUND));
        }
        tracing::info!(user_id = id, event = "user_deleted", "Deleted user");
        Ok(())
    }

    /// All registered users
    pub async fn find_all(&self) -> DomainResult<Vec<User>> {
        self.user_repository.find_all().await
    }

    async fn ensure_email_free(&self, email: &str, owner_id: Option<i64>) -> DomainResult<()> {
        match self.user_repository.find_by_email(email.trim()).await? {
            Some(existing) if Some(existing.id) != owner_id => {
                Err(DomainError::conflict("Email already exists"))
            }
            _ => Ok(()),
        }
    }
}

fn validate_name(name: &str) -> DomainResult<()> {
    if !not_blank(name) {
        return Err(DomainError::validation("Name is empty"));
    }
    Ok(())
}

fn validate_email(email: &str) -> DomainResult<()> {
    if !is_valid_email(email) {
        return Err(DomainError::validation("Email is invalid"));
    }
    Ok(())
}

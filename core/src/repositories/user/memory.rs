//! In-memory implementation of UserRepository

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::errors::DomainError;
use crate::repositories::table::InMemoryTable;

use super::trait_::UserRepository;

/// User repository backed by a process-local map
pub struct InMemoryUserRepository {
    table: InMemoryTable<User>,
}

impl InMemoryUserRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            table: InMemoryTable::new(),
        }
    }

    /// Make every subsequent call fail with an internal error
    pub fn set_should_fail(&self, should_fail: bool) {
        self.table.set_should_fail(should_fail);
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        let users = self.table.read().await?;
        Ok(users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.table.read().await?;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        let users = self.table.read().await?;
        Ok(users.values().cloned().collect())
    }

    async fn save(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.table.write().await?;

        if users.values().any(|u| u.email == user.email && u.id != user.id) {
            return Err(DomainError::conflict("Email already exists"));
        }

        let user = if user.is_persisted() {
            if !users.contains_key(&user.id) {
                return Err(DomainError::not_found("User not found"));
            }
            user
        } else {
            user.with_id(self.table.next_id())
        };

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let mut users = self.table.write().await?;
        Ok(users.remove(&id).is_some())
    }
}

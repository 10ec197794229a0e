//! Comment repository trait

use async_trait::async_trait;

use crate::domain::entities::comment::Comment;
use crate::errors::DomainError;

/// Repository trait for Comment entity persistence operations
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Persist a new comment and assign its id
    async fn save(&self, comment: Comment) -> Result<Comment, DomainError>;

    /// Comments on an item, oldest first
    async fn find_by_item(&self, item_id: i64) -> Result<Vec<Comment>, DomainError>;
}

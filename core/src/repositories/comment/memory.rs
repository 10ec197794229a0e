//! In-memory implementation of CommentRepository

use async_trait::async_trait;

use crate::domain::entities::comment::Comment;
use crate::errors::DomainError;
use crate::repositories::table::InMemoryTable;

use super::trait_::CommentRepository;

/// Comment repository backed by a process-local map
pub struct InMemoryCommentRepository {
    table: InMemoryTable<Comment>,
}

impl InMemoryCommentRepository {
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

impl Default for InMemoryCommentRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn save(&self, comment: Comment) -> Result<Comment, DomainError> {
        let mut comments = self.table.write().await?;
        let comment = comment.with_id(self.table.next_id());
        comments.insert(comment.id, comment.clone());
        Ok(comment)
    }

    async fn find_by_item(&self, item_id: i64) -> Result<Vec<Comment>, DomainError> {
        let comments = self.table.read().await?;
        Ok(comments
            .values()
            .filter(|c| c.item_id == item_id)
            .cloned()
            .collect())
    }
}

//! Item repository trait

use async_trait::async_trait;

use shareit_shared::Pagination;

use crate::domain::entities::item::Item;
use crate::errors::DomainError;

/// Repository trait for Item entity persistence operations
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Find an item by its identifier
    async fn find_by_id(&self, id: i64) -> Result<Option<Item>, DomainError>;

    /// Items of an owner ordered by id, one page at a time
    async fn find_by_owner(&self, owner_id: i64, page: Pagination) -> Result<Vec<Item>, DomainError>;

    /// Items created in response to a request, ordered by id
    async fn find_by_request_id(&self, request_id: i64) -> Result<Vec<Item>, DomainError>;

    /// Available items whose name or description contains `text`,
    /// ignoring case, ordered by id
    async fn search_available(&self, text: &str, page: Pagination) -> Result<Vec<Item>, DomainError>;

    /// Insert (`id == 0`) or update an item
    ///
    /// # Returns
    /// * `Err(DomainError::NotFound)` - Update of an unknown id
    async fn save(&self, item: Item) -> Result<Item, DomainError>;
}

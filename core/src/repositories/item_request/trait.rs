//! Item request repository trait
//!
//! Listing queries return requests newest first.

use async_trait::async_trait;

use shareit_shared::Pagination;

use crate::domain::entities::item_request::ItemRequest;
use crate::errors::DomainError;

/// Repository trait for ItemRequest entity persistence operations
#[async_trait]
pub trait ItemRequestRepository: Send + Sync {
    /// Find a request by its identifier
    async fn find_by_id(&self, id: i64) -> Result<Option<ItemRequest>, DomainError>;

    /// Persist a new request and assign its id
    async fn save(&self, request: ItemRequest) -> Result<ItemRequest, DomainError>;

    /// Requests authored by the user
    async fn find_by_requester(&self, requester_id: i64) -> Result<Vec<ItemRequest>, DomainError>;

    /// Requests authored by anyone except the user, one page at a time
    async fn find_by_requester_not(
        &self,
        requester_id: i64,
        page: Pagination,
    ) -> Result<Vec<ItemRequest>, DomainError>;
}

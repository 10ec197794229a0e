//! In-memory implementation of ItemRequestRepository

use async_trait::async_trait;
use std::cmp::Reverse;

use shareit_shared::Pagination;

use crate::domain::entities::item_request::ItemRequest;
use crate::errors::DomainError;
use crate::repositories::table::InMemoryTable;

use super::trait_::ItemRequestRepository;

/// Item request repository backed by a process-local map
pub struct InMemoryItemRequestRepository {
    table: InMemoryTable<ItemRequest>,
}

impl InMemoryItemRequestRepository {
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

    async fn newest_first<F>(&self, keep: F) -> Result<Vec<ItemRequest>, DomainError>
    where
        F: Fn(&ItemRequest) -> bool + Send,
    {
        let requests = self.table.read().await?;
        let mut selected: Vec<ItemRequest> = requests.values().filter(|r| keep(r)).cloned().collect();
        // Same-instant requests: the later insert comes first
        selected.sort_by_key(|r| (Reverse(r.created), Reverse(r.id)));
        Ok(selected)
    }
}

impl Default for InMemoryItemRequestRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemRequestRepository for InMemoryItemRequestRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<ItemRequest>, DomainError> {
        let requests = self.table.read().await?;
        Ok(requests.get(&id).cloned())
    }

    async fn save(&self, request: ItemRequest) -> Result<ItemRequest, DomainError> {
        let mut requests = self.table.write().await?;
        if request.id > 0 {
            return Err(DomainError::validation("Item requests cannot be modified"));
        }
        let request = request.with_id(self.table.next_id());
        requests.insert(request.id, request.clone());
        Ok(request)
    }

    async fn find_by_requester(&self, requester_id: i64) -> Result<Vec<ItemRequest>, DomainError> {
        self.newest_first(|r| r.is_requested_by(requester_id)).await
    }

    async fn find_by_requester_not(
        &self,
        requester_id: i64,
        page: Pagination,
    ) -> Result<Vec<ItemRequest>, DomainError> {
        let others = self.newest_first(|r| !r.is_requested_by(requester_id)).await?;
        Ok(page.apply(others))
    }
}

//! In-memory implementation of ItemRepository

use async_trait::async_trait;

use shareit_shared::validation::contains_ignore_case;
use shareit_shared::Pagination;

use crate::domain::entities::item::Item;
use crate::errors::DomainError;
use crate::repositories::table::InMemoryTable;

use super::trait_::ItemRepository;

/// Item repository backed by a process-local map
pub struct InMemoryItemRepository {
    table: InMemoryTable<Item>,
}

impl InMemoryItemRepository {
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

impl Default for InMemoryItemRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Item>, DomainError> {
        let items = self.table.read().await?;
        Ok(items.get(&id).cloned())
    }

    async fn find_by_owner(&self, owner_id: i64, page: Pagination) -> Result<Vec<Item>, DomainError> {
        let items = self.table.read().await?;
        Ok(page.apply(items.values().filter(|i| i.is_owned_by(owner_id)).cloned()))
    }

    async fn find_by_request_id(&self, request_id: i64) -> Result<Vec<Item>, DomainError> {
        let items = self.table.read().await?;
        Ok(items
            .values()
            .filter(|i| i.request_id == Some(request_id))
            .cloned()
            .collect())
    }

    async fn search_available(&self, text: &str, page: Pagination) -> Result<Vec<Item>, DomainError> {
        let items = self.table.read().await?;
        Ok(page.apply(
            items
                .values()
                .filter(|i| i.available)
                .filter(|i| contains_ignore_case(&i.name, text) || contains_ignore_case(&i.description, text))
                .cloned(),
        ))
    }

    async fn save(&self, item: Item) -> Result<Item, DomainError> {
        let mut items = self.table.write().await?;

        let item = if item.id > 0 {
            if !items.contains_key(&item.id) {
                return Err(DomainError::not_found("Item not found"));
            }
            item
        } else {
            item.with_id(self.table.next_id())
        };

        items.insert(item.id, item.clone());
        Ok(item)
    }
}

//! Item request service
//!
//! Users post requests for items they are missing; other users browse
//! everyone else's requests and answer them with items.

use std::sync::Arc;

use shareit_shared::validation::present_and_not_blank;

use crate::domain::entities::item_request::{ItemRequest, ItemRequestDraft, ItemRequestWithItems};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{ItemRepository, ItemRequestRepository, UserRepository};
use crate::services::config::ServiceConfig;
use crate::services::lookup::{require_request, require_user};

/// Service managing item requests
pub struct ItemRequestService<R, U, I>
where
    R: ItemRequestRepository,
    U: UserRepository,
    I: ItemRepository,
{
    request_repository: Arc<R>,
    user_repository: Arc<U>,
    item_repository: Arc<I>,
    config: ServiceConfig,
}

impl<R, U, I> ItemRequestService<R, U, I>
where
    R: ItemRequestRepository,
    U: UserRepository,
    I: ItemRepository,
{
    /// Create a new item request service with default configuration
    pub fn new(request_repository: Arc<R>, user_repository: Arc<U>, item_repository: Arc<I>) -> Self {
        Self::with_config(
            request_repository,
            user_repository,
            item_repository,
            ServiceConfig::default(),
        )
    }

    /// Create a new item request service with custom configuration
    pub fn with_config(
        request_repository: Arc<R>,
        user_repository: Arc<U>,
        item_repository: Arc<I>,
        config: ServiceConfig,
    ) -> Self {
        Self {
            request_repository,
            user_repository,
            item_repository,
            config,
        }
    }

    /// Post a new request
    ///
    /// The description is checked before the requester is looked up.
    ///
    /// # Returns
    /// * `Ok(ItemRequest)` - Stored request stamped with the current time
    /// * `Err(DomainError::Validation)` - Missing or blank description
    /// * `Err(DomainError::NotFound)` - Unknown requester
    pub async fn create(&self, requester_id: i64, draft: ItemRequestDraft) -> DomainResult<ItemRequest> {
        let description = match draft.description {
            Some(description) if present_and_not_blank(Some(&description)) => description,
            _ => return Err(DomainError::validation("Description is empty")),
        };

        let requester = require_user(self.user_repository.as_ref(), requester_id).await?;
        let request = self
            .request_repository
            .save(ItemRequest::new(description, requester))
            .await?;

        tracing::info!(
            request_id = request.id,
            requester_id,
            event = "item_request_created",
            "Item request created"
        );

        Ok(request)
    }

    /// Requests posted by the user, newest first
    pub async fn find_by_requester_id(&self, requester_id: i64) -> DomainResult<Vec<ItemRequest>> {
        require_user(self.user_repository.as_ref(), requester_id).await?;
        self.request_repository.find_by_requester(requester_id).await
    }

    /// Requests posted by everyone except the caller, newest first
    pub async fn find_all(&self, caller_id: i64, from: u32, size: u32) -> DomainResult<Vec<ItemRequest>> {
        let page = self.config.page(from, size)?;
        tracing::debug!(caller_id, page = page.page, per_page = page.per_page, "Listing foreign requests");
        self.request_repository.find_by_requester_not(caller_id, page).await
    }

    /// Get a request by id
    pub async fn find_by_id(&self, request_id: i64) -> DomainResult<ItemRequest> {
        require_request(self.request_repository.as_ref(), request_id).await
    }

    /// Get a request together with its answers on behalf of an existing user
    pub async fn get_for_user(&self, caller_id: i64, request_id: i64) -> DomainResult<ItemRequestWithItems> {
        require_user(self.user_repository.as_ref(), caller_id).await?;
        let request = self.find_by_id(request_id).await?;
        let items = self.item_repository.find_by_request_id(request.id).await?;
        Ok(ItemRequestWithItems { request, items })
    }

    /// Attach the items offered in response to each request, keeping order
    pub async fn with_items(&self, requests: Vec<ItemRequest>) -> DomainResult<Vec<ItemRequestWithItems>> {
        let mut enriched = Vec::with_capacity(requests.len());
        for request in requests {
            let items = self.item_repository.find_by_request_id(request.id).await?;
            enriched.push(ItemRequestWithItems { request, items });
        }
        Ok(enriched)
    }
}

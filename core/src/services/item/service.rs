//! Item directory service

use chrono::{DateTime, Utc};
use std::sync::Arc;

use shareit_shared::validation::not_blank;

use crate::domain::entities::booking::{Booking, BookingStatus};
use crate::domain::entities::comment::Comment;
use crate::domain::entities::item::{Item, ItemDetails, ItemDraft, ItemPatch};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{
    BookingRepository, CommentRepository, ItemRepository, ItemRequestRepository, UserRepository,
};
use crate::services::config::ServiceConfig;
use crate::services::lookup::{require_item, require_request, require_user};

/// Service for listing, editing and commenting on items
pub struct ItemService<I, U, B, C, R>
where
    I: ItemRepository,
    U: UserRepository,
    B: BookingRepository,
    C: CommentRepository,
    R: ItemRequestRepository,
{
    item_repository: Arc<I>,
    user_repository: Arc<U>,
    booking_repository: Arc<B>,
    comment_repository: Arc<C>,
    request_repository: Arc<R>,
    config: ServiceConfig,
}

impl<I, U, B, C, R> ItemService<I, U, B, C, R>
where
    I: ItemRepository,
    U: UserRepository,
    B: BookingRepository,
    C: CommentRepository,
    R: ItemRequestRepository,
{
    /// Create a new item service with default configuration
    pub fn new(
        item_repository: Arc<I>,
        user_repository: Arc<U>,
        booking_repository: Arc<B>,
        comment_repository: Arc<C>,
        request_repository: Arc<R>,
    ) -> Self {
        Self::with_config(
            item_repository,
            user_repository,
            booking_repository,
            comment_repository,
            request_repository,
            ServiceConfig::default(),
        )
    }

    /// Create a new item service with custom configuration
    pub fn with_config(
        item_repository: Arc<I>,
        user_repository: Arc<U>,
        booking_repository: Arc<B>,
        comment_repository: Arc<C>,
        request_repository: Arc<R>,
        config: ServiceConfig,
    ) -> Self {
        Self {
            item_repository,
            user_repository,
            booking_repository,
            comment_repository,
            request_repository,
            config,
        }
    }

    /// Put a new item up for lending
    ///
    /// # Returns
    /// * `Err(DomainError::NotFound)` - Unknown owner or referenced request
    /// * `Err(DomainError::Validation)` - Blank name or description
    pub async fn create(&self, owner_id: i64, draft: ItemDraft) -> DomainResult<Item> {
        let owner = require_user(self.user_repository.as_ref(), owner_id).await?;
        validate_name(&draft.name)?;
        validate_description(&draft.description)?;

        let mut item = Item::new(draft.name, draft.description, draft.available, owner);
        if let Some(request_id) = draft.request_id {
            let request = require_request(self.request_repository.as_ref(), request_id).await?;
            item = item.in_response_to(request.id);
        }

        let item = self.item_repository.save(item).await?;

        tracing::info!(
            item_id = item.id,
            owner_id,
            request_id = ?item.request_id,
            event = "item_created",
            "Item created"
        );

        Ok(item)
    }

    /// Apply a partial update as the item owner
    pub async fn update(&self, caller_id: i64, item_id: i64, patch: ItemPatch) -> DomainResult<Item> {
        let mut item = self.get_by_id(item_id).await?;

        if !item.is_owned_by(caller_id) {
            tracing::warn!(item_id, caller_id, event = "item_update_denied", "Update by non-owner");
            return Err(DomainError::forbidden("User not owner item"));
        }
        if let Some(name) = &patch.name {
            validate_name(name)?;
        }
        if let Some(description) = &patch.description {
            validate_description(description)?;
        }

        patch.apply_to(&mut item);
        let item = self.item_repository.save(item).await?;

        tracing::info!(item_id, event = "item_updated", "Item updated");
        Ok(item)
    }

    /// Get an item by id
    pub async fn get_by_id(&self, item_id: i64) -> DomainResult<Item> {
        require_item(self.item_repository.as_ref(), item_id).await
    }

    /// Item with its comments, plus the surrounding approved bookings when
    /// the caller owns it
    pub async fn get_details(&self, caller_id: i64, item_id: i64) -> DomainResult<ItemDetails> {
        let item = self.get_by_id(item_id).await?;
        self.decorate(item, caller_id, Utc::now()).await
    }

    /// Items of an owner with booking and comment details
    pub async fn find_by_owner(&self, owner_id: i64, from: u32, size: u32) -> DomainResult<Vec<ItemDetails>> {
        require_user(self.user_repository.as_ref(), owner_id).await?;
        let items = self
            .item_repository
            .find_by_owner(owner_id, self.config.page(from, size)?)
            .await?;

        let now = Utc::now();
        let mut details = Vec::with_capacity(items.len());
        for item in items {
            details.push(self.decorate(item, owner_id, now).await?);
        }
        Ok(details)
    }

    /// Available items matching `text` in name or description
    ///
    /// Blank text matches nothing.
    pub async fn search(&self, text: &str, from: u32, size: u32) -> DomainResult<Vec<Item>> {
        if !not_blank(text) {
            return Ok(Vec::new());
        }
        self.item_repository
            .search_available(text.trim(), self.config.page(from, size)?)
            .await
    }

    /// Items created in response to a request
    pub async fn find_by_request_id(&self, request_id: i64) -> DomainResult<Vec<Item>> {
        self.item_repository.find_by_request_id(request_id).await
    }

    /// Leave a comment on an item the author has already used
    ///
    /// # Returns
    /// * `Err(DomainError::Validation)` - Blank text, or no finished approved booking
    /// * `Err(DomainError::NotFound)` - Unknown author or item
    pub async fn add_comment(&self, author_id: i64, item_id: i64, text: &str) -> DomainResult<Comment> {
        if !not_blank(text) {
            return Err(DomainError::validation("Text is empty"));
        }
        let author = require_user(self.user_repository.as_ref(), author_id).await?;
        let item = self.get_by_id(item_id).await?;

        if !self
            .booking_repository
            .has_finished_booking(author.id, item.id, Utc::now())
            .await?
        {
            return Err(DomainError::validation("User has not booked this item"));
        }

        let comment = self
            .comment_repository
            .save(Comment::new(text.trim(), item.id, author))
            .await?;

        tracing::info!(
            comment_id = comment.id,
            item_id = item.id,
            author_id,
            event = "comment_added",
            "Comment added"
        );

        Ok(comment)
    }

    async fn decorate(&self, item: Item, viewer_id: i64, now: DateTime<Utc>) -> DomainResult<ItemDetails> {
        let comments = self.comment_repository.find_by_item(item.id).await?;

        let mut details = ItemDetails::new(item);
        details.comments = comments;

        if details.item.is_owned_by(viewer_id) {
            let bookings = self.booking_repository.find_by_item(details.item.id).await?;
            let (last, next) = surrounding_bookings(bookings, now);
            details.last_booking = last;
            details.next_booking = next;
        }

        Ok(details)
    }
}

/// Latest approved booking already started and earliest one still ahead
fn surrounding_bookings(bookings: Vec<Booking>, now: DateTime<Utc>) -> (Option<Booking>, Option<Booking>) {
    let mut last: Option<Booking> = None;
    let mut next: Option<Booking> = None;

    for booking in bookings
        .into_iter()
        .filter(|b| b.status == BookingStatus::Approved)
    {
        if booking.start <= now {
            if last.as_ref().map_or(true, |l| booking.start > l.start) {
                last = Some(booking);
            }
        } else if next.as_ref().map_or(true, |n| booking.start < n.start) {
            next = Some(booking);
        }
    }

    (last, next)
}

fn validate_name(name: &str) -> DomainResult<()> {
    if !not_blank(name) {
        return Err(DomainError::validation("Name is empty"));
    }
    Ok(())
}

fn validate_description(description: &str) -> DomainResult<()> {
    if !not_blank(description) {
        return Err(DomainError::validation("Description is empty"));
    }
    Ok(())
}


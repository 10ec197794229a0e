//! Booking lifecycle service
//!
//! Creates bookings and moves them through the status state machine.
//! Status transitions go through [`BookingRepository::update_status`], so two
//! concurrent decisions on the same booking cannot both succeed.

use chrono::Utc;
use std::sync::Arc;

use crate::domain::entities::booking::{
    ApprovalDecision, Booking, BookingDraft, BookingState, BookingStatus,
};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{BookingRepository, ItemRepository, UserRepository};
use crate::services::config::ServiceConfig;
use crate::services::lookup::{require_booking, require_item, require_user};

/// Service managing bookings of items
pub struct BookingService<B, U, I>
where
    B: BookingRepository,
    U: UserRepository,
    I: ItemRepository,
{
    booking_repository: Arc<B>,
    user_repository: Arc<U>,
    item_repository: Arc<I>,
    config: ServiceConfig,
}

impl<B, U, I> BookingService<B, U, I>
where
    B: BookingRepository,
    U: UserRepository,
    I: ItemRepository,
{
    /// Create a new booking service with default configuration
    pub fn new(booking_repository: Arc<B>, user_repository: Arc<U>, item_repository: Arc<I>) -> Self {
        Self::with_config(
            booking_repository,
            user_repository,
            item_repository,
            ServiceConfig::default(),
        )
    }

    /// Create a new booking service with custom configuration
    pub fn with_config(
        booking_repository: Arc<B>,
        user_repository: Arc<U>,
        item_repository: Arc<I>,
        config: ServiceConfig,
    ) -> Self {
        Self {
            booking_repository,
            user_repository,
            item_repository,
            config,
        }
    }

    /// Book an item for the caller
    ///
    /// Checks run in a fixed order: booker, item, availability, ownership,
    /// then the time range. The new booking is `WAITING`.
    pub async fn create(&self, caller_id: i64, draft: BookingDraft) -> DomainResult<Booking> {
        let booker = require_user(self.user_repository.as_ref(), caller_id).await?;
        let item = require_item(self.item_repository.as_ref(), draft.item_id).await?;

        if !item.available {
            return Err(DomainError::validation("Item is not available"));
        }
        // Reported as not found so bookers cannot probe ownership
        if item.is_owned_by(booker.id) {
            return Err(DomainError::not_found("User is owner item"));
        }
        if draft.start <= Utc::now() {
            return Err(DomainError::validation("Start in past"));
        }
        if draft.end <= draft.start {
            return Err(DomainError::validation("End before start"));
        }

        let booking = self
            .booking_repository
            .save(Booking::new(draft.start, draft.end, item, booker))
            .await?;

        tracing::info!(
            booking_id = booking.id,
            item_id = booking.item.id,
            booker_id = booking.booker.id,
            event = "booking_created",
            "Booking created"
        );

        Ok(booking)
    }

    /// Approve or reject a waiting booking as the item owner
    ///
    /// Checks run in a fixed order: booking, caller, current status,
    /// ownership, then the tri-state `approved` flag (`None` is refused).
    ///
    /// # Returns
    /// * `Err(DomainError::NotFound)` - Unknown booking or caller, caller not the owner,
    ///   or missing decision
    /// * `Err(DomainError::Validation)` - Booking already left `WAITING`, reported
    ///   before the ownership check
    /// * `Err(DomainError::Conflict)` - Another decision was recorded concurrently
    pub async fn approve_booking(
        &self,
        owner_caller_id: i64,
        booking_id: i64,
        approved: Option<bool>,
    ) -> DomainResult<Booking> {
        let booking = require_booking(self.booking_repository.as_ref(), booking_id).await?;
        let caller = require_user(self.user_repository.as_ref(), owner_caller_id).await?;

        // A decided booking reports its status to anyone, whatever the flag
        if booking.status.is_terminal() {
            return Err(already_in(booking.status));
        }
        if !booking.is_item_owned_by(caller.id) {
            tracing::warn!(
                booking_id,
                caller_id = caller.id,
                event = "booking_decision_denied",
                "Decision attempted by non-owner"
            );
            return Err(DomainError::not_found("User not owner item"));
        }

        let decision = approved
            .map(ApprovalDecision::from)
            .ok_or_else(|| DomainError::not_found("approved is null"))?;

        self.transition(booking, decision.target_status()).await
    }

    /// Withdraw a waiting booking as its booker
    pub async fn cancel(&self, booker_id: i64, booking_id: i64) -> DomainResult<Booking> {
        let booking = require_booking(self.booking_repository.as_ref(), booking_id).await?;
        let caller = require_user(self.user_repository.as_ref(), booker_id).await?;

        if !booking.is_booked_by(caller.id) {
            return Err(DomainError::forbidden("User not booker"));
        }

        self.transition(booking, BookingStatus::Canceled).await
    }

    /// Get a booking visible to the caller
    ///
    /// Only the booker and the owner of the booked item may see it.
    pub async fn get_by_id_and_user_id(&self, caller_id: i64, booking_id: i64) -> DomainResult<Booking> {
        let booking = require_booking(self.booking_repository.as_ref(), booking_id).await?;
        let caller = require_user(self.user_repository.as_ref(), caller_id).await?;

        if !booking.is_booked_by(caller.id) && !booking.is_item_owned_by(caller.id) {
            return Err(DomainError::forbidden("User has no access to booking"));
        }

        Ok(booking)
    }

    /// Bookings made by the user, filtered by `state`
    pub async fn find_by_booker(
        &self,
        booker_id: i64,
        state: BookingState,
        from: u32,
        size: u32,
    ) -> DomainResult<Vec<Booking>> {
        require_user(self.user_repository.as_ref(), booker_id).await?;
        self.booking_repository
            .find_by_booker(booker_id, state, Utc::now(), self.config.page(from, size)?)
            .await
    }

    /// Bookings of the user's items, filtered by `state`
    pub async fn find_by_owner(
        &self,
        owner_id: i64,
        state: BookingState,
        from: u32,
        size: u32,
    ) -> DomainResult<Vec<Booking>> {
        require_user(self.user_repository.as_ref(), owner_id).await?;
        self.booking_repository
            .find_by_item_owner(owner_id, state, Utc::now(), self.config.page(from, size)?)
            .await
    }

    async fn transition(&self, booking: Booking, target: BookingStatus) -> DomainResult<Booking> {
        if booking.status.is_terminal() {
            return Err(already_in(booking.status));
        }

        let updated = match self
            .booking_repository
            .update_status(booking.id, BookingStatus::Waiting, target)
            .await
        {
            Ok(updated) => updated,
            Err(err @ DomainError::Conflict { .. }) => {
                tracing::warn!(
                    booking_id = booking.id,
                    target = %target,
                    event = "booking_transition_conflict",
                    "Booking status changed concurrently"
                );
                return Err(err);
            }
            Err(err) => return Err(err),
        };

        tracing::info!(
            booking_id = updated.id,
            status = %updated.status,
            event = "booking_status_changed",
            "Booking status changed"
        );

        Ok(updated)
    }
}

fn already_in(status: BookingStatus) -> DomainError {
    DomainError::validation(format!("Booking status is already {}", status.as_str()))
}

//! Booking repository trait
//!
//! Listing queries return bookings ordered by start, most recent first.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use shareit_shared::Pagination;

use crate::domain::entities::booking::{Booking, BookingState, BookingStatus};
use crate::errors::DomainError;

/// Repository trait for Booking entity persistence operations
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Find a booking by its identifier
    async fn find_by_id(&self, id: i64) -> Result<Option<Booking>, DomainError>;

    /// Insert (`id == 0`) or overwrite a booking
    async fn save(&self, booking: Booking) -> Result<Booking, DomainError>;

    /// Atomically move a booking from `expected` to `status`
    ///
    /// # Returns
    /// * `Ok(Booking)` - The booking with its new status
    /// * `Err(DomainError::NotFound)` - Unknown id
    /// * `Err(DomainError::Conflict)` - The stored status is no longer `expected`
    async fn update_status(
        &self,
        id: i64,
        expected: BookingStatus,
        status: BookingStatus,
    ) -> Result<Booking, DomainError>;

    /// Bookings made by a user that match `state` at `now`
    async fn find_by_booker(
        &self,
        booker_id: i64,
        state: BookingState,
        now: DateTime<Utc>,
        page: Pagination,
    ) -> Result<Vec<Booking>, DomainError>;

    /// Bookings of items owned by a user that match `state` at `now`
    async fn find_by_item_owner(
        &self,
        owner_id: i64,
        state: BookingState,
        now: DateTime<Utc>,
        page: Pagination,
    ) -> Result<Vec<Booking>, DomainError>;

    /// Every booking of an item
    async fn find_by_item(&self, item_id: i64) -> Result<Vec<Booking>, DomainError>;

    /// Whether the user has an approved booking of the item that ended before `now`
    async fn has_finished_booking(
        &self,
        booker_id: i64,
        item_id: i64,
        now: DateTime<Utc>,
    ) -> Result<bool, DomainError>;
}

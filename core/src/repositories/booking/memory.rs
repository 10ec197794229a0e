//! In-memory implementation of BookingRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::cmp::Reverse;

use shareit_shared::Pagination;

use crate::domain::entities::booking::{Booking, BookingState, BookingStatus};
use crate::errors::DomainError;
use crate::repositories::table::InMemoryTable;

use super::trait_::BookingRepository;

/// Booking repository backed by a process-local map.
///
/// `update_status` runs its check and write under one write lock, which
/// gives the compare-and-set guarantee of the trait.
pub struct InMemoryBookingRepository {
    table: InMemoryTable<Booking>,
}

impl InMemoryBookingRepository {
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

    async fn select<F>(
        &self,
        state: BookingState,
        now: DateTime<Utc>,
        page: Pagination,
        belongs: F,
    ) -> Result<Vec<Booking>, DomainError>
    where
        F: Fn(&Booking) -> bool + Send,
    {
        let bookings = self.table.read().await?;
        let mut selected: Vec<Booking> = bookings
            .values()
            .filter(|b| belongs(b) && state.matches(b, now))
            .cloned()
            .collect();
        selected.sort_by_key(|b| (Reverse(b.start), Reverse(b.id)));
        Ok(page.apply(selected))
    }
}

impl Default for InMemoryBookingRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Booking>, DomainError> {
        let bookings = self.table.read().await?;
        Ok(bookings.get(&id).cloned())
    }

    async fn save(&self, booking: Booking) -> Result<Booking, DomainError> {
        let mut bookings = self.table.write().await?;

        let booking = if booking.id > 0 {
            if !bookings.contains_key(&booking.id) {
                return Err(DomainError::not_found("Booking not found"));
            }
            booking
        } else {
            booking.with_id(self.table.next_id())
        };

        bookings.insert(booking.id, booking.clone());
        Ok(booking)
    }

    async fn update_status(
        &self,
        id: i64,
        expected: BookingStatus,
        status: BookingStatus,
    ) -> Result<Booking, DomainError> {
        let mut bookings = self.table.write().await?;
        let booking = bookings
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found("Booking not found"))?;

        if booking.status != expected {
            return Err(DomainError::conflict("Booking status was changed concurrently"));
        }

        booking.status = status;
        Ok(booking.clone())
    }

    async fn find_by_booker(
        &self,
        booker_id: i64,
        state: BookingState,
        now: DateTime<Utc>,
        page: Pagination,
    ) -> Result<Vec<Booking>, DomainError> {
        self.select(state, now, page, |b| b.is_booked_by(booker_id)).await
    }

    async fn find_by_item_owner(
        &self,
        owner_id: i64,
        state: BookingState,
        now: DateTime<Utc>,
        page: Pagination,
    ) -> Result<Vec<Booking>, DomainError> {
        self.select(state, now, page, |b| b.is_item_owned_by(owner_id)).await
    }

    async fn find_by_item(&self, item_id: i64) -> Result<Vec<Booking>, DomainError> {
        let bookings = self.table.read().await?;
        let mut found: Vec<Booking> = bookings
            .values()
            .filter(|b| b.item.id == item_id)
            .cloned()
            .collect();
        found.sort_by_key(|b| (Reverse(b.start), Reverse(b.id)));
        Ok(found)
    }

    async fn has_finished_booking(
        &self,
        booker_id: i64,
        item_id: i64,
        now: DateTime<Utc>,
    ) -> Result<bool, DomainError> {
        let bookings = self.table.read().await?;
        Ok(bookings.values().any(|b| {
            b.is_booked_by(booker_id)
                && b.item.id == item_id
                && b.status == BookingStatus::Approved
                && b.end < now
        }))
    }
}

//! Entity resolution shared by the services.
//!
//! Each helper turns an absent row into the fixed not-found message callers expect.

use crate::domain::entities::{Booking, Item, ItemRequest, User};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{BookingRepository, ItemRepository, ItemRequestRepository, UserRepository};

pub(crate) const USER_NOT_FOUND: &str = "User not found";
pub(crate) const ITEM_NOT_FOUND: &str = "Item not found";
pub(crate) const BOOKING_NOT_FOUND: &str = "Booking not found";
pub(crate) const REQUEST_NOT_FOUND: &str = "Request not found";

pub(crate) async fn require_user<U>(repository: &U, id: i64) -> DomainResult<User>
where
    U: UserRepository + ?Sized,
{
    repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found(USER_NOT_FOUND))
}

pub(crate) async fn require_item<I>(repository: &I, id: i64) -> DomainResult<Item>
where
    I: ItemRepository + ?Sized,
{
    repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found(ITEM_NOT_FOUND))
}

pub(crate) async fn require_booking<B>(repository: &B, id: i64) -> DomainResult<Booking>
where
    B: BookingRepository + ?Sized,
{
    repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found(BOOKING_NOT_FOUND))
}

pub(crate) async fn require_request<R>(repository: &R, id: i64) -> DomainResult<ItemRequest>
where
    R: ItemRequestRepository + ?Sized,
{
    repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found(REQUEST_NOT_FOUND))
}

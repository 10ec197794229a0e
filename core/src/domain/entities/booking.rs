//! Booking entity and its status state machine.
//!
//! A booking starts in [`BookingStatus::Waiting`] and is moved exactly once,
//! either by the item owner (approve or reject) or by the booker (cancel).
//! Every other status is terminal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::item::Item;
use super::user::User;
use crate::errors::DomainError;

/// Lifecycle status of a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BookingStatus {
    /// Created, waiting for the owner's decision
    Waiting,
    /// Accepted by the owner
    Approved,
    /// Declined by the owner
    Rejected,
    /// Withdrawn by the booker before a decision
    Canceled,
}

impl BookingStatus {
    /// Whether no further transition is permitted
    pub fn is_terminal(&self) -> bool {
        !matches!(self, BookingStatus::Waiting)
    }

    /// Lowercase name used in user facing messages
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Waiting => "waiting",
            BookingStatus::Approved => "approved",
            BookingStatus::Rejected => "rejected",
            BookingStatus::Canceled => "canceled",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str().to_uppercase())
    }
}

/// Owner's decision on a waiting booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApprovalDecision {
    Approve,
    Reject,
}

impl ApprovalDecision {
    /// Status the booking ends up in after this decision
    pub fn target_status(&self) -> BookingStatus {
        match self {
            ApprovalDecision::Approve => BookingStatus::Approved,
            ApprovalDecision::Reject => BookingStatus::Rejected,
        }
    }
}

impl From<bool> for ApprovalDecision {
    fn from(approved: bool) -> Self {
        if approved {
            ApprovalDecision::Approve
        } else {
            ApprovalDecision::Reject
        }
    }
}

/// Filter applied to booking listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum BookingState {
    #[default]
    All,
    /// Started and not yet finished
    Current,
    /// Already finished
    Past,
    /// Not yet started
    Future,
    Waiting,
    Rejected,
}

impl BookingState {
    /// Check whether a booking falls under this filter at `now`
    pub fn matches(&self, booking: &Booking, now: DateTime<Utc>) -> bool {
        match self {
            BookingState::All => true,
            BookingState::Current => booking.start <= now && booking.end >= now,
            BookingState::Past => booking.end < now,
            BookingState::Future => booking.start > now,
            BookingState::Waiting => booking.status == BookingStatus::Waiting,
            BookingState::Rejected => booking.status == BookingStatus::Rejected,
        }
    }
}

impl FromStr for BookingState {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ALL" => Ok(BookingState::All),
            "CURRENT" => Ok(BookingState::Current),
            "PAST" => Ok(BookingState::Past),
            "FUTURE" => Ok(BookingState::Future),
            "WAITING" => Ok(BookingState::Waiting),
            "REJECTED" => Ok(BookingState::Rejected),
            _ => Err(DomainError::validation(format!("Unknown state: {}", s))),
        }
    }
}

/// Booking entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// Unique identifier, assigned on save (0 until persisted)
    pub id: i64,

    pub start: DateTime<Utc>,

    pub end: DateTime<Utc>,

    /// Booked item
    pub item: Item,

    /// User who asked for the item
    pub booker: User,

    pub status: BookingStatus,
}

impl Booking {
    /// Creates a new waiting booking
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>, item: Item, booker: User) -> Self {
        Self {
            id: 0,
            start,
            end,
            item,
            booker,
            status: BookingStatus::Waiting,
        }
    }

    /// Sets the identifier, used by repositories when persisting
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    /// Checks whether the user is the one who made the booking
    pub fn is_booked_by(&self, user_id: i64) -> bool {
        self.booker.id == user_id
    }

    /// Checks whether the user owns the booked item
    pub fn is_item_owned_by(&self, user_id: i64) -> bool {
        self.item.is_owned_by(user_id)
    }
}

/// Caller supplied data for a new booking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingDraft {
    pub item_id: i64,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn booking_between(start: DateTime<Utc>, end: DateTime<Utc>) -> Booking {
        let owner = User::new("Name", "test@test.ru").with_id(1);
        let booker = User::new("Name 2", "test2@test.ru").with_id(2);
        let item = Item::new("Клей", "Секундный клей момент", true, owner).with_id(1);
        Booking::new(start, end, item, booker).with_id(1)
    }

    #[test]
    fn test_only_waiting_is_not_terminal() {
        assert!(!BookingStatus::Waiting.is_terminal());
        assert!(BookingStatus::Approved.is_terminal());
        assert!(BookingStatus::Rejected.is_terminal());
        assert!(BookingStatus::Canceled.is_terminal());
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&BookingStatus::Waiting).unwrap();
        assert_eq!(json, "\"WAITING\"");
        assert_eq!(BookingStatus::Approved.to_string(), "APPROVED");
    }

    #[test]
    fn test_decision_from_flag() {
        assert_eq!(ApprovalDecision::from(true).target_status(), BookingStatus::Approved);
        assert_eq!(ApprovalDecision::from(false).target_status(), BookingStatus::Rejected);
    }

    #[test]
    fn test_state_parsing() {
        assert_eq!("current".parse::<BookingState>().unwrap(), BookingState::Current);
        assert_eq!("ALL".parse::<BookingState>().unwrap(), BookingState::All);

        let err = "UNSUPPORTED_STATUS".parse::<BookingState>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown state: UNSUPPORTED_STATUS");
    }

    #[test]
    fn test_state_time_filters() {
        let now = Utc::now();
        let past = booking_between(now - Duration::days(2), now - Duration::days(1));
        let current = booking_between(now - Duration::hours(1), now + Duration::hours(1));
        let future = booking_between(now + Duration::days(1), now + Duration::days(2));

        assert!(BookingState::Past.matches(&past, now));
        assert!(!BookingState::Past.matches(&current, now));
        assert!(BookingState::Current.matches(&current, now));
        assert!(!BookingState::Current.matches(&future, now));
        assert!(BookingState::Future.matches(&future, now));
        assert!(!BookingState::Future.matches(&past, now));
        assert!(BookingState::All.matches(&past, now));
    }

    #[test]
    fn test_state_status_filters() {
        let now = Utc::now();
        let mut booking = booking_between(now + Duration::days(1), now + Duration::days(2));
        assert!(BookingState::Waiting.matches(&booking, now));

        booking.status = BookingStatus::Rejected;
        assert!(!BookingState::Waiting.matches(&booking, now));
        assert!(BookingState::Rejected.matches(&booking, now));
    }

    #[test]
    fn test_participants() {
        let now = Utc::now();
        let booking = booking_between(now + Duration::days(1), now + Duration::days(2));
        assert!(booking.is_booked_by(2));
        assert!(booking.is_item_owned_by(1));
        assert!(!booking.is_item_owned_by(2));
    }
}

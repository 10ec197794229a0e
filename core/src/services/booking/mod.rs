//! Booking service module: creation, owner decisions, cancellation and listings.

mod service;

pub use service::BookingService;

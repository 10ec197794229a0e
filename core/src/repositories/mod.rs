//! Repository interfaces and their in-memory implementations.

pub mod booking;
pub mod comment;
pub mod item;
pub mod item_request;
pub mod user;

mod table;

pub use booking::{BookingRepository, InMemoryBookingRepository};
pub use comment::{CommentRepository, InMemoryCommentRepository};
pub use item::{InMemoryItemRepository, ItemRepository};
pub use item_request::{InMemoryItemRequestRepository, ItemRequestRepository};
pub use user::{InMemoryUserRepository, UserRepository};

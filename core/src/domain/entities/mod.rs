//! Domain entities representing core business objects.

pub mod booking;
pub mod comment;
pub mod item;
pub mod item_request;
pub mod user;

// Re-export commonly used types
pub use booking::{ApprovalDecision, Booking, BookingDraft, BookingState, BookingStatus};
pub use comment::Comment;
pub use item::{Item, ItemDetails, ItemDraft, ItemPatch};
pub use item_request::{ItemRequest, ItemRequestDraft, ItemRequestWithItems};
pub use user::{NewUser, User, UserPatch};

//! Business services containing domain logic and use cases.

pub mod booking;
pub mod config;
pub mod item;
pub mod item_request;
pub mod user;

mod lookup;

// Re-export commonly used types
pub use booking::BookingService;
pub use config::ServiceConfig;
pub use item::ItemService;
pub use item_request::ItemRequestService;
pub use user::UserService;

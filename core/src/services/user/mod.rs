//! User directory: registration and lookup of ShareIt members.

mod service;

pub use service::UserService;

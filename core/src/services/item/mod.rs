//! Item directory: items, owner views, search and comments.

mod service;

pub use service::ItemService;

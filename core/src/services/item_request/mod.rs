//! Item request service module.

mod service;

pub use service::ItemRequestService;

#[cfg(test)]
mod tests;

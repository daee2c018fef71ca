//! Notification center: the alert store, its keyword tab policy,
//! the startup feed, and list rendering.

pub mod display;
pub mod filters;
pub mod seed;
pub mod store;

pub use filters::KeywordCategory;
pub use store::NotificationStore;

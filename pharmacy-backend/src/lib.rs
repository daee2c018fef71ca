//! Pharmacy notification center library: the alert store and the
//! console session that drives it.

pub mod config;
pub mod console;
pub mod notifications;

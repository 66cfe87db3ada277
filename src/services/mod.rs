//! External Services
//!
//! Background workers that keep I/O off the UI thread:
//! - store: plant store request queue service

pub mod store;

pub use store::{StoreRequest, StoreResponse};

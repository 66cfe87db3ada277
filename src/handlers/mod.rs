//! Event Handlers
//!
//! - keyboard: user keyboard input (modal dialogs first, then global keys)
//! - store: responses from the background store worker
//!
//! Handlers are functions over the pure Model plus the request channel, so
//! integration tests can drive them without a terminal.

pub mod keyboard;
pub mod store;

pub use keyboard::handle_key;
pub use store::handle_store_response;

//! plantui - a terminal watering-reminder screen
//!
//! Lists the plants in the local store, highlights the one due for watering
//! soonest, and removes a plant after confirmation. Modules are exposed here
//! so integration tests can exercise the model, logic, storage and handlers
//! without a terminal.

pub mod config;
pub mod handlers;
pub mod logic;
pub mod model;
pub mod services;
pub mod storage;
pub mod ui;

//! Business Logic
//!
//! Pure functions that can be unit tested without a terminal or a store:
//! - plants: list filtering and selection adjustment
//! - reminder: relative-time formatting and reminder message construction

pub mod plants;
pub mod reminder;

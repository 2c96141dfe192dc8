//! HTTP request handlers.

pub mod categories;
pub mod inventory;

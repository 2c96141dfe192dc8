//! Domain logic for the stockroom inventory service.
//!
//! Pure types and rules only -- no I/O. The `db` and `api` crates build
//! on the error taxonomy and validation helpers defined here.

pub mod error;
pub mod inventory;
pub mod types;

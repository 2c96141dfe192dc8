//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept a `SqliteExecutor` as the first argument, so they run
//! against either the pool or an open per-request transaction.

pub mod category_repo;
pub mod item_repo;

pub use category_repo::CategoryRepo;
pub use item_repo::ItemRepo;

//! # Inventory Store
//!
//! SQLite persistence for articles and categories.
//!
//! The schema is created on open (`CREATE TABLE IF NOT EXISTS`); there is no
//! migration versioning. Referential integrity and name uniqueness are
//! enforced by SQLite itself and surfaced as [`StoreError`] variants.

mod errors;
mod repository;
mod schema;

pub use errors::{StoreError, StoreResult};
pub use repository::Store;

//! SQLite backend for the jrp phrase store.
//!
//! One database file holds the `jrp` relation. The schema is created and
//! migrated on open, gated on `PRAGMA user_version`.

mod encode;
mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use schema::LATEST_VERSION;
pub use store::SqliteStore;

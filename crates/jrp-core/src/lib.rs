//! Core types, traits and operations for `jrp`, the Japanese random phrase
//! generator.
//!
//! This crate is deliberately free of database and terminal dependencies.
//! Storage backends implement [`store::PhraseStore`], dictionaries implement
//! [`source::WordSource`], and every history or favorite operation is a free
//! function that takes the store explicitly.

pub mod clock;
pub mod draw;
pub mod error;
pub mod favorite;
pub mod generator;
pub mod history;
pub mod phrase;
pub mod source;
pub mod status;
pub mod store;
pub mod word;

pub use error::{Error, Result};
pub use status::Status;

//! # dearbabla-store
//!
//! Persistent translation store for dearbabla (SQLite-backed).

pub mod store;

pub use store::Store;

//! # dearbabla-core
//!
//! Core types, traits, configuration, and error handling for dearbabla.

pub mod config;
pub mod error;
pub mod record;
pub mod traits;

/// The only dictionary pairing dearbabla looks words up in.
pub const DICTIONARY: &str = "english-polish";

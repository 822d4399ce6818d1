//! # dearbabla-fetch
//!
//! bab.la dictionary client: one HTTP lookup per word, translations scraped
//! from the "quick results" block of the returned page.

pub mod babla;
pub mod extract;

pub use babla::BablaFetcher;
pub use extract::extract_translations;

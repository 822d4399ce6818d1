//! Lookup pipeline: store first, dictionary on a miss.
//!
//! `CACHE_CHECK → HIT` returns the stored translations; `MISS → FETCH` asks
//! the fetcher once and, when it found something and saving is enabled,
//! writes the result back before returning it.

use dearbabla_core::{
    error::BablaError,
    record::{canonical_translations, TranslationRecord},
    traits::Fetcher,
};
use dearbabla_store::Store;
use tracing::{debug, info};

/// Read-through translation cache: the store, backed by a fetcher.
pub struct Lookup {
    fetcher: Box<dyn Fetcher>,
    store: Store,
}

impl Lookup {
    pub fn new(fetcher: Box<dyn Fetcher>, store: Store) -> Self {
        Self { fetcher, store }
    }

    /// Translations for `word`, fetching and optionally saving them on a miss.
    ///
    /// An empty result means nothing was found: unknown word, unreachable
    /// service, or a page the fetcher could not read.
    pub async fn resolve(
        &self,
        word: &str,
        store_on_fetch: bool,
    ) -> Result<Vec<String>, BablaError> {
        // --- 1. CACHE CHECK ---
        let cached = self.store.read(word).await?;
        if let Some(ref translations) = cached {
            if !translations.is_empty() {
                debug!("cache hit for {word:?}");
                return Ok(translations.clone());
            }
        }

        // --- 2. FETCH ---
        // Only what survives a trip through the store is returned, so a
        // later cache hit gives back exactly the same list.
        let fetched = canonical_translations(self.fetcher.fetch(word).await);
        if fetched.is_empty() {
            info!("{}: no translations for {word:?}", self.fetcher.name());
            return Ok(fetched);
        }

        // --- 3. WRITE ---
        if store_on_fetch {
            // An empty row left behind by an older version would shadow the
            // new one; replace it so the word keeps a single record.
            if cached.is_some() {
                self.store.delete(word).await?;
            }
            self.store.write(word, &fetched).await?;
            debug!("saved {} translation(s) for {word:?}", fetched.len());
        }

        Ok(fetched)
    }

    /// Forget `word`. Absent words are a no-op.
    pub async fn delete(&self, word: &str) -> Result<(), BablaError> {
        let removed = self.store.delete(word).await?;
        debug!("deleted {removed} record(s) for {word:?}");
        Ok(())
    }

    /// Number of stored records.
    pub async fn count(&self) -> Result<u64, BablaError> {
        self.store.count().await
    }

    /// A random learned word, or `None` if nothing has been saved yet.
    pub async fn random_entry(&self) -> Result<Option<TranslationRecord>, BablaError> {
        self.store.random().await
    }
}

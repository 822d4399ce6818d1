//! Learned words: the read-through cache rows.

use super::Store;
use dearbabla_core::{
    error::BablaError,
    record::{join_translations, split_translations, TranslationRecord},
    DICTIONARY,
};

impl Store {
    /// Stored translations for `word`, or `None` if the word was never saved.
    pub async fn read(&self, word: &str) -> Result<Option<Vec<String>>, BablaError> {
        let row: Option<(String,)> = sqlx::query_as(
            "SELECT COALESCE(translations, '') FROM words \
             WHERE dictionary = ? AND word = ? LIMIT 1",
        )
        .bind(DICTIONARY)
        .bind(word)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| BablaError::Store(format!("query failed: {e}")))?;

        Ok(row.map(|(stored,)| split_translations(&stored)))
    }

    /// Insert a record for `word`.
    ///
    /// Plain insert: callers check [`Store::read`] first so a word is never
    /// saved twice.
    pub async fn write(&self, word: &str, translations: &[String]) -> Result<(), BablaError> {
        sqlx::query("INSERT INTO words (dictionary, word, translations) VALUES (?, ?, ?)")
            .bind(DICTIONARY)
            .bind(word)
            .bind(join_translations(translations))
            .execute(&self.pool)
            .await
            .map_err(|e| BablaError::Store(format!("insert failed: {e}")))?;

        Ok(())
    }

    /// Delete every record for `word`. Returns the number of rows removed.
    pub async fn delete(&self, word: &str) -> Result<u64, BablaError> {
        let result = sqlx::query("DELETE FROM words WHERE dictionary = ? AND word = ?")
            .bind(DICTIONARY)
            .bind(word)
            .execute(&self.pool)
            .await
            .map_err(|e| BablaError::Store(format!("delete failed: {e}")))?;

        Ok(result.rows_affected())
    }

    /// Total number of stored records.
    pub async fn count(&self) -> Result<u64, BablaError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM words")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| BablaError::Store(format!("count failed: {e}")))?;

        Ok(count as u64)
    }

    /// One record drawn uniformly at random, or `None` if nothing is stored.
    pub async fn random(&self) -> Result<Option<TranslationRecord>, BablaError> {
        let row: Option<(String, String)> = sqlx::query_as(
            "SELECT word, COALESCE(translations, '') FROM words \
             WHERE dictionary = ? AND word IS NOT NULL ORDER BY RANDOM() LIMIT 1",
        )
        .bind(DICTIONARY)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| BablaError::Store(format!("query failed: {e}")))?;

        Ok(row.map(|(word, stored)| {
            TranslationRecord::new(DICTIONARY, &word, split_translations(&stored))
        }))
    }
}

use async_trait::async_trait;

/// Translation source: the dictionary the store falls back to on a miss.
///
/// Implementations never fail: network trouble and pages they cannot make
/// sense of both come back as an empty list.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Human-readable fetcher name.
    fn name(&self) -> &str;

    /// Look up translations for `word`, in the order the source lists them.
    async fn fetch(&self, word: &str) -> Vec<String>;
}

use thiserror::Error;

/// Top-level error type for dearbabla.
#[derive(Debug, Error)]
pub enum BablaError {
    /// Missing or invalid configuration (store location, config file).
    #[error("config error: {0}")]
    Config(String),

    /// Error from the translation store.
    #[error("store error: {0}")]
    Store(String),

    /// Error talking to the dictionary service.
    #[error("fetch error: {0}")]
    Fetch(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file parse error.
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
}

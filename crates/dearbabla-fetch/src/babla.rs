//! bab.la HTTP client.
//!
//! One GET per lookup with a desktop-browser header set; bab.la serves a
//! different page layout to clients that do not look like a browser.

use async_trait::async_trait;
use dearbabla_core::{config::FetchConfig, error::BablaError, traits::Fetcher, DICTIONARY};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, REFERER, USER_AGENT};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

use crate::extract::extract_translations;

const BROWSER_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
const BROWSER_ACCEPT_LANGUAGE: &str = "en-GB,en;q=0.8,en-US;q=0.6,pl;q=0.4";
const BROWSER_REFERER: &str = "http://en.bab.la/";
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/40.0.2214.115 Safari/537.36";

/// Dictionary lookups against bab.la.
pub struct BablaFetcher {
    client: reqwest::Client,
    host: String,
}

impl BablaFetcher {
    /// Create from config values.
    pub fn from_config(config: &FetchConfig) -> Result<Self, BablaError> {
        let client = reqwest::Client::builder()
            .default_headers(browser_headers())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| BablaError::Fetch(format!("failed to build http client: {e}")))?;

        Ok(Self {
            client,
            host: bare_host(&config.host).to_string(),
        })
    }

    /// Page URL for `word`.
    pub fn url_for(&self, word: &str) -> String {
        format!(
            "http://{}/{DICTIONARY}/{}",
            self.host,
            urlencoding::encode(word)
        )
    }

    /// Download the result page for `word`.
    async fn get_page(&self, word: &str) -> Result<String, BablaError> {
        let url = self.url_for(word);
        debug!("babla: GET {url}");

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| BablaError::Fetch(format!("babla request failed: {e}")))?;

        if !resp.status().is_success() {
            return Err(BablaError::Fetch(format!(
                "babla returned {} for {url}",
                resp.status()
            )));
        }

        resp.text()
            .await
            .map_err(|e| BablaError::Fetch(format!("babla: failed to read body: {e}")))
    }
}

/// Host part of a configured host: any `http://`/`https://` prefix and
/// trailing slashes are dropped, since the URL scheme is fixed.
fn bare_host(host: &str) -> &str {
    let host = host.trim();
    let host = host
        .strip_prefix("http://")
        .or_else(|| host.strip_prefix("https://"))
        .unwrap_or(host);
    host.trim_end_matches('/')
}

fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(BROWSER_ACCEPT));
    headers.insert(
        ACCEPT_LANGUAGE,
        HeaderValue::from_static(BROWSER_ACCEPT_LANGUAGE),
    );
    headers.insert(REFERER, HeaderValue::from_static(BROWSER_REFERER));
    headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
    headers
}

#[async_trait]
impl Fetcher for BablaFetcher {
    fn name(&self) -> &str {
        "babla"
    }

    async fn fetch(&self, word: &str) -> Vec<String> {
        let start = Instant::now();
        match self.get_page(word).await {
            Ok(html) => {
                let translations = extract_translations(&html);
                debug!(
                    "babla: {} translation(s) for {word:?} in {}ms",
                    translations.len(),
                    start.elapsed().as_millis()
                );
                translations
            }
            Err(e) => {
                warn!("{e}");
                Vec::new()
            }
        }
    }
}

use crate::config::AnalyzerConfig;
use crate::error::FetchError;
use crate::fetchers::{PageSource, SourceError};
use crate::filter;
use crate::results::SearchResultPage;
use async_trait::async_trait;
use reqwest::header::{
    ACCEPT, ACCEPT_LANGUAGE, CACHE_CONTROL, CONNECTION, DNT, HeaderMap, HeaderName, HeaderValue,
    UPGRADE_INSECURE_REQUESTS, USER_AGENT,
};
use url::Url;

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Headers that make the request look like an ordinary desktop browser
pub fn browser_headers() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
    h.insert(
        ACCEPT,
        HeaderValue::from_static(
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
        ),
    );
    h.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5"));
    h.insert(DNT, HeaderValue::from_static("1"));
    h.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
    h.insert(UPGRADE_INSECURE_REQUESTS, HeaderValue::from_static("1"));
    h.insert(
        HeaderName::from_static("sec-fetch-dest"),
        HeaderValue::from_static("document"),
    );
    h.insert(
        HeaderName::from_static("sec-fetch-mode"),
        HeaderValue::from_static("navigate"),
    );
    h.insert(
        HeaderName::from_static("sec-fetch-site"),
        HeaderValue::from_static("none"),
    );
    h.insert(
        HeaderName::from_static("sec-fetch-user"),
        HeaderValue::from_static("?1"),
    );
    h.insert(CACHE_CONTROL, HeaderValue::from_static("max-age=0"));
    h
}

/// [`PageSource`] backed by a reqwest client
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
}

impl HttpSource {
    /// Build a client with browser headers and the configured per-attempt timeout
    pub fn new(config: &AnalyzerConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .default_headers(browser_headers())
            .timeout(config.timeout())
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageSource for HttpSource {
    async fn get(&self, url: &Url) -> Result<String, SourceError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(classify)?;

        let response = response.error_for_status().map_err(classify)?;
        response.text().await.map_err(classify)
    }
}

/// Transport-level reqwest failures are retryable, everything else is not
fn classify(error: reqwest::Error) -> SourceError {
    if error.is_connect() || error.is_timeout() || error.is_status() || error.is_request() {
        SourceError::Transport(error.to_string())
    } else {
        SourceError::Other(error.to_string())
    }
}

/// Retrieves one search-results page with bounded retries
pub struct Fetcher<S> {
    source: S,
    config: AnalyzerConfig,
}

impl<S: PageSource> Fetcher<S> {
    pub fn new(source: S, config: &AnalyzerConfig) -> Self {
        Self {
            source,
            config: config.clone(),
        }
    }

    /// Fetch the page behind `url`.
    ///
    /// The page-size parameter is added when missing. Transport failures are
    /// retried up to `max_retries` total attempts, each retry preceded by the
    /// base delay plus random jitter; any other failure ends the fetch at once.
    pub async fn fetch(&self, url: &str) -> Result<SearchResultPage, FetchError> {
        let url = Url::parse(url).map_err(|e| FetchError::Request(format!("{}: {}", url, e)))?;
        let url = filter::with_page_size(&url, self.config.items_per_page);
        let attempts = self.config.max_retries.max(1);

        let mut last_error = String::new();
        for attempt in 1..=attempts {
            if attempt > 1 {
                let delay = self.config.retry_delay();
                ::log::warn!(
                    "Retrying {} in {:.2} seconds (attempt {} of {})",
                    url,
                    delay.as_secs_f64(),
                    attempt,
                    attempts
                );
                tokio::time::sleep(delay).await;
            }

            ::log::info!("Fetching {} (attempt {} of {})", url, attempt, attempts);
            match self.source.get(&url).await {
                Ok(markup) => {
                    ::log::debug!("Fetched {} bytes from {}", markup.len(), url);
                    return Ok(SearchResultPage::new(url.to_string(), markup));
                }
                Err(SourceError::Transport(e)) => {
                    ::log::warn!("Attempt {} for {} failed: {}", attempt, url, e);
                    last_error = e;
                }
                Err(SourceError::Other(e)) => {
                    ::log::error!("Failed to process {}: {}", url, e);
                    return Err(FetchError::Request(e));
                }
            }
        }

        Err(FetchError::Exhausted {
            attempts,
            last_error,
        })
    }
}

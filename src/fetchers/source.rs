use async_trait::async_trait;
use url::Url;

/// Why a single GET failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// Connection failure, timeout, or non-2xx status; worth retrying
    Transport(String),
    /// Anything else, such as an unreadable response body; not retried
    Other(String),
}

// Base trait for anything that can hand back the markup behind a URL
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Issue one GET and return the response body
    async fn get(&self, url: &Url) -> Result<String, SourceError>;
}

use thiserror::Error;

/// Failure to retrieve a search-results page. The only hard error the
/// pipeline produces.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Every attempt hit a transport failure or a non-2xx status
    #[error("failed to fetch page after {attempts} attempts: {last_error}")]
    Exhausted { attempts: u32, last_error: String },

    /// Something other than a transport failure went wrong; not retried
    #[error("error processing page: {0}")]
    Request(String),

    /// The HTTP client could not be constructed
    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

/// Failure to load or validate configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid selector for {field}: {selector}")]
    Selector { field: &'static str, selector: String },

    #[error("invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Conditions an analysis run escalates to its caller
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("not a supported marketplace search URL: {0}")]
    InvalidUrl(String),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("no results found")]
    NoResults,
}

use crate::error::ConfigError;
use crate::parsers::ListingSchema;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// How title text is split into word tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordSplitter {
    /// Split on every character that is not alphanumeric
    #[default]
    Unicode,
    /// Split on whitespace only
    Whitespace,
}

/// Configuration for a single analysis run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Total number of fetch attempts
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Fixed part of the delay before each retry, in seconds
    #[serde(default = "default_retry_base_delay_secs")]
    pub retry_base_delay_secs: f64,

    /// Bounds of the uniform random jitter added to each retry delay, in seconds
    #[serde(default = "default_retry_jitter_secs")]
    pub retry_jitter_secs: [f64; 2],

    /// Timeout for a single request attempt, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Page size requested from the marketplace and cap on extracted listings
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,

    /// Character budget for the suggested title
    #[serde(default = "default_max_title_length")]
    pub max_title_length: usize,

    /// Word splitting strategy for the tokenizer
    #[serde(default)]
    pub word_splitter: WordSplitter,

    /// Newline-separated stopword file replacing the bundled English list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stopwords_path: Option<PathBuf>,

    /// Selectors used to pull listings out of the page
    #[serde(default)]
    pub schema: ListingSchema,
}

/// Upper bound on a single retry delay, in seconds
pub const MAX_RETRY_DELAY_SECS: f64 = 3600.0;

fn default_max_retries() -> u32 {
    3
}

fn default_retry_base_delay_secs() -> f64 {
    2.0
}

fn default_retry_jitter_secs() -> [f64; 2] {
    [1.0, 3.0]
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_items_per_page() -> usize {
    60
}

fn default_max_title_length() -> usize {
    80
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            retry_base_delay_secs: default_retry_base_delay_secs(),
            retry_jitter_secs: default_retry_jitter_secs(),
            timeout_secs: default_timeout_secs(),
            items_per_page: default_items_per_page(),
            max_title_length: default_max_title_length(),
            word_splitter: WordSplitter::default(),
            stopwords_path: None,
            schema: ListingSchema::default(),
        }
    }
}

impl AnalyzerConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        config.schema.compile()?;
        Ok(config)
    }

    /// Reject delays that are negative, non-finite, or longer than an hour
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_delay("retry_base_delay_secs", self.retry_base_delay_secs)?;
        for secs in self.retry_jitter_secs {
            check_delay("retry_jitter_secs", secs)?;
        }
        Ok(())
    }

    /// Per-attempt request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Draw the delay to wait before a retry: base plus uniform jitter
    pub fn retry_delay(&self) -> Duration {
        let [lo, hi] = self.retry_jitter_secs;
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        let jitter = lo + fastrand::f64() * (hi - lo);
        let secs = (self.retry_base_delay_secs + jitter).clamp(0.0, MAX_RETRY_DELAY_SECS);
        Duration::try_from_secs_f64(secs).unwrap_or(Duration::ZERO)
    }
}

fn check_delay(field: &'static str, secs: f64) -> Result<(), ConfigError> {
    if secs.is_finite() && (0.0..=MAX_RETRY_DELAY_SECS).contains(&secs) {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("{} is not between 0 and {} seconds", secs, MAX_RETRY_DELAY_SECS),
        })
    }
}

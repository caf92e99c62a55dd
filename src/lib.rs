// Re-export modules
pub mod analysis;
pub mod config;
pub mod error;
pub mod fetchers;
pub mod filter;
pub mod parsers;
pub mod results;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::AnalyzerConfig;
pub use error::{AnalysisError, ConfigError, FetchError};
pub use results::{AnalysisReport, Derived, FrequencyRanking, ListingRecord, PriceStats};

use analysis::resources;
use fetchers::{Fetcher, HttpSource, PageSource};
use filter::UrlFilter;
use parsers::text::{self, TokenizerOptions};
use std::path::Path;

/// Builder for one analysis run over a marketplace search URL
pub struct Analysis {
    url: String,
    config: AnalyzerConfig,
}

impl Analysis {
    /// Create a new analysis for the given search URL with default settings
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            config: AnalyzerConfig::default(),
        }
    }

    /// Apply a configuration
    pub fn with_config(mut self, config: AnalyzerConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a JSON file
    pub fn with_config_file(mut self, path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        self.config = AnalyzerConfig::from_file(path)?;
        Ok(self)
    }

    /// Apply configuration from a JSON string
    pub fn with_config_str(mut self, json: &str) -> Result<Self, ConfigError> {
        self.config = AnalyzerConfig::from_json(json)?;
        Ok(self)
    }

    /// Override the number of listings requested and kept
    pub fn with_items_per_page(mut self, value: usize) -> Self {
        self.config.items_per_page = value;
        self
    }

    /// Override the suggested title's character budget
    pub fn with_max_title_length(mut self, value: usize) -> Self {
        self.config.max_title_length = value;
        self
    }

    /// Override the total number of fetch attempts
    pub fn with_max_retries(mut self, value: u32) -> Self {
        self.config.max_retries = value;
        self
    }

    /// Fetch the page over HTTP and analyze it
    pub async fn run(self) -> Result<AnalysisReport, AnalysisError> {
        let source = HttpSource::new(&self.config)?;
        self.run_with(source).await
    }

    /// Fetch the page through `source` and analyze it.
    ///
    /// Rejects URLs that are not marketplace search URLs before any request
    /// is made, and reports a page without listings as [`AnalysisError::NoResults`].
    pub async fn run_with<S: PageSource>(self, source: S) -> Result<AnalysisReport, AnalysisError> {
        if !UrlFilter::default().is_valid(&self.url) {
            return Err(AnalysisError::InvalidUrl(self.url));
        }
        let extractor = self.config.schema.compile()?;

        let page = Fetcher::new(source, &self.config).fetch(&self.url).await?;
        let records = extractor.extract(&page.markup, self.config.items_per_page);
        ::log::info!("Extracted {} listings from {}", records.len(), page.url);
        if records.is_empty() {
            return Err(AnalysisError::NoResults);
        }

        Ok(analyze_records(Some(page.url), &records, &self.config))
    }
}

/// Extract listings from markup and analyze them. Performs no I/O.
pub fn analyze_markup(markup: &str, config: &AnalyzerConfig) -> Result<AnalysisReport, ConfigError> {
    let records = config
        .schema
        .compile()?
        .extract(markup, config.items_per_page);
    Ok(analyze_records(None, &records, config))
}

/// Run keyword, title and price analysis over extracted listings
pub fn analyze_records(
    url: Option<String>,
    records: &[ListingRecord],
    config: &AnalyzerConfig,
) -> AnalysisReport {
    let (titles, prices) = AnalysisReport::columns(records);

    let stopwords = resources::stopwords_for(config.stopwords_path.as_deref());
    let options = TokenizerOptions::new(config.word_splitter, &stopwords);
    let tokens = text::tokenize(&titles, &options);
    if tokens.is_defaulted() {
        ::log::warn!("Tokenization degraded, keyword analysis will be empty");
    }

    let keywords = analysis::aggregate(tokens.value());
    let suggested_title = analysis::suggest_title(keywords.value(), config.max_title_length);
    let price_stats = analysis::summarize(&prices);

    AnalysisReport {
        url,
        titles,
        prices,
        keywords,
        suggested_title,
        price_stats,
    }
}

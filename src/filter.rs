use regex::Regex;
use url::Url;

/// Query parameter carrying the number of results per page
pub const PAGE_SIZE_PARAM: &str = "_ipg";

/// Configuration for accepting marketplace search URLs
#[derive(Debug, Clone)]
pub struct UrlFilterConfig {
    /// Marketplace domain without its top-level domain
    pub domain: String,

    /// Top-level domains the marketplace is served from
    pub allowed_tlds: Vec<String>,
}

fn default_domain() -> String {
    "ebay".to_string()
}

fn default_allowed_tlds() -> Vec<String> {
    ["com", "co.uk", "de", "fr", "au"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for UrlFilterConfig {
    fn default() -> Self {
        Self {
            domain: default_domain(),
            allowed_tlds: default_allowed_tlds(),
        }
    }
}

/// Accepts only `http(s)://[www.]<domain>.<tld>/...` URLs
#[derive(Debug)]
pub struct UrlFilter {
    pattern: Regex,
}

impl Default for UrlFilter {
    fn default() -> Self {
        Self::new(&UrlFilterConfig::default()).expect("Default URL pattern should be valid")
    }
}

impl UrlFilter {
    /// Create a new URL filter from configuration
    pub fn new(config: &UrlFilterConfig) -> Result<Self, regex::Error> {
        let tlds = config
            .allowed_tlds
            .iter()
            .map(|t| regex::escape(t))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&format!(
            r"^https?://(www\.)?{}\.({})/",
            regex::escape(&config.domain),
            tlds
        ))?;
        Ok(Self { pattern })
    }

    /// Whether `url` has the shape of a marketplace search URL
    pub fn is_valid(&self, url: &str) -> bool {
        self.pattern.is_match(url)
    }
}

/// Add the page-size parameter unless the URL already carries one.
///
/// Existing query parameters are left exactly as they were.
pub fn with_page_size(url: &Url, items_per_page: usize) -> Url {
    if url.query_pairs().any(|(k, _)| k == PAGE_SIZE_PARAM) {
        return url.clone();
    }
    let mut sized = url.clone();
    sized
        .query_pairs_mut()
        .append_pair(PAGE_SIZE_PARAM, &items_per_page.to_string());
    sized
}

use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Raw markup of a fetched search-results page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResultPage {
    /// URL the markup was fetched from
    pub url: String,

    /// Response body
    pub markup: String,
}

impl SearchResultPage {
    pub fn new(url: String, markup: String) -> Self {
        Self { url, markup }
    }
}

/// One product entry extracted from a search-results page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingRecord {
    /// Trimmed, non-empty product title
    pub title: String,

    /// Parsed price, `None` when the page carried no readable price
    pub price: Option<Decimal>,
}

impl ListingRecord {
    /// Create a new listing record
    pub fn new(title: String, price: Option<Decimal>) -> Self {
        Self { title, price }
    }
}

/// Token counts ordered by descending count, ties in first-seen order
pub type FrequencyRanking = IndexMap<String, usize>;

/// Descriptive statistics over the valid prices of a page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PriceStats {
    pub average: Decimal,
    pub median: Decimal,
    pub min: Decimal,
    pub max: Decimal,
}

impl PriceStats {
    /// All four fields zero, used when no valid price exists
    pub fn zero() -> Self {
        Self::default()
    }
}

/// Outcome of an analysis stage that never fails.
///
/// `Defaulted` carries the safe empty/zero/fallback value a stage falls back
/// to when its input was empty or it hit an internal fault. Both variants are
/// valid data; neither is an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Derived<T> {
    Computed(T),
    Defaulted(T),
}

impl<T> Derived<T> {
    /// Borrow the carried value regardless of how it was produced
    pub fn value(&self) -> &T {
        match self {
            Derived::Computed(v) | Derived::Defaulted(v) => v,
        }
    }

    /// Take the carried value regardless of how it was produced
    pub fn into_value(self) -> T {
        match self {
            Derived::Computed(v) | Derived::Defaulted(v) => v,
        }
    }

    pub fn is_defaulted(&self) -> bool {
        matches!(self, Derived::Defaulted(_))
    }
}

/// Everything one analysis run produces for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// URL that was fetched, including the injected page-size parameter
    pub url: Option<String>,

    /// Raw titles in document order
    pub titles: Vec<String>,

    /// Prices positionally aligned with `titles`
    pub prices: Vec<Option<Decimal>>,

    /// Keyword frequency ranking
    pub keywords: Derived<FrequencyRanking>,

    /// Suggested listing title
    pub suggested_title: Derived<String>,

    /// Price statistics over the valid prices
    pub price_stats: Derived<PriceStats>,
}

impl AnalysisReport {
    /// Split extracted records into the aligned title and price columns
    pub fn columns(records: &[ListingRecord]) -> (Vec<String>, Vec<Option<Decimal>>) {
        records
            .iter()
            .map(|r| (r.title.clone(), r.price))
            .unzip()
    }

    /// Number of listings the report covers
    pub fn item_count(&self) -> usize {
        self.titles.len()
    }
}

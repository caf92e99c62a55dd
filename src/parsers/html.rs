use crate::error::ConfigError;
use crate::parsers::ListingSchema;
use crate::parsers::price::parse_price;
use crate::results::ListingRecord;
use scraper::{ElementRef, Html, Selector};

/// Compiled form of a [`ListingSchema`]
#[derive(Debug, Clone)]
pub struct Extractor {
    item: Selector,
    title: Selector,
    price: Selector,
    placeholder_titles: Vec<String>,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(&ListingSchema::default()).expect("Default selectors should be valid")
    }
}

impl Extractor {
    /// Compile a schema's selectors
    pub fn new(schema: &ListingSchema) -> Result<Self, ConfigError> {
        Ok(Self {
            item: compile("item", &schema.item)?,
            title: compile("title", &schema.title)?,
            price: compile("price", &schema.price)?,
            placeholder_titles: schema
                .placeholder_titles
                .iter()
                .map(|t| t.trim().to_lowercase())
                .collect(),
        })
    }

    /// Extract at most `limit` listings from the page, in document order.
    ///
    /// Containers without a title, or whose title is a placeholder, are
    /// skipped. A missing or malformed price yields `price: None`.
    pub fn extract(&self, markup: &str, limit: usize) -> Vec<ListingRecord> {
        let doc = Html::parse_document(markup);

        let mut records = Vec::new();
        let mut matched = 0usize;
        for item in doc.select(&self.item) {
            matched += 1;
            if let Some(record) = self.extract_item(item) {
                records.push(record);
            }
        }

        ::log::debug!(
            "Extractor matched {} containers, kept {} listings",
            matched,
            records.len()
        );

        if records.len() > limit {
            ::log::debug!("Truncating {} listings to {}", records.len(), limit);
            records.truncate(limit);
        }
        records
    }

    fn extract_item(&self, item: ElementRef<'_>) -> Option<ListingRecord> {
        let Some(title_elem) = item.select(&self.title).next() else {
            ::log::trace!("Skipping container without a title");
            return None;
        };

        let title = element_text(title_elem);
        let title = title.trim();
        if title.is_empty() {
            ::log::trace!("Skipping container with an empty title");
            return None;
        }
        if self.is_placeholder(title) {
            ::log::debug!("Skipping placeholder tile: {}", title);
            return None;
        }

        let price = item
            .select(&self.price)
            .next()
            .and_then(|p| parse_price(&element_text(p)));
        if price.is_none() {
            ::log::debug!("No readable price for listing: {}", title);
        }

        Some(ListingRecord::new(title.to_string(), price))
    }

    fn is_placeholder(&self, title: &str) -> bool {
        let title = title.to_lowercase();
        self.placeholder_titles.iter().any(|p| *p == title)
    }
}

/// Extract listings with the default schema and page size
pub fn extract(markup: &str) -> Vec<ListingRecord> {
    Extractor::default().extract(markup, 60)
}

fn compile(field: &'static str, selector: &str) -> Result<Selector, ConfigError> {
    Selector::parse(selector).map_err(|_| ConfigError::Selector {
        field,
        selector: selector.to_string(),
    })
}

fn element_text(elem: ElementRef<'_>) -> String {
    elem.text().collect::<String>()
}

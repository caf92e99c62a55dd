pub mod html;
pub mod price;
pub mod text;

#[cfg(test)]
mod tests;

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

pub use html::Extractor;

/// Declarative description of where listing fields live in the page markup.
///
/// Each field is a CSS selector; `title` and `price` are evaluated relative
/// to each node matched by `item`. When the marketplace changes its markup,
/// this is the only thing that needs to change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingSchema {
    /// Selector for the container wrapping one listing
    #[serde(default = "default_item_selector")]
    pub item: String,

    /// Selector for the title inside a listing container
    #[serde(default = "default_title_selector")]
    pub title: String,

    /// Selector for the price inside a listing container
    #[serde(default = "default_price_selector")]
    pub price: String,

    /// Titles of promotional tiles that are not real listings
    #[serde(default = "default_placeholder_titles")]
    pub placeholder_titles: Vec<String>,
}

fn default_item_selector() -> String {
    ".s-item__wrapper".to_string()
}

fn default_title_selector() -> String {
    ".s-item__title".to_string()
}

fn default_price_selector() -> String {
    ".s-item__price".to_string()
}

fn default_placeholder_titles() -> Vec<String> {
    vec!["Shop on eBay".to_string()]
}

impl Default for ListingSchema {
    fn default() -> Self {
        Self {
            item: default_item_selector(),
            title: default_title_selector(),
            price: default_price_selector(),
            placeholder_titles: default_placeholder_titles(),
        }
    }
}

impl ListingSchema {
    /// Compile the selectors into an extractor, rejecting malformed ones
    pub fn compile(&self) -> Result<Extractor, ConfigError> {
        Extractor::new(self)
    }
}

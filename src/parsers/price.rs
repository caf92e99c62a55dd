use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::LazyLock;

/// Digits with optional thousands separators followed by exactly two cents digits
static PRICE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9][0-9,]*\.[0-9]{2}").expect("hardcoded regex pattern is valid"));

/// Parse the first price found in a piece of text.
///
/// Returns `None` when the text holds no `1,234.56`-shaped amount. For ranges
/// such as `$10.00 to $20.00` the lower bound wins.
pub fn parse_price(text: &str) -> Option<Decimal> {
    let found = PRICE_PATTERN.find(text)?;
    let digits = found.as_str().replace(',', "");
    match Decimal::from_str(&digits) {
        Ok(price) => Some(price),
        Err(e) => {
            ::log::debug!("Unparseable price {:?}: {}", found.as_str(), e);
            None
        }
    }
}

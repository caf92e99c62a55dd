use crate::analysis::guarded;
use crate::results::{Derived, FrequencyRanking};
use crate::utils::{char_len, title_case};

/// Returned when there are no keywords to build from
pub const FALLBACK_TITLE: &str = "Could not generate title suggestion";

/// Number of top-ranked keywords considered
const TOP_KEYWORDS: usize = 10;

/// Unused characters required before a suffix is considered
const SUFFIX_HEADROOM: usize = 15;

const SUFFIXES: &[&str] = &[" - New", " - Lot", " - Sale"];

const SEPARATOR: &str = ", ";

/// Compose a suggested listing title from the top of a frequency ranking.
///
/// Keywords are title-cased and appended in ranking order, joined by `", "`,
/// until the next one would push the title past `max_length` characters.
/// If at least 15 characters remain unused, the first suffix that fits is
/// appended. An empty ranking yields [`FALLBACK_TITLE`]; otherwise the
/// result never exceeds `max_length`, even when no keyword fits.
pub fn suggest_title(ranking: &FrequencyRanking, max_length: usize) -> Derived<String> {
    guarded("title suggestion", || FALLBACK_TITLE.to_string(), || {
        if ranking.is_empty() {
            ::log::debug!("No keywords to build a title from");
            return Derived::Defaulted(FALLBACK_TITLE.to_string());
        }

        let mut title = String::new();
        let mut length = 0usize;
        let mut used = 0usize;

        for keyword in ranking.keys().take(TOP_KEYWORDS) {
            let word = title_case(keyword);
            let sep = if used == 0 { "" } else { SEPARATOR };
            let addition = char_len(sep) + char_len(&word);
            if length + addition > max_length {
                break;
            }
            title.push_str(sep);
            title.push_str(&word);
            length += addition;
            used += 1;
        }

        if used == 0 {
            ::log::debug!("No keywords fit into {} characters", max_length);
        }

        if length + SUFFIX_HEADROOM <= max_length {
            if let Some(suffix) = SUFFIXES
                .iter()
                .find(|s| length + char_len(s) <= max_length)
            {
                title.push_str(suffix);
            }
        }

        Derived::Computed(title)
    })
}

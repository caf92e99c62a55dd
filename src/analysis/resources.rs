//! Language resources shared by every analysis run.
//!
//! The bundled English stopword list is built once per process behind a
//! `OnceLock`. A stopword file named in the configuration replaces the
//! bundled list for that run only; if it cannot be read, the small core list
//! below is used instead.

use std::borrow::Cow;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

const BUNDLED_ENGLISH: &str = include_str!("english_stopwords.txt");

/// Minimal English list used when no fuller list can be loaded
pub const CORE_STOPWORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "he", "in", "is", "it",
    "its", "of", "on", "that", "the", "to", "was", "were", "will", "with",
];

/// Filler terms common in marketplace titles
pub const MARKETPLACE_STOPWORDS: &[&str] = &[
    "new", "brand", "lot", "free", "shipping", "sale", "sealed", "uk", "us", "box", "set",
    "edition", "complete", "original",
];

static ENGLISH: OnceLock<StopwordSet> = OnceLock::new();

/// Set of lower-case tokens excluded from keyword analysis
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Build a set from a word list, lower-casing and trimming each entry
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Add the marketplace filler terms
    pub fn with_marketplace_terms(mut self) -> Self {
        self.words
            .extend(MARKETPLACE_STOPWORDS.iter().map(|w| w.to_string()));
        self
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn core() -> Self {
        Self::from_words(CORE_STOPWORDS.iter())
    }
}

/// Build the process-wide English stopword set if it is not built yet.
///
/// Safe to call any number of times; every call after the first returns the
/// same set.
pub fn ensure_initialized() -> &'static StopwordSet {
    ENGLISH.get_or_init(|| {
        let english = StopwordSet::from_words(BUNDLED_ENGLISH.lines());
        let english = if english.is_empty() {
            ::log::warn!("Bundled stopword list is empty, using core list");
            StopwordSet::core()
        } else {
            english
        };
        let set = english.with_marketplace_terms();
        ::log::debug!("Initialized {} stopwords", set.len());
        set
    })
}

/// Stopwords for one run: the bundled set, or the contents of `path`
pub fn stopwords_for(path: Option<&Path>) -> Cow<'static, StopwordSet> {
    let Some(path) = path else {
        return Cow::Borrowed(ensure_initialized());
    };

    match fs::read_to_string(path) {
        Ok(contents) => {
            let set = StopwordSet::from_words(contents.lines()).with_marketplace_terms();
            ::log::debug!("Loaded {} stopwords from {}", set.len(), path.display());
            Cow::Owned(set)
        }
        Err(e) => {
            ::log::warn!(
                "Could not load stopwords from {}, using core list: {}",
                path.display(),
                e
            );
            Cow::Owned(StopwordSet::core().with_marketplace_terms())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_initialization_is_idempotent() {
        let first = ensure_initialized();
        let second = ensure_initialized();
        assert!(std::ptr::eq(first, second));
        assert!(first.contains("the"));
        assert!(first.contains("shipping"));
        assert!(first.contains("uk"));
        assert!(!first.contains("anime"));
    }

    #[test]
    fn test_bundled_list_is_full_english_list() {
        let set = ensure_initialized();
        assert!(set.contains("ourselves"));
        assert!(set.contains("wouldn"));
        assert!(set.len() > CORE_STOPWORDS.len() + MARKETPLACE_STOPWORDS.len());
    }

    #[test]
    fn test_custom_file_replaces_english_list() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Anime\n  dvd  \n").unwrap();

        let set = stopwords_for(Some(file.path()));
        assert!(set.contains("anime"));
        assert!(set.contains("dvd"));
        assert!(set.contains("sealed"));
        assert!(!set.contains("ourselves"));
    }

    #[test]
    fn test_unreadable_file_falls_back_to_core() {
        let dir = tempfile::tempdir().unwrap();
        let set = stopwords_for(Some(&dir.path().join("missing.txt")));
        assert!(set.contains("the"));
        assert!(set.contains("box"));
        assert!(!set.contains("ourselves"));
    }
}

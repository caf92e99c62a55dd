use crate::analysis::guarded;
use crate::analysis::resources::StopwordSet;
use crate::config::WordSplitter;
use crate::results::Derived;

/// Separator used when joining titles into one text blob
const TITLE_SEPARATOR: &str = " ";

/// Tokens of this many characters or fewer are dropped
const MAX_DROPPED_TOKEN_CHARS: usize = 2;

/// Options for turning titles into keyword tokens
#[derive(Debug, Clone, Copy)]
pub struct TokenizerOptions<'a> {
    /// How the normalized text is split into words
    pub splitter: WordSplitter,
    /// Tokens to discard
    pub stopwords: &'a StopwordSet,
}

impl<'a> TokenizerOptions<'a> {
    pub fn new(splitter: WordSplitter, stopwords: &'a StopwordSet) -> Self {
        Self {
            splitter,
            stopwords,
        }
    }
}

/// Turn listing titles into a filtered stream of keyword tokens.
///
/// The titles are joined into one blob, so counts are corpus-wide. The text
/// is lower-cased and stripped of ASCII punctuation, split into words, and
/// every token that is not purely alphabetic, is two characters or shorter,
/// or is a stopword is dropped.
pub fn tokenize<S: AsRef<str>>(titles: &[S], options: &TokenizerOptions<'_>) -> Derived<Vec<String>> {
    guarded("text preprocessing", Vec::new, || {
        let text = join_titles(titles);
        let normalized = normalize(&text);
        let tokens = split_words(&normalized, options.splitter)
            .into_iter()
            .filter(|t| keep_token(t, options.stopwords))
            .map(str::to_string)
            .collect();
        Derived::Computed(tokens)
    })
}

/// Join titles into a single text blob
pub fn join_titles<S: AsRef<str>>(titles: &[S]) -> String {
    titles
        .iter()
        .map(|t| t.as_ref())
        .collect::<Vec<_>>()
        .join(TITLE_SEPARATOR)
}

/// Lower-case the text and remove ASCII punctuation
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect()
}

/// Split normalized text into word candidates
pub fn split_words(text: &str, splitter: WordSplitter) -> Vec<&str> {
    match splitter {
        WordSplitter::Unicode => text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
            .collect(),
        WordSplitter::Whitespace => text.split_whitespace().collect(),
    }
}

/// Whether a token survives filtering
pub fn keep_token(token: &str, stopwords: &StopwordSet) -> bool {
    token.chars().all(char::is_alphabetic)
        && token.chars().count() > MAX_DROPPED_TOKEN_CHARS
        && !stopwords.contains(token)
}

use crate::analysis::guarded;
use crate::results::{Derived, FrequencyRanking};

/// Count token occurrences and rank them by descending count.
///
/// Tokens with equal counts keep the order in which they first appeared.
pub fn aggregate<S: AsRef<str>>(tokens: &[S]) -> Derived<FrequencyRanking> {
    guarded("keyword analysis", FrequencyRanking::new, || {
        let mut counts = FrequencyRanking::new();
        for token in tokens {
            *counts.entry(token.as_ref().to_string()).or_insert(0) += 1;
        }

        // Stable sort over insertion order
        counts.sort_by(|_, a, _, b| b.cmp(a));
        Derived::Computed(counts)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_by_descending_count() {
        let ranking = aggregate(&["dvd", "anime", "anime", "bluray", "anime", "dvd"]).into_value();
        let ordered: Vec<(&str, usize)> = ranking.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        assert_eq!(ordered, vec![("anime", 3), ("dvd", 2), ("bluray", 1)]);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let ranking = aggregate(&["zeta", "alpha", "mid", "alpha", "zeta", "mid"]).into_value();
        let keys: Vec<&str> = ranking.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_empty_tokens() {
        let ranking = aggregate::<String>(&[]);
        assert_eq!(ranking, Derived::Computed(FrequencyRanking::new()));
    }
}

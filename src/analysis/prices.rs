use crate::analysis::guarded;
use crate::results::{Derived, PriceStats};
use crate::utils::round_cents;
use rust_decimal::Decimal;

/// Summarize the prices that are present; absent ones are ignored.
///
/// Every field is rounded half-to-even to two decimals. With no valid price
/// the result is all zeros.
pub fn summarize(prices: &[Option<Decimal>]) -> Derived<PriceStats> {
    guarded("price statistics", PriceStats::zero, || {
        let mut valid: Vec<Decimal> = prices.iter().flatten().copied().collect();
        if valid.is_empty() {
            return Derived::Defaulted(PriceStats::zero());
        }
        valid.sort();

        let count = Decimal::from(valid.len());
        let sum: Decimal = valid.iter().sum();
        let mid = valid.len() / 2;
        let median = if valid.len() % 2 == 0 {
            (valid[mid - 1] + valid[mid]) / Decimal::TWO
        } else {
            valid[mid]
        };

        Derived::Computed(PriceStats {
            average: round_cents(sum / count),
            median: round_cents(median),
            min: round_cents(valid[0]),
            max: round_cents(valid[valid.len() - 1]),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(cents: i64) -> Option<Decimal> {
        Some(Decimal::new(cents, 2))
    }

    #[test]
    fn test_empty_is_all_zero() {
        let stats = summarize(&[]);
        assert_eq!(stats, Derived::Defaulted(PriceStats::zero()));
        assert_eq!(stats.value().average, Decimal::ZERO);
    }

    #[test]
    fn test_all_absent_is_all_zero() {
        assert_eq!(summarize(&[None, None]).into_value(), PriceStats::zero());
    }

    #[test]
    fn test_odd_count() {
        let stats = summarize(&[d(1000), d(2000), d(3000)]).into_value();
        assert_eq!(stats.average, Decimal::new(2000, 2));
        assert_eq!(stats.median, Decimal::new(2000, 2));
        assert_eq!(stats.min, Decimal::new(1000, 2));
        assert_eq!(stats.max, Decimal::new(3000, 2));
    }

    #[test]
    fn test_even_count_median_averages_middle() {
        let stats = summarize(&[d(4000), d(1000), None, d(2000), d(3000)]).into_value();
        assert_eq!(stats.median, Decimal::new(2500, 2));
        assert_eq!(stats.average, Decimal::new(2500, 2));
        assert_eq!(stats.min, Decimal::new(1000, 2));
        assert_eq!(stats.max, Decimal::new(4000, 2));
    }

    #[test]
    fn test_rounding_is_half_to_even() {
        // mean of 0.01 and 0.02 is 0.015 -> 0.02; mean of 0.02 and 0.03 is 0.025 -> 0.02
        let stats = summarize(&[d(1), d(2)]).into_value();
        assert_eq!(stats.average, Decimal::new(2, 2));
        let stats = summarize(&[d(2), d(3)]).into_value();
        assert_eq!(stats.average, Decimal::new(2, 2));
        assert_eq!(stats.median, Decimal::new(2, 2));
    }

    #[test]
    fn test_absent_prices_do_not_count_as_zero() {
        let stats = summarize(&[d(999), None]).into_value();
        assert_eq!(stats.min, Decimal::new(999, 2));
        assert_eq!(stats.average, Decimal::new(999, 2));
    }
}

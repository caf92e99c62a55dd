use rust_decimal::{Decimal, RoundingStrategy};

/// Round to two fractional digits using round-half-to-even
pub fn round_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
}

/// Upper-case the first letter of every alphabetic run and lower-case the rest
pub fn title_case(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut at_word_start = true;
    for c in word.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

/// Length in characters, which is what title budgets are measured in
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

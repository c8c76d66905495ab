use crate::types::{Indicator, Severity, Signal};

static COMMON_BIGRAMS: &[(&str, &str)] = &[
    ("it", "is"),
    ("in", "the"),
    ("of", "the"),
    ("to", "the"),
    ("for", "the"),
    ("on", "the"),
    ("at", "the"),
    ("by", "the"),
    ("from", "the"),
];

const PREDICTABLE_RATE: f64 = 0.15;

/// Closed-form stand-in for perplexity: the share of adjacent token pairs that
/// are stock function-word bigrams.
pub fn perplexity(text: &str) -> Signal {
    let mut signal = Signal::default();

    let lower = text.to_lowercase();
    let tokens: Vec<&str> = lower.split_whitespace().collect();
    if tokens.len() < 2 {
        return signal;
    }

    let total = tokens.len() - 1;
    let common = tokens
        .windows(2)
        .filter(|pair| COMMON_BIGRAMS.contains(&(pair[0], pair[1])))
        .count();
    let rate = common as f64 / total as f64;

    if rate > PREDICTABLE_RATE {
        signal.push(
            12,
            Indicator::ai(
                Severity::Medium,
                format!(
                    "High predictability ({:.1}% common bigrams) - low perplexity",
                    rate * 100.0
                ),
            ),
        );
    }

    signal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dense_function_bigrams_score() {
        let s = perplexity("it is in the box of the year");
        assert_eq!(s.score, 12);
        assert!(s.indicators[0].description.contains("common bigrams"));
    }

    #[test]
    fn sparse_function_bigrams_do_not_score() {
        assert_eq!(perplexity("colorless green ideas sleep furiously in the night sky today").score, 0);
    }

    #[test]
    fn single_token_is_neutral() {
        assert_eq!(perplexity("word").score, 0);
    }
}

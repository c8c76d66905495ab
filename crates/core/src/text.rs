use once_cell::sync::Lazy;
use regex::Regex;

static SENTENCE_SPLIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());
static PARAGRAPH_SPLIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\n+").unwrap());

/// Minimum trimmed length (in characters) for a fragment to count as a sentence.
pub const MIN_SENTENCE_CHARS: usize = 10;

pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Fragments between runs of `.`, `!` and `?` whose trimmed length exceeds
/// [`MIN_SENTENCE_CHARS`]. Fragments are returned untrimmed.
pub fn sentences(text: &str) -> Vec<&str> {
    SENTENCE_SPLIT_RE
        .split(text)
        .filter(|s| char_len(s.trim()) > MIN_SENTENCE_CHARS)
        .collect()
}

/// Blank-line separated blocks that contain something other than whitespace.
pub fn paragraphs(text: &str) -> Vec<&str> {
    PARAGRAPH_SPLIT_RE
        .split(text)
        .filter(|p| !p.trim().is_empty())
        .collect()
}

/// Whitespace word count, never below one so it can be used as a divisor.
pub fn word_count(s: &str) -> usize {
    s.split_whitespace().count().max(1)
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance.
pub fn variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentences_drop_short_fragments() {
        let s = sentences("Hi. This is a longer sentence! Ok? Another long sentence here...");
        assert_eq!(s, vec![" This is a longer sentence", " Another long sentence here"]);
    }

    #[test]
    fn paragraphs_skip_blank_blocks() {
        let p = paragraphs("one\n\n\n\ntwo\n\n   \n\nthree");
        assert_eq!(p, vec!["one", "two", "three"]);
    }

    #[test]
    fn variance_of_constant_series_is_zero() {
        assert_eq!(variance(&[3.0, 3.0, 3.0]), 0.0);
        assert_eq!(variance(&[]), 0.0);
        assert!((variance(&[1.0, 3.0]) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn word_count_has_floor_of_one() {
        assert_eq!(word_count(""), 1);
        assert_eq!(word_count("  two   words "), 2);
    }
}

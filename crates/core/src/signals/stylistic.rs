use once_cell::sync::Lazy;
use regex::Regex;

use crate::text::{char_len, word_count};
use crate::types::{Indicator, Severity, Signal};

static CONTRACTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:don't|can't|won't|isn't|aren't|wasn't|weren't|haven't|hasn't|hadn't|wouldn't|shouldn't|couldn't|i'm|you're|he's|she's|it's|we're|they're|i've|you've|we've|they've)\b",
    )
    .unwrap()
});

static EMOJI_RANGES: &[(char, char)] = &[
    ('\u{1F600}', '\u{1F64F}'),
    ('\u{1F300}', '\u{1F5FF}'),
    ('\u{1F680}', '\u{1F6FF}'),
    ('\u{1F1E0}', '\u{1F1FF}'),
    ('\u{2600}', '\u{26FF}'),
    ('\u{2700}', '\u{27BF}'),
];

const HIGH_CONTRACTION_RATE: f64 = 0.03;
const FORMAL_MIN_CHARS: usize = 200;
const EXCLAMATION_MAX: usize = 2;
const ELLIPSIS_MAX: usize = 1;

pub fn is_emoji(c: char) -> bool {
    EMOJI_RANGES.iter().any(|&(lo, hi)| (lo..=hi).contains(&c))
}

pub fn stylistic(text: &str) -> Signal {
    let mut signal = Signal::default();

    let contractions = CONTRACTION_RE.find_iter(text).count();
    let rate = contractions as f64 / word_count(text) as f64;

    if rate > HIGH_CONTRACTION_RATE {
        signal.push(
            -15,
            Indicator::human(
                Severity::Medium,
                format!(
                    "High contraction usage ({:.1}%) - typical of casual human writing",
                    rate * 100.0
                ),
            ),
        );
    } else if char_len(text) > FORMAL_MIN_CHARS && contractions == 0 {
        signal.push(
            15,
            Indicator::ai(
                Severity::Medium,
                "No contractions in lengthy text - AI tends to write formally",
            ),
        );
    }

    let exclamations = text.matches('!').count();
    let questions = text.matches('?').count();
    let ellipses = text.matches("...").count();

    if exclamations > EXCLAMATION_MAX || ellipses > ELLIPSIS_MAX {
        signal.push(
            -10,
            Indicator::human(
                Severity::Low,
                format!(
                    "Varied punctuation usage ({exclamations} exclamations, {questions} questions, {ellipses} ellipses) - human characteristic"
                ),
            ),
        );
    }

    let emojis = text.chars().filter(|c| is_emoji(*c)).count();
    if emojis > 0 {
        signal.push(
            -20,
            Indicator::human(
                Severity::High,
                format!("Contains emojis ({emojis}) - strong human indicator"),
            ),
        );
    }

    signal
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::IndicatorKind;

    #[test]
    fn casual_contractions_read_as_human() {
        let s = stylistic("I don't think that's right, I can't believe it, you're wrong.");
        assert_eq!(s.score, -15);
        assert_eq!(s.indicators.len(), 1);
        assert_eq!(s.indicators[0].kind, IndicatorKind::Human);
        assert_eq!(s.indicators[0].severity, Severity::Medium);
    }

    #[test]
    fn long_text_without_contractions_reads_as_ai() {
        let text = "The committee reviewed the proposal in detail and approved the budget. ".repeat(4);
        let s = stylistic(&text);
        assert_eq!(s.score, 15);
        assert_eq!(s.indicators[0].kind, IndicatorKind::Ai);
    }

    #[test]
    fn punctuation_and_emoji_subtract() {
        let s = stylistic("Wow! Great! Amazing! 🎉");
        assert_eq!(s.score, -30);
        assert_eq!(s.indicators.len(), 2);
        assert_eq!(s.indicators[1].severity, Severity::High);
    }

    #[test]
    fn two_ellipses_count_as_varied_punctuation() {
        assert_eq!(stylistic("well... maybe... ok").score, -10);
    }

    #[test]
    fn emoji_ranges_cover_symbols() {
        assert!(is_emoji('☀'));
        assert!(is_emoji('🚀'));
        assert!(!is_emoji('a'));
    }
}

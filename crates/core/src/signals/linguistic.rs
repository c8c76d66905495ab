use crate::types::{Indicator, Severity, Signal};

static HIGH_TIER: &[&str] = &[
    "delve into",
    "it is important to note",
    "in the realm of",
    "multifaceted",
    "paradigm shift",
    "holistic approach",
];

static MEDIUM_TIER: &[&str] = &[
    "furthermore",
    "moreover",
    "in conclusion",
    "it should be noted",
    "comprehensive",
    "robust",
];

// Counted for completeness, never scored.
static LOW_TIER: &[&str] = &["however", "therefore", "additionally", "consequently"];

static HUMAN_MARKERS: &[&str] = &[
    "i think",
    "i feel",
    "in my opinion",
    "personally",
    "i remember",
    "when i was",
];

const HIGH_WEIGHT: i32 = 20;
const MEDIUM_WEIGHT: i32 = 10;
const HUMAN_WEIGHT: i32 = -15;
const MEDIUM_INDICATOR_MIN: usize = 3;

/// Plain case-insensitive containment. Not word-bounded: "robust" also
/// matches inside "robustness".
fn count_contained(haystack: &str, phrases: &[&str]) -> usize {
    phrases.iter().filter(|p| haystack.contains(*p)).count()
}

pub fn linguistic(text: &str) -> Signal {
    let lower = text.to_lowercase();
    let mut signal = Signal::default();

    let found_high = count_contained(&lower, HIGH_TIER);
    let found_medium = count_contained(&lower, MEDIUM_TIER);
    let found_low = count_contained(&lower, LOW_TIER);
    let found_human = count_contained(&lower, HUMAN_MARKERS);

    tracing::trace!(found_high, found_medium, found_low, found_human, "linguistic tiers");

    signal.score += HIGH_WEIGHT * found_high as i32 + MEDIUM_WEIGHT * found_medium as i32;

    if found_high > 0 {
        signal.indicators.push(Indicator::ai(
            Severity::High,
            format!(
                "Contains {found_high} high-confidence AI phrases (e.g., \"delve into\", \"paradigm shift\")"
            ),
        ));
    }

    if found_medium >= MEDIUM_INDICATOR_MIN {
        signal.indicators.push(Indicator::ai(
            Severity::Medium,
            format!("Frequent use of formal transitional phrases ({found_medium} instances)"),
        ));
    }

    if found_human > 0 {
        signal.push(
            HUMAN_WEIGHT * found_human as i32,
            Indicator::human(
                Severity::High,
                format!("Contains personal expressions and opinions ({found_human} instances)"),
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
    fn high_tier_phrase_scores_and_flags() {
        let s = linguistic("This is a Paradigm Shift for everyone.");
        assert_eq!(s.score, 20);
        assert_eq!(s.indicators.len(), 1);
        assert_eq!(s.indicators[0].kind, IndicatorKind::Ai);
        assert_eq!(s.indicators[0].severity, Severity::High);
    }

    #[test]
    fn medium_tier_needs_three_matches_to_flag() {
        let two = linguistic("Moreover, the plan is robust.");
        assert_eq!(two.score, 20);
        assert!(two.indicators.is_empty());

        let three = linguistic("Moreover, the plan is robust and comprehensive.");
        assert_eq!(three.score, 30);
        assert_eq!(three.indicators[0].severity, Severity::Medium);
    }

    #[test]
    fn low_tier_does_not_score() {
        assert_eq!(linguistic("However, therefore, additionally.").score, 0);
    }

    #[test]
    fn human_markers_subtract_per_match() {
        let s = linguistic("Personally, I think so. When I was young I feel it was fine.");
        assert_eq!(s.score, -60);
        assert_eq!(s.indicators.len(), 1);
        assert_eq!(s.indicators[0].kind, IndicatorKind::Human);
    }

    #[test]
    fn matching_is_substring_not_word_bounded() {
        assert_eq!(linguistic("robustness").score, 10);
    }
}

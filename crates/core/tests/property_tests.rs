use proptest::prelude::*;

use authorship_core::verdict::{classify, risk_level, VERDICT_TABLE};
use authorship_core::{analyze, RiskLevel};

fn bucket_bounds(risk: RiskLevel) -> (u32, u32) {
    let lo = VERDICT_TABLE
        .iter()
        .filter(|(_, _, r)| *r == risk)
        .map(|(min, _, _)| (*min).max(0) as u32)
        .min()
        .unwrap_or(0);
    let hi = VERDICT_TABLE
        .iter()
        .position(|(_, _, r)| *r == risk)
        .and_then(|i| i.checked_sub(1))
        .map(|i| VERDICT_TABLE[i].0 as u32 - 1)
        .unwrap_or(100);
    (lo, hi)
}

proptest! {
    #[test]
    fn scores_stay_in_range(text in "\\PC{1,400}") {
        prop_assume!(!text.trim().is_empty());
        let r = analyze(&text).unwrap();
        prop_assert!(r.ai_probability <= 100);
        prop_assert!((30..=95).contains(&r.confidence), "confidence={}", r.confidence);
    }

    #[test]
    fn sentence_shaped_text_stays_in_range(
        words in prop::collection::vec("[a-zA-Z']{1,12}", 1..120),
        stops in prop::collection::vec(prop::sample::select(vec![" ", ". ", ", ", "! ", "? ", "\n\n"]), 120),
    ) {
        let text: String = words
            .iter()
            .zip(stops.iter().cycle())
            .map(|(w, s)| format!("{w}{s}"))
            .collect();
        let r = analyze(&text).unwrap();
        prop_assert!(r.ai_probability <= 100);
        prop_assert!((30..=95).contains(&r.confidence));
        prop_assert_eq!(r.risk_level, risk_level(r.ai_probability));
    }

    #[test]
    fn risk_level_is_monotone(a in 0u32..=100, b in 0u32..=100) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(risk_level(lo) <= risk_level(hi));
    }

    #[test]
    fn risk_level_matches_its_bucket(p in 0u32..=100, confidence in 30u32..=95) {
        let (_, risk) = classify(p, confidence);
        let (lo, hi) = bucket_bounds(risk);
        prop_assert!(lo <= p && p <= hi, "p={} risk={:?} bounds=({}, {})", p, risk, lo, hi);
    }

    #[test]
    fn analysis_is_deterministic(text in "[a-zA-Z .,!?'\\n]{1,300}") {
        prop_assume!(!text.trim().is_empty());
        let a = analyze(&text).unwrap();
        let mut b = analyze(&text).unwrap();
        b.timestamp = a.timestamp;
        prop_assert_eq!(a, b);
    }
}

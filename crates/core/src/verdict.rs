use crate::text::char_len;
use crate::types::{Indicator, MetricsSet, RiskLevel, Severity};

pub const BASELINE_PROBABILITY: i32 = 50;

/// Ordered verdict buckets, evaluated highest bound first. The last entry
/// catches everything below the previous bound.
pub static VERDICT_TABLE: &[(i32, &str, RiskLevel)] = &[
    (85, "Highly Likely AI-Generated", RiskLevel::Critical),
    (70, "Likely AI-Generated", RiskLevel::High),
    (55, "Possibly AI-Generated", RiskLevel::Medium),
    (40, "Uncertain - Mixed Signals", RiskLevel::Low),
    (25, "Possibly Human-Written", RiskLevel::Low),
    (15, "Likely Human-Written", RiskLevel::Minimal),
    (i32::MIN, "Highly Likely Human-Written", RiskLevel::Minimal),
];

pub const LOW_CONFIDENCE_BELOW: u32 = 50;
const LOW_CONFIDENCE_SUFFIX: &str = " (Low Confidence)";

pub const MIN_CONFIDENCE: i32 = 30;
pub const MAX_CONFIDENCE: i32 = 95;

/// (minimum exclusive text length, bonus), checked in order.
static LENGTH_BONUS: &[(usize, i32)] = &[(500, 15), (200, 10)];
const SHORT_TEXT_BELOW: usize = 100;
const SHORT_TEXT_PENALTY: i32 = -20;
const PER_INDICATOR: i32 = 3;
const INDICATOR_BONUS_CAP: i32 = 30;
const PER_HIGH_SEVERITY: i32 = 5;

pub fn ai_probability(metrics: &MetricsSet) -> u32 {
    (BASELINE_PROBABILITY + metrics.raw_score()).clamp(0, 100) as u32
}

fn length_bonus(text_len: usize) -> i32 {
    LENGTH_BONUS
        .iter()
        .find(|(min, _)| text_len > *min)
        .map(|(_, bonus)| *bonus)
        .unwrap_or(if text_len < SHORT_TEXT_BELOW {
            SHORT_TEXT_PENALTY
        } else {
            0
        })
}

pub fn confidence(indicators: &[Indicator], text: &str) -> u32 {
    let volume = (indicators.len() as i32)
        .saturating_mul(PER_INDICATOR)
        .min(INDICATOR_BONUS_CAP);
    let high = indicators
        .iter()
        .filter(|i| i.severity == Severity::High)
        .count() as i32;

    let raw = 50 + volume + length_bonus(char_len(text)) + high.saturating_mul(PER_HIGH_SEVERITY);
    raw.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE) as u32
}

pub fn risk_level(ai_probability: u32) -> RiskLevel {
    bucket(ai_probability).2
}

fn bucket(ai_probability: u32) -> &'static (i32, &'static str, RiskLevel) {
    let p = ai_probability as i32;
    VERDICT_TABLE
        .iter()
        .find(|(min, _, _)| p >= *min)
        .unwrap_or(&VERDICT_TABLE[VERDICT_TABLE.len() - 1])
}

pub fn classify(ai_probability: u32, confidence: u32) -> (String, RiskLevel) {
    let (_, label, risk) = *bucket(ai_probability);
    let mut verdict = label.to_string();
    if confidence < LOW_CONFIDENCE_BELOW {
        verdict.push_str(LOW_CONFIDENCE_SUFFIX);
    }
    (verdict, risk)
}

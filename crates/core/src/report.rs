use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    fingerprint::FingerprintResult,
    text::{char_len, sentences},
    types::{Indicator, IndicatorKind, MetricsSet, RiskLevel, Severity},
};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SentenceStats {
    pub total: usize,
    pub avg_length: usize,
    pub shortest: usize,
    pub longest: usize,
}

impl SentenceStats {
    /// Lengths are measured on the untrimmed sentence fragments.
    pub fn collect(text: &str) -> Self {
        let lengths: Vec<usize> = sentences(text).iter().map(|s| char_len(s)).collect();
        if lengths.is_empty() {
            return Self::default();
        }
        let sum: usize = lengths.iter().sum();
        Self {
            total: lengths.len(),
            avg_length: (sum as f64 / lengths.len() as f64).round() as usize,
            shortest: lengths.iter().copied().min().unwrap_or(0),
            longest: lengths.iter().copied().max().unwrap_or(0),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DetectionResult {
    pub ai_probability: u32,
    pub confidence: u32,
    pub verdict: String,
    pub risk_level: RiskLevel,
    pub indicators: Vec<Indicator>,
    pub metrics: MetricsSet,
    pub fingerprint: FingerprintResult,
    pub sentence_stats: SentenceStats,
    pub explanation: String,
    pub timestamp: DateTime<Utc>,
}

const AI_LEAD_IN: &str = "The text exhibits strong characteristics of AI-generated content";
const HUMAN_LEAD_IN: &str = "The text shows clear signs of human authorship";
const MIXED: &str = "The text contains mixed signals making definitive classification difficult. ";
const CLOSING: &str = "This advanced analysis uses linguistic patterns, stylistic markers, semantic analysis, structural patterns, perplexity simulation, and burstiness metrics.";

pub const STRONG_AI_AT: u32 = 70;
pub const STRONG_HUMAN_AT: u32 = 30;

fn lead_in(out: &mut String, lead: &str, indicators: &[Indicator], kind: IndicatorKind) {
    out.push_str(lead);
    match indicators
        .iter()
        .find(|i| i.kind == kind && i.severity == Severity::High)
    {
        Some(top) => {
            out.push_str(" including ");
            out.push_str(&top.description.to_lowercase());
            out.push_str(". ");
        }
        None => out.push_str(". "),
    }
}

pub fn explain(ai_probability: u32, confidence: u32, indicators: &[Indicator]) -> String {
    let ai = indicators.iter().filter(|i| i.kind == IndicatorKind::Ai).count();
    let human = indicators
        .iter()
        .filter(|i| i.kind == IndicatorKind::Human)
        .count();

    let mut s = format!(
        "Analysis completed with {confidence}% confidence. Found {ai} AI indicators and {human} human indicators. "
    );

    if ai_probability >= STRONG_AI_AT {
        lead_in(&mut s, AI_LEAD_IN, indicators, IndicatorKind::Ai);
    } else if ai_probability <= STRONG_HUMAN_AT {
        lead_in(&mut s, HUMAN_LEAD_IN, indicators, IndicatorKind::Human);
    } else {
        s.push_str(MIXED);
    }

    s.push_str(CLOSING);
    s
}

impl DetectionResult {
    pub fn to_markdown(&self) -> String {
        let mut s = String::new();
        s.push_str("# authorship report\n\n");
        s.push_str(&format!("- verdict: **{}**\n", self.verdict));
        s.push_str(&format!("- ai_probability: `{}`\n", self.ai_probability));
        s.push_str(&format!("- confidence: `{}`\n", self.confidence));
        s.push_str(&format!("- risk_level: `{}`\n", self.risk_level.as_str()));
        s.push_str(&format!(
            "- timestamp: `{}`\n",
            self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
        ));
        s.push('\n');

        s.push_str("## Metrics\n\n");
        for (name, value) in self.metrics.entries() {
            s.push_str(&format!("- {name}: `{value:+}`\n"));
        }
        s.push('\n');

        s.push_str("## Model fingerprint\n\n");
        match self.fingerprint.detected_model {
            Some(model) => {
                s.push_str(&format!("- detected: `{model}`\n"));
                s.push_str(&format!("- confidence: `{}`\n", self.fingerprint.confidence));
                if !self.fingerprint.alternatives.is_empty() {
                    s.push_str("- alternatives:\n");
                    for alt in &self.fingerprint.alternatives {
                        s.push_str(&format!("  - {} ({}%)\n", alt.model, alt.probability));
                    }
                }
            }
            None => s.push_str("- detected: (none)\n"),
        }
        s.push_str(&format!("- {}\n", self.fingerprint.explanation));
        s.push('\n');

        s.push_str("## Indicators\n\n");
        if self.indicators.is_empty() {
            s.push_str("- (none)\n");
        } else {
            for i in &self.indicators {
                s.push_str(&format!(
                    "- `{:?}/{:?}` {}\n",
                    i.kind, i.severity, i.description
                ));
            }
        }
        s.push('\n');

        s.push_str("## Sentences\n\n");
        s.push_str(&format!("- total: `{}`\n", self.sentence_stats.total));
        s.push_str(&format!("- avg_length: `{}`\n", self.sentence_stats.avg_length));
        s.push_str(&format!("- shortest: `{}`\n", self.sentence_stats.shortest));
        s.push_str(&format!("- longest: `{}`\n", self.sentence_stats.longest));
        s.push('\n');

        s.push_str("## Explanation\n\n");
        s.push_str(&self.explanation);
        s.push('\n');

        s
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorKind {
    Ai,
    Human,
    Fingerprint,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// Verdict bucket. Variants are declared from least to most severe, so the
/// derived ordering follows severity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Minimal,
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Minimal => "minimal",
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Indicator {
    #[serde(rename = "type")]
    pub kind: IndicatorKind,
    pub severity: Severity,
    pub description: String,
}

impl Indicator {
    pub fn new(kind: IndicatorKind, severity: Severity, description: impl Into<String>) -> Self {
        Self {
            kind,
            severity,
            description: description.into(),
        }
    }

    pub fn ai(severity: Severity, description: impl Into<String>) -> Self {
        Self::new(IndicatorKind::Ai, severity, description)
    }

    pub fn human(severity: Severity, description: impl Into<String>) -> Self {
        Self::new(IndicatorKind::Human, severity, description)
    }
}

/// Output of one signal extractor: its signed contribution to the raw score
/// and the evidence it produced, in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Signal {
    pub score: i32,
    pub indicators: Vec<Indicator>,
}

impl Signal {
    pub fn push(&mut self, delta: i32, indicator: Indicator) {
        self.score += delta;
        self.indicators.push(indicator);
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MetricsSet {
    pub linguistic: i32,
    pub stylistic: i32,
    pub semantic: i32,
    pub structural: i32,
    pub perplexity: i32,
    pub burstiness: i32,
}

impl MetricsSet {
    pub fn raw_score(&self) -> i32 {
        self.linguistic
            + self.stylistic
            + self.semantic
            + self.structural
            + self.perplexity
            + self.burstiness
    }

    pub fn entries(&self) -> [(&'static str, i32); 6] {
        [
            ("linguistic", self.linguistic),
            ("stylistic", self.stylistic),
            ("semantic", self.semantic),
            ("structural", self.structural),
            ("perplexity", self.perplexity),
            ("burstiness", self.burstiness),
        ]
    }
}

pub mod config;
pub mod error;
pub mod fingerprint;
pub mod report;
pub mod signals;
pub mod text;
pub mod types;
pub mod verdict;

use std::panic::{self, AssertUnwindSafe};

use chrono::Utc;
use rayon::prelude::*;
use tracing::{debug, error, info};

pub use crate::{
    error::DetectError,
    fingerprint::{FingerprintResult, ModelFamily},
    report::{DetectionResult, SentenceStats},
    types::{Indicator, IndicatorKind, MetricsSet, RiskLevel, Severity},
};

#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Evaluate texts on the rayon pool. Output order is input order either way.
    pub parallel: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self { parallel: true }
    }
}

/// Scores one text. Fails only on empty input or an internal fault.
pub fn analyze(text: &str) -> Result<DetectionResult, DetectError> {
    if text.trim().is_empty() {
        return Err(DetectError::Validation("text is required".to_string()));
    }

    panic::catch_unwind(AssertUnwindSafe(|| run_pipeline(text))).map_err(|payload| {
        let detail = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        error!(
            text_len = text.len(),
            detail = %detail,
            "analysis pipeline panicked"
        );
        DetectError::Internal("analysis failed".to_string())
    })
}

fn run_pipeline(text: &str) -> DetectionResult {
    let (metrics, mut indicators) = signals::run_signals(text);
    let ai_probability = verdict::ai_probability(&metrics);

    let fingerprint = fingerprint::fingerprint(text);
    if let Some(indicator) = fingerprint.indicator() {
        indicators.push(indicator);
    }

    let confidence = verdict::confidence(&indicators, text);
    let (verdict, risk_level) = verdict::classify(ai_probability, confidence);
    let explanation = report::explain(ai_probability, confidence, &indicators);
    let sentence_stats = SentenceStats::collect(text);

    debug!(
        linguistic = metrics.linguistic,
        stylistic = metrics.stylistic,
        semantic = metrics.semantic,
        structural = metrics.structural,
        perplexity = metrics.perplexity,
        burstiness = metrics.burstiness,
        ai_probability,
        confidence,
        detected_model = ?fingerprint.detected_model,
        "text analyzed"
    );

    DetectionResult {
        ai_probability,
        confidence,
        verdict,
        risk_level,
        indicators,
        metrics,
        fingerprint,
        sentence_stats,
        explanation,
        timestamp: Utc::now(),
    }
}

pub fn analyze_batch<S: AsRef<str> + Sync>(
    texts: &[S],
) -> Result<Vec<DetectionResult>, DetectError> {
    analyze_batch_with(texts, &BatchOptions::default())
}

/// Analyzes each text independently. The whole batch fails if any item
/// fails; the reported error is the one with the lowest index.
pub fn analyze_batch_with<S: AsRef<str> + Sync>(
    texts: &[S],
    opts: &BatchOptions,
) -> Result<Vec<DetectionResult>, DetectError> {
    if texts.is_empty() {
        return Err(DetectError::Validation(
            "at least one text is required".to_string(),
        ));
    }

    info!(count = texts.len(), parallel = opts.parallel, "batch started");

    let outcomes: Vec<Result<DetectionResult, DetectError>> = if opts.parallel {
        texts.par_iter().map(|t| analyze(t.as_ref())).collect()
    } else {
        texts.iter().map(|t| analyze(t.as_ref())).collect()
    };

    let results = outcomes
        .into_iter()
        .enumerate()
        .map(|(i, outcome)| {
            outcome.map_err(|e| match e {
                DetectError::Validation(msg) => {
                    DetectError::Validation(format!("text at index {i}: {msg}"))
                }
                internal => internal,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    info!(count = results.len(), "batch finished");
    Ok(results)
}

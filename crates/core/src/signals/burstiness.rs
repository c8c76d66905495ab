use crate::text::{sentences, variance, word_count};
use crate::types::{Indicator, Severity, Signal};

const MIN_SENTENCES: usize = 3;
const LOW_BURST_VARIANCE: f64 = 0.001;
const HIGH_BURST_VARIANCE: f64 = 0.005;

/// Clauses per word, approximating clauses as commas plus one.
fn complexity(sentence: &str) -> f64 {
    let clauses = sentence.matches(',').count() + 1;
    clauses as f64 / word_count(sentence) as f64
}

pub fn burstiness(text: &str) -> Signal {
    let mut signal = Signal::default();

    let sents = sentences(text);
    if sents.len() < MIN_SENTENCES {
        return signal;
    }

    let complexities: Vec<f64> = sents.iter().map(|s| complexity(s)).collect();
    let spread = variance(&complexities);

    if spread < LOW_BURST_VARIANCE {
        signal.push(
            15,
            Indicator::ai(
                Severity::Medium,
                "Low burstiness - consistent complexity throughout (AI trait)",
            ),
        );
    } else if spread > HIGH_BURST_VARIANCE {
        signal.push(
            -15,
            Indicator::human(
                Severity::Medium,
                "High burstiness - varying complexity levels (human trait)",
            ),
        );
    }

    signal
}

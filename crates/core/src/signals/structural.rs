use crate::text::{char_len, mean, paragraphs, sentences, variance};
use crate::types::{Indicator, Severity, Signal};

const UNIFORM_CV: f64 = 0.3;
const VARIED_CV: f64 = 0.6;
const UNIFORM_PARAGRAPH_VARIANCE: f64 = 1000.0;
const MIN_PARAGRAPHS: usize = 3;

pub fn structural(text: &str) -> Signal {
    let mut signal = Signal::default();

    let lengths: Vec<f64> = sentences(text)
        .iter()
        .map(|s| char_len(s.trim()) as f64)
        .collect();
    if lengths.len() < 2 {
        return signal;
    }

    let cv = variance(&lengths).sqrt() / mean(&lengths);

    if cv < UNIFORM_CV {
        signal.push(
            20,
            Indicator::ai(
                Severity::High,
                format!("Very uniform sentence lengths (CV: {cv:.2}) - AI characteristic"),
            ),
        );
    } else if cv > VARIED_CV {
        signal.push(
            -15,
            Indicator::human(
                Severity::Medium,
                format!("Highly varied sentence lengths (CV: {cv:.2}) - human characteristic"),
            ),
        );
    }

    let paras = paragraphs(text);
    if paras.len() >= MIN_PARAGRAPHS {
        let para_lengths: Vec<f64> = paras.iter().map(|p| char_len(p) as f64).collect();
        if variance(&para_lengths) < UNIFORM_PARAGRAPH_VARIANCE {
            signal.push(
                10,
                Indicator::ai(
                    Severity::Low,
                    "Uniform paragraph structure - AI tends to balance content",
                ),
            );
        }
    }

    signal
}

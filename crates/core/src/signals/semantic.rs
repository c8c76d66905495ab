use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::text::char_len;
use crate::types::{Indicator, Severity, Signal};

static TYPO_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:teh|recieve|occured|seperate|definately|wierd|untill|alot)\b").unwrap()
});

static SLANG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:gonna|wanna|gotta|kinda|sorta|yeah|nah|lol|omg|btw)\b").unwrap()
});

const MIN_WORD_CHARS: usize = 5;
const REPEAT_MIN_OCCURRENCES: usize = 4;
const REPEATED_WORDS_MIN: usize = 3;
const LOW_DIVERSITY: f64 = 0.5;
const LOW_DIVERSITY_MIN_WORDS: usize = 50;
const HIGH_DIVERSITY: f64 = 0.75;
const POLISHED_MIN_CHARS: usize = 300;

pub fn semantic(text: &str) -> Signal {
    let mut signal = Signal::default();
    let lower = text.to_lowercase();

    let words: Vec<&str> = lower
        .split_whitespace()
        .filter(|w| char_len(w) > MIN_WORD_CHARS)
        .collect();

    let mut freq: HashMap<&str, usize> = HashMap::new();
    for &w in &words {
        *freq.entry(w).or_insert(0) += 1;
    }

    let repeated = freq
        .values()
        .filter(|&&n| n >= REPEAT_MIN_OCCURRENCES)
        .count();
    if repeated >= REPEATED_WORDS_MIN {
        signal.push(
            15,
            Indicator::ai(
                Severity::Medium,
                format!("Repetitive vocabulary - {repeated} words used more than 3 times"),
            ),
        );
    }

    if !words.is_empty() {
        let diversity = freq.len() as f64 / words.len() as f64;
        if diversity < LOW_DIVERSITY && words.len() > LOW_DIVERSITY_MIN_WORDS {
            signal.push(
                10,
                Indicator::ai(
                    Severity::Low,
                    format!(
                        "Low lexical diversity ({:.1}%) - limited vocabulary range",
                        diversity * 100.0
                    ),
                ),
            );
        } else if diversity > HIGH_DIVERSITY {
            signal.push(
                -10,
                Indicator::human(
                    Severity::Low,
                    format!(
                        "High lexical diversity ({:.1}%) - rich vocabulary",
                        diversity * 100.0
                    ),
                ),
            );
        }
    }

    let typos = TYPO_RE.is_match(text);
    let slang = SLANG_RE.is_match(text);

    if typos || slang {
        let description = if typos {
            "Contains common typos - strong human indicator"
        } else {
            "Contains slang/informal language"
        };
        signal.push(-20, Indicator::human(Severity::High, description));
    } else if char_len(text) > POLISHED_MIN_CHARS {
        signal.push(
            8,
            Indicator::ai(
                Severity::Low,
                "Perfect spelling and formal language throughout",
            ),
        );
    }

    signal
}

//! Model-family fingerprinting.
//!
//! Every profile adds to per-model running scores through weighted phrase
//! containment and boolean structural checks. Scores are then ranked and the
//! selection table decides whether a model is reported. Ties are broken by
//! declaration order of [`ModelFamily::ALL`]: the first declared wins.

use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::types::{Indicator, IndicatorKind, Severity};

/// Known model families. The derived `Ord` is declaration order, which is
/// also the tie-break order when ranking.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ModelFamily {
    #[serde(rename = "ChatGPT")]
    ChatGpt,
    #[serde(rename = "GPT-4")]
    Gpt4,
    Claude,
    Gemini,
    Perplexity,
    Llama,
    Mistral,
    Bard,
}

impl ModelFamily {
    pub const ALL: [ModelFamily; 8] = [
        ModelFamily::ChatGpt,
        ModelFamily::Gpt4,
        ModelFamily::Claude,
        ModelFamily::Gemini,
        ModelFamily::Perplexity,
        ModelFamily::Llama,
        ModelFamily::Mistral,
        ModelFamily::Bard,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ModelFamily::ChatGpt => "ChatGPT",
            ModelFamily::Gpt4 => "GPT-4",
            ModelFamily::Claude => "Claude",
            ModelFamily::Gemini => "Gemini",
            ModelFamily::Perplexity => "Perplexity",
            ModelFamily::Llama => "Llama",
            ModelFamily::Mistral => "Mistral",
            ModelFamily::Bard => "Bard",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ModelFamily::ChatGpt => "ChatGPT typically uses structured responses, balanced language, and phrases like \"it's important to note\" and \"keep in mind\".",
            ModelFamily::Gpt4 => "GPT-4 shows sophisticated vocabulary, deeper analysis, and more nuanced responses than ChatGPT-3.5.",
            ModelFamily::Claude => "Claude tends to be more conversational, uses \"I\" statements frequently, and acknowledges complexity and nuance.",
            ModelFamily::Gemini => "Gemini (formerly Bard) often uses casual language, provides multiple options, and phrases like \"here's what\" or \"let's explore\".",
            ModelFamily::Perplexity => "Perplexity heavily cites sources, uses research-oriented language, and includes phrases like \"according to\" and \"studies show\".",
            ModelFamily::Llama => "Llama tends to be very helpful and accommodating, using phrases like \"I'm here to help\" and \"certainly\".",
            ModelFamily::Mistral => "Mistral tends to be concise and direct, often using summary-oriented language.",
            ModelFamily::Bard => "Bard (now Gemini) shows casual, exploratory language with multiple options and alternatives.",
        }
    }
}

impl fmt::Display for ModelFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Alternative {
    pub model: ModelFamily,
    pub probability: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FingerprintResult {
    pub detected_model: Option<ModelFamily>,
    pub confidence: u32,
    pub all_scores: BTreeMap<ModelFamily, u32>,
    pub alternatives: Vec<Alternative>,
    pub explanation: String,
}

impl FingerprintResult {
    /// Evidence line appended to the analysis when a model was detected.
    pub fn indicator(&self) -> Option<Indicator> {
        let model = self.detected_model?;
        let severity = if self.confidence > 70 {
            Severity::High
        } else if self.confidence > 50 {
            Severity::Medium
        } else {
            Severity::Low
        };
        Some(Indicator::new(
            IndicatorKind::Fingerprint,
            severity,
            format!(
                "Detected {model} fingerprint with {}% confidence",
                self.confidence
            ),
        ))
    }
}

/// One phrase list: each contained phrase adds `weight` to `model` and, when
/// set, `also` to a related family.
struct PhraseRule {
    model: ModelFamily,
    weight: u32,
    also: Option<(ModelFamily, u32)>,
    phrases: &'static [&'static str],
}

static PHRASE_RULES: &[PhraseRule] = &[
    PhraseRule {
        model: ModelFamily::ChatGpt,
        weight: 20,
        also: Some((ModelFamily::Gpt4, 15)),
        phrases: &[
            "as an ai language model",
            "i don't have personal",
            "i cannot",
            "i'm sorry, but",
            "it's important to note",
            "keep in mind",
            "it's worth noting",
            "delve into",
            "in the realm of",
            "multifaceted",
            "paradigm",
            "comprehensive approach",
        ],
    },
    PhraseRule {
        model: ModelFamily::Claude,
        weight: 18,
        also: None,
        phrases: &[
            "i aim to",
            "i'd be happy to",
            "i should note",
            "to be clear",
            "let me",
            "i want to be direct",
            "i think it's important",
            "nuanced",
            "thoughtful",
            "careful consideration",
        ],
    },
    PhraseRule {
        model: ModelFamily::Gemini,
        weight: 20,
        also: Some((ModelFamily::Bard, 20)),
        phrases: &[
            "i'm a large language model",
            "i'm still learning",
            "i'm designed to",
            "my purpose is",
            "as a large language model",
            "i don't have access to",
            "i can't provide",
            "here are some",
            "here's what",
            "let's explore",
        ],
    },
    PhraseRule {
        model: ModelFamily::Perplexity,
        weight: 15,
        also: None,
        phrases: &[
            "according to",
            "based on",
            "sources indicate",
            "research shows",
            "studies suggest",
            "data reveals",
            "evidence suggests",
            "[citation needed]",
            "as reported by",
            "recent findings",
        ],
    },
    PhraseRule {
        model: ModelFamily::Llama,
        weight: 12,
        also: None,
        phrases: &[
            "as a helpful assistant",
            "i'm here to help",
            "i'd be glad to",
            "certainly",
            "of course",
            "absolutely",
        ],
    },
    PhraseRule {
        model: ModelFamily::Mistral,
        weight: 10,
        also: None,
        phrases: &[
            "in summary",
            "to summarize",
            "key points",
            "main takeaways",
            "essentially",
            "fundamentally",
        ],
    },
];

/// Each sophisticated word found adds to GPT-4 and, more weakly, ChatGPT.
static SOPHISTICATED_WORDS: &[&str] = &[
    "nuanced",
    "multifaceted",
    "paradigm",
    "holistic",
    "comprehensive",
    "intricate",
    "sophisticated",
    "elaborate",
    "intrinsic",
    "fundamental",
];
const SOPHISTICATED_GPT4: u32 = 8;
const SOPHISTICATED_CHATGPT: u32 = 3;
const DEEP_ANALYSIS_MIN_WORDS: usize = 3;
const DEEP_ANALYSIS_GPT4: u32 = 15;

static NUMBERED_LIST_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\d+\.\s").unwrap());
static I_STATEMENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bi\s").unwrap());
static COMPLEXITY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)complex|nuanced|multifaceted|various perspectives").unwrap());
static HERE_IS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)here(?:'s| is)").unwrap());
static OPTIONS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)option|alternative|another way|you could also").unwrap());
static CITATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\[\d+\]|\(\d{4}\)|according to|based on").unwrap());
static LINK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)https?://").unwrap());
static DEEP_ANALYSIS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)consider|analysis|perspective|implication|consequence|factor").unwrap()
});

/// A boolean check over the raw and lowercased text, and the models it feeds.
struct StructuralRule {
    check: fn(&str, &str) -> bool,
    awards: &'static [(ModelFamily, u32)],
}

static STRUCTURAL_RULES: &[StructuralRule] = &[
    StructuralRule {
        check: |raw, _| NUMBERED_LIST_RE.is_match(raw),
        awards: &[(ModelFamily::ChatGpt, 10), (ModelFamily::Gpt4, 10)],
    },
    StructuralRule {
        check: |_, lower| lower.matches("however").count() > 1,
        awards: &[(ModelFamily::ChatGpt, 8), (ModelFamily::Gpt4, 8)],
    },
    StructuralRule {
        check: |raw, _| I_STATEMENT_RE.find_iter(raw).count() > 3,
        awards: &[(ModelFamily::Claude, 12)],
    },
    StructuralRule {
        check: |raw, _| COMPLEXITY_RE.is_match(raw),
        awards: &[(ModelFamily::Claude, 10)],
    },
    StructuralRule {
        check: |raw, _| HERE_IS_RE.find_iter(raw).count() > 1,
        awards: &[(ModelFamily::Gemini, 10)],
    },
    StructuralRule {
        check: |raw, _| OPTIONS_RE.is_match(raw),
        awards: &[(ModelFamily::Gemini, 8)],
    },
    StructuralRule {
        check: |raw, _| CITATION_RE.is_match(raw),
        awards: &[(ModelFamily::Perplexity, 25)],
    },
    StructuralRule {
        check: |raw, _| LINK_RE.is_match(raw),
        awards: &[(ModelFamily::Perplexity, 20)],
    },
];

/// Selection tiers, highest first: (minimum top score, alternatives kept,
/// minimum alternative score).
const STRONG_MATCH: (u32, usize, u32) = (40, 3, 20);
const WEAK_MATCH: (u32, usize, u32) = (20, 2, 15);
const MAX_CONFIDENCE: u32 = 95;

pub fn score_models(text: &str) -> BTreeMap<ModelFamily, u32> {
    let lower = text.to_lowercase();
    let mut scores: BTreeMap<ModelFamily, u32> =
        ModelFamily::ALL.iter().map(|m| (*m, 0)).collect();
    let mut add = |model: ModelFamily, weight: u32| {
        *scores.entry(model).or_insert(0) += weight;
    };

    for rule in PHRASE_RULES {
        for phrase in rule.phrases {
            if lower.contains(phrase) {
                add(rule.model, rule.weight);
                if let Some((related, weight)) = rule.also {
                    add(related, weight);
                }
            }
        }
    }

    for rule in STRUCTURAL_RULES {
        if (rule.check)(text, &lower) {
            for &(model, weight) in rule.awards {
                add(model, weight);
            }
        }
    }

    let sophisticated = SOPHISTICATED_WORDS
        .iter()
        .filter(|w| lower.contains(*w))
        .count();
    add(ModelFamily::Gpt4, SOPHISTICATED_GPT4 * sophisticated as u32);
    add(ModelFamily::ChatGpt, SOPHISTICATED_CHATGPT * sophisticated as u32);
    if sophisticated >= DEEP_ANALYSIS_MIN_WORDS && DEEP_ANALYSIS_RE.is_match(text) {
        add(ModelFamily::Gpt4, DEEP_ANALYSIS_GPT4);
    }

    scores
}

pub fn fingerprint(text: &str) -> FingerprintResult {
    let all_scores = score_models(text);

    // `all_scores` iterates in declaration order and `sort_by` is stable, so
    // equal scores keep that order.
    let mut ranked: Vec<(ModelFamily, u32)> = all_scores
        .iter()
        .map(|(m, s)| (*m, *s))
        .filter(|(_, s)| *s > 0)
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    let selection = ranked.first().and_then(|&(top, top_score)| {
        let (confidence, (_, keep, floor)) = if top_score >= STRONG_MATCH.0 {
            ((top_score + 50).min(MAX_CONFIDENCE), STRONG_MATCH)
        } else if top_score >= WEAK_MATCH.0 {
            (top_score + 40, WEAK_MATCH)
        } else {
            return None;
        };
        let alternatives = ranked
            .iter()
            .skip(1)
            .take(keep)
            .filter(|(_, s)| *s >= floor)
            .map(|&(model, score)| Alternative {
                model,
                probability: (score as f64 / top_score as f64 * 100.0).round() as u32,
            })
            .collect();
        Some((top, confidence, alternatives))
    });

    match selection {
        Some((model, confidence, alternatives)) => FingerprintResult {
            detected_model: Some(model),
            confidence,
            all_scores,
            alternatives,
            explanation: format!(
                "The text shows characteristics typical of {model}. {}",
                model.description()
            ),
        },
        None => FingerprintResult {
            detected_model: None,
            confidence: 0,
            all_scores,
            alternatives: Vec::new(),
            explanation: "No specific AI model fingerprint detected. The text may be human-written or from an unknown AI model.".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_are_fully_populated() {
        let r = fingerprint("nothing to see");
        assert_eq!(r.all_scores.len(), ModelFamily::ALL.len());
        assert!(r.all_scores.values().all(|s| *s == 0));
        assert_eq!(r.detected_model, None);
        assert_eq!(r.confidence, 0);
        assert!(r.alternatives.is_empty());
        assert!(r.indicator().is_none());
    }

    #[test]
    fn citation_markers_point_to_perplexity() {
        let r = fingerprint("[1] according to https://example.org/paper");
        assert_eq!(r.all_scores[&ModelFamily::Perplexity], 60);
        assert_eq!(r.detected_model, Some(ModelFamily::Perplexity));
        assert_eq!(r.confidence, 95);
        let ind = r.indicator().unwrap();
        assert_eq!(ind.severity, Severity::High);
        assert_eq!(ind.description, "Detected Perplexity fingerprint with 95% confidence");
    }

    #[test]
    fn chatgpt_phrase_also_feeds_gpt4() {
        let scores = score_models("Keep in mind the basics.");
        assert_eq!(scores[&ModelFamily::ChatGpt], 20);
        assert_eq!(scores[&ModelFamily::Gpt4], 15);
    }

    #[test]
    fn weak_match_tier_uses_offset_confidence() {
        // "let me" only: Claude 18 < 20, nothing detected
        assert_eq!(fingerprint("let me see").detected_model, None);

        // "certainly" + "of course" gives Llama 24
        let r = fingerprint("certainly, of course");
        assert_eq!(r.detected_model, Some(ModelFamily::Llama));
        assert_eq!(r.confidence, 64);
        assert_eq!(r.indicator().unwrap().severity, Severity::Medium);
    }

    #[test]
    fn ties_go_to_first_declared_model() {
        // Gemini phrase adds 20 to both Gemini and Bard
        let r = fingerprint("here are some ideas");
        assert_eq!(r.all_scores[&ModelFamily::Gemini], 20);
        assert_eq!(r.all_scores[&ModelFamily::Bard], 20);
        assert_eq!(r.detected_model, Some(ModelFamily::Gemini));
        assert_eq!(
            r.alternatives,
            vec![Alternative {
                model: ModelFamily::Bard,
                probability: 100
            }]
        );
    }

    #[test]
    fn strong_match_keeps_at_most_three_alternatives() {
        let r = fingerprint(
            "Keep in mind, it's worth noting: let me say, to be clear, here are some notes \
             according to [1] and based on https://example.org, certainly.",
        );
        assert_eq!(r.all_scores[&ModelFamily::Perplexity], 75);
        assert_eq!(r.all_scores[&ModelFamily::ChatGpt], 40);
        assert_eq!(r.all_scores[&ModelFamily::Claude], 36);
        assert_eq!(r.all_scores[&ModelFamily::Gpt4], 30);
        assert_eq!(r.all_scores[&ModelFamily::Gemini], 20);
        assert_eq!(r.all_scores[&ModelFamily::Bard], 20);
        assert_eq!(r.detected_model, Some(ModelFamily::Perplexity));
        assert_eq!(r.confidence, 95);
        // Gemini and Bard clear the floor but fall outside the cap
        assert_eq!(
            r.alternatives,
            vec![
                Alternative {
                    model: ModelFamily::ChatGpt,
                    probability: 53
                },
                Alternative {
                    model: ModelFamily::Claude,
                    probability: 48
                },
                Alternative {
                    model: ModelFamily::Gpt4,
                    probability: 40
                },
            ]
        );
    }

    #[test]
    fn weak_match_keeps_at_most_two_alternatives() {
        let r = fingerprint("let me say, to be clear, here are some, certainly, of course");
        assert_eq!(r.all_scores[&ModelFamily::Claude], 36);
        assert_eq!(r.detected_model, Some(ModelFamily::Claude));
        assert_eq!(r.confidence, 76);
        assert_eq!(
            r.alternatives,
            vec![
                Alternative {
                    model: ModelFamily::Llama,
                    probability: 67
                },
                Alternative {
                    model: ModelFamily::Gemini,
                    probability: 56
                },
            ]
        );
    }

    #[test]
    fn runner_up_below_floor_is_not_an_alternative() {
        // Mistral 10 is under the strong floor (20)
        let strong = fingerprint("[1] according to https://example.org, in summary");
        assert_eq!(strong.all_scores[&ModelFamily::Perplexity], 60);
        assert_eq!(strong.all_scores[&ModelFamily::Mistral], 10);
        assert!(strong.alternatives.is_empty());

        // and under the weak floor (15)
        let weak = fingerprint("certainly, of course, in summary");
        assert_eq!(weak.detected_model, Some(ModelFamily::Llama));
        assert_eq!(weak.all_scores[&ModelFamily::Mistral], 10);
        assert!(weak.alternatives.is_empty());
    }

    #[test]
    fn sophisticated_vocabulary_with_analysis_boosts_gpt4() {
        let r = score_models("A holistic, intricate and elaborate analysis.");
        assert_eq!(r[&ModelFamily::Gpt4], 3 * 8 + 15);
        assert_eq!(r[&ModelFamily::ChatGpt], 3 * 3);
    }

    #[test]
    fn model_names_serialize_as_display_names() {
        let json = serde_json::to_string(&ModelFamily::Gpt4).unwrap();
        assert_eq!(json, "\"GPT-4\"");
    }
}

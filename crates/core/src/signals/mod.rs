//! Independent heuristic signal extractors. Each one is a pure function of
//! the input text returning its own [`Signal`]; none of them share state.

mod burstiness;
mod linguistic;
mod perplexity;
mod semantic;
mod structural;
mod stylistic;

pub use burstiness::burstiness;
pub use linguistic::linguistic;
pub use perplexity::perplexity;
pub use semantic::semantic;
pub use structural::structural;
pub use stylistic::stylistic;

use crate::types::{Indicator, MetricsSet, Signal};

/// Runs every extractor in fixed order and concatenates their indicators.
pub fn run_signals(text: &str) -> (MetricsSet, Vec<Indicator>) {
    let linguistic = linguistic(text);
    let stylistic = stylistic(text);
    let semantic = semantic(text);
    let structural = structural(text);
    let perplexity = perplexity(text);
    let burstiness = burstiness(text);

    let metrics = MetricsSet {
        linguistic: linguistic.score,
        stylistic: stylistic.score,
        semantic: semantic.score,
        structural: structural.score,
        perplexity: perplexity.score,
        burstiness: burstiness.score,
    };

    let indicators = [
        linguistic,
        stylistic,
        semantic,
        structural,
        perplexity,
        burstiness,
    ]
    .into_iter()
    .flat_map(|s: Signal| s.indicators)
    .collect();

    (metrics, indicators)
}

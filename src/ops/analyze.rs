//! Ad hoc analysis of text that is not stored as an entry.

use crate::analysis::{detect_themes, score_sentiment, SentimentLabel, SentimentScore, ThemeMatch};
use serde::Serialize;
use tracing::debug;

/// Sentiment and themes of a single text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextAnalysis {
    pub sentiment: SentimentLabel,
    pub score: SentimentScore,
    pub themes: Vec<ThemeMatch>,
}

/// Classifies `text` and detects its themes.
pub fn analyze_text(text: &str) -> TextAnalysis {
    let score = score_sentiment(text);
    let themes = detect_themes(text);
    debug!(
        words = text.split_whitespace().count(),
        themes = themes.len(),
        "Analyzed text"
    );

    TextAnalysis {
        sentiment: score.label(),
        score,
        themes,
    }
}

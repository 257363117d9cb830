//! Keyword-based sentiment classification.

use super::lexicon::{normalize, SENTIMENT_LEXICON};
use crate::constants::SENTIMENT_RATIO_THRESHOLD;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

/// Overall tone of a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Number of tokens that matched each sentiment word list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SentimentScore {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentScore {
    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }

    /// Classifies the tally.
    ///
    /// A polar label wins only when its share of matched tokens beats the other
    /// polar share and is strictly above the threshold. Ties, weak signals and
    /// texts with no matched tokens are neutral.
    pub fn label(&self) -> SentimentLabel {
        let total = self.total();
        if total == 0 {
            return SentimentLabel::Neutral;
        }

        let positive_ratio = self.positive as f64 / total as f64;
        let negative_ratio = self.negative as f64 / total as f64;

        if positive_ratio > negative_ratio && positive_ratio > SENTIMENT_RATIO_THRESHOLD {
            SentimentLabel::Positive
        } else if negative_ratio > positive_ratio && negative_ratio > SENTIMENT_RATIO_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

/// Counts exact matches of each whitespace-separated, lowercased token.
pub fn score_sentiment(text: &str) -> SentimentScore {
    let normalized = normalize(text);
    let mut score = SentimentScore::default();

    for token in normalized.split_whitespace() {
        match SENTIMENT_LEXICON.lookup(token) {
            Some(SentimentLabel::Positive) => score.positive += 1,
            Some(SentimentLabel::Negative) => score.negative += 1,
            Some(SentimentLabel::Neutral) => score.neutral += 1,
            None => {}
        }
    }

    trace!(?score, "Scored sentiment");
    score
}

/// Classifies `text` as positive, negative or neutral.
///
/// # Examples
///
/// ```
/// use reverie::analysis::{classify_sentiment, SentimentLabel};
///
/// assert_eq!(classify_sentiment("so grateful and happy"), SentimentLabel::Positive);
/// assert_eq!(classify_sentiment(""), SentimentLabel::Neutral);
/// ```
pub fn classify_sentiment(text: &str) -> SentimentLabel {
    score_sentiment(text).label()
}

//! On-device text analysis for journal entries.
//!
//! Everything here is a pure function of its inputs and two static keyword
//! tables (see [`lexicon`]). Nothing is cached between calls and no entry is
//! ever modified:
//!
//! - [`classify_sentiment`]: positive / negative / neutral tone of a text
//! - [`detect_themes`]: which life areas a text touches on
//! - [`generate_prompts`]: writing prompts shaped by the latest entries
//! - [`summarize_period`]: a weekly or monthly reflection
//! - [`sentiment_distribution`] and [`theme_frequency`]: dashboard aggregates

pub mod lexicon;
pub mod prompts;
pub mod reflection;
pub mod sentiment;
pub mod stats;
pub mod tally;
pub mod themes;

pub use lexicon::MatchMode;
pub use prompts::generate_prompts;
pub use reflection::{
    dashboard_window, filter_period, summarize_period, AnalysisOptions, ReflectionSummary,
};
pub use sentiment::{classify_sentiment, score_sentiment, SentimentLabel, SentimentScore};
pub use stats::{
    sentiment_distribution, theme_frequency, MoodTrend, SentimentDistribution, ThemeFrequency,
};
pub use themes::{detect_themes, Theme, ThemeMatch};

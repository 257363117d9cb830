//! Aggregate statistics for the insights dashboard.

use super::sentiment::{classify_sentiment, SentimentLabel};
use super::tally::Tally;
use super::themes::{detect_themes, Theme};
use crate::journal_core::JournalEntry;
use serde::Serialize;
use std::cmp::Ordering;

/// How many entries fall under each sentiment label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SentimentDistribution {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentDistribution {
    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }

    pub fn count(&self, label: SentimentLabel) -> usize {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Negative => self.negative,
            SentimentLabel::Neutral => self.neutral,
        }
    }

    /// Share of entries with `label`, as a rounded whole percentage.
    pub fn percentage(&self, label: SentimentLabel) -> u32 {
        let total = self.total();
        if total == 0 {
            return 0;
        }
        (self.count(label) as f64 / total as f64 * 100.0).round() as u32
    }

    /// Which way the period's mood leaned.
    pub fn trend(&self) -> MoodTrend {
        match self.positive.cmp(&self.negative) {
            Ordering::Greater => MoodTrend::Upward,
            Ordering::Less => MoodTrend::Downward,
            Ordering::Equal => MoodTrend::Steady,
        }
    }
}

/// Direction of mood over a period, comparing positive and negative entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodTrend {
    Upward,
    Downward,
    Steady,
}

impl MoodTrend {
    pub fn as_str(&self) -> &'static str {
        match self {
            MoodTrend::Upward => "upward",
            MoodTrend::Downward => "downward",
            MoodTrend::Steady => "steady",
        }
    }
}

/// Classifies every entry and counts the labels.
pub fn sentiment_distribution<'a, I>(entries: I) -> SentimentDistribution
where
    I: IntoIterator<Item = &'a JournalEntry>,
{
    entries
        .into_iter()
        .fold(SentimentDistribution::default(), |mut dist, entry| {
            match classify_sentiment(&entry.content) {
                SentimentLabel::Positive => dist.positive += 1,
                SentimentLabel::Negative => dist.negative += 1,
                SentimentLabel::Neutral => dist.neutral += 1,
            }
            dist
        })
}

/// A theme with the number of keyword hits summed across entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeFrequency {
    pub theme: Theme,
    pub count: usize,
}

/// Sums each theme's matched-keyword count across entries, highest first.
///
/// Unlike reflections, which count entries per theme, this weighs an entry by
/// how many distinct keywords of the theme it used.
pub fn theme_frequency<'a, I>(entries: I, limit: usize) -> Vec<ThemeFrequency>
where
    I: IntoIterator<Item = &'a JournalEntry>,
{
    let mut tally = Tally::new();
    for entry in entries {
        for found in detect_themes(&entry.content) {
            tally.add_n(found.theme, found.matches);
        }
    }

    tally
        .ranked()
        .into_iter()
        .take(limit)
        .map(|(theme, count)| ThemeFrequency { theme, count })
        .collect()
}

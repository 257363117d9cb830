//! Weekly and monthly reflection summaries.

use super::sentiment::{classify_sentiment, SentimentLabel};
use super::tally::Tally;
use super::themes::{detect_themes, Theme};
use crate::constants::{
    DEMO_DATA_END_MS, DEMO_DATA_START_MS, MONTH_FAMILY_INSIGHT, MONTH_HEALTH_INSIGHT,
    MONTH_NEGATIVE_INSIGHT, MONTH_POSITIVE_INSIGHT, MONTH_WORK_INSIGHT, NO_THEMES_PHRASE,
    WEEK_FAMILY_INSIGHT, WEEK_NEGATIVE_INSIGHT, WEEK_POSITIVE_INSIGHT, WEEK_WORK_INSIGHT,
};
use crate::journal_core::{JournalEntry, Period};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

/// Knobs for period filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalysisOptions {
    /// When any entry carries a `timestamp` inside the demonstration data
    /// range, skip the time window and reflect on every entry.
    pub use_all_entries_if_demo_data_present: bool,
}

/// A periodic summary of themes, mood and observations.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReflectionSummary {
    pub summary: String,
    pub themes: Vec<Theme>,
    pub sentiment: SentimentLabel,
    pub insights: Vec<String>,
    pub entry_count: usize,
}

/// Whether any entry has a raw `timestamp` strictly inside the demo range.
pub fn has_demo_data(entries: &[JournalEntry]) -> bool {
    entries.iter().any(|entry| {
        entry
            .timestamp
            .is_some_and(|ts| ts > DEMO_DATA_START_MS && ts < DEMO_DATA_END_MS)
    })
}

/// Entries whose effective time is on or after the period's cutoff.
pub fn filter_period<'a>(
    entries: &'a [JournalEntry],
    period: Period,
    now: DateTime<Utc>,
    options: &AnalysisOptions,
) -> Vec<&'a JournalEntry> {
    if options.use_all_entries_if_demo_data_present && has_demo_data(entries) {
        debug!("Demo data present, reflecting on all entries");
        return entries.iter().collect();
    }

    let cutoff = period.cutoff(now);
    entries
        .iter()
        .filter(|entry| entry.effective_at() >= cutoff)
        .collect()
}

/// Entries written between the period's cutoff and `now`, both inclusive.
///
/// The dashboard window: unlike [`filter_period`] it drops future-dated
/// entries and ignores the demonstration data bypass.
pub fn dashboard_window(
    entries: &[JournalEntry],
    period: Period,
    now: DateTime<Utc>,
) -> Vec<&JournalEntry> {
    let cutoff = period.cutoff(now);
    entries
        .iter()
        .filter(|entry| (cutoff..=now).contains(&entry.effective_at()))
        .collect()
}

/// Summarizes the entries written during `period`, relative to `now`.
///
/// Themes are ranked by how many entries mention them and sentiment by how
/// many entries carry each label; in both, ties go to whichever was seen
/// first. Insight rules fire in a fixed order and each contributes one
/// sentence.
///
/// # Examples
///
/// ```
/// use reverie::analysis::{summarize_period, AnalysisOptions, SentimentLabel};
/// use reverie::journal_core::Period;
/// use chrono::Utc;
///
/// let reflection = summarize_period(&[], Period::Week, Utc::now(), &AnalysisOptions::default());
/// assert_eq!(reflection.summary, "No entries this week to reflect on.");
/// assert_eq!(reflection.sentiment, SentimentLabel::Neutral);
/// ```
pub fn summarize_period(
    entries: &[JournalEntry],
    period: Period,
    now: DateTime<Utc>,
    options: &AnalysisOptions,
) -> ReflectionSummary {
    let in_period = filter_period(entries, period, now, options);
    debug!(
        period = period.as_str(),
        total = entries.len(),
        in_period = in_period.len(),
        "Summarizing period"
    );

    if in_period.is_empty() {
        return ReflectionSummary {
            summary: format!("No entries this {} to reflect on.", period),
            themes: Vec::new(),
            sentiment: SentimentLabel::Neutral,
            insights: Vec::new(),
            entry_count: 0,
        };
    }

    let mut theme_counts = Tally::new();
    let mut sentiment_counts = Tally::new();
    for entry in &in_period {
        for found in detect_themes(&entry.content) {
            theme_counts.add(found.theme);
        }
        sentiment_counts.add(classify_sentiment(&entry.content));
    }

    let themes = theme_counts.top(period.top_theme_count());
    let sentiment = sentiment_counts
        .leader()
        .unwrap_or(SentimentLabel::Neutral);
    let insights = period_insights(period, &theme_counts, &sentiment_counts);

    let themes_text = if themes.is_empty() {
        NO_THEMES_PHRASE.to_string()
    } else {
        themes
            .iter()
            .map(Theme::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    };

    ReflectionSummary {
        summary: format!(
            "This {} you wrote {} entries with themes around {}.",
            period,
            in_period.len(),
            themes_text
        ),
        themes,
        sentiment,
        insights,
        entry_count: in_period.len(),
    }
}

fn period_insights(
    period: Period,
    themes: &Tally<Theme>,
    sentiments: &Tally<SentimentLabel>,
) -> Vec<String> {
    let work = themes.get(&Theme::Work);
    let family = themes.get(&Theme::Family);
    let health = themes.get(&Theme::Health);
    let positive = sentiments.get(&SentimentLabel::Positive);
    let negative = sentiments.get(&SentimentLabel::Negative);

    let mut insights = Vec::new();
    match period {
        Period::Week => {
            if work > 2 {
                insights.push(WEEK_WORK_INSIGHT);
            }
            if family > 2 {
                insights.push(WEEK_FAMILY_INSIGHT);
            }
            if positive > negative {
                insights.push(WEEK_POSITIVE_INSIGHT);
            } else if negative > positive {
                insights.push(WEEK_NEGATIVE_INSIGHT);
            }
        }
        Period::Month => {
            if work > 5 {
                insights.push(MONTH_WORK_INSIGHT);
            }
            if family > 5 {
                insights.push(MONTH_FAMILY_INSIGHT);
            }
            if health > 3 {
                insights.push(MONTH_HEALTH_INSIGHT);
            }
            let (positive, negative) = (positive as f64, negative as f64);
            if positive > negative * 1.5 {
                insights.push(MONTH_POSITIVE_INSIGHT);
            } else if negative > positive * 1.5 {
                insights.push(MONTH_NEGATIVE_INSIGHT);
            }
        }
    }

    insights.into_iter().map(str::to_string).collect()
}

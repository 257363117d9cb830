//! Writing prompts and the insights dashboard.

use crate::analysis::{
    dashboard_window, generate_prompts, sentiment_distribution, summarize_period, theme_frequency,
    AnalysisOptions, MoodTrend, ReflectionSummary, SentimentDistribution, ThemeFrequency,
};
use crate::constants::THEME_FREQUENCY_LIMIT;
use crate::errors::AppResult;
use crate::journal_core::Period;
use crate::store::EntryStore;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

/// Writing prompts based on the most recent stored entries.
pub fn prompts(store: &dyn EntryStore) -> AppResult<Vec<String>> {
    let entries = store.load_entries()?;
    let prompts = generate_prompts(&entries);
    info!(
        entries = entries.len(),
        prompts = prompts.len(),
        "Generated prompts"
    );
    Ok(prompts)
}

/// Everything the insights dashboard shows for one period.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightsReport {
    pub period: Period,
    /// Entries in the whole journal.
    pub total_entries: usize,
    /// Prompts drawn from the latest entries, regardless of period.
    pub prompts: Vec<String>,
    pub sentiment: SentimentDistribution,
    pub mood_trend: MoodTrend,
    pub themes: Vec<ThemeFrequency>,
    pub reflection: ReflectionSummary,
}

/// Builds the insights dashboard for `period`.
///
/// Prompts look at the whole journal. The distribution and theme frequencies
/// only cover entries written between the period cutoff and `now`; the
/// demonstration data bypass applies to the reflection alone.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn insights(
    store: &dyn EntryStore,
    period: Period,
    now: DateTime<Utc>,
    options: &AnalysisOptions,
) -> AppResult<InsightsReport> {
    let entries = store.load_entries()?;
    let in_period = dashboard_window(&entries, period, now);

    let sentiment = sentiment_distribution(in_period.iter().copied());
    let themes = theme_frequency(in_period.iter().copied(), THEME_FREQUENCY_LIMIT);
    let reflection = summarize_period(&entries, period, now, options);

    info!(
        period = period.as_str(),
        total = entries.len(),
        in_period = in_period.len(),
        "Built insights"
    );

    Ok(InsightsReport {
        period,
        total_entries: entries.len(),
        prompts: generate_prompts(&entries),
        mood_trend: sentiment.trend(),
        sentiment,
        themes,
        reflection,
    })
}

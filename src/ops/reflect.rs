//! Periodic reflections over stored entries.

use crate::analysis::{summarize_period, AnalysisOptions, ReflectionSummary};
use crate::errors::AppResult;
use crate::journal_core::Period;
use crate::store::EntryStore;
use chrono::{DateTime, Utc};
use tracing::info;

/// Loads every entry and summarizes the ones written during `period`.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn reflect(
    store: &dyn EntryStore,
    period: Period,
    now: DateTime<Utc>,
    options: &AnalysisOptions,
) -> AppResult<ReflectionSummary> {
    let entries = store.load_entries()?;
    let reflection = summarize_period(&entries, period, now, options);

    info!(
        period = period.as_str(),
        entry_count = reflection.entry_count,
        "Generated reflection"
    );
    Ok(reflection)
}

//! Week and month calendar views.

use crate::calendar::{build_days, month_grid, week_days, CalendarDay};
use crate::errors::{AppError, AppResult};
use crate::store::EntryStore;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use tracing::info;

/// Which calendar to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarView {
    /// The Sunday-started week containing today.
    Week,
    /// A six-week grid for one month.
    Month { year: i32, month: u32 },
}

/// A rendered-ready calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarReport {
    pub title: String,
    pub days: Vec<CalendarDay>,
    /// Entries shown in the view's own days (outside days excluded).
    pub entry_count: usize,
}

/// Builds `view` from the stored entries.
///
/// # Errors
///
/// Returns `AppError::Config` for a month that does not exist, or an error if
/// the store cannot be read.
pub fn calendar_view(
    store: &dyn EntryStore,
    view: CalendarView,
    today: NaiveDate,
) -> AppResult<CalendarReport> {
    let (title, days, month) = match view {
        CalendarView::Week => {
            let days = week_days(today);
            let title = format!("Week of {}", days[0].format("%B %-d, %Y"));
            (title, days, None)
        }
        CalendarView::Month { year, month } => {
            let days = month_grid(year, month).ok_or_else(|| {
                AppError::Config(format!("Invalid month: {}-{:02}", year, month))
            })?;
            let title = NaiveDate::from_ymd_opt(year, month, 1)
                .map(|first| first.format("%B %Y").to_string())
                .unwrap_or_default();
            (title, days, Some(month))
        }
    };

    let entries = store.load_entries()?;
    let days = build_days(&entries, &days, today, month);
    let entry_count = days
        .iter()
        .filter(|day| day.in_month)
        .map(|day| day.entry_ids.len())
        .sum();

    info!(title = %title, entry_count, "Built calendar");
    Ok(CalendarReport {
        title,
        days,
        entry_count,
    })
}

impl CalendarView {
    /// The month view for the month containing `today`.
    pub fn current_month(today: NaiveDate) -> Self {
        CalendarView::Month {
            year: today.year(),
            month: today.month(),
        }
    }
}

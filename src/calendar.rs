//! Per-day aggregation for calendar views.
//!
//! Builds the data behind a week strip or a month grid: which entries fall on
//! each day and the glyph that best represents that day's mood. Drawing the
//! grid is left to the caller.

use crate::analysis::tally::Tally;
use crate::constants::MONTH_GRID_DAYS;
use crate::journal_core::JournalEntry;
use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

/// One cell of a calendar view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub entry_ids: Vec<i64>,
    /// Most frequent entry glyph of the day, `None` when nothing was written.
    pub mood_emoji: Option<String>,
    pub is_today: bool,
    /// False for the leading and trailing days a month grid borrows from
    /// neighbouring months.
    pub in_month: bool,
}

/// Entries whose effective time falls on `day` (UTC).
pub fn entries_on(entries: &[JournalEntry], day: NaiveDate) -> Vec<&JournalEntry> {
    entries.iter().filter(|entry| entry.day() == day).collect()
}

/// The most common glyph among `entries`.
///
/// On a tie the glyph seen later wins.
pub fn most_popular_emoji<'a, I>(entries: I) -> Option<String>
where
    I: IntoIterator<Item = &'a JournalEntry>,
{
    let mut tally = Tally::new();
    for entry in entries {
        tally.add(entry.mood_emoji());
    }
    tally.last_leader().map(str::to_string)
}

fn start_of_week(day: NaiveDate) -> NaiveDate {
    day - Duration::days(day.weekday().num_days_from_sunday() as i64)
}

/// The seven days of the Sunday-started week containing `today`.
pub fn week_days(today: NaiveDate) -> Vec<NaiveDate> {
    start_of_week(today).iter_days().take(7).collect()
}

/// Six Sunday-started weeks covering `month` of `year`, or `None` for an
/// invalid month.
pub fn month_grid(year: i32, month: u32) -> Option<Vec<NaiveDate>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    Some(
        start_of_week(first)
            .iter_days()
            .take(MONTH_GRID_DAYS as usize)
            .collect(),
    )
}

/// Builds a calendar cell for each day in `days`.
///
/// `month` marks which cells belong to the displayed month; pass `None` for a
/// week view, where every day counts as in range.
pub fn build_days(
    entries: &[JournalEntry],
    days: &[NaiveDate],
    today: NaiveDate,
    month: Option<u32>,
) -> Vec<CalendarDay> {
    days.iter()
        .map(|&date| {
            let on_day = entries_on(entries, date);
            CalendarDay {
                date,
                entry_ids: on_day.iter().map(|entry| entry.id).collect(),
                mood_emoji: most_popular_emoji(on_day),
                is_today: date == today,
                in_month: month.map_or(true, |m| date.month() == m),
            }
        })
        .collect()
}

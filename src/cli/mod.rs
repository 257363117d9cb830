//! Command-line interface definitions.

pub mod output;

use crate::constants::DEFAULT_ENTRIES_PER_PAGE;
use crate::journal_core::Period;
use crate::ops::CalendarView;
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// On-device insights for your journal entries
#[derive(Parser, Debug)]
#[command(name = "reverie", about = "On-device insights for your journal entries")]
#[command(author, version, long_about = None)]
pub struct CliArgs {
    /// Path to the journal entries JSON file (overrides REVERIE_ENTRIES)
    #[arg(long, global = true, value_name = "PATH")]
    pub entries: Option<PathBuf>,

    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Reflect on every entry when the journal holds demonstration data
    #[arg(long, global = true)]
    pub demo_bypass: bool,

    /// Enable debug logging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Classify the sentiment of a piece of text
    Sentiment {
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Detect the life themes a piece of text touches on
    Themes {
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Suggest writing prompts based on recent entries
    Prompts,

    /// Summarize the past week or month
    Reflect {
        /// Period to reflect on (week or month)
        #[arg(short, long, default_value_t = Period::Week)]
        period: Period,
    },

    /// Show mood distribution, frequent themes, prompts and a reflection
    Insights {
        /// Period to analyze (week or month)
        #[arg(short, long, default_value_t = Period::Week)]
        period: Period,
    },

    /// Show entries and moods per day
    Calendar {
        /// Calendar layout
        #[arg(long, value_enum, default_value_t = ViewKind::Month)]
        view: ViewKind,

        /// Month to show (format: YYYY-MM); implies the month view
        #[arg(long, value_name = "YYYY-MM")]
        month: Option<YearMonth>,
    },

    /// List entries a page at a time
    List {
        /// Page number, starting at 1
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Entries per page
        #[arg(long, default_value_t = DEFAULT_ENTRIES_PER_PAGE)]
        per_page: usize,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Week,
    Month,
}

/// A calendar month given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl FromStr for YearMonth {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("invalid month '{}', expected YYYY-MM", s);
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
        Ok(YearMonth { year, month })
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Picks the calendar to show. An explicit month always wins; otherwise the
/// month view shows the month containing `today`.
pub fn resolve_calendar_view(
    view: ViewKind,
    month: Option<YearMonth>,
    today: NaiveDate,
) -> CalendarView {
    match (view, month) {
        (_, Some(YearMonth { year, month })) => CalendarView::Month { year, month },
        (ViewKind::Month, None) => CalendarView::current_month(today),
        (ViewKind::Week, None) => CalendarView::Week,
    }
}

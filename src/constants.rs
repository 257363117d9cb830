//! Constants used throughout the application.
//!
//! This module contains the constants used in reverie, organized into logical
//! groups. Canned text shown to the user (prompts, insights) lives here as well
//! so the analysis modules stay focused on the rules that select it.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "reverie";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "On-device insights for your journal entries";

// Logging
/// Log format identifier for plain text.
pub const LOG_FORMAT_TEXT: &str = "text";
/// Log format identifier for JSON.
pub const LOG_FORMAT_JSON: &str = "json";
/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Service name used in tracing spans and structured logs.
pub const TRACING_SERVICE_NAME: &str = "reverie";
/// Name for the root tracing span covering an application invocation.
pub const TRACING_ROOT_SPAN_NAME: &str = "app_invocation";

// Configuration Keys & Environment Variables
/// Environment variable for the path of the journal entries file.
pub const ENV_VAR_REVERIE_ENTRIES: &str = "REVERIE_ENTRIES";
/// Environment variable that enables the demo-data bypass in period filtering.
pub const ENV_VAR_REVERIE_DEMO_BYPASS: &str = "REVERIE_DEMO_BYPASS";
/// Environment variable for the default log filter.
pub const ENV_VAR_REVERIE_LOG_LEVEL: &str = "REVERIE_LOG_LEVEL";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Default location of the entries file, relative to the home directory.
pub const DEFAULT_ENTRIES_SUBPATH: &str = "Documents/reverie/journalEntries.json";
/// Key under which a browser local-storage dump keeps the entry array.
pub const STORAGE_KEY: &str = "journalEntries";
/// Placeholder string for redacted information in debug output.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED_PATH]";

// Sentiment
/// A label wins only when its share of matched tokens is strictly above this.
pub const SENTIMENT_RATIO_THRESHOLD: f64 = 0.3;

// Prompts
/// Number of most recent entries inspected when generating prompts.
pub const PROMPT_RECENT_ENTRIES: usize = 5;
/// Maximum number of prompts returned.
pub const MAX_PROMPTS: usize = 5;
/// A theme must appear in more than this many recent entries to earn prompts.
pub const PROMPT_THEME_MIN_OCCURRENCES: usize = 1;

/// Prompts offered when there are no entries yet.
pub const FALLBACK_PROMPTS: [&str; 5] = [
    "What's on your mind today?",
    "How are you feeling right now?",
    "What made you smile today?",
    "What are you grateful for?",
    "What's one thing you learned today?",
];

pub const WORK_PROMPTS: [&str; 2] = [
    "How did work go today? Any new challenges or wins?",
    "What's one thing you accomplished at work recently?",
];

pub const FAMILY_PROMPTS: [&str; 2] = [
    "How are things with your family lately?",
    "What's a favorite memory with family you've been thinking about?",
];

pub const HEALTH_PROMPTS: [&str; 2] = [
    "How are you taking care of yourself today?",
    "What's one healthy choice you made recently?",
];

/// Offered when recent entries lean negative.
pub const COMFORT_PROMPTS: [&str; 3] = [
    "What's one thing that brought you comfort today?",
    "How did you find moments of calm in your day?",
    "What's something you're looking forward to?",
];

/// Offered when recent entries lean positive.
pub const MOMENTUM_PROMPTS: [&str; 2] = [
    "What's contributing to your positive energy lately?",
    "How can you carry this good feeling forward?",
];

/// Always appended last; the first to be dropped on truncation.
pub const CLOSING_PROMPTS: [&str; 3] = [
    "What's one thing you're grateful for today?",
    "How did you grow or learn something new today?",
    "What's a small win you had today?",
];

// Reflections
/// Days covered by a weekly reflection.
pub const WEEK_DAYS: i64 = 7;
/// Months covered by a monthly reflection.
pub const MONTH_MONTHS: u32 = 1;
/// Number of themes listed in a weekly reflection.
pub const WEEK_TOP_THEMES: usize = 3;
/// Number of themes listed in a monthly reflection.
pub const MONTH_TOP_THEMES: usize = 5;
/// Text used in the summary sentence when no theme was detected.
pub const NO_THEMES_PHRASE: &str = "general reflection and personal growth";
/// Exclusive lower bound (epoch ms) of the demonstration data range.
pub const DEMO_DATA_START_MS: i64 = 1_730_000_000_000;
/// Exclusive upper bound (epoch ms) of the demonstration data range.
pub const DEMO_DATA_END_MS: i64 = 1_760_000_000_000;

pub const WEEK_WORK_INSIGHT: &str =
    "You wrote about work frequently this week. Consider how work-life balance is going.";
pub const WEEK_FAMILY_INSIGHT: &str =
    "Family was a recurring theme. How are your relationships feeling?";
pub const WEEK_POSITIVE_INSIGHT: &str =
    "You've been feeling quite positive this week! What's contributing to this energy?";
pub const WEEK_NEGATIVE_INSIGHT: &str =
    "This week had some challenges. Remember to be gentle with yourself.";

pub const MONTH_WORK_INSIGHT: &str =
    "Work has been a major focus this month. Consider your work-life balance.";
pub const MONTH_FAMILY_INSIGHT: &str =
    "Family relationships have been important to you this month.";
pub const MONTH_HEALTH_INSIGHT: &str =
    "You've been thinking about health and wellness. How are you feeling?";
pub const MONTH_POSITIVE_INSIGHT: &str =
    "You've had a very positive month! What's been contributing to this?";
pub const MONTH_NEGATIVE_INSIGHT: &str =
    "This month had its challenges. Remember that growth often comes from difficult times.";

// Dashboard & Calendar
/// Number of themes shown in the recurring-themes list.
pub const THEME_FREQUENCY_LIMIT: usize = 8;
/// Glyphs assigned to entries that have no explicit emoji, indexed by `id mod len`.
pub const EMOJI_TABLE: [&str; 10] = [
    "\u{1F4DD}", // memo
    "\u{1F60A}", // smiling face
    "\u{1F331}", // seedling
    "\u{2600}\u{FE0F}", // sun
    "\u{1F319}", // crescent moon
    "\u{1F4AD}", // thought balloon
    "\u{2615}",  // hot beverage
    "\u{1F33F}", // herb
    "\u{2728}",  // sparkles
    "\u{1F308}", // rainbow
];
/// Number of days in a month calendar grid (six Sunday-started weeks).
pub const MONTH_GRID_DAYS: i64 = 42;
/// Entries shown per page in the entry list.
pub const DEFAULT_ENTRIES_PER_PAGE: usize = 3;

// Date/Time
/// Date format string for ISO date format (YYYY-MM-DD).
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";
/// Month format accepted by the calendar command (YYYY-MM).
pub const MONTH_FORMAT: &str = "%Y-%m";

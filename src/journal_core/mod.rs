//! Core journal types without I/O operations.
//!
//! This module contains the `JournalEntry` model as it is read from the entry
//! store, the `Period` used for reflections, and small pure helpers such as
//! emoji assignment and pagination. Entries arrive in the loose shape the
//! browser application persisted (`date`, `timestamp` and `id` all usable as a
//! time source); that shape is resolved into a single effective timestamp once,
//! when the entry is deserialized or constructed.

use crate::constants::{
    DATE_FORMAT_ISO, EMOJI_TABLE, MONTH_MONTHS, MONTH_TOP_THEMES, WEEK_DAYS, WEEK_TOP_THEMES,
};
use chrono::{DateTime, Duration, Months, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Datetime layouts accepted for textual `date` values, tried in order.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%m/%d/%Y, %I:%M:%S %p",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y, %H:%M:%S",
];

/// Date-only layouts accepted for textual `date` values; resolved to midnight UTC.
const DATE_FORMATS: &[&str] = &[DATE_FORMAT_ISO, "%m/%d/%Y"];

/// The `date` field of a stored entry.
///
/// The browser application wrote either a locale string (`"10/15/2026, 3:04:05 PM"`)
/// or a millisecond number, so both are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateField {
    /// Milliseconds since the Unix epoch.
    Millis(i64),
    /// A human-readable date or datetime.
    Text(String),
}

impl DateField {
    /// Reads a stored `date` value; numbers outside `i64` and non-scalar
    /// values yield `None`.
    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_i64().map(DateField::Millis),
            Value::String(text) => Some(DateField::Text(text)),
            _ => None,
        }
    }

    /// Interprets the field as a UTC instant, or `None` if it cannot be parsed.
    ///
    /// Naive datetimes are taken to be UTC.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            DateField::Millis(ms) => DateTime::<Utc>::from_timestamp_millis(*ms),
            DateField::Text(text) => parse_date_text(text),
        }
    }
}

fn parse_date_text(text: &str) -> Option<DateTime<Utc>> {
    // Recent browsers put a narrow no-break space before AM/PM.
    let text = text.trim().replace('\u{202F}', " ");

    if let Ok(dt) = DateTime::parse_from_rfc3339(&text) {
        return Some(dt.with_timezone(&Utc));
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(&text, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(&text, fmt).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc())
}

/// Resolves the instant used to place an entry in time: `timestamp`, else a
/// parseable `date`, else `id` as epoch milliseconds.
fn resolve_effective_at(timestamp: Option<i64>, date: Option<&DateField>, id: i64) -> DateTime<Utc> {
    timestamp
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .or_else(|| date.and_then(DateField::to_datetime))
        .or_else(|| DateTime::<Utc>::from_timestamp_millis(id))
        .unwrap_or_default()
}

/// Accepts any JSON for `date`, keeping only a number or a string.
fn lenient_date<'de, D>(deserializer: D) -> Result<Option<DateField>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(DateField::from_value))
}

/// Accepts any JSON for `timestamp`, keeping only an integer.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_i64()))
}

/// The on-disk shape of an entry. Every field except `id` may be missing or null;
/// an unusable `date` or `timestamp` is dropped so the entry falls back to `id`.
#[derive(Debug, Deserialize)]
struct RawEntry {
    id: i64,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    tags: Option<Vec<String>>,
    #[serde(default)]
    emoji: Option<String>,
    #[serde(default)]
    images: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient_date")]
    date: Option<DateField>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    timestamp: Option<i64>,
}

impl From<RawEntry> for JournalEntry {
    fn from(raw: RawEntry) -> Self {
        let effective_at = resolve_effective_at(raw.timestamp, raw.date.as_ref(), raw.id);
        JournalEntry {
            id: raw.id,
            title: raw.title.unwrap_or_default(),
            content: raw.content.unwrap_or_default(),
            tags: raw.tags.unwrap_or_default(),
            emoji: raw.emoji,
            images: raw.images.unwrap_or_default(),
            date: raw.date,
            timestamp: raw.timestamp,
            effective_at,
        }
    }
}

/// A single journal entry.
///
/// Entries are owned by the entry store; analysis only ever reads them.
///
/// # Examples
///
/// ```
/// use reverie::journal_core::JournalEntry;
///
/// let entry = JournalEntry::new(1_700_000_000_000)
///     .with_title("Tuesday")
///     .with_content("Grateful for a calm morning");
///
/// assert_eq!(entry.effective_at().timestamp_millis(), 1_700_000_000_000);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawEntry", rename_all = "camelCase")]
pub struct JournalEntry {
    /// Unique identifier; creation time in epoch milliseconds.
    pub id: i64,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    effective_at: DateTime<Utc>,
}

impl JournalEntry {
    /// Creates an empty entry whose time source is its `id`.
    pub fn new(id: i64) -> Self {
        JournalEntry::from(RawEntry {
            id,
            title: None,
            content: None,
            tags: None,
            emoji: None,
            images: None,
            date: None,
            timestamp: None,
        })
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = Some(emoji.into());
        self
    }

    /// Sets the explicit timestamp and re-resolves the effective time.
    pub fn with_timestamp(mut self, timestamp_ms: i64) -> Self {
        self.timestamp = Some(timestamp_ms);
        self.effective_at = resolve_effective_at(self.timestamp, self.date.as_ref(), self.id);
        self
    }

    /// Sets the `date` field and re-resolves the effective time.
    pub fn with_date(mut self, date: DateField) -> Self {
        self.date = Some(date);
        self.effective_at = resolve_effective_at(self.timestamp, self.date.as_ref(), self.id);
        self
    }

    /// The instant this entry is filed under: `timestamp`, else `date`, else `id`.
    pub fn effective_at(&self) -> DateTime<Utc> {
        self.effective_at
    }

    /// The calendar day (UTC) this entry belongs to.
    pub fn day(&self) -> NaiveDate {
        self.effective_at.date_naive()
    }

    /// The entry's glyph: the explicit emoji, or one assigned from `id`.
    ///
    /// ```
    /// use reverie::journal_core::JournalEntry;
    ///
    /// let entry = JournalEntry::new(10);
    /// assert_eq!(entry.mood_emoji(), JournalEntry::new(20).mood_emoji());
    /// assert_eq!(entry.clone().with_emoji("🎉").mood_emoji(), "🎉");
    /// ```
    pub fn mood_emoji(&self) -> &str {
        match self.emoji.as_deref() {
            Some(emoji) if !emoji.is_empty() => emoji,
            _ => assigned_emoji(self.id),
        }
    }
}

/// Deterministic emoji for an entry id: `EMOJI_TABLE[id mod len]`.
pub fn assigned_emoji(id: i64) -> &'static str {
    let index = id.rem_euclid(EMOJI_TABLE.len() as i64) as usize;
    EMOJI_TABLE[index]
}

/// The window a reflection covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// The seven days up to now.
    Week,
    /// One calendar month up to now.
    Month,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Week => "week",
            Period::Month => "month",
        }
    }

    /// The earliest instant still inside this period, relative to `now`.
    ///
    /// Month subtraction clamps to the end of the shorter month
    /// (March 31 minus one month is February 28 or 29).
    pub fn cutoff(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            Period::Week => now - Duration::days(WEEK_DAYS),
            Period::Month => now
                .checked_sub_months(Months::new(MONTH_MONTHS))
                .unwrap_or(DateTime::<Utc>::MIN_UTC),
        }
    }

    /// How many theme names a reflection over this period lists.
    pub fn top_theme_count(&self) -> usize {
        match self {
            Period::Week => WEEK_TOP_THEMES,
            Period::Month => MONTH_TOP_THEMES,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "week" | "weekly" => Ok(Period::Week),
            "month" | "monthly" => Ok(Period::Month),
            other => Err(format!("unknown period '{}', expected 'week' or 'month'", other)),
        }
    }
}

/// One page of entries for the list view.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<'a> {
    pub entries: &'a [JournalEntry],
    /// 1-based page number actually shown.
    pub page: usize,
    pub total_pages: usize,
}

/// Slices `entries` into pages of `per_page`, clamping `page` into range.
///
/// An empty journal yields a single empty page 1 with `total_pages == 0`.
pub fn paginate(entries: &[JournalEntry], page: usize, per_page: usize) -> Page<'_> {
    let per_page = per_page.max(1);
    let total_pages = entries.len().div_ceil(per_page);
    let page = page.clamp(1, total_pages.max(1));
    let start = ((page - 1) * per_page).min(entries.len());
    let end = (start + per_page).min(entries.len());

    Page {
        entries: &entries[start..end],
        page,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone, Timelike};

    fn ms(y: i32, m: u32, d: u32) -> i64 {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap().timestamp_millis()
    }

    #[test]
    fn test_effective_at_prefers_timestamp() {
        let entry: JournalEntry = serde_json::from_str(&format!(
            r#"{{"id": {}, "date": "2024-02-01", "timestamp": {}}}"#,
            ms(2024, 3, 1),
            ms(2024, 1, 1)
        ))
        .unwrap();

        assert_eq!(entry.day(), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }

    #[test]
    fn test_effective_at_falls_back_to_date_then_id() {
        let dated: JournalEntry = serde_json::from_str(&format!(
            r#"{{"id": {}, "date": "2024-02-01"}}"#,
            ms(2024, 3, 1)
        ))
        .unwrap();
        assert_eq!(dated.day(), NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());

        let undated: JournalEntry =
            serde_json::from_str(&format!(r#"{{"id": {}}}"#, ms(2024, 3, 1))).unwrap();
        assert_eq!(undated.day(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn test_malformed_date_falls_back_to_id() {
        let entry: JournalEntry = serde_json::from_str(&format!(
            r#"{{"id": {}, "date": "sometime last spring"}}"#,
            ms(2024, 3, 1)
        ))
        .unwrap();

        assert_eq!(entry.day(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn test_string_timestamp_falls_back_to_date() {
        let entry: JournalEntry = serde_json::from_str(&format!(
            r#"{{"id": {}, "date": "2024-02-01", "timestamp": "{}"}}"#,
            ms(2024, 3, 1),
            ms(2024, 1, 1)
        ))
        .unwrap();

        assert_eq!(entry.timestamp, None);
        assert_eq!(entry.day(), NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
    }

    #[test]
    fn test_unusable_time_fields_fall_back_to_id() {
        let id = ms(2024, 3, 1);
        for fields in [
            r#""timestamp": "1700000000000""#,
            r#""timestamp": 1700000000000.5"#,
            r#""date": 1700000000000.5"#,
            r#""date": {}"#,
            r#""date": [2024, 1, 1], "timestamp": true"#,
        ] {
            let entry: JournalEntry =
                serde_json::from_str(&format!(r#"{{"id": {}, {}}}"#, id, fields)).unwrap();

            assert_eq!(entry.effective_at().timestamp_millis(), id, "fields: {}", fields);
            assert_eq!(entry.date, None);
            assert_eq!(entry.timestamp, None);
        }
    }

    #[test]
    fn test_browser_locale_date_is_parsed() {
        let field = DateField::Text("10/5/2026, 3:04:05 PM".to_string());
        let dt = field.to_datetime().unwrap();
        assert_eq!(dt.month(), 10);
        assert_eq!(dt.day(), 5);
        assert_eq!(dt.hour(), 15);

        let narrow = DateField::Text("10/5/2026, 3:04:05\u{202F}PM".to_string());
        assert_eq!(narrow.to_datetime(), Some(dt));
    }

    #[test]
    fn test_numeric_date_field() {
        let entry: JournalEntry = serde_json::from_str(&format!(
            r#"{{"id": 1, "date": {}}}"#,
            ms(2025, 6, 30)
        ))
        .unwrap();

        assert_eq!(entry.date, Some(DateField::Millis(ms(2025, 6, 30))));
        assert_eq!(entry.day(), NaiveDate::from_ymd_opt(2025, 6, 30).unwrap());
    }

    #[test]
    fn test_null_fields_become_empty() {
        let entry: JournalEntry =
            serde_json::from_str(r#"{"id": 7, "title": null, "content": null, "tags": null}"#)
                .unwrap();

        assert_eq!(entry.title, "");
        assert_eq!(entry.content, "");
        assert!(entry.tags.is_empty());
        assert!(entry.emoji.is_none());
    }

    #[test]
    fn test_builder_re_resolves_effective_at() {
        let entry = JournalEntry::new(ms(2024, 1, 1));
        assert_eq!(entry.day(), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());

        let entry = entry.with_timestamp(ms(2024, 5, 5));
        assert_eq!(entry.day(), NaiveDate::from_ymd_opt(2024, 5, 5).unwrap());
    }

    #[test]
    fn test_assigned_emoji_wraps_by_id() {
        let len = EMOJI_TABLE.len() as i64;
        assert_eq!(assigned_emoji(0), EMOJI_TABLE[0]);
        assert_eq!(assigned_emoji(3), assigned_emoji(3 + len));
        assert_eq!(assigned_emoji(-1), EMOJI_TABLE[EMOJI_TABLE.len() - 1]);
    }

    #[test]
    fn test_empty_emoji_is_treated_as_unset() {
        let entry = JournalEntry::new(4).with_emoji("");
        assert_eq!(entry.mood_emoji(), assigned_emoji(4));
    }

    #[test]
    fn test_period_cutoff() {
        let now = Utc.with_ymd_and_hms(2024, 3, 31, 9, 0, 0).unwrap();
        assert_eq!(
            Period::Week.cutoff(now),
            Utc.with_ymd_and_hms(2024, 3, 24, 9, 0, 0).unwrap()
        );
        assert_eq!(
            Period::Month.cutoff(now),
            Utc.with_ymd_and_hms(2024, 2, 29, 9, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_period_from_str() {
        assert_eq!("week".parse::<Period>().unwrap(), Period::Week);
        assert_eq!("Monthly".parse::<Period>().unwrap(), Period::Month);
        assert!("year".parse::<Period>().is_err());
    }

    #[test]
    fn test_paginate() {
        let entries: Vec<JournalEntry> = (1..=7).map(JournalEntry::new).collect();

        let first = paginate(&entries, 1, 3);
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.entries.len(), 3);
        assert_eq!(first.entries[0].id, 1);

        let last = paginate(&entries, 3, 3);
        assert_eq!(last.entries.len(), 1);
        assert_eq!(last.entries[0].id, 7);

        // Out-of-range pages clamp
        assert_eq!(paginate(&entries, 99, 3).page, 3);
        assert_eq!(paginate(&entries, 0, 3).page, 1);
    }

    #[test]
    fn test_paginate_empty() {
        let page = paginate(&[], 2, 3);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 0);
        assert!(page.entries.is_empty());
    }
}

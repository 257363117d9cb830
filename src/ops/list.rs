//! Paged listing of stored entries.

use crate::analysis::{classify_sentiment, detect_themes, SentimentLabel, Theme};
use crate::errors::AppResult;
use crate::journal_core::{paginate, JournalEntry};
use crate::store::EntryStore;
use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

/// One entry as shown in the list view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListedEntry {
    pub id: i64,
    pub title: String,
    pub day: NaiveDate,
    pub emoji: String,
    pub tags: Vec<String>,
    pub sentiment: SentimentLabel,
    pub themes: Vec<Theme>,
    pub content: String,
}

impl From<&JournalEntry> for ListedEntry {
    fn from(entry: &JournalEntry) -> Self {
        ListedEntry {
            id: entry.id,
            title: entry.title.clone(),
            day: entry.day(),
            emoji: entry.mood_emoji().to_string(),
            tags: entry.tags.clone(),
            sentiment: classify_sentiment(&entry.content),
            themes: detect_themes(&entry.content)
                .into_iter()
                .map(|found| found.theme)
                .collect(),
            content: entry.content.clone(),
        }
    }
}

/// One page of the entry list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryListing {
    pub page: usize,
    pub total_pages: usize,
    pub total_entries: usize,
    pub entries: Vec<ListedEntry>,
}

/// Lists page `page` (1-based) of stored entries, `per_page` at a time.
///
/// Out-of-range pages are clamped to the nearest valid page.
pub fn list_entries(store: &dyn EntryStore, page: usize, per_page: usize) -> AppResult<EntryListing> {
    let entries = store.load_entries()?;
    let shown = paginate(&entries, page, per_page);

    info!(
        page = shown.page,
        total_pages = shown.total_pages,
        "Listed entries"
    );

    Ok(EntryListing {
        page: shown.page,
        total_pages: shown.total_pages,
        total_entries: entries.len(),
        entries: shown.entries.iter().map(ListedEntry::from).collect(),
    })
}

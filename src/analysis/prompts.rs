//! Writing prompts tailored to recent entries.

use super::sentiment::{classify_sentiment, SentimentLabel};
use super::tally::Tally;
use super::themes::{detect_themes, Theme};
use crate::constants::{
    CLOSING_PROMPTS, COMFORT_PROMPTS, FALLBACK_PROMPTS, FAMILY_PROMPTS, HEALTH_PROMPTS,
    MAX_PROMPTS, MOMENTUM_PROMPTS, PROMPT_RECENT_ENTRIES, PROMPT_THEME_MIN_OCCURRENCES,
    WORK_PROMPTS,
};
use crate::journal_core::JournalEntry;
use tracing::debug;

/// Themes that have dedicated prompts, in the order their blocks are emitted.
const TOPIC_PROMPTS: [(Theme, &[&str]); 3] = [
    (Theme::Work, &WORK_PROMPTS),
    (Theme::Family, &FAMILY_PROMPTS),
    (Theme::Health, &HEALTH_PROMPTS),
];

/// Generates up to five writing prompts from the most recent entries.
///
/// `entries` must already be in chronological order; the last five are used.
/// Prompts are assembled in priority order (topic prompts for themes seen in
/// more than one recent entry, then a mood block, then generic closing
/// prompts) and the list is cut at five, so generic prompts are the first to
/// go. With no entries at all a fixed set of starter prompts is returned.
///
/// # Examples
///
/// ```
/// use reverie::analysis::generate_prompts;
///
/// let prompts = generate_prompts(&[]);
/// assert_eq!(prompts.len(), 5);
/// assert_eq!(prompts[0], "What's on your mind today?");
/// ```
pub fn generate_prompts(entries: &[JournalEntry]) -> Vec<String> {
    if entries.is_empty() {
        debug!("No entries, using fallback prompts");
        return FALLBACK_PROMPTS.iter().map(|p| p.to_string()).collect();
    }

    let recent = &entries[entries.len().saturating_sub(PROMPT_RECENT_ENTRIES)..];

    let mut theme_counts = Tally::new();
    let mut sentiment_counts = Tally::new();
    for entry in recent {
        for found in detect_themes(&entry.content) {
            theme_counts.add(found.theme);
        }
        sentiment_counts.add(classify_sentiment(&entry.content));
    }

    let mut prompts: Vec<&str> = Vec::new();

    for (theme, theme_prompts) in TOPIC_PROMPTS {
        if theme_counts.get(&theme) > PROMPT_THEME_MIN_OCCURRENCES {
            prompts.extend_from_slice(theme_prompts);
        }
    }

    let positive = sentiment_counts.get(&SentimentLabel::Positive);
    let negative = sentiment_counts.get(&SentimentLabel::Negative);
    if negative > positive {
        prompts.extend_from_slice(&COMFORT_PROMPTS);
    } else if positive > negative {
        prompts.extend_from_slice(&MOMENTUM_PROMPTS);
    }

    prompts.extend_from_slice(&CLOSING_PROMPTS);

    debug!(
        recent = recent.len(),
        candidates = prompts.len(),
        "Assembled prompt candidates"
    );

    prompts
        .into_iter()
        .take(MAX_PROMPTS)
        .map(str::to_string)
        .collect()
}

//! Behavioural checks of the public analysis API over realistic journals.

use chrono::{DateTime, Duration, TimeZone, Utc};
use reverie::analysis::{
    classify_sentiment, detect_themes, generate_prompts, summarize_period, AnalysisOptions,
    SentimentLabel, Theme,
};
use reverie::journal_core::{JournalEntry, Period};
use reverie::store::parse_entries;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 15, 18, 30, 0).unwrap()
}

fn written(days_ago: i64, content: &str) -> JournalEntry {
    JournalEntry::new((now() - Duration::days(days_ago)).timestamp_millis()).with_content(content)
}

#[test]
fn test_analysis_is_deterministic() {
    let text = "Grateful for my sister, stressed about the exam";
    assert_eq!(classify_sentiment(text), classify_sentiment(text));
    assert_eq!(detect_themes(text), detect_themes(text));
}

#[test]
fn test_empty_inputs() {
    assert_eq!(classify_sentiment(""), SentimentLabel::Neutral);
    assert!(detect_themes("").is_empty());
    assert_eq!(generate_prompts(&[]).len(), 5);

    let reflection = summarize_period(&[], Period::Week, now(), &AnalysisOptions::default());
    assert_eq!(reflection.summary, "No entries this week to reflect on.");
    assert!(reflection.themes.is_empty());
    assert!(reflection.insights.is_empty());
    assert_eq!(reflection.sentiment, SentimentLabel::Neutral);
}

#[test]
fn test_week_reflection_from_stored_document() {
    let document = serde_json::json!({
        "journalEntries": [
            { "id": (now() - Duration::days(20)).timestamp_millis(), "content": "vacation trip" },
            { "id": (now() - Duration::days(2)).timestamp_millis(), "content": "work was great" },
            { "id": (now() - Duration::days(1)).timestamp_millis(), "content": "office deadline, proud" },
            { "id": 0, "date": (now() - Duration::days(1)).to_rfc3339(), "content": "meeting" }
        ]
    })
    .to_string();

    let entries = parse_entries(&document).unwrap();
    let reflection = summarize_period(&entries, Period::Week, now(), &AnalysisOptions::default());

    assert_eq!(reflection.entry_count, 3);
    assert_eq!(reflection.themes, vec![Theme::Work]);
    assert_eq!(
        reflection.summary,
        "This week you wrote 3 entries with themes around work."
    );
    assert!(reflection
        .insights
        .iter()
        .any(|i| i.to_lowercase().contains("work")));
}

#[test]
fn test_month_reflection_excludes_older_entries() {
    let entries = vec![
        written(45, "sad lonely"),
        written(10, "happy family dinner with mom"),
        written(2, "grateful for my dad"),
    ];

    let reflection = summarize_period(&entries, Period::Month, now(), &AnalysisOptions::default());
    assert_eq!(reflection.entry_count, 2);
    assert_eq!(reflection.themes, vec![Theme::Family]);
    assert_eq!(reflection.sentiment, SentimentLabel::Positive);
}

#[test]
fn test_prompts_only_read_latest_entries() {
    let mut entries: Vec<JournalEntry> = (0..4)
        .map(|i| written(30 - i, "work project boss"))
        .collect();
    entries.extend((0..5).map(|i| written(5 - i, "quiet evening")));

    let prompts = generate_prompts(&entries);
    assert!(!prompts.iter().any(|p| p.contains("work")));
}

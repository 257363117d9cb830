//! Plain-text rendering of command results.

use crate::analysis::{ReflectionSummary, SentimentLabel, ThemeMatch};
use crate::ops::{CalendarReport, EntryListing, InsightsReport, TextAnalysis};
use std::fmt::Write;

/// Renders a list of prompts, one numbered line each.
pub fn render_prompts(prompts: &[String]) -> String {
    let mut out = String::new();
    for (i, prompt) in prompts.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, prompt);
    }
    out
}

pub fn render_sentiment(analysis: &TextAnalysis) -> String {
    format!(
        "{} (positive: {}, negative: {}, neutral: {})\n",
        analysis.sentiment,
        analysis.score.positive,
        analysis.score.negative,
        analysis.score.neutral
    )
}

pub fn render_themes(themes: &[ThemeMatch]) -> String {
    if themes.is_empty() {
        return "No themes detected\n".to_string();
    }

    let mut out = String::new();
    for found in themes {
        let _ = writeln!(
            out,
            "{:<14} {:>5.1}%  ({} keyword{})",
            found.theme.as_str(),
            found.confidence * 100.0,
            found.matches,
            if found.matches == 1 { "" } else { "s" }
        );
    }
    out
}

pub fn render_reflection(reflection: &ReflectionSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", reflection.summary);
    let _ = writeln!(out, "Overall mood: {}", reflection.sentiment);
    for insight in &reflection.insights {
        let _ = writeln!(out, "- {}", insight);
    }
    out
}

pub fn render_insights(report: &InsightsReport) -> String {
    let mut out = String::new();
    let dist = &report.sentiment;

    let _ = writeln!(
        out,
        "Insights for the past {} ({} of {} entries)",
        report.period,
        dist.total(),
        report.total_entries
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "Mood ({})", report.mood_trend.as_str());
    for label in [
        SentimentLabel::Positive,
        SentimentLabel::Negative,
        SentimentLabel::Neutral,
    ] {
        let _ = writeln!(
            out,
            "  {:<9} {:>3} ({}%)",
            label.as_str(),
            dist.count(label),
            dist.percentage(label)
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Themes");
    if report.themes.is_empty() {
        let _ = writeln!(out, "  none yet");
    }
    for freq in &report.themes {
        let _ = writeln!(out, "  {:<14} {}", freq.theme.as_str(), freq.count);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Prompts");
    for prompt in &report.prompts {
        let _ = writeln!(out, "  - {}", prompt);
    }

    let _ = writeln!(out);
    out.push_str(&render_reflection(&report.reflection));
    out
}

/// Renders the calendar as rows of seven days.
///
/// Each cell shows the day of month followed by the day's mood glyph, or a
/// dot when nothing was written. Days outside the displayed month are
/// bracketed and today is starred.
pub fn render_calendar(report: &CalendarReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", report.title);
    let _ = writeln!(out, "Sun   Mon   Tue   Wed   Thu   Fri   Sat");

    for week in report.days.chunks(7) {
        let cells: Vec<String> = week
            .iter()
            .map(|day| {
                let number = day.date.format("%-d").to_string();
                let mood = day.mood_emoji.as_deref().unwrap_or(".");
                let marker = if day.is_today { "*" } else { "" };
                if day.in_month {
                    format!("{}{}{}", number, marker, mood)
                } else {
                    format!("({})", number)
                }
            })
            .collect();
        let _ = writeln!(out, "{}", cells.join("  "));
    }

    let _ = writeln!(out, "{} entries", report.entry_count);
    out
}

pub fn render_listing(listing: &EntryListing) -> String {
    if listing.entries.is_empty() {
        return "No entries yet\n".to_string();
    }

    let mut out = String::new();

    for entry in &listing.entries {
        let title = if entry.title.is_empty() {
            "(untitled)"
        } else {
            entry.title.as_str()
        };
        let _ = writeln!(out, "{} {}  {}", entry.emoji, entry.day, title);
        let _ = writeln!(out, "   mood: {}", entry.sentiment);
        if !entry.themes.is_empty() {
            let themes: Vec<&str> = entry.themes.iter().map(|t| t.as_str()).collect();
            let _ = writeln!(out, "   themes: {}", themes.join(", "));
        }
        if !entry.tags.is_empty() {
            let _ = writeln!(out, "   tags: {}", entry.tags.join(", "));
        }
    }
    let _ = writeln!(
        out,
        "Page {} of {} ({} entries)",
        listing.page, listing.total_pages, listing.total_entries
    );
    out
}

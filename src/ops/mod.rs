//! High-level operations behind each CLI command.
//!
//! Every operation loads one snapshot of entries from an [`EntryStore`],
//! runs the pure analysis functions over it and returns a serializable
//! report. The current time is always passed in by the caller.
//!
//! [`EntryStore`]: crate::store::EntryStore

pub mod analyze;
pub mod calendar;
pub mod insights;
pub mod list;
pub mod reflect;

pub use analyze::{analyze_text, TextAnalysis};
pub use calendar::{calendar_view, CalendarReport, CalendarView};
pub use insights::{insights, prompts, InsightsReport};
pub use list::{list_entries, EntryListing, ListedEntry};
pub use reflect::reflect;

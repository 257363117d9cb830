/*!
# Reverie

Reverie turns a personal journal into on-device insights. It reads the
entries a journaling front end saves, and everything it derives is computed
locally with keyword rules. Nothing is sent anywhere and entries are never
modified.

## Core Features

- Classify the sentiment of text or entries (positive, negative, neutral)
- Detect life themes such as work, family or health
- Generate writing prompts from recent entries
- Summarize the past week or month with insights
- Dashboard statistics, calendar views and paged listings

## Architecture

- `analysis`: Pure sentiment, theme, prompt and reflection functions
- `journal_core`: The entry model, periods and pagination (no I/O)
- `calendar`: Per-day aggregation for calendar views
- `store`: Loading entry snapshots from disk or memory
- `ops`: Command-level operations combining a store with the analysis
- `cli`: Command-line interface handling using clap
- `config`: Configuration loading and validation
- `errors`: Error handling infrastructure

## Usage Example

```rust,no_run
use chrono::Utc;
use reverie::journal_core::Period;
use reverie::store::JsonFileStore;
use reverie::{ops, Config};

fn main() -> reverie::AppResult<()> {
    let config = Config::load()?;
    config.validate()?;

    let store = JsonFileStore::new(&config.entries_path);
    let reflection = ops::reflect(&store, Period::Week, Utc::now(), &config.analysis_options())?;
    println!("{}", reflection.summary);
    Ok(())
}
```
*/

/// Rule-based text analysis
pub mod analysis;
/// Calendar aggregation
pub mod calendar;
/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Centralized constants
pub mod constants;
/// Error types and utilities for error handling
pub mod errors;
/// Journal entry model and time handling
pub mod journal_core;
/// High-level operations behind each command
pub mod ops;
/// Entry persistence (read-only)
pub mod store;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use journal_core::{JournalEntry, Period};

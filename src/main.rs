/*!
# Reverie - On-device Journal Insights

Reverie reads the journal entries a journaling front end keeps on disk and
produces sentiment, themes, writing prompts, periodic reflections, calendar
views and paged listings. All analysis is local and rule based.

This file wires the pieces together: it parses arguments, loads
configuration, initializes tracing and dispatches the selected command.

## Usage

```text
reverie [OPTIONS] <COMMAND>

Commands:
  sentiment  Classify the sentiment of a piece of text
  themes     Detect the life themes a piece of text touches on
  prompts    Suggest writing prompts based on recent entries
  reflect    Summarize the past week or month
  insights   Show mood distribution, frequent themes, prompts and a reflection
  calendar   Show entries and moods per day
  list       List entries a page at a time

Options:
      --entries <PATH>            Path to the journal entries JSON file
      --json                      Print results as JSON instead of text
      --log-format <LOG_FORMAT>   Log output format [default: text]
      --demo-bypass               Reflect on every entry when the journal holds demonstration data
  -v, --verbose                   Enable debug logging
```

## Configuration

- `REVERIE_ENTRIES`: Entries file (defaults to "~/Documents/reverie/journalEntries.json")
- `REVERIE_DEMO_BYPASS`: Enable the demonstration data bypass
- `REVERIE_LOG_LEVEL`: Default log filter; `RUST_LOG` takes precedence
*/

use chrono::{DateTime, Utc};
use clap::Parser;
use reverie::cli::output;
use reverie::cli::{resolve_calendar_view, CliArgs, Command, LogFormat};
use reverie::config::Config;
use reverie::constants::{TRACING_ROOT_SPAN_NAME, TRACING_SERVICE_NAME};
use reverie::errors::{AppError, AppResult};
use reverie::ops;
use reverie::store::JsonFileStore;
use serde::Serialize;
use std::io;
use std::process;
use tracing::{debug, error, info, info_span};
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};
use uuid::Uuid;

fn main() {
    // Obtain the current time once; every command is evaluated against it
    let now = Utc::now();
    let args = CliArgs::parse();

    let mut config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let log_level = if args.verbose {
        "debug".to_string()
    } else {
        config.log_level.clone()
    };
    if let Err(e) = init_tracing(args.log_format, &log_level) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    let correlation_id = Uuid::new_v4().to_string();
    let root_span = info_span!(
        TRACING_ROOT_SPAN_NAME,
        service_name = TRACING_SERVICE_NAME,
        correlation_id = %correlation_id
    );
    let _guard = root_span.enter();

    if let Some(path) = args.entries.clone() {
        config.entries_path = path;
    }
    if args.demo_bypass {
        config.demo_bypass = true;
    }

    if let Err(e) = run(&args, &config, now) {
        // Logged once here at the boundary
        error!(error = %e, "Command failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_tracing(format: LogFormat, default_level: &str) -> AppResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);
    let result = match format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_current_span(true)
                    .with_span_list(false)
                    .with_writer(io::stderr),
            )
            .try_init(),
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(io::stderr),
            )
            .try_init(),
    };

    result.map_err(|e| AppError::Config(format!("Failed to initialize logging: {}", e)))
}

fn run(args: &CliArgs, config: &Config, now: DateTime<Utc>) -> AppResult<()> {
    info!("Starting reverie");
    debug!(command = ?args.command, ?config, "Dispatching command");

    let options = config.analysis_options();
    let today = now.date_naive();

    // Text commands never touch the entries file
    let open_store = || -> AppResult<JsonFileStore> {
        config.validate()?;
        Ok(JsonFileStore::new(&config.entries_path))
    };

    match &args.command {
        Command::Sentiment { text } => {
            let analysis = ops::analyze_text(&text.join(" "));
            emit(args.json, &analysis, output::render_sentiment)
        }
        Command::Themes { text } => {
            let analysis = ops::analyze_text(&text.join(" "));
            emit(args.json, &analysis.themes, |themes| output::render_themes(themes))
        }
        Command::Prompts => {
            let prompts = ops::prompts(&open_store()?)?;
            emit(args.json, &prompts, |p| output::render_prompts(p))
        }
        Command::Reflect { period } => {
            let reflection = ops::reflect(&open_store()?, *period, now, &options)?;
            emit(args.json, &reflection, output::render_reflection)
        }
        Command::Insights { period } => {
            let report = ops::insights(&open_store()?, *period, now, &options)?;
            emit(args.json, &report, output::render_insights)
        }
        Command::Calendar { view, month } => {
            let view = resolve_calendar_view(*view, *month, today);
            let report = ops::calendar_view(&open_store()?, view, today)?;
            emit(args.json, &report, output::render_calendar)
        }
        Command::List { page, per_page } => {
            let listing = ops::list_entries(&open_store()?, *page, *per_page)?;
            emit(args.json, &listing, output::render_listing)
        }
    }
}

/// Prints `value` as pretty JSON or through its text renderer.
fn emit<T, F>(json: bool, value: &T, render: F) -> AppResult<()>
where
    T: Serialize + ?Sized,
    F: FnOnce(&T) -> String,
{
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        print!("{}", render(value));
    }
    Ok(())
}

//! Configuration management for the reverie application.
//!
//! Settings come from environment variables with sensible defaults. Command
//! line flags may override them after loading (see `main.rs`).
//!
//! # Environment Variables
//!
//! - `REVERIE_ENTRIES`: Path to the journal entries JSON file (defaults to
//!   ~/Documents/reverie/journalEntries.json)
//! - `REVERIE_DEMO_BYPASS`: When `1`, `true`, `yes` or `on`, reflections use every
//!   entry if the journal holds demonstration data
//! - `REVERIE_LOG_LEVEL`: Default log filter (defaults to "info"); `RUST_LOG` wins
//!   when set
//! - `HOME`: Used for expanding the default entries path

use crate::analysis::AnalysisOptions;
use crate::constants::{
    DEFAULT_ENTRIES_SUBPATH, DEFAULT_LOG_LEVEL, ENV_VAR_HOME, ENV_VAR_REVERIE_DEMO_BYPASS,
    ENV_VAR_REVERIE_ENTRIES, ENV_VAR_REVERIE_LOG_LEVEL, REDACTED_PLACEHOLDER,
};
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::path::PathBuf;
use tracing::debug;

/// Configuration for the reverie application.
///
/// # Examples
///
/// ```
/// use reverie::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     entries_path: PathBuf::from("/path/to/journalEntries.json"),
///     demo_bypass: false,
///     log_level: "info".to_string(),
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone)]
pub struct Config {
    /// File holding the journal entries.
    pub entries_path: PathBuf,

    /// Reflect on every entry when demonstration data is present.
    pub demo_bypass: bool,

    /// Default tracing filter directive.
    pub log_level: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("entries_path", &REDACTED_PLACEHOLDER)
            .field("demo_bypass", &self.demo_bypass)
            .field("log_level", &self.log_level)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            entries_path: PathBuf::from(""),
            demo_bypass: false,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// The entries path is expanded with `shellexpand`, so `~` and `$VAR`
    /// references work.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if path expansion fails or the resulting path
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use reverie::Config;
    ///
    /// match Config::load() {
    ///     Ok(config) => println!("Reading entries from {}", config.entries_path.display()),
    ///     Err(err) => eprintln!("Failed to load config: {}", err),
    /// }
    /// ```
    pub fn load() -> AppResult<Self> {
        let entries_str = env::var(ENV_VAR_REVERIE_ENTRIES).unwrap_or_else(|_| {
            let home = env::var(ENV_VAR_HOME).unwrap_or_default();
            format!("{}/{}", home, DEFAULT_ENTRIES_SUBPATH)
        });

        let expanded_path = shellexpand::full(&entries_str)
            .map_err(|e| AppError::Config(format!("Failed to expand path: {}", e)))?;
        let entries_path = PathBuf::from(expanded_path.into_owned());

        if entries_path.as_os_str().is_empty() {
            return Err(AppError::Config("Entries path is empty".to_string()));
        }

        let demo_bypass = env::var(ENV_VAR_REVERIE_DEMO_BYPASS)
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        let log_level = env::var(ENV_VAR_REVERIE_LOG_LEVEL)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        let config = Config {
            entries_path,
            demo_bypass,
            log_level,
        };
        debug!(?config, "Loaded configuration");
        Ok(config)
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` with one of the following messages:
    /// - "Entries path is empty"
    /// - "Entries path must be an absolute path"
    pub fn validate(&self) -> AppResult<()> {
        if self.entries_path.as_os_str().is_empty() {
            return Err(AppError::Config("Entries path is empty".to_string()));
        }

        if !self.entries_path.is_absolute() {
            return Err(AppError::Config(
                "Entries path must be an absolute path".to_string(),
            ));
        }

        Ok(())
    }

    /// Analysis options derived from this configuration.
    pub fn analysis_options(&self) -> AnalysisOptions {
        AnalysisOptions {
            use_all_entries_if_demo_data_present: self.demo_bypass,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    fn setup() {
        env::remove_var(ENV_VAR_REVERIE_ENTRIES);
        env::remove_var(ENV_VAR_REVERIE_DEMO_BYPASS);
        env::remove_var(ENV_VAR_REVERIE_LOG_LEVEL);
    }

    #[test]
    fn test_debug_impl_redacts_path() {
        let config = Config {
            entries_path: PathBuf::from("/home/username/private/journalEntries.json"),
            ..Config::default()
        };

        let debug_output = format!("{:?}", config);
        assert!(debug_output.contains("[REDACTED_PATH]"));
        assert!(!debug_output.contains("/home/username/private"));
    }

    #[test]
    fn test_parse_flag() {
        for value in ["1", "true", "TRUE", "yes", "on", " on "] {
            assert!(parse_flag(value), "{value} should enable");
        }
        for value in ["0", "false", "no", "off", ""] {
            assert!(!parse_flag(value), "{value} should not enable");
        }
    }

    #[test]
    #[serial]
    fn test_load_defaults() {
        setup();
        let orig_home = env::var(ENV_VAR_HOME).ok();
        env::set_var(ENV_VAR_HOME, "/home/tester");

        let config = Config::load().unwrap();

        if let Some(val) = orig_home {
            env::set_var(ENV_VAR_HOME, val);
        }

        assert_eq!(
            config.entries_path,
            PathBuf::from("/home/tester/Documents/reverie/journalEntries.json")
        );
        assert!(!config.demo_bypass);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    #[serial]
    fn test_load_with_custom_path_and_flags() {
        setup();
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("entries.json");

        env::set_var(ENV_VAR_REVERIE_ENTRIES, &path);
        env::set_var(ENV_VAR_REVERIE_DEMO_BYPASS, "yes");
        env::set_var(ENV_VAR_REVERIE_LOG_LEVEL, "debug");
        let config = Config::load().unwrap();
        setup();

        assert_eq!(config.entries_path, path);
        assert!(config.demo_bypass);
        assert!(config.analysis_options().use_all_entries_if_demo_data_present);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_load_expands_env_references() {
        setup();
        let orig_home = env::var(ENV_VAR_HOME).ok();
        env::set_var(ENV_VAR_HOME, "/home/tester");
        env::set_var(ENV_VAR_REVERIE_ENTRIES, "$HOME/notes.json");

        let config = Config::load().unwrap();

        setup();
        if let Some(val) = orig_home {
            env::set_var(ENV_VAR_HOME, val);
        }

        assert_eq!(config.entries_path, PathBuf::from("/home/tester/notes.json"));
    }

    #[test]
    #[serial]
    fn test_load_with_unknown_variable_fails() {
        setup();
        env::set_var(ENV_VAR_REVERIE_ENTRIES, "$REVERIE_SURELY_UNSET_VAR/x.json");
        env::remove_var("REVERIE_SURELY_UNSET_VAR");

        let result = Config::load();
        setup();

        match result {
            Err(AppError::Config(msg)) => assert!(msg.contains("Failed to expand path")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_empty_path() {
        let result = Config::default().validate();
        match result {
            Err(AppError::Config(message)) => assert!(message.contains("is empty")),
            _ => panic!("Expected Config error about empty path"),
        }
    }

    #[test]
    fn test_validate_relative_path() {
        let config = Config {
            entries_path: PathBuf::from("relative/entries.json"),
            ..Config::default()
        };

        match config.validate() {
            Err(AppError::Config(message)) => {
                assert!(message.contains("must be an absolute path"))
            }
            _ => panic!("Expected Config error about relative path"),
        }
    }
}

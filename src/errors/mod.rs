//! Error handling utilities for the reverie application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur at the application boundary, as
//! well as the convenience type alias `AppResult`. The analysis functions
//! themselves are total and never produce errors; everything here comes from
//! configuration, the entry store, or rendering output.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Represents errors that can occur while reading the journal entry store.
///
/// # Examples
///
/// ```
/// use reverie::errors::StoreError;
/// use std::path::PathBuf;
///
/// let error = StoreError::Busy {
///     path: PathBuf::from("/path/to/journalEntries.json"),
/// };
///
/// assert!(format!("{}", error).contains("locked by another process"));
/// ```
#[derive(Debug, Error)]
pub enum StoreError {
    /// The entries file exists but is not a valid entry document.
    #[error("Failed to parse journal entries in {path}: {source}. The file must contain a JSON array of entries or an object with a 'journalEntries' array.")]
    Parse {
        /// The path of the file that failed to parse
        path: PathBuf,
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Another process holds an exclusive lock on the entries file.
    #[error("Journal entries file is locked by another process: {path}. Please wait for the writer to finish and try again.")]
    Busy {
        /// The path to the file that is locked
        path: PathBuf,
    },

    /// Acquiring the shared read lock failed for a technical reason.
    #[error("Failed to acquire read lock for journal entries file {path}: {source}. Please check file permissions.")]
    LockFailed {
        /// The path to the file that couldn't be locked
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Represents all possible errors that can occur in the reverie application.
///
/// Note: This type does not implement `Clone` to avoid losing error context when
/// cloning `std::io::Error` values.
///
/// # Examples
///
/// ```
/// use reverie::errors::AppError;
///
/// let error = AppError::Config("Entries path is empty".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Entries path is empty");
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from filesystem operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors reading or decoding the entry store.
    #[error("Entry store error: {0}")]
    Store(#[from] StoreError),

    /// Errors rendering results as JSON.
    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
///
/// # Examples
///
/// ```
/// use reverie::errors::{AppResult, AppError};
///
/// fn might_fail() -> AppResult<String> {
///     if false {
///         return Err(AppError::Config("Something went wrong".to_string()));
///     }
///     Ok("Operation succeeded".to_string())
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;

//! Error handling utilities for the vocalog application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.
//!
//! Missing entries are deliberately *not* errors: `get` returns an `Option`,
//! and `update`/`delete` on an unknown id are silent no-ops. Only operations
//! with a meaningful failure mode raise — import parsing and persistence I/O.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Represents specific error cases that can occur when reading or writing the
/// persistence slot.
///
/// This enum provides detailed, contextual error information for different
/// failure modes when interacting with the diary's backing store. Persistence
/// failures (quota, permissions, disk full) are caught at the store boundary
/// and surfaced through these variants rather than propagating raw I/O errors.
///
/// # Examples
///
/// ```
/// use vocalog::errors::StoreError;
/// use std::io::{self, ErrorKind};
/// use std::path::PathBuf;
///
/// let io_error = io::Error::new(ErrorKind::PermissionDenied, "permission denied");
/// let error = StoreError::PersistFailed {
///     path: PathBuf::from("/home/user/.vocalog/diary_entries_v1.json"),
///     source: io_error,
/// };
///
/// assert!(format!("{}", error).contains("Failed to persist"));
/// ```
#[derive(Debug, Error)]
pub enum StoreError {
    /// Error when the persistence slot exists but cannot be read.
    #[error("Failed to read diary data from {path}: {source}. Please check file permissions and that the directory is accessible.")]
    ReadFailed {
        /// The path to the persistence slot
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Error when writing the collection back to the persistence slot fails.
    #[error("Failed to persist diary data to {path}: {source}. Please check file permissions and available disk space.")]
    PersistFailed {
        /// The path to the persistence slot
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Error when the in-memory collection cannot be serialized.
    #[error("Failed to serialize diary entries: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Represents specific error cases that can occur when importing entries.
///
/// Import is the one core operation that reports malformed input to the
/// caller: a failed import performs no mutation, so the prior collection
/// stays fully intact.
///
/// # Examples
///
/// ```
/// use vocalog::errors::ImportError;
///
/// let error = ImportError::NotAnArray;
/// assert!(format!("{}", error).contains("JSON array"));
/// ```
#[derive(Debug, Error)]
pub enum ImportError {
    /// The input is not syntactically valid JSON.
    #[error("Import data is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// The input parsed, but its top-level shape is not an array of records.
    #[error("Import data must be a JSON array of diary entries")]
    NotAnArray,

    /// The top level is an array, but a record inside it is not a valid entry.
    #[error("Import data contains a malformed entry record: {0}")]
    MalformedEntry(#[source] serde_json::Error),
}

/// Represents all possible errors that can occur in the vocalog application.
///
/// This enum is the central error type used across the application, with
/// variants for different error categories. It uses `thiserror` for deriving
/// the `Error` trait implementation and formatted error messages.
///
/// # Examples
///
/// Creating a configuration error:
/// ```
/// use vocalog::errors::AppError;
///
/// let error = AppError::Config("Missing diary directory".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Missing diary directory");
/// ```
///
/// Converting from an IO error:
/// ```
/// use vocalog::errors::AppError;
/// use std::io::{self, ErrorKind};
///
/// let io_error = io::Error::new(ErrorKind::NotFound, "file not found");
/// let app_error: AppError = io_error.into();
///
/// match app_error {
///     AppError::Io(inner) => assert_eq!(inner.kind(), ErrorKind::NotFound),
///     _ => panic!("Expected Io variant"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from filesystem operations.
    ///
    /// This variant automatically converts from `std::io::Error` through the `From` trait.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors in diary logic at the command level (e.g. an unknown sort key,
    /// an id that resolves to no entry, an edit with no fields supplied).
    #[error("Diary error: {0}")]
    Diary(String),

    /// Errors when reading or writing the persistence slot.
    ///
    /// This variant uses a dedicated StoreError type to provide detailed
    /// information about what went wrong with the backing store.
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// Errors when importing a previously exported collection.
    ///
    /// This variant uses a dedicated ImportError type to provide detailed
    /// information about what was wrong with the imported document.
    #[error("Import error: {0}")]
    Import(#[from] ImportError),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
///
/// This type alias is used throughout the application to represent operations
/// that may fail with an `AppError`.
///
/// # Examples
///
/// ```
/// use vocalog::errors::{AppResult, AppError};
///
/// fn might_fail() -> AppResult<String> {
///     // Operation that could fail
///     if false {
///         return Err(AppError::Diary("Something went wrong".to_string()));
///     }
///     Ok("Operation succeeded".to_string())
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;

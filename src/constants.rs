//! Constants used throughout the application.
//!
//! This module contains all constants used in the vocalog application,
//! organized into logical groups. Having constants centralized makes them
//! easier to find, modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "vocalog";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "A multilingual voice diary kept in a local JSON store";

// Configuration Keys & Environment Variables
/// Environment variable for specifying the vocalog diary directory.
pub const ENV_VAR_VOCALOG_DIR: &str = "VOCALOG_DIR";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Default sub-directory name for the diary within the user's home directory.
pub const DEFAULT_DIARY_SUBDIR: &str = ".vocalog";

// File System Parameters
/// File name of the persistence slot inside the diary directory.
///
/// The `v1` suffix versions the blob format; the original browser application
/// stored its entries under the same slot name, so its exports import cleanly.
pub const STORE_FILE_NAME: &str = "diary_entries_v1.json";
/// Default POSIX permissions for newly created directories (owner read/write/execute).
#[cfg(unix)]
pub const DEFAULT_DIR_PERMISSIONS: u32 = 0o700;

// Entry Defaults
/// Fallback language-region code applied when an entry is created without one.
pub const DEFAULT_LANGUAGE_CODE: &str = "en-US";
/// Timestamp format used when a blank title is defaulted at save time.
pub const DEFAULT_TITLE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// Logging Configuration
/// Log format identifier for plain text.
pub const LOG_FORMAT_TEXT: &str = "text";
/// Log format identifier for JSON.
pub const LOG_FORMAT_JSON: &str = "json";
/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

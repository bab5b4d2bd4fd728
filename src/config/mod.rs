//! Configuration management for the vocalog application.
//!
//! This module handles loading and validating configuration settings from
//! environment variables, with sensible defaults. It supports configuring the
//! directory that holds the diary's persistence slot.
//!
//! # Environment Variables
//!
//! - `VOCALOG_DIR`: Path to the diary directory (defaults to ~/.vocalog)
//! - `HOME`: Used for expanding the default diary directory path

use crate::constants;
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Configuration for the vocalog application.
///
/// This struct holds the configuration settings needed for the application:
/// currently the directory where the diary's persistence slot lives.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use vocalog::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     diary_dir: PathBuf::from("/path/to/diary"),
/// };
/// ```
pub struct Config {
    /// Directory where the diary's persistence slot is stored.
    ///
    /// This is loaded from the VOCALOG_DIR environment variable with a
    /// fallback to ~/.vocalog if not specified.
    pub diary_dir: PathBuf,
}

impl fmt::Debug for Config {
    // The diary lives under the user's home directory; keep the path out of
    // debug output and logs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("diary_dir", &"[REDACTED_PATH]")
            .finish()
    }
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// This method reads configuration from environment variables, with
    /// fallbacks for missing values. It will expand the diary directory path
    /// using `shellexpand` to handle `~` and environment variable references.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if:
    /// - The diary directory path expansion fails
    /// - The resulting path is empty
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use vocalog::Config;
    ///
    /// match Config::load() {
    ///     Ok(config) => println!("Diary directory configured"),
    ///     Err(err) => eprintln!("Failed to load config: {}", err),
    /// }
    /// ```
    pub fn load() -> AppResult<Self> {
        // Get diary directory from VOCALOG_DIR env var, fallback to ~/.vocalog
        let diary_dir_str = env::var(constants::ENV_VAR_VOCALOG_DIR).unwrap_or_else(|_| {
            let home = env::var(constants::ENV_VAR_HOME).unwrap_or_else(|_| "".to_string());
            format!("{}/{}", home, constants::DEFAULT_DIARY_SUBDIR)
        });

        // Expand the path (handles ~ and environment variables)
        let expanded_path = shellexpand::full(&diary_dir_str)
            .map_err(|e| AppError::Config(format!("Failed to expand path: {}", e)))?;

        let diary_dir = PathBuf::from(expanded_path.into_owned());

        if diary_dir.as_os_str().is_empty() {
            return Err(AppError::Config(
                "Diary directory path is empty".to_string(),
            ));
        }

        Ok(Config { diary_dir })
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` with one of the following messages:
    /// - "Diary directory path is empty" if the diary directory path is empty
    /// - "Diary directory must be an absolute path" if the path is relative
    pub fn validate(&self) -> AppResult<()> {
        if self.diary_dir.as_os_str().is_empty() {
            return Err(AppError::Config(
                "Diary directory path is empty".to_string(),
            ));
        }

        if !self.diary_dir.is_absolute() {
            return Err(AppError::Config(
                "Diary directory must be an absolute path".to_string(),
            ));
        }

        Ok(())
    }

    /// The path of the persistence slot inside the diary directory.
    pub fn store_path(&self) -> PathBuf {
        self.diary_dir.join(constants::STORE_FILE_NAME)
    }
}

/// Ensures the diary directory exists, creating it if necessary.
///
/// # Errors
///
/// Returns:
/// - `AppError::Config` if the provided configuration fails validation
/// - `AppError::Io` if directory creation fails
pub fn ensure_diary_directory_exists(config: &Config) -> AppResult<()> {
    config.validate()?;

    if !config.diary_dir.exists() {
        std::fs::create_dir_all(&config.diary_dir).map_err(|e| {
            AppError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to create diary directory: {}", e),
            ))
        })?;

        // Owner-only permissions; the diary is private by default.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions =
                std::fs::Permissions::from_mode(constants::DEFAULT_DIR_PERMISSIONS);
            std::fs::set_permissions(&config.diary_dir, permissions).map_err(|e| {
                AppError::Io(std::io::Error::new(
                    e.kind(),
                    format!("Failed to set permissions on diary directory: {}", e),
                ))
            })?;
            tracing::debug!("Set 0o700 permissions on diary directory");
        }
    }
    Ok(())
}

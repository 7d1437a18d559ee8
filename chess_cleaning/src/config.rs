//! Cleaning configuration file support.
//!
//! Reporting toggles are passed explicitly into every stage instead of living
//! in global debug flags. They can be read from a TOML file:
//!
//! ```toml
//! report_duplicates = true
//! report_removed_counts = true
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CleaningError, CleaningResult};

/// Diagnostic reporting switches for the cleaning stages.
///
/// Both switches only control logging; they never change which rows are kept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleaningConfig {
    /// Log whether the id column still contains duplicates.
    #[serde(default)]
    pub report_duplicates: bool,
    /// Log how many rows each filtering stage removed.
    #[serde(default)]
    pub report_removed_counts: bool,
}

impl CleaningConfig {
    /// Configuration with every report enabled.
    pub fn verbose() -> Self {
        Self {
            report_duplicates: true,
            report_removed_counts: true,
        }
    }

    /// Load cleaning configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(CleaningConfig)` if successful
    /// * `Err(CleaningError)` if file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> CleaningResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            CleaningError::ConfigurationError(format!("Failed to read config file: {}", e))
        })?;

        Self::from_toml_str(&content)
    }

    /// Parse cleaning configuration from TOML text.
    pub fn from_toml_str(content: &str) -> CleaningResult<Self> {
        toml::from_str(content).map_err(|e| {
            CleaningError::ConfigurationError(format!("Failed to parse config file: {}", e))
        })
    }

    /// Load cleaning configuration from the default location.
    ///
    /// Searches for `cleaning.toml` in:
    /// 1. Current directory
    /// 2. `chess_cleaning/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> CleaningResult<Self> {
        let search_paths = [
            PathBuf::from("cleaning.toml"),
            PathBuf::from("chess_cleaning/cleaning.toml"),
            PathBuf::from("../cleaning.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(CleaningError::ConfigurationError(
            "No cleaning.toml found in standard locations".to_string(),
        ))
    }
}

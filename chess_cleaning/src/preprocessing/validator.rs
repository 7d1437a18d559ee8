//! Sanity checks on raw and cleaned game frames.
//!
//! Nothing here changes data: the id uniqueness check and the frame
//! comparison only report, and [`CleanedDataValidator`] collects contract
//! violations of a cleaned frame as errors and warnings.

use log::{info, warn};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::config::CleaningConfig;
use crate::core::domain::columns::{BLACK_ID, ID, RATED, WHITE_ID, WINNER};
use crate::core::domain::{Winner, TIMESTAMP_COLUMNS};
use crate::error::CleaningResult;
use crate::transformations::cleaning::require_column;
use crate::transformations::filtering::count_timeout_draws;

/// Outcome of the id uniqueness check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdUniqueness {
    pub total_games: usize,
    pub unique_ids: usize,
    /// Rows beyond the first for each repeated id
    pub duplicate_ids: usize,
}

impl IdUniqueness {
    pub fn has_duplicates(&self) -> bool {
        self.duplicate_ids > 0
    }
}

/// Report whether the id column contains duplicates.
///
/// Only fails when the id column is missing; duplicates are reported, not
/// raised.
pub fn check_ids_are_unique(df: &DataFrame, config: &CleaningConfig) -> CleaningResult<IdUniqueness> {
    let ids = require_column(df, ID)?;
    let total_games = ids.len();
    let unique_ids = ids.as_materialized_series().n_unique()?;

    let uniqueness = IdUniqueness {
        total_games,
        unique_ids,
        duplicate_ids: total_games - unique_ids,
    };

    if config.report_duplicates {
        if uniqueness.has_duplicates() {
            info!(
                "there are {} duplicated ids in the data set",
                uniqueness.duplicate_ids
            );
        } else {
            info!("there are no duplicated ids in the data set");
        }
    }

    Ok(uniqueness)
}

/// Exact structural equality of two frames.
///
/// Shape, column names and order, dtypes and every value in row order must
/// match. Nulls compare equal to nulls.
pub fn frames_equal(left: &DataFrame, right: &DataFrame) -> bool {
    left.shape() == right.shape()
        && left.get_column_names() == right.get_column_names()
        && left.dtypes() == right.dtypes()
        && left.equals_missing(right)
}

/// Compare a stepwise-cleaned frame against the coordinator's output and log
/// the verdict.
pub fn report_frames_match(stepwise: &DataFrame, coordinated: &DataFrame) -> bool {
    let matches = frames_equal(stepwise, coordinated);
    if matches {
        info!("the stepwise cleaned frame matches the frame produced by clean_chess_games");
    } else {
        warn!("the stepwise cleaned frame DOES NOT MATCH the frame produced by clean_chess_games");
    }
    matches
}

/// Validation result with categorized issues and statistics.
///
/// Errors make `is_valid` false, warnings are informational.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub stats: ValidationStats,
}

/// Counts gathered while validating a cleaned frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationStats {
    pub total_games: usize,
    pub duplicate_ids: usize,
    pub unrated_games: usize,
    pub draws: usize,
    pub timeout_draws: usize,
    pub players_in_both_colours: usize,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
            stats: ValidationStats::default(),
        }
    }

    pub fn add_error(&mut self, error: String) {
        self.is_valid = false;
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Checks a frame against the cleaned-output contract.
///
/// # Examples
///
/// ```
/// use chess_cleaning::preprocessing::CleanedDataValidator;
/// use polars::prelude::*;
///
/// let df = df!(
///     "id" => ["g1", "g1"],
///     "rated" => [true, true],
///     "winner" => ["white", "black"],
///     "white_id" => ["ann", "bob"],
///     "black_id" => ["cid", "dan"],
/// )
/// .unwrap();
///
/// let result = CleanedDataValidator::validate(&df);
/// assert!(!result.is_valid);
/// assert_eq!(result.stats.duplicate_ids, 1);
/// ```
pub struct CleanedDataValidator;

impl CleanedDataValidator {
    /// Validates a cleaned games frame.
    ///
    /// # Error Conditions
    ///
    /// - Missing `id`, `rated` or `winner` columns
    /// - Duplicate game ids
    /// - Games whose `rated` flag is not `true`
    /// - Games with `winner == "draw"`
    /// - Timestamp columns still present
    ///
    /// Players that appear under both colours are reported as a warning.
    pub fn validate(df: &DataFrame) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.stats.total_games = df.height();

        for name in [ID, RATED, WINNER] {
            if df.column(name).is_err() {
                result.add_error(format!("Missing required column: {}", name));
            }
        }
        if !result.is_valid {
            return result;
        }

        if let Ok(ids) = df.column(ID) {
            if let Ok(unique) = ids.as_materialized_series().n_unique() {
                result.stats.duplicate_ids = ids.len() - unique;
                if result.stats.duplicate_ids > 0 {
                    result.add_error(format!(
                        "Found {} duplicate game ids",
                        result.stats.duplicate_ids
                    ));
                }
            }
        }

        match df.column(RATED).and_then(|c| c.bool()) {
            Ok(flags) => {
                result.stats.unrated_games = flags.into_iter().filter(|f| *f != Some(true)).count();
                if result.stats.unrated_games > 0 {
                    result.add_error(format!(
                        "Found {} games that are not rated",
                        result.stats.unrated_games
                    ));
                }
            }
            Err(_) => result.add_error("Column 'rated' is not boolean".to_string()),
        }

        if let Ok(winners) = df.column(WINNER).and_then(|c| c.str()) {
            result.stats.draws = winners
                .into_iter()
                .filter(|w| *w == Some(Winner::Draw.as_str()))
                .count();
            if result.stats.draws > 0 {
                result.add_error(format!("Found {} drawn games", result.stats.draws));
            }
        }

        if let Ok(timeout_draws) = count_timeout_draws(df) {
            result.stats.timeout_draws = timeout_draws;
            if timeout_draws > 0 {
                result.add_warning(format!(
                    "{} draws were decided on time with insufficient material",
                    timeout_draws
                ));
            }
        }

        for name in TIMESTAMP_COLUMNS {
            if df.column(name).is_ok() {
                result.add_error(format!("Unused column still present: {}", name));
            }
        }

        if let Some(shared) = Self::players_in_both_colours(df) {
            result.stats.players_in_both_colours = shared;
            if shared > 0 {
                result.add_warning(format!(
                    "{} players appear both as white and as black",
                    shared
                ));
            }
        }

        result
    }

    fn players_in_both_colours(df: &DataFrame) -> Option<usize> {
        let white = df.column(WHITE_ID).ok()?.str().ok()?;
        let black = df.column(BLACK_ID).ok()?.str().ok()?;

        let white_players: HashSet<&str> = white.into_iter().flatten().collect();
        let shared: HashSet<&str> = black
            .into_iter()
            .flatten()
            .filter(|id| white_players.contains(id))
            .collect();

        Some(shared.len())
    }
}

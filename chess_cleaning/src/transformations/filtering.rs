use log::info;
use polars::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::CleaningConfig;
use crate::core::domain::columns::{RATED, VICTORY_STATUS, WINNER};
use crate::core::domain::{VictoryStatus, Winner};
use crate::error::{CleaningError, CleaningResult};
use crate::transformations::cleaning::require_column;

/// Which column decides that a game was drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawCriterion {
    /// `winner == "draw"`. Removes every recorded draw.
    #[default]
    Winner,
    /// `victory_status == "draw"`. Leaves timeout draws behind.
    VictoryStatus,
}

impl DrawCriterion {
    fn column(&self) -> &'static str {
        match self {
            DrawCriterion::Winner => WINNER,
            DrawCriterion::VictoryStatus => VICTORY_STATUS,
        }
    }
}

fn require_dtype(
    df: &DataFrame,
    name: &str,
    expected: DataType,
    label: &'static str,
) -> CleaningResult<()> {
    let column = require_column(df, name)?;
    if column.dtype() != &expected {
        return Err(CleaningError::TypeMismatch {
            column: name.to_string(),
            expected: label,
            found: column.dtype().clone(),
        });
    }
    Ok(())
}

fn report_removed(config: &CleaningConfig, stage: &str, before: usize, after: usize) {
    if config.report_removed_counts {
        info!("rows removed by {} => {}", stage, before - after);
    }
}

/// Keep only games whose `rated` flag is exactly `true`.
///
/// Null flags are dropped and a non-boolean column is rejected.
pub fn filter_rated_games(df: &DataFrame, config: &CleaningConfig) -> CleaningResult<DataFrame> {
    require_dtype(df, RATED, DataType::Boolean, "Boolean")?;

    let rated = df
        .clone()
        .lazy()
        .filter(col(RATED).eq(lit(true)))
        .collect()?;

    report_removed(config, "removing unrated games", df.height(), rated.height());
    Ok(rated)
}

/// Remove drawn games according to `criterion`.
///
/// Rows with a null value in the criterion column are kept.
///
/// # Examples
///
/// ```
/// use chess_cleaning::transformations::{remove_draws, DrawCriterion};
/// use chess_cleaning::CleaningConfig;
/// use polars::prelude::*;
///
/// let df = df!(
///     "winner" => ["white", "draw", "draw"],
///     "victory_status" => ["mate", "draw", "outoftime"],
/// )
/// .unwrap();
///
/// let config = CleaningConfig::default();
/// assert_eq!(remove_draws(&df, DrawCriterion::Winner, &config).unwrap().height(), 1);
/// assert_eq!(remove_draws(&df, DrawCriterion::VictoryStatus, &config).unwrap().height(), 2);
/// ```
pub fn remove_draws(
    df: &DataFrame,
    criterion: DrawCriterion,
    config: &CleaningConfig,
) -> CleaningResult<DataFrame> {
    let column = criterion.column();
    require_dtype(df, column, DataType::String, "String")?;

    let no_draws = df
        .clone()
        .lazy()
        .filter(col(column).neq_missing(lit(Winner::Draw.as_str())))
        .collect()?;

    report_removed(config, "removing draws", df.height(), no_draws.height());
    Ok(no_draws)
}

/// Count games recorded as a draw whose victory status is not `draw`.
///
/// These are timeouts against insufficient mating material. Filtering on
/// victory status alone does not catch them.
pub fn count_timeout_draws(df: &DataFrame) -> CleaningResult<usize> {
    require_dtype(df, WINNER, DataType::String, "String")?;
    require_dtype(df, VICTORY_STATUS, DataType::String, "String")?;

    let residual = df
        .clone()
        .lazy()
        .filter(
            col(WINNER)
                .eq(lit(Winner::Draw.as_str()))
                .and(col(VICTORY_STATUS).neq_missing(lit(VictoryStatus::Draw.as_str()))),
        )
        .collect()?;

    Ok(residual.height())
}

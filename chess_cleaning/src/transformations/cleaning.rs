use log::{debug, info};
use polars::prelude::*;

use crate::config::CleaningConfig;
use crate::core::domain::columns::{BLACK_ID, ID, WHITE_ID};
use crate::core::domain::{ANALYSIS_COLUMNS, TIMESTAMP_COLUMNS};
use crate::error::{CleaningError, CleaningResult};

/// Look up a column, mapping absence to [`CleaningError::MissingColumn`].
pub(crate) fn require_column<'a>(df: &'a DataFrame, name: &str) -> CleaningResult<&'a Column> {
    df.column(name)
        .map_err(|_| CleaningError::MissingColumn(name.to_string()))
}

/// Keep the first row for every distinct value of `column`.
///
/// Input order is preserved among the kept rows and nulls count as one value.
pub fn keep_first_occurrence(df: &DataFrame, column: &str) -> CleaningResult<DataFrame> {
    require_column(df, column)?;

    let unique = df
        .clone()
        .lazy()
        .filter(col(column).is_first_distinct())
        .collect()?;

    Ok(unique)
}

/// Select the first game for every game id.
///
/// # Examples
///
/// ```
/// use chess_cleaning::transformations::select_first_game_per_id;
/// use polars::prelude::*;
///
/// let df = df!("id" => ["a", "b", "a"], "turns" => [10i64, 20, 30]).unwrap();
/// let unique = select_first_game_per_id(&df).unwrap();
/// assert_eq!(unique.height(), 2);
/// ```
pub fn select_first_game_per_id(df: &DataFrame) -> CleaningResult<DataFrame> {
    let unique = keep_first_occurrence(df, ID)?;
    debug!(
        "Kept {} of {} games after removing duplicate ids",
        unique.height(),
        df.height()
    );
    Ok(unique)
}

/// Remove repeated players, first by white id and then by black id.
///
/// The passes are independent, so a player who is white in one game and black
/// in another keeps both games.
pub fn remove_duplicated_players(
    df: &DataFrame,
    config: &CleaningConfig,
) -> CleaningResult<DataFrame> {
    let unique_white = keep_first_occurrence(df, WHITE_ID)?;
    let unique_players = keep_first_occurrence(&unique_white, BLACK_ID)?;

    if config.report_removed_counts {
        info!(
            "rows removed by removing duplicated players => {}",
            df.height() - unique_players.height()
        );
    }

    Ok(unique_players)
}

/// Drop the raw epoch timestamp columns.
pub fn drop_unused_columns(df: &DataFrame) -> CleaningResult<DataFrame> {
    let mut projected = df.clone();
    for name in TIMESTAMP_COLUMNS {
        require_column(&projected, name)?;
        projected = projected.drop(name)?;
    }
    Ok(projected)
}

/// Select the analysis columns in their fixed output order.
pub fn select_analysis_columns(df: &DataFrame) -> CleaningResult<DataFrame> {
    for name in ANALYSIS_COLUMNS {
        require_column(df, name)?;
    }
    Ok(df.select(ANALYSIS_COLUMNS)?)
}

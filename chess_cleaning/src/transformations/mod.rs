//! Row filters and projections applied to the games DataFrame.
//!
//! Every function takes a borrowed frame and returns a new one; inputs are
//! never modified.
//!
//! # Modules
//!
//! - [`cleaning`]: Deduplicate games and players, project columns
//! - [`filtering`]: Keep rated games, remove draws
//!
//! # Example
//!
//! ```no_run
//! use chess_cleaning::transformations::{filter_rated_games, select_first_game_per_id};
//! use chess_cleaning::CleaningConfig;
//! use polars::prelude::*;
//!
//! # fn example(df: DataFrame) -> chess_cleaning::CleaningResult<()> {
//! let unique = select_first_game_per_id(&df)?;
//! let rated = filter_rated_games(&unique, &CleaningConfig::default())?;
//! # Ok(())
//! # }
//! ```

pub mod cleaning;
pub mod filtering;

pub use cleaning::{
    drop_unused_columns, keep_first_occurrence, remove_duplicated_players,
    select_analysis_columns, select_first_game_per_id,
};
pub use filtering::{count_timeout_draws, filter_rated_games, remove_draws, DrawCriterion};

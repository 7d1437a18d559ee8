use log::debug;
use polars::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::CleaningConfig;
use crate::error::CleaningResult;
use crate::transformations::{
    drop_unused_columns, filter_rated_games, remove_draws, remove_duplicated_players,
    select_first_game_per_id, DrawCriterion,
};

/// Stages of the cleaning pipeline, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CleaningStage {
    UniqueIds,
    RatedGames,
    NoDraws,
    UniquePlayers,
    DroppedColumns,
}

impl CleaningStage {
    pub fn description(&self) -> &'static str {
        match self {
            CleaningStage::UniqueIds => "remove duplicate ids",
            CleaningStage::RatedGames => "keep rated games",
            CleaningStage::NoDraws => "remove draws",
            CleaningStage::UniquePlayers => "remove duplicated players",
            CleaningStage::DroppedColumns => "drop unused columns",
        }
    }
}

/// Row counts around one stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageSummary {
    pub stage: CleaningStage,
    pub rows_before: usize,
    pub rows_after: usize,
}

impl StageSummary {
    pub fn rows_removed(&self) -> usize {
        self.rows_before - self.rows_after
    }
}

/// Cleaned frame plus what each stage did
pub struct CleaningOutcome {
    pub dataframe: DataFrame,
    pub stages: Vec<StageSummary>,
}

impl CleaningOutcome {
    pub fn rows_removed(&self) -> usize {
        self.stages.iter().map(StageSummary::rows_removed).sum()
    }
}

/// Main cleaning pipeline
pub struct CleaningPipeline {
    config: CleaningConfig,
}

impl CleaningPipeline {
    /// Create a new pipeline with default configuration
    pub fn new() -> Self {
        Self {
            config: CleaningConfig::default(),
        }
    }

    /// Create a pipeline with custom configuration
    pub fn with_config(config: CleaningConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CleaningConfig {
        &self.config
    }

    /// Clean a raw games frame
    ///
    /// Stages run in a fixed order: unique ids, rated games, no draws (by
    /// winner), unique players, drop timestamps. The input is borrowed and
    /// never modified; polars buffers are copy-on-write, so the returned frame
    /// can be mutated without affecting the input or any intermediate.
    pub fn run(&self, raw: &DataFrame) -> CleaningResult<CleaningOutcome> {
        let mut stages = Vec::with_capacity(5);

        // Step 1: One game per id
        let unique_ids = select_first_game_per_id(raw)?;
        record(&mut stages, CleaningStage::UniqueIds, raw, &unique_ids);

        // Step 2: Rated games only
        let rated = filter_rated_games(&unique_ids, &self.config)?;
        record(&mut stages, CleaningStage::RatedGames, &unique_ids, &rated);

        // Step 3: No draws
        let no_draws = remove_draws(&rated, DrawCriterion::Winner, &self.config)?;
        record(&mut stages, CleaningStage::NoDraws, &rated, &no_draws);

        // Step 4: White players, then black players (a player can have a game as each)
        let unique_players = remove_duplicated_players(&no_draws, &self.config)?;
        record(&mut stages, CleaningStage::UniquePlayers, &no_draws, &unique_players);

        // Step 5: Drop timestamps
        let dataframe = drop_unused_columns(&unique_players)?;
        record(&mut stages, CleaningStage::DroppedColumns, &unique_players, &dataframe);

        Ok(CleaningOutcome { dataframe, stages })
    }
}

impl Default for CleaningPipeline {
    fn default() -> Self {
        Self::new()
    }
}

fn record(
    stages: &mut Vec<StageSummary>,
    stage: CleaningStage,
    before: &DataFrame,
    after: &DataFrame,
) {
    debug!(
        "{}: {} -> {} rows",
        stage.description(),
        before.height(),
        after.height()
    );
    stages.push(StageSummary {
        stage,
        rows_before: before.height(),
        rows_after: after.height(),
    });
}

/// Clean a raw games frame into the analysis-ready frame.
///
/// This is the entry point external callers should use.
///
/// # Examples
///
/// ```
/// use chess_cleaning::core::GameRecord;
/// use chess_cleaning::io::GameLoader;
/// use chess_cleaning::{clean_chess_games, CleaningConfig};
///
/// let raw = GameLoader::load_from_records(&[
///     GameRecord::new("g1", "ann", "bob"),
///     GameRecord::new("g1", "cid", "dan"),
/// ])
/// .unwrap()
/// .dataframe;
///
/// let cleaned = clean_chess_games(&raw, &CleaningConfig::default()).unwrap();
/// assert_eq!(cleaned.height(), 1);
/// assert!(cleaned.column("created_at").is_err());
/// ```
pub fn clean_chess_games(raw: &DataFrame, config: &CleaningConfig) -> CleaningResult<DataFrame> {
    let outcome = CleaningPipeline::with_config(*config).run(raw)?;
    Ok(outcome.dataframe)
}

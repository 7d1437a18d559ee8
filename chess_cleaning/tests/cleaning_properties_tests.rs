//! Property-based tests for the cleaning stages.

use chess_cleaning::core::{GameRecord, VictoryStatus, Winner};
use chess_cleaning::io::GameLoader;
use chess_cleaning::preprocessing::{frames_equal, CleanedDataValidator};
use chess_cleaning::transformations::{
    filter_rated_games, remove_draws, remove_duplicated_players, select_analysis_columns,
    select_first_game_per_id, DrawCriterion,
};
use chess_cleaning::{clean_chess_games, CleaningConfig};
use polars::prelude::*;
use proptest::prelude::*;

const OUTCOMES: [(Winner, VictoryStatus); 5] = [
    (Winner::White, VictoryStatus::Mate),
    (Winner::Black, VictoryStatus::Resign),
    (Winner::White, VictoryStatus::OutOfTime),
    (Winner::Draw, VictoryStatus::Draw),
    (Winner::Draw, VictoryStatus::OutOfTime),
];

/// Small id pools so that duplicates are frequent
fn arb_game() -> impl Strategy<Value = GameRecord> {
    (0u8..8, any::<Option<bool>>(), 0usize..OUTCOMES.len(), 0u8..6, 0u8..6).prop_map(
        |(id, rated, outcome, white, black)| {
            let (winner, status) = OUTCOMES[outcome];
            GameRecord::new(
                &format!("g{}", id),
                &format!("player-{}", white),
                &format!("player-{}", black),
            )
            .with_rated(rated)
            .with_outcome(winner, status)
        },
    )
}

fn arb_games() -> impl Strategy<Value = DataFrame> {
    prop::collection::vec(arb_game(), 0..40)
        .prop_map(|games| GameLoader::load_from_records(&games).unwrap().dataframe)
}

fn is_unique(df: &DataFrame, column: &str) -> bool {
    let values = df.column(column).unwrap();
    values.as_materialized_series().n_unique().unwrap() == values.len()
}

proptest! {
    #[test]
    fn prop_id_dedup_is_idempotent(raw in arb_games()) {
        let once = select_first_game_per_id(&raw).unwrap();
        let twice = select_first_game_per_id(&once).unwrap();

        prop_assert!(frames_equal(&once, &twice));
        prop_assert!(is_unique(&once, "id"));
    }

    #[test]
    fn prop_rated_filter_keeps_only_true(raw in arb_games()) {
        let rated = filter_rated_games(&raw, &CleaningConfig::default()).unwrap();

        prop_assert!(rated.height() <= raw.height());
        let flags = rated.column("rated").unwrap().bool().unwrap();
        prop_assert!(flags.into_iter().all(|f| f == Some(true)));
    }

    #[test]
    fn prop_no_recorded_draws_survive(raw in arb_games()) {
        let no_draws = remove_draws(&raw, DrawCriterion::Winner, &CleaningConfig::default()).unwrap();

        let winners = no_draws.column("winner").unwrap().str().unwrap();
        prop_assert!(winners.into_iter().all(|w| w != Some("draw")));
    }

    #[test]
    fn prop_player_dedup_is_unique_per_colour(raw in arb_games()) {
        let unique = remove_duplicated_players(&raw, &CleaningConfig::default()).unwrap();

        prop_assert!(is_unique(&unique, "white_id"));
        prop_assert!(is_unique(&unique, "black_id"));
    }

    #[test]
    fn prop_cleaned_output_meets_contract(raw in arb_games()) {
        let cleaned = clean_chess_games(&raw, &CleaningConfig::default()).unwrap();

        prop_assert!(cleaned.height() <= raw.height());
        let validation = CleanedDataValidator::validate(&cleaned);
        prop_assert!(validation.is_valid, "{:?}", validation.errors);
    }

    #[test]
    fn prop_coordinator_matches_stepwise_allow_list(raw in arb_games()) {
        let config = CleaningConfig::default();
        let unique_ids = select_first_game_per_id(&raw).unwrap();
        let rated = filter_rated_games(&unique_ids, &config).unwrap();
        let no_draws = remove_draws(&rated, DrawCriterion::Winner, &config).unwrap();
        let unique_players = remove_duplicated_players(&no_draws, &config).unwrap();
        let stepwise = select_analysis_columns(&unique_players).unwrap();

        let coordinated = clean_chess_games(&raw, &config).unwrap();
        prop_assert!(frames_equal(&stepwise, &coordinated));
    }
}

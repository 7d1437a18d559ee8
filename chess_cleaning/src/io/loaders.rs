use anyhow::{Context, Result};
use polars::prelude::*;
use std::path::Path;

use crate::core::domain::GameRecord;
use crate::parsing::csv_parser;
use crate::parsing::json_parser;

/// Represents the source type of games data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameSourceType {
    Json,
    Csv,
    Records,
}

/// Result of loading games data
#[derive(Debug)]
pub struct GameLoadResult {
    pub dataframe: DataFrame,
    pub source_type: GameSourceType,
    pub num_games: usize,
}

impl GameLoadResult {
    pub fn new(dataframe: DataFrame, source_type: GameSourceType) -> Self {
        let num_games = dataframe.height();
        Self {
            dataframe,
            source_type,
            num_games,
        }
    }
}

/// Unified interface for loading raw games from CSV, JSON or typed records
pub struct GameLoader;

impl GameLoader {
    /// Load games from a file (auto-detects JSON or CSV)
    pub fn load_from_file(path: &Path) -> Result<GameLoadResult> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .context("File has no extension")?;

        match extension.to_lowercase().as_str() {
            "json" => Self::load_from_json(path),
            "csv" => Self::load_from_csv(path),
            _ => anyhow::bail!("Unsupported file format: {}", extension),
        }
    }

    /// Load games from a CSV file
    pub fn load_from_csv(csv_path: &Path) -> Result<GameLoadResult> {
        let df = csv_parser::parse_games_csv(csv_path).context("Failed to parse CSV file")?;

        Ok(GameLoadResult::new(df, GameSourceType::Csv))
    }

    /// Load games from a JSON file
    pub fn load_from_json(json_path: &Path) -> Result<GameLoadResult> {
        let records =
            json_parser::parse_games_json(json_path).context("Failed to parse JSON file")?;

        let df = csv_parser::records_to_dataframe(&records)
            .context("Failed to convert games to DataFrame")?;

        Ok(GameLoadResult::new(df, GameSourceType::Json))
    }

    /// Load games from a JSON string
    pub fn load_from_json_str(json_str: &str) -> Result<GameLoadResult> {
        let records = json_parser::parse_games_json_str(json_str)
            .context("Failed to parse JSON string")?;

        let df = csv_parser::records_to_dataframe(&records)
            .context("Failed to convert games to DataFrame")?;

        Ok(GameLoadResult::new(df, GameSourceType::Json))
    }

    /// Build the raw games frame from typed records
    pub fn load_from_records(records: &[GameRecord]) -> Result<GameLoadResult> {
        let df = csv_parser::records_to_dataframe(records)
            .context("Failed to convert games to DataFrame")?;

        Ok(GameLoadResult::new(df, GameSourceType::Records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_records() {
        let records = vec![
            GameRecord::new("g1", "ann", "bob"),
            GameRecord::new("g2", "cid", "dan"),
        ];

        let result = GameLoader::load_from_records(&records).unwrap();
        assert_eq!(result.source_type, GameSourceType::Records);
        assert_eq!(result.num_games, 2);

        let col_names = result.dataframe.get_column_names();
        assert!(col_names.iter().any(|s| s.as_str() == "id"));
        assert!(col_names.iter().any(|s| s.as_str() == "created_at"));
    }
}

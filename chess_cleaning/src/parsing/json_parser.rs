use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer};
use std::path::Path;

use crate::core::domain::{GameRecord, VictoryStatus, Winner};

/// Custom deserializer that accepts either string or integer identifiers
fn deserialize_identifier<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrInt {
        String(String),
        Int(i64),
    }

    match StringOrInt::deserialize(deserializer)? {
        StringOrInt::String(s) => Ok(s),
        StringOrInt::Int(i) => Ok(i.to_string()),
    }
}

/// Custom deserializer for the rated flag: booleans, "True"/"False" text or null
fn deserialize_rated<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrText {
        Bool(bool),
        Text(String),
    }

    Ok(match Option::<BoolOrText>::deserialize(deserializer)? {
        Some(BoolOrText::Bool(b)) => Some(b),
        Some(BoolOrText::Text(s)) => match s.as_str() {
            "True" | "true" => Some(true),
            "False" | "false" => Some(false),
            _ => None,
        },
        None => None,
    })
}

/// Epoch milliseconds, possibly exported as a float such as 1.50421e+12
fn deserialize_epoch_millis<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    Ok(value as i64)
}

/// Raw JSON structure for one game
#[derive(Debug, Deserialize)]
struct RawGame {
    #[serde(deserialize_with = "deserialize_identifier")]
    id: String,
    #[serde(default, deserialize_with = "deserialize_rated")]
    rated: Option<bool>,
    #[serde(deserialize_with = "deserialize_epoch_millis")]
    created_at: i64,
    #[serde(deserialize_with = "deserialize_epoch_millis")]
    last_move_at: i64,
    turns: i64,
    victory_status: VictoryStatus,
    winner: Winner,
    increment_code: String,
    #[serde(deserialize_with = "deserialize_identifier")]
    white_id: String,
    white_rating: i64,
    #[serde(deserialize_with = "deserialize_identifier")]
    black_id: String,
    black_rating: i64,
    moves: String,
    opening_eco: String,
    opening_name: String,
    opening_ply: i64,
}

impl From<RawGame> for GameRecord {
    fn from(raw: RawGame) -> Self {
        GameRecord {
            id: raw.id,
            rated: raw.rated,
            created_at: raw.created_at,
            last_move_at: raw.last_move_at,
            turns: raw.turns,
            victory_status: raw.victory_status,
            winner: raw.winner,
            increment_code: raw.increment_code,
            white_id: raw.white_id,
            white_rating: raw.white_rating,
            black_id: raw.black_id,
            black_rating: raw.black_rating,
            moves: raw.moves,
            opening_eco: raw.opening_eco,
            opening_name: raw.opening_name,
            opening_ply: raw.opening_ply,
        }
    }
}

/// Parse games from a JSON array of records
pub fn parse_games_json_str(json_str: &str) -> Result<Vec<GameRecord>> {
    let raw: Vec<RawGame> =
        serde_json::from_str(json_str).context("Failed to parse games JSON")?;

    Ok(raw.into_iter().map(GameRecord::from).collect())
}

/// Parse games from a JSON file
pub fn parse_games_json(path: &Path) -> Result<Vec<GameRecord>> {
    let json_content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read games file: {}", path.display()))?;

    parse_games_json_str(&json_content)
}

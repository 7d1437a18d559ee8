//! Domain model for a single chess game as it appears in the raw dataset.
//!
//! The cleaning stages operate on polars DataFrames and address columns by
//! name, so the column names live here next to the typed [`GameRecord`] that
//! mirrors one row.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Column names of the raw games table.
pub mod columns {
    pub const ID: &str = "id";
    pub const RATED: &str = "rated";
    pub const CREATED_AT: &str = "created_at";
    pub const LAST_MOVE_AT: &str = "last_move_at";
    pub const TURNS: &str = "turns";
    pub const VICTORY_STATUS: &str = "victory_status";
    pub const WINNER: &str = "winner";
    pub const INCREMENT_CODE: &str = "increment_code";
    pub const WHITE_ID: &str = "white_id";
    pub const WHITE_RATING: &str = "white_rating";
    pub const BLACK_ID: &str = "black_id";
    pub const BLACK_RATING: &str = "black_rating";
    pub const MOVES: &str = "moves";
    pub const OPENING_ECO: &str = "opening_eco";
    pub const OPENING_NAME: &str = "opening_name";
    pub const OPENING_PLY: &str = "opening_ply";
}

use columns::*;

/// Every column of the raw dataset, in file order.
pub const RAW_COLUMNS: [&str; 16] = [
    ID,
    RATED,
    CREATED_AT,
    LAST_MOVE_AT,
    TURNS,
    VICTORY_STATUS,
    WINNER,
    INCREMENT_CODE,
    WHITE_ID,
    WHITE_RATING,
    BLACK_ID,
    BLACK_RATING,
    MOVES,
    OPENING_ECO,
    OPENING_NAME,
    OPENING_PLY,
];

/// Epoch-millisecond columns that the canonical cleaning drops.
pub const TIMESTAMP_COLUMNS: [&str; 2] = [CREATED_AT, LAST_MOVE_AT];

/// Columns kept for analysis, in output order.
pub const ANALYSIS_COLUMNS: [&str; 14] = [
    ID,
    RATED,
    TURNS,
    VICTORY_STATUS,
    WINNER,
    INCREMENT_CODE,
    WHITE_ID,
    WHITE_RATING,
    BLACK_ID,
    BLACK_RATING,
    MOVES,
    OPENING_ECO,
    OPENING_NAME,
    OPENING_PLY,
];

/// Recorded outcome of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    White,
    Black,
    Draw,
}

impl Winner {
    pub fn as_str(&self) -> &'static str {
        match self {
            Winner::White => "white",
            Winner::Black => "black",
            Winner::Draw => "draw",
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Winner {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "white" => Ok(Winner::White),
            "black" => Ok(Winner::Black),
            "draw" => Ok(Winner::Draw),
            other => Err(format!("Unknown winner: {}", other)),
        }
    }
}

/// Reason a game ended.
///
/// `OutOfTime` usually means the flagging side lost, but when the opponent has
/// no mating material the game is recorded with `winner == "draw"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VictoryStatus {
    #[serde(rename = "mate")]
    Mate,
    #[serde(rename = "resign")]
    Resign,
    #[serde(rename = "outoftime")]
    OutOfTime,
    #[serde(rename = "draw")]
    Draw,
}

impl VictoryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VictoryStatus::Mate => "mate",
            VictoryStatus::Resign => "resign",
            VictoryStatus::OutOfTime => "outoftime",
            VictoryStatus::Draw => "draw",
        }
    }

    /// Whether a game ending this way can carry a drawn result.
    pub fn can_end_in_draw(&self) -> bool {
        matches!(self, VictoryStatus::Draw | VictoryStatus::OutOfTime)
    }
}

impl fmt::Display for VictoryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VictoryStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mate" => Ok(VictoryStatus::Mate),
            "resign" => Ok(VictoryStatus::Resign),
            "outoftime" => Ok(VictoryStatus::OutOfTime),
            "draw" => Ok(VictoryStatus::Draw),
            other => Err(format!("Unknown victory status: {}", other)),
        }
    }
}

/// One row of the raw games dataset.
///
/// `rated` is optional because the source data can leave it blank; such games
/// are treated as unrated.
///
/// # Examples
///
/// ```
/// use chess_cleaning::core::domain::{GameRecord, VictoryStatus, Winner};
///
/// let game = GameRecord::new("TZJHLljE", "bourgris", "a-00")
///     .with_outcome(Winner::White, VictoryStatus::OutOfTime);
/// assert_eq!(game.rated, Some(true));
/// assert!(!game.is_draw());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: String,
    pub rated: Option<bool>,
    pub created_at: i64,
    pub last_move_at: i64,
    pub turns: i64,
    pub victory_status: VictoryStatus,
    pub winner: Winner,
    pub increment_code: String,
    pub white_id: String,
    pub white_rating: i64,
    pub black_id: String,
    pub black_rating: i64,
    pub moves: String,
    pub opening_eco: String,
    pub opening_name: String,
    pub opening_ply: i64,
}

impl GameRecord {
    /// Creates a rated, decisive game with placeholder details.
    pub fn new(id: &str, white_id: &str, black_id: &str) -> Self {
        Self {
            id: id.to_string(),
            rated: Some(true),
            created_at: 1_504_210_000_000,
            last_move_at: 1_504_210_360_000,
            turns: 13,
            victory_status: VictoryStatus::Resign,
            winner: Winner::White,
            increment_code: "15+2".to_string(),
            white_id: white_id.to_string(),
            white_rating: 1500,
            black_id: black_id.to_string(),
            black_rating: 1191,
            moves: "d4 d5 c4 c6 cxd5 e6 dxe6 fxe6 Nf3 Bb4+ Nc3 Ba5 Bf4".to_string(),
            opening_eco: "D10".to_string(),
            opening_name: "Slav Defense: Exchange Variation".to_string(),
            opening_ply: 5,
        }
    }

    pub fn with_rated(mut self, rated: Option<bool>) -> Self {
        self.rated = rated;
        self
    }

    pub fn with_outcome(mut self, winner: Winner, victory_status: VictoryStatus) -> Self {
        self.winner = winner;
        self.victory_status = victory_status;
        self
    }

    pub fn with_increment_code(mut self, increment_code: &str) -> Self {
        self.increment_code = increment_code.to_string();
        self
    }

    pub fn is_draw(&self) -> bool {
        self.winner == Winner::Draw
    }
}

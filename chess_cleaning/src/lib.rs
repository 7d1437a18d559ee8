//! Chess games cleaning pipeline.
//!
//! Turns the raw games table into an analysis-ready one: one game per id,
//! rated games only, no draws, at most one game per white and per black
//! player, and no raw timestamp columns.

pub mod config;
pub mod core;
pub mod error;
pub mod io;
pub mod parsing;
pub mod preprocessing;
pub mod time;
pub mod transformations;

pub use config::CleaningConfig;
pub use error::{CleaningError, CleaningResult};
pub use preprocessing::{clean_chess_games, CleaningPipeline};

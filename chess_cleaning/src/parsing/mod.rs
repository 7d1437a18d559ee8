//! Parsers for the raw games dataset.
//!
//! # Parsers
//!
//! - [`csv_parser`]: Read the games CSV and repair inferred column types
//! - [`json_parser`]: Read games exported as a JSON array of records
//!
//! # Example
//!
//! ```no_run
//! use chess_cleaning::parsing::csv_parser::parse_games_csv;
//! use std::path::Path;
//!
//! let games = parse_games_csv(Path::new("games.csv"))
//!     .expect("Failed to parse games");
//! ```

pub mod csv_parser;
pub mod json_parser;

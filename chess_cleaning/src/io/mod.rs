//! Loading the raw games table.
//!
//! These loaders sit outside the cleaning stages: they read files or typed
//! records and hand a raw DataFrame to the pipeline.
//!
//! # Example
//!
//! ```no_run
//! use chess_cleaning::io::GameLoader;
//! use std::path::Path;
//!
//! let result = GameLoader::load_from_file(Path::new("games.csv"))
//!     .expect("Failed to load");
//! println!("Loaded {} games", result.num_games);
//! ```

pub mod loaders;

#[cfg(test)]
mod loaders_tests;

pub use loaders::{GameLoadResult, GameLoader, GameSourceType};

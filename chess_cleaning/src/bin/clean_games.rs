//! Clean a raw chess games CSV.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin clean-games -- games.csv [cleaned.csv] [cleaning.toml]
//! ```
//!
//! Without a config path, `cleaning.toml` is looked up in the standard
//! locations and every report is enabled when none is found.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use chess_cleaning::io::GameLoader;
use chess_cleaning::parsing::csv_parser::write_games_csv;
use chess_cleaning::preprocessing::{check_ids_are_unique, CleanedDataValidator};
use chess_cleaning::time::summarize_increment_codes;
use chess_cleaning::{CleaningConfig, CleaningPipeline};

fn load_config(path: Option<&String>) -> Result<CleaningConfig> {
    match path {
        Some(path) => CleaningConfig::from_file(path).context("Failed to load cleaning config"),
        None => Ok(CleaningConfig::from_default_location().unwrap_or_else(|_| CleaningConfig::verbose())),
    }
}

fn main() -> Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(false)
        .init();

    let args: Vec<String> = env::args().collect();
    let raw_path = args
        .get(1)
        .context("Usage: clean-games <raw.csv> [output.csv] [config.toml]")?;
    let output_path = args.get(2);
    let config = load_config(args.get(3))?;

    println!("=== Chess Games Cleaning ===");
    println!("Raw games file: {}", raw_path);
    println!();

    let raw = GameLoader::load_from_file(Path::new(raw_path))?;
    info!("Loaded {} raw games", raw.num_games);

    check_ids_are_unique(&raw.dataframe, &config)?;

    let pipeline = CleaningPipeline::with_config(config);
    let outcome = pipeline.run(&raw.dataframe)?;

    for stage in &outcome.stages {
        println!(
            "  {:<28} {:>7} -> {:>7} ({} removed)",
            stage.stage.description(),
            stage.rows_before,
            stage.rows_after,
            stage.rows_removed()
        );
    }
    println!();

    check_ids_are_unique(&outcome.dataframe, pipeline.config())?;

    let validation = CleanedDataValidator::validate(&outcome.dataframe);
    for error in &validation.errors {
        warn!("Cleaned data error: {}", error);
    }
    for warning in &validation.warnings {
        info!("Cleaned data warning: {}", warning);
    }

    let increments = summarize_increment_codes(&outcome.dataframe)?;
    println!("Distinct increment codes: {}", increments.distinct_codes);
    for (speed, games) in &increments.games_by_speed {
        println!("  {:?}: {}", speed, games);
    }
    if increments.unparseable > 0 {
        println!("  unparseable: {}", increments.unparseable);
    }

    if let Some(output_path) = output_path {
        let mut cleaned = outcome.dataframe;
        write_games_csv(&mut cleaned, Path::new(output_path))?;
        println!();
        println!("✓ Wrote {} cleaned games to {}", cleaned.height(), output_path);
    } else {
        println!();
        println!("✓ Cleaned {} games", outcome.dataframe.height());
    }

    Ok(())
}

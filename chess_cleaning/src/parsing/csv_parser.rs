use anyhow::{Context, Result};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

use crate::core::domain::columns::*;
use crate::core::domain::GameRecord;

/// Columns holding identifiers or free text
const STRING_COLUMNS: [&str; 9] = [
    ID,
    VICTORY_STATUS,
    WINNER,
    INCREMENT_CODE,
    WHITE_ID,
    BLACK_ID,
    MOVES,
    OPENING_ECO,
    OPENING_NAME,
];

/// Columns that must be Int64 (timestamps may be written as floats like 1.50421e+12)
const INTEGER_COLUMNS: [&str; 6] = [
    CREATED_AT,
    LAST_MOVE_AT,
    TURNS,
    WHITE_RATING,
    BLACK_RATING,
    OPENING_PLY,
];

/// Parse the raw games CSV into a Polars DataFrame
pub fn parse_games_csv(csv_path: &Path) -> Result<DataFrame> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(csv_path.into()))?
        .finish()
        .context("Failed to parse CSV into DataFrame")?;

    normalize_raw_types(df)
}

/// Cast columns to the expected raw types if they were inferred incorrectly
pub fn normalize_raw_types(df: DataFrame) -> Result<DataFrame> {
    let column_names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();
    let has_column = |name: &str| column_names.iter().any(|c| c == name);

    let rated_is_text = df
        .column(RATED)
        .map(|c| c.dtype() == &DataType::String)
        .unwrap_or(false);

    let mut lazy_df = df.lazy();

    // ids such as "1234" may be inferred as i64
    for col_name in STRING_COLUMNS {
        if has_column(col_name) {
            lazy_df = lazy_df.with_column(col(col_name).cast(DataType::String));
        }
    }

    for col_name in INTEGER_COLUMNS {
        if has_column(col_name) {
            lazy_df = lazy_df.with_column(col(col_name).cast(DataType::Int64));
        }
    }

    // "True"/"False" text flags; anything else becomes null
    if rated_is_text {
        let is_true = col(RATED).eq(lit("True")).or(col(RATED).eq(lit("true")));
        let is_false = col(RATED).eq(lit("False")).or(col(RATED).eq(lit("false")));
        lazy_df = lazy_df.with_column(
            when(is_true)
                .then(lit(true))
                .when(is_false)
                .then(lit(false))
                .otherwise(lit(NULL).cast(DataType::Boolean))
                .alias(RATED),
        );
    }

    let df = lazy_df
        .collect()
        .context("Failed to cast columns to expected types")?;

    Ok(df)
}

fn text_column<'a>(
    name: &str,
    records: &'a [GameRecord],
    field: impl Fn(&'a GameRecord) -> &'a str,
) -> Column {
    Column::new(name.into(), records.iter().map(field).collect::<Vec<&str>>())
}

fn integer_column(name: &str, records: &[GameRecord], field: impl Fn(&GameRecord) -> i64) -> Column {
    Column::new(name.into(), records.iter().map(field).collect::<Vec<i64>>())
}

/// Convert typed game records to a DataFrame in raw column order
pub fn records_to_dataframe(records: &[GameRecord]) -> Result<DataFrame> {
    let rated: Vec<Option<bool>> = records.iter().map(|r| r.rated).collect();

    let df = DataFrame::new(vec![
        text_column(ID, records, |r| r.id.as_str()),
        Column::new(RATED.into(), rated),
        integer_column(CREATED_AT, records, |r| r.created_at),
        integer_column(LAST_MOVE_AT, records, |r| r.last_move_at),
        integer_column(TURNS, records, |r| r.turns),
        text_column(VICTORY_STATUS, records, |r| r.victory_status.as_str()),
        text_column(WINNER, records, |r| r.winner.as_str()),
        text_column(INCREMENT_CODE, records, |r| r.increment_code.as_str()),
        text_column(WHITE_ID, records, |r| r.white_id.as_str()),
        integer_column(WHITE_RATING, records, |r| r.white_rating),
        text_column(BLACK_ID, records, |r| r.black_id.as_str()),
        integer_column(BLACK_RATING, records, |r| r.black_rating),
        text_column(MOVES, records, |r| r.moves.as_str()),
        text_column(OPENING_ECO, records, |r| r.opening_eco.as_str()),
        text_column(OPENING_NAME, records, |r| r.opening_name.as_str()),
        integer_column(OPENING_PLY, records, |r| r.opening_ply),
    ])
    .context("Failed to build games DataFrame")?;

    Ok(df)
}

/// Write a games DataFrame to CSV with a header row
pub fn write_games_csv(df: &mut DataFrame, csv_path: &Path) -> Result<()> {
    let mut file = File::create(csv_path)
        .with_context(|| format!("Failed to create {}", csv_path.display()))?;

    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(df)
        .context("Failed to write CSV")?;

    Ok(())
}

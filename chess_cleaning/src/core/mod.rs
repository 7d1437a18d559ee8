//! Core domain model for the chess games dataset.
//!
//! Defines the column layout of the raw table and the typed record used to
//! build frames from structured data.

pub mod domain;

pub use domain::{
    columns, GameRecord, VictoryStatus, Winner, ANALYSIS_COLUMNS, RAW_COLUMNS, TIMESTAMP_COLUMNS,
};

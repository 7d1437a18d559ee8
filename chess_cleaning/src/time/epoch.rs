use chrono::{DateTime, Utc};
use polars::prelude::*;

use crate::error::{CleaningError, CleaningResult};
use crate::transformations::cleaning::require_column;

/// Convert epoch milliseconds to a UTC datetime
///
/// # Arguments
/// * `millis` - Milliseconds since 1970-01-01T00:00:00Z
///
/// # Returns
/// * `None` if the value is outside chrono's representable range
///
/// # Example
/// ```
/// use chess_cleaning::time::epoch_millis_to_datetime;
/// let created = epoch_millis_to_datetime(1_504_210_000_000).unwrap();
/// assert_eq!(created.to_rfc3339(), "2017-08-31T20:06:40+00:00");
/// ```
pub fn epoch_millis_to_datetime(millis: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
}

/// Reinterpret integer epoch-millisecond columns as `Datetime(ms)` columns.
///
/// Each named column keeps its name and position. Columns that are missing
/// or not integer typed are rejected before anything is converted.
pub fn convert_epoch_millis_to_datetime(
    df: &DataFrame,
    columns: &[&str],
) -> CleaningResult<DataFrame> {
    let mut lazy_df = df.clone().lazy();

    for &name in columns {
        let column = require_column(df, name)?;
        if !column.dtype().is_integer() {
            return Err(CleaningError::TypeMismatch {
                column: name.to_string(),
                expected: "integer epoch milliseconds",
                found: column.dtype().clone(),
            });
        }

        lazy_df = lazy_df.with_column(
            col(name).cast(DataType::Datetime(TimeUnit::Milliseconds, None)),
        );
    }

    Ok(lazy_df.collect()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timestamps() -> DataFrame {
        df!(
            "id" => ["g1", "g2"],
            "created_at" => [1_504_210_000_000i64, 0],
            "last_move_at" => [1_504_210_360_000i64, 1_000],
        )
        .unwrap()
    }

    #[test]
    fn test_convert_named_columns_only() {
        let converted =
            convert_epoch_millis_to_datetime(&timestamps(), &["created_at", "last_move_at"]).unwrap();

        for name in ["created_at", "last_move_at"] {
            assert_eq!(
                converted.column(name).unwrap().dtype(),
                &DataType::Datetime(TimeUnit::Milliseconds, None)
            );
        }
        assert_eq!(converted.column("id").unwrap().dtype(), &DataType::String);

        let names: Vec<&str> = converted.get_column_names().iter().map(|s| s.as_str()).collect();
        assert_eq!(names, vec!["id", "created_at", "last_move_at"]);
    }

    #[test]
    fn test_conversion_preserves_millisecond_values() {
        let converted = convert_epoch_millis_to_datetime(&timestamps(), &["last_move_at"]).unwrap();
        let millis = converted
            .column("last_move_at")
            .unwrap()
            .cast(&DataType::Int64)
            .unwrap();
        let values: Vec<Option<i64>> = millis.i64().unwrap().into_iter().collect();
        assert_eq!(values, vec![Some(1_504_210_360_000), Some(1_000)]);
    }

    #[test]
    fn test_input_frame_is_untouched() {
        let raw = timestamps();
        convert_epoch_millis_to_datetime(&raw, &["created_at"]).unwrap();
        assert_eq!(raw.column("created_at").unwrap().dtype(), &DataType::Int64);
    }

    #[test]
    fn test_rejects_non_integer_column() {
        let err = convert_epoch_millis_to_datetime(&timestamps(), &["id"]).unwrap_err();
        assert!(matches!(err, CleaningError::TypeMismatch { ref column, .. } if column == "id"));
    }

    #[test]
    fn test_rejects_missing_column() {
        let err = convert_epoch_millis_to_datetime(&timestamps(), &["finished_at"]).unwrap_err();
        assert!(matches!(err, CleaningError::MissingColumn(_)));
    }

    #[test]
    fn test_epoch_zero() {
        assert_eq!(epoch_millis_to_datetime(0).unwrap().timestamp(), 0);
    }
}

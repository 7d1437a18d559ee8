//! Time-control codes such as `"15+2"` (15 minutes base, 2 seconds increment).

use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::str::FromStr;

use crate::core::domain::columns::INCREMENT_CODE;
use crate::error::{CleaningError, CleaningResult};
use crate::transformations::cleaning::require_column;

/// Game speed bucket, decided on the base time alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GameSpeed {
    /// Under 3 minutes
    Bullet,
    /// 3 to under 10 minutes
    Blitz,
    /// 10 to under 60 minutes
    Rapid,
    /// 60 minutes or more
    Classical,
}

impl GameSpeed {
    pub fn from_base_minutes(minutes: u32) -> Self {
        match minutes {
            0..=2 => GameSpeed::Bullet,
            3..=9 => GameSpeed::Blitz,
            10..=59 => GameSpeed::Rapid,
            _ => GameSpeed::Classical,
        }
    }
}

/// Parsed `"<base minutes>+<increment seconds>"` code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncrementCode {
    pub base_minutes: u32,
    pub increment_seconds: u32,
}

impl IncrementCode {
    pub fn speed(&self) -> GameSpeed {
        GameSpeed::from_base_minutes(self.base_minutes)
    }
}

impl fmt::Display for IncrementCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}", self.base_minutes, self.increment_seconds)
    }
}

impl FromStr for IncrementCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (base, increment) = s
            .trim()
            .split_once('+')
            .ok_or_else(|| format!("Invalid increment code: {}", s))?;

        let base_minutes = base
            .parse()
            .map_err(|_| format!("Invalid base time in increment code: {}", s))?;
        let increment_seconds = increment
            .parse()
            .map_err(|_| format!("Invalid increment in increment code: {}", s))?;

        Ok(Self {
            base_minutes,
            increment_seconds,
        })
    }
}

/// Distribution of time controls in a games frame.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncrementSummary {
    pub distinct_codes: usize,
    pub games_by_speed: BTreeMap<GameSpeed, usize>,
    pub unparseable: usize,
}

/// Count distinct increment codes and games per speed bucket.
pub fn summarize_increment_codes(df: &DataFrame) -> CleaningResult<IncrementSummary> {
    let column = require_column(df, INCREMENT_CODE)?;
    let codes = column.str().map_err(|_| CleaningError::TypeMismatch {
        column: INCREMENT_CODE.to_string(),
        expected: "String",
        found: column.dtype().clone(),
    })?;

    let mut summary = IncrementSummary::default();
    let mut distinct = HashSet::new();

    for code in codes.into_iter().flatten() {
        distinct.insert(code);
        match code.parse::<IncrementCode>() {
            Ok(parsed) => *summary.games_by_speed.entry(parsed.speed()).or_insert(0) += 1,
            Err(_) => summary.unparseable += 1,
        }
    }

    summary.distinct_codes = distinct.len();
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_increment_code() {
        let code: IncrementCode = "15+2".parse().unwrap();
        assert_eq!(code.base_minutes, 15);
        assert_eq!(code.increment_seconds, 2);
        assert_eq!(code.to_string(), "15+2");
    }

    #[test]
    fn test_parse_rejects_malformed_codes() {
        assert!("15".parse::<IncrementCode>().is_err());
        assert!("x+2".parse::<IncrementCode>().is_err());
        assert!("15+".parse::<IncrementCode>().is_err());
    }

    #[test]
    fn test_speed_boundaries() {
        assert_eq!(GameSpeed::from_base_minutes(2), GameSpeed::Bullet);
        assert_eq!(GameSpeed::from_base_minutes(3), GameSpeed::Blitz);
        assert_eq!(GameSpeed::from_base_minutes(10), GameSpeed::Rapid);
        assert_eq!(GameSpeed::from_base_minutes(59), GameSpeed::Rapid);
        assert_eq!(GameSpeed::from_base_minutes(60), GameSpeed::Classical);
    }

    #[test]
    fn test_summarize_increment_codes() {
        let df = df!(
            "increment_code" => [Some("1+0"), Some("15+2"), Some("15+2"), Some("180+0"), Some("?"), None],
        )
        .unwrap();

        let summary = summarize_increment_codes(&df).unwrap();
        assert_eq!(summary.distinct_codes, 4);
        assert_eq!(summary.unparseable, 1);
        assert_eq!(summary.games_by_speed.get(&GameSpeed::Bullet), Some(&1));
        assert_eq!(summary.games_by_speed.get(&GameSpeed::Rapid), Some(&2));
        assert_eq!(summary.games_by_speed.get(&GameSpeed::Classical), Some(&1));
        assert_eq!(summary.games_by_speed.get(&GameSpeed::Blitz), None);
    }
}

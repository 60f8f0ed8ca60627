//! Multiplier history
//!
//! Parsing user input into a chronological list of crash multipliers (oldest
//! first), slicing the chart window and exporting it back to text.

mod export;
mod parser;

pub use export::{write_history, DEFAULT_EXPORT_FILE};
pub use parser::{parse_multipliers, InputError};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// Chronological crash multipliers, oldest first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History(Vec<Decimal>);

impl History {
    pub fn new(values: Vec<Decimal>) -> Self {
        Self(values)
    }

    /// Parse comma-separated multipliers
    pub fn parse(input: &str) -> Result<Self, InputError> {
        parse_multipliers(input).map(Self)
    }

    /// Read a history file in the same comma-separated format
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn values(&self) -> &[Decimal] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The last `n` rounds, or all of them if fewer
    pub fn tail(&self, n: usize) -> &[Decimal] {
        &self.0[self.0.len().saturating_sub(n)..]
    }

    /// Comma-joined values as written to the export file
    pub fn to_export_string(&self) -> String {
        self.0
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl FromStr for History {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<[Decimal]> for History {
    fn as_ref(&self) -> &[Decimal] {
        &self.0
    }
}

impl From<Vec<Decimal>> for History {
    fn from(values: Vec<Decimal>) -> Self {
        Self(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_tail() {
        let history: History = "1.1, 1.2, 1.3, 1.4".parse().unwrap();
        assert_eq!(history.tail(2), &[dec!(1.3), dec!(1.4)]);
        assert_eq!(history.tail(20).len(), 4);
        assert!(history.tail(0).is_empty());
    }

    #[test]
    fn test_export_string() {
        let history = History::parse("1.3, 2.0,  15").unwrap();
        assert_eq!(history.to_export_string(), "1.3,2.0,15");
    }

    #[test]
    fn test_export_string_parses_back() {
        let history = History::parse("1.3, 1.4, 2.1, 1.8, 3.2").unwrap();
        let reparsed = History::parse(&history.to_export_string()).unwrap();
        assert_eq!(history, reparsed);
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.txt");
        std::fs::write(&path, "1.3,1.4\n").unwrap();

        let history = History::from_file(&path).unwrap();
        assert_eq!(history.values(), &[dec!(1.3), dec!(1.4)]);
    }

    #[test]
    fn test_from_missing_file() {
        let result = History::from_file("/nonexistent/history.txt");
        assert!(matches!(result, Err(InputError::Io(_))));
    }

    #[test]
    fn test_serialize_transparent() {
        let history = History::new(vec![dec!(1.5), dec!(2.25)]);
        let json = serde_json::to_string(&history).unwrap();
        assert_eq!(json, r#"["1.5","2.25"]"#);
    }
}

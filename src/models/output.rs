//! Output models used for printing and JSON serialization.

use serde::{Serialize, Serializer};
use std::fmt;

use crate::cli::types::ReportKind;

/// Placeholder shown for optional numbers the API left out.
pub const PLACEHOLDER: &str = "-";

/// One display value of a report row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Int(i64),
    Text(String),
    /// Value missing upstream; always displays as [`PLACEHOLDER`].
    Missing,
}

impl Cell {
    /// `Int` when present, `Missing` otherwise.
    pub fn optional(value: Option<i64>) -> Self {
        value.map(Cell::Int).unwrap_or(Cell::Missing)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Int(n) => write!(f, "{}", n),
            Cell::Text(s) => f.write_str(s),
            Cell::Missing => f.write_str(PLACEHOLDER),
        }
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

// Numbers stay numbers in JSON; text and the placeholder become strings.
impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Cell::Int(n) => serializer.serialize_i64(*n),
            Cell::Text(s) => serializer.serialize_str(s),
            Cell::Missing => serializer.serialize_str(PLACEHOLDER),
        }
    }
}

pub type Row = Vec<Cell>;

/// Header plus data rows, in the order the API returned them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub kind: ReportKind,
    pub header: &'static [&'static str],
    pub rows: Vec<Row>,
}

impl Report {
    pub fn new(kind: ReportKind) -> Self {
        Self {
            kind,
            header: kind.header(),
            rows: Vec::new(),
        }
    }

    /// Append a data row; its width must match the header.
    pub(crate) fn push_row(&mut self, row: Row) {
        debug_assert_eq!(row.len(), self.kind.column_count(), "row width for {}", self.kind);
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_cell_displays_placeholder() {
        assert_eq!(Cell::Missing.to_string(), "-");
        assert_eq!(Cell::optional(None).to_string(), "-");
        assert_eq!(Cell::optional(Some(0)).to_string(), "0");
    }

    #[test]
    fn test_cell_serialization() {
        let row: Row = vec![Cell::Int(-6), "Real Madrid".into(), Cell::Missing];
        assert_eq!(serde_json::to_value(&row).unwrap(), json!([-6, "Real Madrid", "-"]));
    }

    #[test]
    fn test_report_serialization() {
        let mut report = Report::new(ReportKind::Matches);
        report.push_row(vec![
            "A vs B".into(),
            "2025-01-01 (Not yet provided)".into(),
            "SCHEDULED".into(),
        ]);

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["kind"], "matches");
        assert_eq!(value["header"][0], "Match");
        assert_eq!(value["rows"][0][2], "SCHEDULED");
        assert_eq!(report.len(), 1);
        assert!(!report.is_empty());
    }
}

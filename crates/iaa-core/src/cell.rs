//! Loosely typed spreadsheet cells.
//!
//! Cells only exist at the ingestion boundary. The loader turns them into a
//! question id, a [`Score`](crate::model::Score), or "absent" straight away.

use calamine::Data;

/// A single cell value as read from a workbook.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl Cell {
    pub fn text(s: impl Into<String>) -> Self {
        Cell::Text(s.into())
    }

    /// Blank cells and empty strings both count as empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Render the cell as a lookup key (question ids, team names).
    ///
    /// Integral numbers drop their fractional part so a qid typed as `3`
    /// and one stored as `3.0` share a key.
    pub fn as_key(&self) -> Option<String> {
        match self {
            Cell::Empty => None,
            Cell::Text(s) if s.is_empty() => None,
            Cell::Text(s) => Some(s.clone()),
            Cell::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => Some(format!("{}", *n as i64)),
            Cell::Number(n) => Some(n.to_string()),
            Cell::Bool(b) => Some(b.to_string()),
        }
    }

    /// Exact, case-sensitive comparison against a marker text.
    pub fn matches_text(&self, marker: &str) -> bool {
        matches!(self, Cell::Text(s) if s == marker)
    }

    /// Coerce the cell to an integer the way an `int()` cast would:
    /// numbers truncate toward zero, numeric text is parsed, booleans are
    /// 1 and 0. Returns `None` for empty or non-numeric cells.
    pub fn to_integer(&self) -> Option<i64> {
        match self {
            Cell::Empty => None,
            Cell::Number(n) if n.is_finite() => Some(n.trunc() as i64),
            Cell::Number(_) => None,
            Cell::Bool(b) => Some(i64::from(*b)),
            Cell::Text(s) => {
                let trimmed = s.trim();
                trimmed.parse::<i64>().ok()
            }
        }
    }

    /// Short human-readable rendering for log messages.
    pub fn describe(&self) -> String {
        match self {
            Cell::Empty => "<empty>".to_string(),
            Cell::Text(s) => format!("{s:?}"),
            Cell::Number(n) => n.to_string(),
            Cell::Bool(b) => b.to_string(),
        }
    }
}

impl From<&Data> for Cell {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty => Cell::Empty,
            Data::String(s) => Cell::Text(s.clone()),
            Data::Int(i) => Cell::Number(*i as f64),
            Data::Float(f) => Cell::Number(*f),
            Data::Bool(b) => Cell::Bool(*b),
            Data::DateTime(dt) => Cell::Number(dt.as_f64()),
            Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
            Data::Error(e) => Cell::Text(e.to_string()),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::Number(n)
    }
}

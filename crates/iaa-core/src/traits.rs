//! Core trait definitions.
//!
//! The loader reads workbooks through [`WorkbookSource`] so the score
//! resolution logic can run against real files (`calamine`) or in-memory
//! sheets in tests.

use crate::cell::Cell;
use crate::error::LoadError;

/// A workbook: a list of named sheets, each a grid of cells.
pub trait WorkbookSource {
    /// Sheet names in workbook order.
    fn sheet_names(&self) -> Vec<String>;

    /// Read every row of a sheet.
    ///
    /// Rows and cells are in absolute sheet coordinates: `rows[0]` is the
    /// first sheet row and `rows[r][0]` is column A, regardless of where the
    /// sheet's used area begins. Rows may be shorter than the widest row.
    fn sheet_rows(&mut self, name: &str) -> Result<Vec<Vec<Cell>>, LoadError>;

    /// Human-readable origin of the workbook, used in logs and reports.
    fn source_name(&self) -> String;
}

//! Workbook backends: spreadsheet files via `calamine`, and an in-memory
//! workbook for tests and tooling.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use calamine::{open_workbook_auto, Reader, Sheets};

use crate::cell::Cell;
use crate::error::LoadError;
use crate::traits::WorkbookSource;

/// A spreadsheet file (xlsx, xlsm, xls, xlsb or ods) opened with calamine.
///
/// The file handle is released when the value is dropped.
pub struct FileWorkbook {
    path: PathBuf,
    sheets: Sheets<BufReader<File>>,
}

impl FileWorkbook {
    pub fn open(path: &Path) -> Result<Self, LoadError> {
        let sheets = open_workbook_auto(path).map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            sheets,
        })
    }
}

impl WorkbookSource for FileWorkbook {
    fn sheet_names(&self) -> Vec<String> {
        self.sheets.sheet_names()
    }

    fn sheet_rows(&mut self, name: &str) -> Result<Vec<Vec<Cell>>, LoadError> {
        let range = self
            .sheets
            .worksheet_range(name)
            .map_err(|source| LoadError::Sheet {
                path: self.path.clone(),
                sheet: name.to_string(),
                source,
            })?;

        let Some((last_row, last_col)) = range.end() else {
            return Ok(Vec::new());
        };

        // The range starts at the first used cell; re-anchor it at A1.
        let rows = (0..=last_row)
            .map(|row| {
                (0..=last_col)
                    .map(|col| range.get_value((row, col)).map(Cell::from).unwrap_or_default())
                    .collect()
            })
            .collect();
        Ok(rows)
    }

    fn source_name(&self) -> String {
        self.path.display().to_string()
    }
}

/// A workbook held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryWorkbook {
    name: String,
    sheets: Vec<(String, Vec<Vec<Cell>>)>,
}

impl MemoryWorkbook {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sheets: Vec::new(),
        }
    }

    /// Append a sheet. Rows are in absolute coordinates (row 0 = header).
    pub fn with_sheet(mut self, name: impl Into<String>, rows: Vec<Vec<Cell>>) -> Self {
        self.sheets.push((name.into(), rows));
        self
    }
}

impl WorkbookSource for MemoryWorkbook {
    fn sheet_names(&self) -> Vec<String> {
        self.sheets.iter().map(|(name, _)| name.clone()).collect()
    }

    fn sheet_rows(&mut self, name: &str) -> Result<Vec<Vec<Cell>>, LoadError> {
        self.sheets
            .iter()
            .find(|(sheet, _)| sheet == name)
            .map(|(_, rows)| rows.clone())
            .ok_or_else(|| LoadError::MissingSheet(name.to_string()))
    }

    fn source_name(&self) -> String {
        self.name.clone()
    }
}

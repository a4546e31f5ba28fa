//! Error types for workbook loading and statistics.
//!
//! Loading failures are fatal for a run: the binary propagates them without
//! producing a partial report. Malformed rows are never errors; the loader
//! degrades them to "not evaluated".

use std::path::PathBuf;

use calamine::{OdsError, XlsError, XlsbError, XlsxError};
use thiserror::Error;

/// Errors that can occur while reading an annotator workbook.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The workbook could not be opened (missing file, unknown format, I/O).
    #[error("failed to open workbook {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    /// A sheet listed by the workbook could not be read.
    #[error("failed to read sheet '{sheet}' in {}", .path.display())]
    Sheet {
        path: PathBuf,
        sheet: String,
        #[source]
        source: calamine::Error,
    },

    /// A sheet was requested that the workbook does not contain.
    #[error("sheet not found: {0}")]
    MissingSheet(String),
}

impl LoadError {
    /// Returns `true` if the failure comes from the filesystem rather than
    /// from the workbook contents.
    ///
    /// Each format reader wraps its own I/O failures, so a missing `.xlsx`
    /// arrives as `Xlsx(XlsxError::Io(_))` rather than as `Io(_)`.
    pub fn is_io(&self) -> bool {
        let (LoadError::Open { source, .. } | LoadError::Sheet { source, .. }) = self else {
            return false;
        };
        matches!(
            source,
            calamine::Error::Io(_)
                | calamine::Error::Xlsx(XlsxError::Io(_))
                | calamine::Error::Xls(XlsError::Io(_))
                | calamine::Error::Xlsb(XlsbError::Io(_))
                | calamine::Error::Ods(OdsError::Io(_))
        )
    }
}

/// Errors from the agreement statistics.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatsError {
    /// The two rating series do not have the same number of labels.
    #[error("rating series differ in length: {first} vs {second}")]
    LengthMismatch { first: usize, second: usize },
}

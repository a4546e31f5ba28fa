//! iaa-core: Score loading, alignment, and agreement statistics.
//!
//! This crate defines the annotator score model, the workbook loader that
//! resolves pass/fail encodings into scores, the aligner that pairs two
//! annotators' scores, and the statistics the report is built from.

pub mod align;
pub mod cell;
pub mod config;
pub mod error;
pub mod loader;
pub mod model;
pub mod report;
pub mod statistics;
pub mod traits;
pub mod workbook;

//! Score loader.
//!
//! Reads one annotator's workbook into [`AnnotatorScores`]. Every sheet whose
//! name starts with the layout's team prefix is a team; every row after the
//! header with a non-empty question id is a candidate score, resolved by
//! [`resolve_row`].

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::config::SheetLayout;
use crate::error::LoadError;
use crate::model::{AnnotatorScores, Score, TeamScores};
use crate::traits::WorkbookSource;
use crate::workbook::FileWorkbook;

/// What a single data row contributes.
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    /// No question id: a spacer row.
    Blank,
    /// The row resolved to a score.
    Scored { qid: String, score: Score },
    /// Neither a numeric score nor a recognised marker: not evaluated yet.
    NotEvaluated { qid: String },
    /// The score cell held something that is not 0 or 1.
    InvalidScore { qid: String, raw: Cell },
}

static EMPTY: Cell = Cell::Empty;

fn cell_at(row: &[Cell], column: usize) -> &Cell {
    row.get(column).unwrap_or(&EMPTY)
}

/// Resolve one data row into a score.
///
/// 1. A non-empty score cell wins, coerced to an integer.
/// 2. Otherwise the pass indicator cell equal to the pass marker gives 1;
///    failing that, the fail indicator cell equal to the fail marker gives 0.
///    The fail check reads its own cell; it is not the negation of the pass
///    check.
/// 3. Anything else is not evaluated.
pub fn resolve_row(row: &[Cell], layout: &SheetLayout) -> RowOutcome {
    let Some(qid) = cell_at(row, layout.qid_column).as_key() else {
        return RowOutcome::Blank;
    };

    let score_cell = cell_at(row, layout.score_column);
    if !score_cell.is_empty() {
        return match score_cell.to_integer().and_then(Score::from_int) {
            Some(score) => RowOutcome::Scored { qid, score },
            None => RowOutcome::InvalidScore {
                qid,
                raw: score_cell.clone(),
            },
        };
    }

    if cell_at(row, layout.pass_column).matches_text(&layout.pass_marker) {
        RowOutcome::Scored {
            qid,
            score: Score::Pass,
        }
    } else if cell_at(row, layout.fail_column).matches_text(&layout.fail_marker) {
        RowOutcome::Scored {
            qid,
            score: Score::Fail,
        }
    } else {
        RowOutcome::NotEvaluated { qid }
    }
}

/// Row counts for one team sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetSummary {
    pub team: String,
    /// Data rows after the header.
    pub rows: usize,
    pub blank: usize,
    pub scored: usize,
    pub not_evaluated: usize,
    pub invalid: usize,
    /// Scored rows whose qid was already scored earlier on the sheet.
    pub overwritten: usize,
}

impl SheetSummary {
    /// Distinct questions that ended up with a score.
    pub fn distinct_scored(&self) -> usize {
        self.scored - self.overwritten
    }
}

/// The result of loading one workbook.
#[derive(Debug, Clone)]
pub struct LoadedWorkbook {
    pub source: String,
    pub scores: AnnotatorScores,
    /// One entry per team sheet, in workbook order.
    pub sheets: Vec<SheetSummary>,
    /// Sheets skipped because they are not team sheets.
    pub ignored_sheets: Vec<String>,
}

/// Open a spreadsheet file and load its team scores.
///
/// The file is closed before this returns.
pub fn load_scores(path: &Path, layout: &SheetLayout) -> Result<LoadedWorkbook, LoadError> {
    let mut workbook = FileWorkbook::open(path)?;
    load_from_source(&mut workbook, layout)
}

/// Load team scores from any workbook source.
pub fn load_from_source<W: WorkbookSource>(
    source: &mut W,
    layout: &SheetLayout,
) -> Result<LoadedWorkbook, LoadError> {
    let source_name = source.source_name();
    let mut teams: BTreeMap<String, TeamScores> = BTreeMap::new();
    let mut sheets = Vec::new();
    let mut ignored_sheets = Vec::new();

    for sheet_name in source.sheet_names() {
        if !layout.is_team_sheet(&sheet_name) {
            tracing::debug!("{source_name}: ignoring sheet '{sheet_name}'");
            ignored_sheets.push(sheet_name);
            continue;
        }

        let rows = source.sheet_rows(&sheet_name)?;
        let (team_scores, summary) = load_team_sheet(&sheet_name, &rows, layout);
        tracing::debug!(
            "{source_name}: '{sheet_name}' {} scored, {} not evaluated, {} blank",
            summary.scored,
            summary.not_evaluated,
            summary.blank
        );
        // Duplicate sheet names cannot occur in a workbook; keep the last one regardless.
        teams.insert(sheet_name, team_scores);
        sheets.push(summary);
    }

    let scores = AnnotatorScores::new(teams);
    tracing::info!(
        "loaded {source_name}: {} team(s), {} scored cell(s)",
        scores.team_count(),
        scores.scored_cells()
    );

    Ok(LoadedWorkbook {
        source: source_name,
        scores,
        sheets,
        ignored_sheets,
    })
}

fn load_team_sheet(
    team: &str,
    rows: &[Vec<Cell>],
    layout: &SheetLayout,
) -> (TeamScores, SheetSummary) {
    let mut scores: BTreeMap<String, Score> = BTreeMap::new();
    let mut summary = SheetSummary {
        team: team.to_string(),
        ..SheetSummary::default()
    };

    for (index, row) in rows.iter().enumerate().skip(layout.header_rows) {
        summary.rows += 1;
        match resolve_row(row, layout) {
            RowOutcome::Blank => summary.blank += 1,
            RowOutcome::Scored { qid, score } => {
                summary.scored += 1;
                if let Some(previous) = scores.insert(qid.clone(), score) {
                    summary.overwritten += 1;
                    tracing::warn!(
                        "'{team}' row {}: {qid} scored again ({previous} -> {score})",
                        index + 1
                    );
                }
            }
            RowOutcome::NotEvaluated { qid } => {
                summary.not_evaluated += 1;
                tracing::debug!("'{team}' row {}: question {qid} not evaluated", index + 1);
            }
            RowOutcome::InvalidScore { qid, raw } => {
                summary.invalid += 1;
                tracing::warn!(
                    "'{team}' row {}: {qid} score {} is outside 0/1",
                    index + 1,
                    raw.describe()
                );
            }
        }
    }

    (TeamScores::new(scores), summary)
}

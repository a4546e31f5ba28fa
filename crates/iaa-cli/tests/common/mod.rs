//! Workbook fixtures shared by the CLI integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use rust_xlsxwriter::Workbook;

pub const PASS: &str = "Pass (1)";
pub const FAIL: &str = "Fail (0)";

/// One data row: qid, pass cell, fail cell, numeric score.
pub type Row<'a> = (&'a str, &'a str, &'a str, Option<f64>);

pub fn iaa() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("iaa").unwrap()
}

/// `iaa` run from `dir` with no config or path overrides leaking in.
pub fn iaa_in(dir: &Path) -> Command {
    let mut cmd = iaa();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env_remove("IAA_FIRST")
        .env_remove("IAA_SECOND")
        .env_remove("RUST_LOG");
    cmd
}

/// Write a workbook with a header row on every sheet.
pub fn write_workbook(path: &Path, sheets: &[(&str, Vec<Row<'_>>)]) {
    let mut workbook = Workbook::new();
    for (name, rows) in sheets {
        let sheet = workbook.add_worksheet();
        sheet.set_name(*name).unwrap();
        for (col, title) in ["ID", "Question", "Notes", "Pass", "Fail", "Annotator Score"]
            .iter()
            .enumerate()
        {
            sheet.write_string(0, col as u16, *title).unwrap();
        }
        for (i, (qid, pass, fail, score)) in rows.iter().enumerate() {
            let r = i as u32 + 1;
            if !qid.is_empty() {
                sheet.write_string(r, 0, *qid).unwrap();
            }
            sheet.write_string(r, 1, "question text").unwrap();
            if !pass.is_empty() {
                sheet.write_string(r, 3, *pass).unwrap();
            }
            if !fail.is_empty() {
                sheet.write_string(r, 4, *fail).unwrap();
            }
            if let Some(score) = score {
                sheet.write_number(r, 5, *score).unwrap();
            }
        }
    }
    workbook.save(path).unwrap();
}

/// First annotator: three teams plus an instructions sheet.
///
/// Alpha: Q1=1, Q2=0, Q3=1 (numeric beats the fail marker), a spacer row,
/// Q4 not evaluated. Beta: 0, 1, 1, 0. Gamma: Q1=1.
pub fn write_first(dir: &Path) -> PathBuf {
    let path = dir.join("first.xlsx");
    write_workbook(
        &path,
        &[
            ("Instructions", vec![("Q1", PASS, "", None)]),
            (
                "Team Alpha",
                vec![
                    ("Q1", PASS, "", None),
                    ("Q2", "", FAIL, None),
                    ("Q3", "", FAIL, Some(1.0)),
                    ("", PASS, "", None),
                    ("Q4", "", "", None),
                ],
            ),
            (
                "Team Beta",
                vec![
                    ("Q1", PASS, "", Some(0.0)),
                    ("Q2", PASS, "", None),
                    ("Q3", PASS, FAIL, None),
                    ("Q4", "", FAIL, None),
                ],
            ),
            ("Team Gamma", vec![("Q1", PASS, "", None)]),
        ],
    );
    path
}

/// Second annotator. Alpha: 1, 1, 1, 0. Beta: 0, 1, 0, 0. Delta: Q1=1.
pub fn write_second(dir: &Path) -> PathBuf {
    let path = dir.join("second.xlsx");
    write_workbook(
        &path,
        &[
            (
                "Team Alpha",
                vec![
                    ("Q1", PASS, "", None),
                    ("Q2", PASS, "", None),
                    ("Q3", "", "", Some(1.0)),
                    ("Q4", "", FAIL, None),
                ],
            ),
            (
                "Team Beta",
                vec![
                    ("Q1", "", FAIL, None),
                    ("Q2", PASS, "", None),
                    ("Q3", "", FAIL, None),
                    ("Q4", "", "", Some(0.0)),
                ],
            ),
            ("Team Delta", vec![("Q1", PASS, "", None)]),
        ],
    );
    path
}

/// A workbook sharing no team with [`write_first`].
pub fn write_disjoint(dir: &Path) -> PathBuf {
    let path = dir.join("disjoint.xlsx");
    write_workbook(
        &path,
        &[("Team Zeta", vec![("Q1", PASS, "", None), ("Q2", "", FAIL, None)])],
    );
    path
}

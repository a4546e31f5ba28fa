//! End-to-end agreement runs over generated workbooks.
//!
//! The fixtures in `common` pair up on seven cells: Alpha Q1-Q3 and Beta
//! Q1-Q4. Five of the seven agree and both annotators pass four of them, so
//! kappa is (35/49 - 25/49) / (24/49) = 0.417.

mod common;

use predicates::prelude::*;
use tempfile::TempDir;

use common::{iaa_in, write_disjoint, write_first, write_second};

#[test]
fn text_report_end_to_end() {
    let dir = TempDir::new().unwrap();
    let first = write_first(dir.path());
    let second = write_second(dir.path());

    iaa_in(dir.path())
        .arg("agreement")
        .arg("--first")
        .arg(&first)
        .arg("--second")
        .arg(&second)
        .arg("--first-label")
        .arg("MB")
        .arg("--second-label")
        .arg("NC")
        .assert()
        .success()
        .stdout(predicate::str::contains("Overall kappa (all questions): 0.417 [7 pairs]"))
        .stderr(predicate::str::contains("7 paired cells across 4 questions"))
        .stdout(predicate::str::contains("Kappa per question:"))
        .stdout(predicate::str::contains("NaN"))
        .stdout(predicate::str::contains("Per-project mean scores:"))
        .stdout(predicate::str::contains("Team Gamma"))
        .stdout(predicate::str::contains("Team Delta"))
        .stdout(predicate::str::contains("0.722"))
        .stdout(predicate::str::contains("Per-category pass rates:"))
        .stdout(predicate::str::contains(
            "Aggregate pass rate (both annotators): 58.8% over 17 cells",
        ));
}

#[test]
fn json_report_end_to_end() {
    let dir = TempDir::new().unwrap();
    let first = write_first(dir.path());
    let second = write_second(dir.path());

    let output = iaa_in(dir.path())
        .arg("agreement")
        .arg("--first")
        .arg(&first)
        .arg("--second")
        .arg(&second)
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let agreement = &report["agreement"];
    assert_eq!(agreement["overall"]["pairs"], 7);
    let kappa = agreement["overall"]["kappa"].as_f64().unwrap();
    assert!((kappa - 10.0 / 24.0).abs() < 1e-9, "got {kappa}");

    let per_question = agreement["per_question"].as_array().unwrap();
    let qids: Vec<&str> = per_question
        .iter()
        .map(|q| q["qid"].as_str().unwrap())
        .collect();
    assert_eq!(qids, vec!["Q1", "Q2", "Q3", "Q4"]);
    let pairs: u64 = per_question
        .iter()
        .map(|q| q["pairs"].as_u64().unwrap())
        .sum();
    assert_eq!(pairs, 7);
    assert_eq!(per_question[0]["kappa"].as_f64(), Some(1.0));
    // Q4 only pairs Beta (0, 0): undefined.
    assert!(per_question[3]["kappa"].is_null());

    assert_eq!(report["first"]["label"], "A");
    assert_eq!(report["first"]["global"]["count"], 8);
    assert_eq!(report["second"]["global"]["count"], 9);
    assert_eq!(report["common"]["count"], 7);
}

#[test]
fn no_overlap_reports_aggregates_only() {
    let dir = TempDir::new().unwrap();
    let first = write_first(dir.path());
    let disjoint = write_disjoint(dir.path());

    iaa_in(dir.path())
        .arg("agreement")
        .arg("--first")
        .arg(&first)
        .arg("--second")
        .arg(&disjoint)
        .assert()
        .success()
        .stdout(predicate::str::contains("No scored cells in common"))
        .stderr(predicate::str::contains("no paired cells"))
        .stdout(predicate::str::contains("Overall kappa").not())
        .stdout(predicate::str::contains("Team Zeta"))
        .stdout(predicate::str::contains("Per-category pass rates:"));
}

#[test]
fn missing_workbook_aborts_without_report() {
    let dir = TempDir::new().unwrap();
    let first = write_first(dir.path());

    iaa_in(dir.path())
        .arg("agreement")
        .arg("--first")
        .arg(&first)
        .arg("--second")
        .arg(dir.path().join("absent.xlsx"))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("failed to open workbook"));
}

#[test]
fn config_supplies_paths_and_labels() {
    let dir = TempDir::new().unwrap();
    write_first(dir.path());
    write_second(dir.path());
    std::fs::write(
        dir.path().join("iaa.toml"),
        r#"
[annotators]
first_path = "first.xlsx"
second_path = "second.xlsx"
first_label = "Rater 1"
second_label = "Rater 2"
"#,
    )
    .unwrap();

    iaa_in(dir.path())
        .arg("agreement")
        .arg("--format")
        .arg("markdown")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "**Rater 1** (`first.xlsx`) vs **Rater 2** (`second.xlsx`)",
        ))
        .stdout(predicate::str::contains("**Overall kappa:** 0.417 over 7 pairs"));
}

#[test]
fn environment_overrides_config_paths() {
    let dir = TempDir::new().unwrap();
    let first = write_first(dir.path());
    let second = write_second(dir.path());

    iaa_in(dir.path())
        .env("IAA_FIRST", &first)
        .env("IAA_SECOND", &second)
        .arg("agreement")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.417 [7 pairs]"));
}

#[test]
fn custom_layout_changes_recognised_sheets() {
    let dir = TempDir::new().unwrap();
    let first = write_first(dir.path());
    let second = write_second(dir.path());
    let config = dir.path().join("alpha-only.toml");
    std::fs::write(&config, "[layout]\nsheet_prefix = \"Team A\"\n").unwrap();

    // Only Team Alpha qualifies: pairs Q1-Q3.
    iaa_in(dir.path())
        .arg("agreement")
        .arg("--first")
        .arg(&first)
        .arg("--second")
        .arg(&second)
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("[3 pairs]"))
        .stdout(predicate::str::contains("Team Beta").not());
}

#[test]
fn output_file_is_written() {
    let dir = TempDir::new().unwrap();
    let first = write_first(dir.path());
    let second = write_second(dir.path());
    let out = dir.path().join("reports").join("agreement.md");

    iaa_in(dir.path())
        .arg("agreement")
        .arg("--first")
        .arg(&first)
        .arg("--second")
        .arg(&second)
        .arg("--format")
        .arg("md")
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stderr(predicate::str::contains("Report saved to:"));

    let saved = std::fs::read_to_string(&out).unwrap();
    assert!(saved.contains("### Kappa per question"));
    assert!(saved.contains("| Q4 | 1 | NaN |"));
}

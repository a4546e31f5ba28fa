//! The `iaa inspect` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use iaa_core::config::load_config_from;
use iaa_core::loader::load_scores;

pub fn execute(workbook: PathBuf, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let loaded = load_scores(&workbook, &config.layout)?;

    println!(
        "Workbook: {} ({} team sheets, {} scored cells)",
        loaded.source,
        loaded.sheets.len(),
        loaded.scores.scored_cells()
    );

    if !loaded.ignored_sheets.is_empty() {
        println!("Ignored sheets: {}", loaded.ignored_sheets.join(", "));
    }

    if loaded.sheets.is_empty() {
        println!(
            "No sheets start with '{}'; nothing to score.",
            config.layout.sheet_prefix
        );
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec![
        "Sheet",
        "Rows",
        "Scored",
        "Not evaluated",
        "Blank",
        "Invalid",
        "Overwritten",
    ]);
    for sheet in &loaded.sheets {
        table.add_row(vec![
            Cell::new(&sheet.team),
            Cell::new(sheet.rows),
            Cell::new(sheet.distinct_scored()),
            Cell::new(sheet.not_evaluated),
            Cell::new(sheet.blank),
            Cell::new(sheet.invalid),
            Cell::new(sheet.overwritten),
        ]);
    }
    println!("{table}");

    let not_evaluated: usize = loaded.sheets.iter().map(|s| s.not_evaluated).sum();
    let invalid: usize = loaded.sheets.iter().map(|s| s.invalid).sum();
    if not_evaluated + invalid == 0 {
        println!("All questions evaluated.");
    } else {
        println!("\n{not_evaluated} row(s) not evaluated, {invalid} invalid score(s).");
    }

    Ok(())
}

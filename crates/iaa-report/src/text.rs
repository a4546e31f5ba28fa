//! Console report built from `comfy-table` tables.

use comfy_table::{Cell, Table};

use iaa_core::report::{AgreementReport, AnnotatorSummary};
use iaa_core::statistics::{CategoryRate, ProjectMean};

use crate::{format_kappa, NO_OVERLAP_MESSAGE};

fn project_cells(project: Option<&ProjectMean>) -> [Cell; 2] {
    match project {
        Some(p) => [Cell::new(format!("{:.3}", p.mean)), Cell::new(p.count)],
        None => [Cell::new("-"), Cell::new("-")],
    }
}

fn category_cells(rate: Option<&CategoryRate>) -> [Cell; 2] {
    match rate {
        Some(r) => [Cell::new(format!("{:.1}%", r.pass_pct)), Cell::new(r.count)],
        None => [Cell::new("-"), Cell::new("-")],
    }
}

fn paired_header(
    first: &AnnotatorSummary,
    second: &AnnotatorSummary,
    key: &str,
    stat: &str,
) -> Vec<String> {
    vec![
        key.to_string(),
        format!("{} {stat}", first.label),
        format!("{} n", first.label),
        format!("{} {stat}", second.label),
        format!("{} n", second.label),
    ]
}

/// Render the full console report.
pub fn render_text(report: &AgreementReport) -> String {
    let first = &report.first;
    let second = &report.second;
    let mut out = String::new();

    out.push_str(&format!(
        "Inter-annotator agreement: {} ({}) vs {} ({})\n\n",
        first.label, first.source, second.label, second.source
    ));

    // Agreement
    match &report.agreement {
        Some(agreement) => {
            out.push_str(&format!(
                "Overall kappa (all questions): {} [{} pairs]\n",
                format_kappa(agreement.overall.kappa),
                agreement.overall.pairs
            ));
            out.push_str("\nKappa per question:\n");
            let mut table = Table::new();
            table.set_header(vec!["Question", "Pairs", "Kappa"]);
            for q in &agreement.per_question {
                table.add_row(vec![
                    Cell::new(&q.qid),
                    Cell::new(q.result.pairs),
                    Cell::new(format_kappa(q.result.kappa)),
                ]);
            }
            out.push_str(&format!("{table}\n"));
        }
        None => {
            out.push_str(&format!("{NO_OVERLAP_MESSAGE}\n"));
        }
    }

    // Per-project means
    out.push_str("\nPer-project mean scores:\n");
    let mut table = Table::new();
    table.set_header(paired_header(first, second, "Project", "mean"));
    for team in report.team_names() {
        let mut row = vec![Cell::new(team)];
        row.extend(project_cells(first.project(team)));
        row.extend(project_cells(second.project(team)));
        table.add_row(row);
    }
    table.add_row(vec![
        Cell::new("Cross-project mean"),
        Cell::new(format!("{:.3}", first.cross_project_mean)),
        Cell::new(first.projects.iter().filter(|p| p.count > 0).count()),
        Cell::new(format!("{:.3}", second.cross_project_mean)),
        Cell::new(second.projects.iter().filter(|p| p.count > 0).count()),
    ]);
    out.push_str(&format!("{table}\n"));

    // Global means
    out.push_str("\nGlobal mean scores:\n");
    let mut table = Table::new();
    table.set_header(vec![
        "Cells".to_string(),
        first.label.clone(),
        second.label.clone(),
        "n".to_string(),
    ]);
    table.add_row(vec![
        Cell::new(format!("All recorded ({} / {})", first.global.count, second.global.count)),
        Cell::new(format!("{:.3}", first.global.mean)),
        Cell::new(format!("{:.3}", second.global.mean)),
        Cell::new(first.global.count + second.global.count),
    ]);
    if report.common.count > 0 {
        table.add_row(vec![
            Cell::new("Common cells"),
            Cell::new(format!("{:.3}", report.common.first)),
            Cell::new(format!("{:.3}", report.common.second)),
            Cell::new(report.common.count),
        ]);
    } else {
        table.add_row(vec![
            Cell::new("Common cells"),
            Cell::new("-"),
            Cell::new("-"),
            Cell::new(0),
        ]);
    }
    out.push_str(&format!("{table}\n"));

    // Per-category pass rates
    out.push_str("\nPer-category pass rates:\n");
    let mut table = Table::new();
    table.set_header(paired_header(first, second, "Question", "pass %"));
    for qid in report.question_ids() {
        let mut row = vec![Cell::new(qid)];
        row.extend(category_cells(first.category(qid)));
        row.extend(category_cells(second.category(qid)));
        table.add_row(row);
    }
    table.add_row(vec![
        Cell::new("All categories"),
        Cell::new(format!("{:.1}%", first.global.pass_pct)),
        Cell::new(first.global.count),
        Cell::new(format!("{:.1}%", second.global.pass_pct)),
        Cell::new(second.global.count),
    ]);
    out.push_str(&format!("{table}\n"));
    out.push_str(&format!(
        "Aggregate pass rate (both annotators): {:.1}% over {} cells\n",
        report.pooled.pass_pct, report.pooled.count
    ));

    out
}

//! Markdown report, for pasting into issues and notes.

use iaa_core::report::AgreementReport;
use iaa_core::statistics::{CategoryRate, ProjectMean};

use crate::{format_kappa, NO_OVERLAP_MESSAGE};

fn project_columns(project: Option<&ProjectMean>) -> String {
    match project {
        Some(p) => format!("{:.3} | {}", p.mean, p.count),
        None => "- | -".to_string(),
    }
}

fn category_columns(rate: Option<&CategoryRate>) -> String {
    match rate {
        Some(r) => format!("{:.1}% | {}", r.pass_pct, r.count),
        None => "- | -".to_string(),
    }
}

/// Format the agreement report as markdown.
pub fn render_markdown(report: &AgreementReport) -> String {
    let first = &report.first;
    let second = &report.second;
    let mut md = String::new();

    md.push_str("## Inter-annotator agreement\n\n");
    md.push_str(&format!(
        "**{}** (`{}`) vs **{}** (`{}`)\n\n",
        first.label, first.source, second.label, second.source
    ));

    match &report.agreement {
        Some(agreement) => {
            md.push_str(&format!(
                "**Overall kappa:** {} over {} pairs\n\n",
                format_kappa(agreement.overall.kappa),
                agreement.overall.pairs
            ));
            md.push_str("### Kappa per question\n\n");
            md.push_str("| Question | Pairs | Kappa |\n");
            md.push_str("|----------|-------|-------|\n");
            for q in &agreement.per_question {
                md.push_str(&format!(
                    "| {} | {} | {} |\n",
                    q.qid,
                    q.result.pairs,
                    format_kappa(q.result.kappa)
                ));
            }
            md.push('\n');
        }
        None => {
            md.push_str(&format!("> {NO_OVERLAP_MESSAGE}\n\n"));
        }
    }

    md.push_str("### Per-project mean scores\n\n");
    md.push_str(&format!(
        "| Project | {a} mean | {a} n | {b} mean | {b} n |\n",
        a = first.label,
        b = second.label
    ));
    md.push_str("|---------|------|---|------|---|\n");
    for team in report.team_names() {
        md.push_str(&format!(
            "| {} | {} | {} |\n",
            team,
            project_columns(first.project(team)),
            project_columns(second.project(team))
        ));
    }
    md.push_str(&format!(
        "| **Cross-project mean** | {:.3} | | {:.3} | |\n\n",
        first.cross_project_mean, second.cross_project_mean
    ));

    md.push_str("### Global mean scores\n\n");
    md.push_str(&format!("| Cells | {} | {} | n |\n", first.label, second.label));
    md.push_str("|-------|---|---|---|\n");
    md.push_str(&format!(
        "| All recorded | {:.3} | {:.3} | {} |\n",
        first.global.mean,
        second.global.mean,
        first.global.count + second.global.count
    ));
    if report.common.count > 0 {
        md.push_str(&format!(
            "| Common cells | {:.3} | {:.3} | {} |\n\n",
            report.common.first, report.common.second, report.common.count
        ));
    } else {
        md.push_str("| Common cells | - | - | 0 |\n\n");
    }

    md.push_str("### Per-category pass rates\n\n");
    md.push_str(&format!(
        "| Question | {a} pass % | {a} n | {b} pass % | {b} n |\n",
        a = first.label,
        b = second.label
    ));
    md.push_str("|----------|------|---|------|---|\n");
    for qid in report.question_ids() {
        md.push_str(&format!(
            "| {} | {} | {} |\n",
            qid,
            category_columns(first.category(qid)),
            category_columns(second.category(qid))
        ));
    }
    md.push_str(&format!(
        "| **All categories** | {:.1}% | {} | {:.1}% | {} |\n\n",
        first.global.pass_pct, first.global.count, second.global.pass_pct, second.global.count
    ));
    md.push_str(&format!(
        "**Aggregate pass rate (both annotators):** {:.1}% over {} cells\n",
        report.pooled.pass_pct, report.pooled.count
    ));

    md
}

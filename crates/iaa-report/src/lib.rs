//! iaa-report: Rendering of agreement reports.
//!
//! Console tables, markdown, and JSON. Every format shows undefined kappa
//! values explicitly (`NaN` in text and markdown, `null` in JSON).

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};

use iaa_core::report::AgreementReport;

pub mod markdown;
pub mod text;

/// Printed in place of the agreement section when nothing overlaps.
pub const NO_OVERLAP_MESSAGE: &str =
    "No scored cells in common; check that both workbooks have been filled in.";

/// Output format for a rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Text,
    Markdown,
    Json,
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Format::Text),
            "markdown" | "md" => Ok(Format::Markdown),
            "json" => Ok(Format::Json),
            other => Err(format!(
                "unknown format '{other}' (expected text, markdown or json)"
            )),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Format::Text => "text",
            Format::Markdown => "markdown",
            Format::Json => "json",
        };
        f.write_str(name)
    }
}

/// Render a report in the given format.
pub fn render(report: &AgreementReport, format: Format) -> Result<String> {
    match format {
        Format::Text => Ok(text::render_text(report)),
        Format::Markdown => Ok(markdown::render_markdown(report)),
        Format::Json => serde_json::to_string_pretty(report).context("failed to serialize report"),
    }
}

/// Render a report and write it to a file, creating parent directories.
pub fn write_report(report: &AgreementReport, format: Format, path: &Path) -> Result<()> {
    let rendered = render(report, format)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, rendered)
        .with_context(|| format!("failed to write report to {}", path.display()))?;
    Ok(())
}

/// Kappa to three decimals, or `NaN` when undefined.
pub fn format_kappa(kappa: Option<f64>) -> String {
    match kappa {
        Some(k) => format!("{k:.3}"),
        None => "NaN".to_string(),
    }
}

//! The `iaa agreement` command.

use std::path::PathBuf;

use anyhow::Result;

use iaa_core::config::load_config_from;
use iaa_core::loader::load_scores;
use iaa_core::model::Annotator;
use iaa_core::report::AgreementReport;
use iaa_report::{render, write_report, Format};

pub struct AgreementArgs {
    pub first: Option<PathBuf>,
    pub second: Option<PathBuf>,
    pub first_label: Option<String>,
    pub second_label: Option<String>,
    pub format: String,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

pub fn execute(args: AgreementArgs) -> Result<()> {
    let format: Format = args
        .format
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    let config = load_config_from(args.config.as_deref())?;
    let annotators = config.annotators;
    let first_path = args.first.unwrap_or(annotators.first_path);
    let second_path = args.second.unwrap_or(annotators.second_path);
    let first_label = args.first_label.unwrap_or(annotators.first_label);
    let second_label = args.second_label.unwrap_or(annotators.second_label);

    // Both workbooks are read in full before anything is computed.
    let first = load_scores(&first_path, &config.layout)?;
    let second = load_scores(&second_path, &config.layout)?;

    let report = AgreementReport::compute(
        &Annotator::new(first_label, first_path.display().to_string(), first.scores),
        &Annotator::new(second_label, second_path.display().to_string(), second.scores),
    );

    match &report.agreement {
        Some(agreement) => tracing::info!(
            "{} paired cells across {} questions",
            agreement.overall.pairs,
            agreement.per_question.len()
        ),
        None => tracing::info!("no paired cells, reporting aggregates only"),
    }

    let rendered = render(&report, format)?;
    println!("{}", rendered.trim_end());

    if let Some(output) = &args.output {
        write_report(&report, format, output)?;
        tracing::debug!("wrote {format} report to {}", output.display());
        eprintln!("Report saved to: {}", output.display());
    }

    Ok(())
}

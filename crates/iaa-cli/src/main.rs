//! iaa CLI: the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "iaa",
    version,
    about = "Inter-annotator agreement for pass/fail scoring workbooks"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two annotators' workbooks and report agreement
    Agreement {
        /// First annotator's workbook (default from config: eval/first.xlsx)
        #[arg(long)]
        first: Option<PathBuf>,

        /// Second annotator's workbook (default from config: eval/second.xlsx)
        #[arg(long)]
        second: Option<PathBuf>,

        /// Label for the first annotator
        #[arg(long)]
        first_label: Option<String>,

        /// Label for the second annotator
        #[arg(long)]
        second_label: Option<String>,

        /// Output format: text, markdown, json
        #[arg(long, default_value = "text")]
        format: String,

        /// Also write the rendered report to this file
        #[arg(long)]
        output: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show how the rows of one workbook were resolved
    Inspect {
        /// Path to the workbook
        #[arg(long)]
        workbook: PathBuf,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create a starter iaa.toml
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("iaa=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Agreement {
            first,
            second,
            first_label,
            second_label,
            format,
            output,
            config,
        } => commands::agreement::execute(commands::agreement::AgreementArgs {
            first,
            second,
            first_label,
            second_label,
            format,
            output,
            config,
        }),
        Commands::Inspect { workbook, config } => commands::inspect::execute(workbook, config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

// SPDX-License-Identifier: PMPL-1.0-or-later
//! a11ylint CLI - accessibility validation for HTML and JSX markup.

use a11ylint::report::{generate_report, OutputFormat};
use a11ylint::scanner::{self, FileReport};
use a11ylint::Severity;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Accessibility linter for HTML and JSX markup
#[derive(Parser)]
#[command(name = "a11ylint")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all checks on a directory
    Check {
        /// Directory to scan
        dir: PathBuf,

        /// Output format
        #[arg(long, default_value = "text")]
        format: FormatArg,

        /// Output file (stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Enable verbose logging
        #[arg(long, short)]
        verbose: bool,
    },

    /// Analyze a single file
    Analyze {
        /// File to analyze
        file: PathBuf,

        /// Output format
        #[arg(long, default_value = "text")]
        format: FormatArg,

        /// Enable verbose logging
        #[arg(long, short)]
        verbose: bool,
    },
}

/// Output format CLI argument
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// Human-readable text
    Text,
    /// Structured JSON
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("a11ylint=debug")
    } else {
        EnvFilter::new("a11ylint=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn has_errors(reports: &[FileReport]) -> bool {
    reports
        .iter()
        .flat_map(|r| &r.diagnostics)
        .any(|d| d.severity == Severity::Error)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { dir, format, output, verbose } => {
            init_logging(verbose);
            let reports = scanner::scan_directory(&dir)?;
            let rendered = generate_report(&reports, format.into())?;
            write_output(&rendered, output.as_deref())?;

            if has_errors(&reports) {
                std::process::exit(1);
            }
        }

        Commands::Analyze { file, format, verbose } => {
            init_logging(verbose);
            let report = scanner::scan_file(&file)?;
            let reports = vec![report];
            let rendered = generate_report(&reports, format.into())?;
            println!("{}", rendered);

            if has_errors(&reports) {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

/// Write output to file or stdout
fn write_output(content: &str, path: Option<&std::path::Path>) -> anyhow::Result<()> {
    match path {
        Some(p) => {
            std::fs::write(p, content)?;
            eprintln!("Report written to {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::debug;

use household_report::{
    build_households, start_with, to_csv, to_json, HouseholdError, ReportConfig, ReportFormatter,
};

/// Group people into households by normalized address and list the adults
#[derive(Parser)]
#[command(name = "household-report")]
#[command(version = household_report::VERSION, long_about = None)]
struct Cli {
    /// Input file: FirstName,LastName,Street,City,State,Age per line
    input: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Residents strictly older than this are listed
    #[arg(long, default_value_t = 18)]
    adult_age: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Csv,
}

fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    debug!("household-report v{}", household_report::VERSION);

    let lines = match read_lines(&cli.input) {
        Ok(lines) => lines,
        Err(e) => {
            eprintln!("Could not access input file: {}", cli.input.display());
            debug!("{:#}", e);
            return ExitCode::from(2);
        }
    };

    match render(&cli, lines) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(HouseholdError::MalformedInput { failures }) => {
            eprintln!("Input file is malformed.");
            for failure in &failures {
                eprintln!("  {}", failure);
            }
            ExitCode::from(1)
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            ExitCode::from(1)
        }
    }
}

fn render(cli: &Cli, lines: Vec<String>) -> household_report::Result<String> {
    let formatter =
        ReportFormatter::with_config(ReportConfig::new().with_adult_age_threshold(cli.adult_age));

    match cli.format {
        OutputFormat::Text => start_with(&formatter, lines),
        OutputFormat::Json => to_json(&build_households(lines)?, formatter.config()),
        OutputFormat::Csv => to_csv(&build_households(lines)?, formatter.config()),
    }
}

/// Read the whole file up front; the core never touches the filesystem
fn read_lines(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open file: {}", path.display()))?;

    BufReader::new(file)
        .lines()
        .collect::<std::io::Result<Vec<String>>>()
        .with_context(|| format!("Failed to read file: {}", path.display()))
}

//! pidigits CLI
//!
//! Approximates Pi to `--precision` fractional digits and prints the
//! pattern report on stdout. Logs go to stderr.

use clap::{Parser, ValueEnum};
use pidigits::{AnalysisConfig, OutputFormat, PiPatterns, PidigitsError, Renderer, DEFAULT_PRECISION};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// One line per computed value
    Text,
    /// Full report as JSON
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "pidigits")]
#[command(about = "Approximate π and analyze repeating patterns in its digits", long_about = None)]
#[command(version)]
struct Cli {
    /// Number of fractional digits to compute
    #[arg(short, long, default_value_t = DEFAULT_PRECISION, allow_negative_numbers = true)]
    precision: i64,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: Format,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<String, PidigitsError> {
    let engine = PiPatterns::new(AnalysisConfig { precision: cli.precision });
    let report = engine.run()?;
    Renderer::new().render(&report, cli.format.into())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();
    tracing::debug!(?cli, "starting");

    match run(&cli) {
        Ok(output) => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = writeln!(stdout, "{}", output) {
                tracing::error!(error = %e, "failed to write report");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(code = %err.code, "run failed");
            match cli.format {
                Format::Json => match serde_json::to_string_pretty(&err) {
                    Ok(json) => eprintln!("{}", json),
                    Err(_) => eprintln!("{}", err),
                },
                Format::Text => eprintln!("{}", err),
            }
            ExitCode::FAILURE
        }
    }
}

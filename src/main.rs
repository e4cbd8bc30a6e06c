//! CLI entry point for the launch_rater tool.
//!
//! Reads a launch monitor CSV export, assigns each shot its club's median
//! target distance and writes a ShotPattern CSV next to the input.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use launch_rater::{
    analyzers::aggregate::{assign_targets, summarize},
    monitors::MonitorRegistry,
    output::{ShotPatternWriter, ShotWriter, output_path_for, print_json, print_pretty},
    parser::parse_shot_file,
};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    filter::LevelFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "launch_rater")]
#[command(about = "Adds per-club median targets to launch monitor shot exports", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process a launch monitor CSV export into a ShotPattern CSV
    Process {
        /// Launch monitor type (e.g., mlm2pro)
        #[arg(short = 't', long = "type", value_name = "MONITOR")]
        monitor_type: String,

        /// Input CSV file
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output CSV file (defaults to <INPUT>_processed.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// How to report per-club targets once the file is written
        #[arg(short, long, value_enum, default_value_t = SummaryFormat::Pretty)]
        summary: SummaryFormat,
    },
    /// List supported launch monitor types
    ListMonitors,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SummaryFormat {
    Pretty,
    Json,
    None,
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok(); // Load .env file

    let _file_guard = init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %format!("{e:#}"), "launch_rater failed");
            ExitCode::FAILURE
        }
    }
}

/// Logging setup: colored stderr + JSON rolling log file
fn init_tracing() -> WorkerGuard {
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/launch_rater.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("launch_rater.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_filter = EnvFilter::from_env("RUST_LOG").add_directive(LevelFilter::INFO.into());
    let json_filter = EnvFilter::from_env("RUST_LOG_JSON").add_directive(LevelFilter::DEBUG.into());

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(stderr_filter);

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(json_filter);

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    file_guard
}

fn run(cli: Cli) -> Result<()> {
    let registry = MonitorRegistry::with_defaults();

    match cli.command {
        Commands::Process {
            monitor_type,
            input,
            output,
            summary,
        } => {
            let output = output.unwrap_or_else(|| output_path_for(&input));
            process(&registry, &monitor_type, &input, &output, summary)?;
        }
        Commands::ListMonitors => {
            for name in registry.names() {
                let monitor = registry.get(name)?;
                info!(monitor_type = name, name = monitor.name(), "Launch monitor");
            }
        }
    }

    Ok(())
}

/// Scans `input`, assigns median targets and writes the ShotPattern CSV.
#[tracing::instrument(skip(registry, input, output), fields(input = %input.display()))]
fn process(
    registry: &MonitorRegistry,
    monitor_type: &str,
    input: &Path,
    output: &Path,
    summary: SummaryFormat,
) -> Result<()> {
    // Resolve the profile before touching the filesystem
    let monitor = registry.get(monitor_type)?;

    let mut shots = parse_shot_file(input, monitor)
        .with_context(|| format!("processing shot data from {}", input.display()))?;
    info!(count = shots.len(), "Processed shot data");

    assign_targets(&mut shots);

    ShotPatternWriter
        .write(output, &shots)
        .with_context(|| format!("writing output file {}", output.display()))?;

    let summaries = summarize(&shots);
    match summary {
        SummaryFormat::Pretty => print_pretty(&summaries),
        SummaryFormat::Json => print_json(&summaries)?,
        SummaryFormat::None => {}
    }

    info!(
        shots_processed = shots.len(),
        output_file = %output.display(),
        "Successfully processed shots and saved results"
    );
    Ok(())
}

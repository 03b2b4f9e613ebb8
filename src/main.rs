//! Robotscan main entry point
//!
//! Command-line interface for analyzing and validating robots.txt files,
//! from a local path or fetched over HTTP.

use clap::Parser;
use robotscan::analyze::AnalysisResult;
use robotscan::fetch::{analyze_fetched, build_http_client, fetch_robots};
use robotscan::validate::ValidationResult;
use robotscan::{analyze, report, validate};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Robotscan: robots.txt analyzer and linter
///
/// Produces aggregate directive statistics and validates syntax and
/// semantics, with line-numbered warnings and errors.
#[derive(Parser, Debug)]
#[command(name = "robotscan")]
#[command(version)]
#[command(about = "Analyze and validate robots.txt files", long_about = None)]
struct Cli {
    /// Path to a robots.txt file, or an http(s) URL to fetch it from
    #[arg(value_name = "TARGET")]
    target: String,

    /// Only run the analyzer
    #[arg(long, conflicts_with = "validate_only")]
    analyze_only: bool,

    /// Only run the validator
    #[arg(long, conflicts_with = "analyze_only")]
    validate_only: bool,

    /// Emit results as JSON instead of formatted text
    #[arg(long)]
    json: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

/// Combined output for the --json mode
#[derive(Debug, Serialize)]
struct JsonReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    analysis: Option<AnalysisResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    validation: Option<ValidationResult>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let (analysis, content) = load_target(&cli.target).await?;

    let analysis = if cli.validate_only { None } else { Some(analysis) };
    let validation = if cli.analyze_only {
        None
    } else {
        Some(validate(&content))
    };

    if cli.json {
        let json_report = JsonReport {
            analysis,
            validation,
        };
        println!("{}", serde_json::to_string_pretty(&json_report)?);
        return Ok(());
    }

    if let Some(analysis) = &analysis {
        report::print_analysis(analysis);
    }
    if let Some(validation) = &validation {
        report::print_validation(validation);

        if !validation.is_valid {
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Loads the target as either a URL fetch or a local file read
///
/// Returns the analysis (carrying fetch metadata when fetched) along with
/// the raw content for validation.
async fn load_target(target: &str) -> anyhow::Result<(AnalysisResult, String)> {
    if target.starts_with("http://") || target.starts_with("https://") {
        tracing::info!("Fetching {}", target);
        let client = build_http_client()?;
        let fetched = fetch_robots(&client, target).await?;

        tracing::info!(
            "Fetched {} bytes (HTTP {}) at {}",
            fetched.body.len(),
            fetched.status,
            fetched.fetched_at
        );

        let analysis = analyze_fetched(&fetched);
        Ok((analysis, fetched.body))
    } else {
        tracing::info!("Reading {}", target);
        let content = std::fs::read_to_string(target)?;
        Ok((analyze(&content), content))
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("robotscan=warn"),
            1 => EnvFilter::new("robotscan=info"),
            2 => EnvFilter::new("robotscan=debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

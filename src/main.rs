//! Entropy Validator CLI
//!
//! Draws samples from the OS CSPRNG, runs the statistical test battery and
//! prints the report. Exit code 0 means the overall verdict is pass, 1 means
//! a failing verdict, 2 means the run itself could not complete.

use clap::{Parser, ValueEnum};
use entropy_validator::{
    run_validation, FileConfig, OsEntropySource, Significance, ValidationConfig,
};
use tracing::{error, info};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AlphaLevel {
    /// Significance level 0.01
    #[value(name = "0.01")]
    OnePercent,
    /// Significance level 0.05
    #[value(name = "0.05")]
    FivePercent,
}

impl From<AlphaLevel> for Significance {
    fn from(level: AlphaLevel) -> Self {
        match level {
            AlphaLevel::OnePercent => Significance::OnePercent,
            AlphaLevel::FivePercent => Significance::FivePercent,
        }
    }
}

/// Statistical validation of the host's secure random source.
#[derive(Debug, Parser)]
#[command(name = "entropy-validator", version)]
struct Cli {
    /// Number of independent samples to draw
    #[arg(short = 'n', long)]
    samples: Option<usize>,

    /// Bytes per sample
    #[arg(short = 'l', long)]
    length: Option<usize>,

    /// Significance level for all tests
    #[arg(long)]
    alpha: Option<AlphaLevel>,

    /// Optional TOML configuration file
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    /// Emit the report as JSON (for CI consumption)
    #[arg(long)]
    json: bool,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    info!("Entropy Validator v{}", entropy_validator::VERSION);

    // File config first, then CLI flags override
    let file_config = match cli.config.as_deref() {
        Some(path) => match FileConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                error!("Configuration error: {}", e);
                std::process::exit(2);
            }
        },
        None => FileConfig::default(),
    };

    let config = ValidationConfig {
        sample_count: cli.samples.unwrap_or(file_config.validation.sample_count),
        sample_length: cli.length.unwrap_or(file_config.validation.sample_length),
        significance: cli
            .alpha
            .map(Significance::from)
            .unwrap_or(file_config.validation.significance),
    };
    let as_json = cli.json || file_config.output.json;

    let mut source = OsEntropySource::new();
    let report = match run_validation(&mut source, &config) {
        Ok(report) => report,
        Err(e) => {
            error!("Validation aborted: {}", e);
            std::process::exit(2);
        }
    };

    if as_json {
        match report.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("Failed to serialize report: {}", e);
                std::process::exit(2);
            }
        }
    } else {
        println!("{}", report);
    }

    std::process::exit(if report.passed { 0 } else { 1 });
}

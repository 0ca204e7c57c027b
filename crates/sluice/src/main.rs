//! Sluice - Run a part codec stage over line-framed messages
//!
//! # Usage
//!
//! ```bash
//! # Base64 encode every part of every message on stdin
//! printf 'abc\nxyz\n\n' | sluice
//!
//! # Run the stage described by a config file
//! sluice --config configs/decode.toml
//!
//! # Fail when a placeholder without a default names an unset variable
//! sluice --config configs/decode.toml --strict-env
//! ```

mod framing;
mod stream;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use sluice_config::{Config, LogConfig, LogFormat, LogLevel, LogOutput};
use sluice_metrics::{LocalStats, Namespaced};
use sluice_transform::default_registry;
use tokio::io::{BufReader, BufWriter};
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, prelude::*};

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;

/// Sluice - Run a part codec stage over line-framed messages
#[derive(Parser, Debug)]
#[command(name = "sluice")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to configuration file (default: base64 encode every part)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Fail when a `${NAME}` placeholder names an unset variable
    #[arg(long)]
    strict_env: bool,

    /// Log level, overrides the config file (trace, debug, info, warn, error)
    #[arg(short, long)]
    log_level: Option<LogLevel>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    init_logging(&config.log.with_level(cli.log_level))?;

    let stats = Arc::new(LocalStats::new());
    let sink = Namespaced::new(Arc::clone(&stats), config.metrics_namespace());

    let processor = default_registry()
        .create(&config.processor, &sink)
        .context("failed to create processor")?;

    if !processor.enabled() {
        tracing::warn!(
            processor = processor.name(),
            "processor disabled, messages pass through unchanged"
        );
    }

    let input = BufReader::new(tokio::io::stdin());
    let mut output = BufWriter::new(tokio::io::stdout());
    let summary = stream::run(processor.as_ref(), input, &mut output)
        .await
        .context("failed to stream messages")?;

    tracing::info!(
        processor = processor.name(),
        received = summary.received,
        forwarded = summary.forwarded,
        acked = summary.acked,
        "input exhausted"
    );

    if config.metrics.enabled {
        let snapshot =
            serde_json::to_string(&stats.snapshot()).context("failed to serialize metrics")?;
        eprintln!("{}", snapshot);
    }

    Ok(())
}

/// Load the config file, or the defaults when none was given
fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => Config::from_file(path, cli.strict_env)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(Config::default()),
    }
}

/// Initialize the tracing subscriber for logging
fn init_logging(log: &LogConfig) -> Result<()> {
    let filter = EnvFilter::try_new(log.level.as_str())
        .or_else(|_| EnvFilter::try_new("info"))
        .map_err(|e| anyhow::anyhow!("invalid log level: {}", e))?;

    let layer: Box<dyn Layer<Registry> + Send + Sync> = match (log.format, log.output) {
        (LogFormat::Console, LogOutput::Stderr) => fmt::layer()
            .with_target(true)
            .with_writer(std::io::stderr)
            .boxed(),
        (LogFormat::Console, LogOutput::Stdout) => fmt::layer()
            .with_target(true)
            .with_writer(std::io::stdout)
            .boxed(),
        (LogFormat::Json, LogOutput::Stderr) => {
            fmt::layer().json().with_writer(std::io::stderr).boxed()
        }
        (LogFormat::Json, LogOutput::Stdout) => {
            fmt::layer().json().with_writer(std::io::stdout).boxed()
        }
    };

    tracing_subscriber::registry()
        .with(layer)
        .with(filter)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(())
}

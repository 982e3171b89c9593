//! # Classify the bundled sample snapshot
//! options-posture classify
//!
//! # Classify a snapshot with custom thresholds, as JSON
//! options-posture classify --snapshot data/spy_put.json --config config/default.toml --format json
//!
//! # Print the effective thresholds
//! options-posture config --config config/default.toml
//!
//! Decision support only, not trading advice.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use options_posture::data::DEFAULT_SNAPSHOT_PATH;
use options_posture::{classify, load_snapshot, render_json, render_text, PostureConfig};

#[derive(Parser)]
#[command(name = "options-posture")]
#[command(about = "Classify options market posture from a JSON snapshot")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a snapshot file
    Classify {
        /// Path to a JSON snapshot
        #[arg(short, long, default_value = DEFAULT_SNAPSHOT_PATH)]
        snapshot: PathBuf,

        /// Path to a TOML thresholds file (built-in defaults if omitted)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the effective thresholds as TOML
    Config {
        /// Path to a TOML thresholds file (built-in defaults if omitted)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn load_config(path: Option<PathBuf>) -> Result<PostureConfig> {
    match path {
        Some(p) => PostureConfig::from_toml_file(&p)
            .with_context(|| format!("Failed to load config from {}", p.display())),
        None => Ok(PostureConfig::default()),
    }
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the report.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("options_posture=warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Classify {
            snapshot,
            config,
            format,
        } => {
            let config = load_config(config)?;
            let snap = load_snapshot(&snapshot)
                .with_context(|| format!("Failed to load snapshot from {}", snapshot.display()))?;
            let result = classify(&snap, &config);

            match format {
                OutputFormat::Text => println!("{}", render_text(&snap, &result)),
                OutputFormat::Json => println!("{}", render_json(&result)?),
            }
        }
        Commands::Config { config } => {
            let config = load_config(config)?;
            print!("{}", config.to_toml_string()?);
        }
    }

    Ok(())
}

//! Snapshot loader for JSON files.
//!
//! A snapshot file holds one object whose field names match the snapshot
//! schema:
//! - price, trend, days_to_expiry, upcoming_event
//! - iv, iv_rank, delta, theta, vega
//! - bid_ask_spread_pct, objective
//! - symbol, option_type, strike (optional)

use std::path::Path;

use thiserror::Error;
use tracing::info;

use super::types::RawSnapshot;
use crate::validation::{Snapshot, ValidationError};

/// Bundled sample snapshot, used by the CLI when no path is given.
/// Anchored at the crate directory so it resolves from any working directory.
pub const DEFAULT_SNAPSHOT_PATH: &str =
    concat!(env!("CARGO_MANIFEST_DIR"), "/data/sample_option_snapshot.json");

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Snapshot file not found: {0}")]
    FileNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid snapshot: {0}")]
    Invalid(#[from] ValidationError),
}

/// Parse and validate a snapshot from JSON text.
pub fn parse_snapshot(json: &str) -> Result<Snapshot, LoaderError> {
    let raw: RawSnapshot = serde_json::from_str(json)?;
    Ok(Snapshot::new(raw)?)
}

/// Read, parse and validate a snapshot file.
pub fn load_snapshot(path: impl AsRef<Path>) -> Result<Snapshot, LoaderError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(LoaderError::FileNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    let snapshot = parse_snapshot(&content)?;

    info!(
        path = %path.display(),
        symbol = snapshot.symbol().unwrap_or("-"),
        "loaded snapshot"
    );
    Ok(snapshot)
}

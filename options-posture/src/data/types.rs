//! Input vocabulary for posture classification.
//!
//! Closed enums for the fields that take a fixed set of values, plus the
//! raw record exactly as it arrives from a file or request payload. The raw
//! record is untrusted; `Snapshot::new` turns it into a validated value.

use serde::{Deserialize, Serialize};

/// Option type (call or put).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// Exact match on `"call"` / `"put"`.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "call" => Some(Self::Call),
            "put" => Some(Self::Put),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Call => "call",
            Self::Put => "put",
        }
    }
}

/// Direction of the underlying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Sideways,
}

impl Trend {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "up" => Some(Self::Up),
            "down" => Some(Self::Down),
            "sideways" => Some(Self::Sideways),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Sideways => "sideways",
        }
    }
}

/// What the trader is trying to do with the position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Objective {
    /// Directional bet.
    Speculate,
    /// Harvest premium.
    Income,
    /// Protect an existing position.
    Hedge,
}

impl Objective {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "speculate" => Some(Self::Speculate),
            "income" => Some(Self::Income),
            "hedge" => Some(Self::Hedge),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Speculate => "speculate",
            Self::Income => "income",
            Self::Hedge => "hedge",
        }
    }
}

/// Unvalidated snapshot fields, named as in the input schema.
///
/// Notes on units:
/// - `iv` is a decimal (0.32 for 32%)
/// - `iv_rank` is 0-100
/// - `bid_ask_spread_pct` is percent of mid (0.6 means 0.6%)
/// - `theta` is usually per-day; `vega` units vary by platform. Keep them
///   consistent across inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawSnapshot {
    // Market context
    pub price: f64,
    pub trend: String,
    pub days_to_expiry: i64,
    /// Earnings, CPI, FOMC etc. within the lookahead window.
    pub upcoming_event: bool,

    // Volatility
    pub iv: f64,
    pub iv_rank: f64,

    // Greeks as reported by the broker
    pub delta: f64,
    pub theta: f64,
    pub vega: f64,

    // Liquidity
    pub bid_ask_spread_pct: f64,

    // Intent
    pub objective: String,

    // Optional metadata
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub option_type: Option<String>,
    #[serde(default)]
    pub strike: Option<f64>,
}

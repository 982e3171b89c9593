//! Threshold configuration for posture classification.
//!
//! Values are simple, interpretable options risk-management heuristics,
//! not parameters fitted for profitability. A TOML file may override any
//! subset of keys; everything it leaves out keeps its default.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    FileNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// IV rank bands (0-100 scale).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolatilityThresholds {
    /// At or below this, options are relatively cheap.
    pub iv_rank_low: f64,
    /// At or above this, options are relatively expensive.
    pub iv_rank_high: f64,
}

impl Default for VolatilityThresholds {
    fn default() -> Self {
        Self {
            iv_rank_low: 30.0,
            iv_rank_high: 60.0,
        }
    }
}

/// Days-to-expiry windows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DteWindows {
    /// Below this, gamma and theta accelerate sharply.
    pub min_dte: i64,
    /// Lower edge of the comfortable window.
    pub preferred_min_dte: i64,
    /// Upper edge of the comfortable window.
    pub preferred_max_dte: i64,
}

impl Default for DteWindows {
    fn default() -> Self {
        Self {
            min_dte: 7,
            preferred_min_dte: 21,
            preferred_max_dte: 60,
        }
    }
}

impl DteWindows {
    /// Whether `dte` falls inside the preferred window (inclusive).
    pub fn in_preferred_window(&self, dte: i64) -> bool {
        dte >= self.preferred_min_dte && dte <= self.preferred_max_dte
    }
}

/// Liquidity constraints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiquidityLimits {
    /// Maximum bid-ask spread as a percent of mid (1.0 means 1%).
    pub max_bid_ask_spread_pct: f64,
}

impl Default for LiquidityLimits {
    fn default() -> Self {
        Self {
            max_bid_ask_spread_pct: 1.0,
        }
    }
}

/// Event handling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventSettings {
    /// Days before a known event during which IV is assumed distorted.
    /// Only appears in reason text.
    pub event_lookahead_days: i64,
}

impl Default for EventSettings {
    fn default() -> Self {
        Self {
            event_lookahead_days: 7,
        }
    }
}

/// Risk heuristics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskHeuristics {
    /// Daily theta as a fraction of option price above which decay is
    /// aggressive. Not consumed yet: snapshots carry no option price.
    pub max_theta_fraction: f64,
}

impl Default for RiskHeuristics {
    fn default() -> Self {
        Self {
            max_theta_fraction: 0.03,
        }
    }
}

/// Complete classifier configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostureConfig {
    pub volatility: VolatilityThresholds,
    pub dte: DteWindows,
    pub liquidity: LiquidityLimits,
    pub event: EventSettings,
    pub risk: RiskHeuristics,
}

impl PostureConfig {
    /// Parse a config from TOML text and check its invariants.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        info!(path = %path.display(), "loaded posture config");
        Ok(config)
    }

    /// Render the effective config as TOML.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Check the ordering invariants between thresholds.
    ///
    /// The classifier assumes these hold but never checks them itself.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let v = &self.volatility;
        if v.iv_rank_low.is_nan()
            || v.iv_rank_high.is_nan()
            || v.iv_rank_low >= v.iv_rank_high
        {
            return Err(ConfigError::Invalid(format!(
                "iv_rank_low ({}) must be < iv_rank_high ({})",
                v.iv_rank_low, v.iv_rank_high
            )));
        }
        if v.iv_rank_low < 0.0 || v.iv_rank_high > 100.0 {
            return Err(ConfigError::Invalid(
                "iv_rank bands must lie within 0-100".to_string(),
            ));
        }

        let d = &self.dte;
        if d.preferred_min_dte > d.preferred_max_dte {
            return Err(ConfigError::Invalid(format!(
                "preferred_min_dte ({}) must be <= preferred_max_dte ({})",
                d.preferred_min_dte, d.preferred_max_dte
            )));
        }
        if d.min_dte > d.preferred_min_dte {
            return Err(ConfigError::Invalid(format!(
                "min_dte ({}) must be <= preferred_min_dte ({})",
                d.min_dte, d.preferred_min_dte
            )));
        }

        let max_spread = self.liquidity.max_bid_ask_spread_pct;
        if max_spread.is_nan() || max_spread < 0.0 {
            return Err(ConfigError::Invalid(
                "max_bid_ask_spread_pct must be >= 0".to_string(),
            ));
        }

        Ok(())
    }
}

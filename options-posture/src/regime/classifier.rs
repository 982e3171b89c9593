//! IV rank regime classifier.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::VolatilityThresholds;

/// Volatility regime from IV rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolRegime {
    /// IV rank <= low threshold.
    Low,
    /// Between the thresholds.
    Mid,
    /// IV rank >= high threshold.
    High,
}

impl VolRegime {
    /// Classify an IV rank. Both boundaries belong to the outer bands.
    pub fn from_iv_rank(iv_rank: f64, thresholds: &VolatilityThresholds) -> Self {
        if iv_rank <= thresholds.iv_rank_low {
            Self::Low
        } else if iv_rank >= thresholds.iv_rank_high {
            Self::High
        } else {
            Self::Mid
        }
    }

    /// Whether IV sits in one of the outer bands.
    pub fn is_extreme(&self) -> bool {
        matches!(self, Self::Low | Self::High)
    }

    /// Whether this regime favors selling premium.
    pub fn favors_premium_selling(&self) -> bool {
        matches!(self, Self::High)
    }

    /// Whether this regime favors buying premium.
    pub fn favors_premium_buying(&self) -> bool {
        matches!(self, Self::Low)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Mid => "mid",
            Self::High => "high",
        }
    }

    /// What the regime means for option prices.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Low => "options relatively cheap",
            Self::Mid => "neutral volatility regime",
            Self::High => "options relatively expensive",
        }
    }
}

impl fmt::Display for VolRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

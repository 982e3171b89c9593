//! Classification output types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::regime::VolRegime;

/// Suggested posture. Each variant's text carries its preferred structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    #[serde(rename = "BUY PREMIUM (prefer defined-risk spreads)")]
    BuyPremium,
    #[serde(rename = "SELL PREMIUM (use defined-risk structures)")]
    SellPremium,
    #[serde(rename = "HEDGE (prefer spreads/collars for cost control)")]
    Hedge,
    #[serde(rename = "DO NOTHING")]
    DoNothing,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BuyPremium => "BUY PREMIUM (prefer defined-risk spreads)",
            Self::SellPremium => "SELL PREMIUM (use defined-risk structures)",
            Self::Hedge => "HEDGE (prefer spreads/collars for cost control)",
            Self::DoNothing => "DO NOTHING",
        }
    }

    /// Whether the posture is long premium.
    pub fn is_buy(&self) -> bool {
        matches!(self, Self::BuyPremium)
    }

    pub fn is_hedge(&self) -> bool {
        matches!(self, Self::Hedge)
    }

    /// Whether the posture recommends doing anything at all.
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::DoNothing)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How much weight to put on the suggested posture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl Default for Confidence {
    fn default() -> Self {
        Self::Medium
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of classifying one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub action: Action,
    pub confidence: Confidence,
    /// Volatility regime, if classification got past the guardrails.
    pub regime: Option<VolRegime>,
    /// Decision narrative in the order checks ran. Never empty.
    pub reasons: Vec<String>,
}

impl Classification {
    /// A guardrail rejection: do nothing, low confidence, one reason.
    pub fn rejected(reason: String) -> Self {
        Self {
            action: Action::DoNothing,
            confidence: Confidence::Low,
            regime: None,
            reasons: vec![reason],
        }
    }

    /// Whether any reason contains `needle`.
    pub fn has_reason(&self, needle: &str) -> bool {
        self.reasons.iter().any(|r| r.contains(needle))
    }
}

//! Classifier thresholds.
//!
//! Grouped by concern:
//! - Volatility regime (IV rank bands)
//! - Days-to-expiry windows
//! - Liquidity (bid-ask spread)
//! - Event handling
//! - Risk heuristics (reserved)

pub mod thresholds;

pub use thresholds::{
    ConfigError, DteWindows, EventSettings, LiquidityLimits, PostureConfig, RiskHeuristics,
    VolatilityThresholds,
};

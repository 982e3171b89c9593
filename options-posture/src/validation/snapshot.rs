//! Validated option snapshot.
//!
//! A `Snapshot` can only be obtained through [`Snapshot::new`], which checks
//! every field constraint up front. Fields are private, so a snapshot that
//! exists is a snapshot that passed validation.

use serde::Serialize;
use thiserror::Error;

use crate::data::{Objective, OptionType, RawSnapshot, Trend};

/// Delta bound, with slack for broker/model rounding just past +/-1.
pub const DELTA_TOLERANCE: f64 = 1.05;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("price must be > 0")]
    Price(f64),

    #[error("days_to_expiry must be > 0")]
    DaysToExpiry(i64),

    #[error("iv_rank must be between 0 and 100")]
    IvRank(f64),

    #[error("iv must be >= 0 (as a decimal, e.g. 0.25 for 25%)")]
    Iv(f64),

    #[error("bid_ask_spread_pct must be >= 0")]
    BidAskSpread(f64),

    #[error("delta looks out of range (expected roughly -1 to 1)")]
    Delta(f64),

    #[error("option_type must be 'call' or 'put' if provided")]
    OptionType(String),

    #[error("strike must be > 0 if provided")]
    Strike(f64),

    #[error("trend must be one of up / down / sideways, got '{0}'")]
    Trend(String),

    #[error("objective must be one of speculate / income / hedge, got '{0}'")]
    Objective(String),
}

/// One point-in-time view of an underlying, one contract, and the trader's intent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    price: f64,
    trend: Trend,
    days_to_expiry: i64,
    upcoming_event: bool,
    iv: f64,
    iv_rank: f64,
    delta: f64,
    theta: f64,
    vega: f64,
    bid_ask_spread_pct: f64,
    objective: Objective,
    symbol: Option<String>,
    option_type: Option<OptionType>,
    strike: Option<f64>,
}

impl Snapshot {
    /// Validate raw fields and build a snapshot.
    ///
    /// Checks run in a fixed order and stop at the first violation.
    pub fn new(raw: RawSnapshot) -> Result<Self, ValidationError> {
        if raw.price.is_nan() || raw.price <= 0.0 {
            return Err(ValidationError::Price(raw.price));
        }

        if raw.days_to_expiry <= 0 {
            return Err(ValidationError::DaysToExpiry(raw.days_to_expiry));
        }

        if !(0.0..=100.0).contains(&raw.iv_rank) {
            return Err(ValidationError::IvRank(raw.iv_rank));
        }

        if raw.iv.is_nan() || raw.iv < 0.0 {
            return Err(ValidationError::Iv(raw.iv));
        }

        if raw.bid_ask_spread_pct.is_nan() || raw.bid_ask_spread_pct < 0.0 {
            return Err(ValidationError::BidAskSpread(raw.bid_ask_spread_pct));
        }

        if !(-DELTA_TOLERANCE..=DELTA_TOLERANCE).contains(&raw.delta) {
            return Err(ValidationError::Delta(raw.delta));
        }

        let option_type = match raw.option_type {
            Some(s) => Some(OptionType::from_str(&s).ok_or(ValidationError::OptionType(s))?),
            None => None,
        };

        if let Some(strike) = raw.strike {
            if strike.is_nan() || strike <= 0.0 {
                return Err(ValidationError::Strike(strike));
            }
        }

        let trend = Trend::from_str(&raw.trend).ok_or(ValidationError::Trend(raw.trend))?;
        let objective =
            Objective::from_str(&raw.objective).ok_or(ValidationError::Objective(raw.objective))?;

        Ok(Self {
            price: raw.price,
            trend,
            days_to_expiry: raw.days_to_expiry,
            upcoming_event: raw.upcoming_event,
            iv: raw.iv,
            iv_rank: raw.iv_rank,
            delta: raw.delta,
            theta: raw.theta,
            vega: raw.vega,
            bid_ask_spread_pct: raw.bid_ask_spread_pct,
            objective,
            symbol: raw.symbol,
            option_type,
            strike: raw.strike,
        })
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn trend(&self) -> Trend {
        self.trend
    }

    pub fn days_to_expiry(&self) -> i64 {
        self.days_to_expiry
    }

    pub fn upcoming_event(&self) -> bool {
        self.upcoming_event
    }

    /// Implied volatility as a decimal.
    pub fn iv(&self) -> f64 {
        self.iv
    }

    pub fn iv_rank(&self) -> f64 {
        self.iv_rank
    }

    pub fn delta(&self) -> f64 {
        self.delta
    }

    pub fn theta(&self) -> f64 {
        self.theta
    }

    pub fn vega(&self) -> f64 {
        self.vega
    }

    /// Bid-ask spread as a percent of mid.
    pub fn bid_ask_spread_pct(&self) -> f64 {
        self.bid_ask_spread_pct
    }

    pub fn objective(&self) -> Objective {
        self.objective
    }

    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    pub fn option_type(&self) -> Option<OptionType> {
        self.option_type
    }

    pub fn strike(&self) -> Option<f64> {
        self.strike
    }
}

impl TryFrom<RawSnapshot> for Snapshot {
    type Error = ValidationError;

    fn try_from(raw: RawSnapshot) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

/// Validate raw fields and construct a [`Snapshot`].
pub fn validate_and_construct(raw: RawSnapshot) -> Result<Snapshot, ValidationError> {
    Snapshot::new(raw)
}

//! Volatility regime classification.
//!
//! Buckets IV rank into three bands:
//! - Low: at or below `iv_rank_low`, options relatively cheap
//! - Mid: strictly between the bands
//! - High: at or above `iv_rank_high`, options relatively expensive

pub mod classifier;

pub use classifier::VolRegime;

//! Posture classification.
//!
//! Provides:
//! - Output types (action, confidence, classification)
//! - The classifier itself
//! - Text and JSON rendering of results

pub mod classifier;
pub mod report;
pub mod types;

pub use classifier::{classify, HEDGE_MIN_DTE_LOW_IV};
pub use report::{render_json, render_text, Report};
pub use types::{Action, Classification, Confidence};

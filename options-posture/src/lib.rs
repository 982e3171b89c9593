pub mod config;
pub mod data;
pub mod posture;
pub mod regime;
pub mod validation;

// Re-export commonly used types
pub use config::{ConfigError, PostureConfig};
pub use data::{load_snapshot, parse_snapshot, LoaderError, Objective, OptionType, RawSnapshot, Trend};
pub use posture::{classify, render_json, render_text, Action, Classification, Confidence};
pub use regime::VolRegime;
pub use validation::{validate_and_construct, Snapshot, ValidationError};

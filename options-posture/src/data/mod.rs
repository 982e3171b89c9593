pub mod loader;
pub mod types;

pub use loader::{load_snapshot, parse_snapshot, LoaderError, DEFAULT_SNAPSHOT_PATH};
pub use types::{Objective, OptionType, RawSnapshot, Trend};

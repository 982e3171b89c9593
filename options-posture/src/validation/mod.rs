//! Snapshot validation.
//!
//! Every field constraint is checked once, at construction. A `Snapshot`
//! value is proof that its inputs passed.

pub mod snapshot;

pub use snapshot::{validate_and_construct, Snapshot, ValidationError, DELTA_TOLERANCE};

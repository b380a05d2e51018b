//! Terminal rendering for job tracking.

pub mod icons;
pub mod progress;

pub use progress::{StatusUi, print_snapshot};

//! Practice history and statistics.
//!
//! Completed breathing and meditation sessions are recorded here and
//! aggregated for the Profile tab and `stoa stats`.

pub mod log;
pub mod stats;

pub use log::{PracticeKind, PracticeSession, PracticeStorage};
pub use stats::PracticeReport;

//! Guided breathing.
//!
//! The phase timer advances once per second through a method's ordered
//! phases, counting completed cycles:
//! - Fixed method catalog (4-7-8, box)
//! - Start/pause/reset lifecycle
//! - Scoped one-second tick source

pub mod method;
pub mod ticker;
pub mod timer;

pub use method::{BreathingMethod, Phase, PhaseSpec};
pub use ticker::Ticker;
pub use timer::{PhaseTimer, Tick};

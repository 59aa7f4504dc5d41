//! The breathing phase timer.
//!
//! A countdown state machine that advances one second per tick, cycling
//! through the active method's phases in order and counting completed
//! cycles. Ticks only have an effect while the timer is active.

use serde::{Deserialize, Serialize};

use super::method::{BreathingMethod, Phase};

/// Result of delivering one tick to the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Timer is not active; nothing changed.
    Idle,
    /// One second elapsed within the current phase.
    Counted,
    /// The phase just advanced to `0` within a cycle.
    PhaseStarted(Phase),
    /// The last phase finished and the timer wrapped to the first phase.
    CycleCompleted,
}

/// Countdown state machine for guided breathing.
///
/// Elapsed time within a phase stays in `0..duration`; the cycle count
/// increments only when the last phase wraps back to the first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhaseTimer {
    method: BreathingMethod,
    /// Index into the method's phase sequence.
    index: usize,
    /// Whole seconds elapsed within the current phase.
    elapsed: u32,
    /// Completed full cycles.
    cycles: u32,
    /// Whether ticks advance the timer.
    active: bool,
}

impl PhaseTimer {
    /// Create a timer for the given method, at rest on the first phase.
    #[must_use]
    pub const fn new(method: BreathingMethod) -> Self {
        Self {
            method,
            index: 0,
            elapsed: 0,
            cycles: 0,
            active: false,
        }
    }

    /// Start or resume the timer. No effect if already active.
    pub fn start(&mut self) {
        self.active = true;
    }

    /// Pause the timer, retaining the current phase and elapsed time.
    pub fn pause(&mut self) {
        self.active = false;
    }

    /// Return to the initial state: first phase, zero elapsed, zero
    /// cycles, inactive.
    pub fn reset(&mut self) {
        self.active = false;
        self.index = 0;
        self.elapsed = 0;
        self.cycles = 0;
    }

    /// Replace the active method and reset.
    pub fn select_method(&mut self, method: BreathingMethod) {
        self.method = method;
        self.reset();
    }

    /// Advance the timer by one second.
    ///
    /// Has no effect while paused. When the elapsed time reaches the
    /// current phase's duration, the phase advances (wrapping to the
    /// first phase and incrementing the cycle count at the end of the
    /// sequence). At most one transition occurs per tick.
    pub fn tick(&mut self) -> Tick {
        if !self.active {
            return Tick::Idle;
        }

        self.elapsed += 1;
        if self.elapsed < self.current_duration() {
            return Tick::Counted;
        }

        self.elapsed = 0;
        self.index += 1;
        if self.index >= self.method.phases().len() {
            self.index = 0;
            self.cycles += 1;
            return Tick::CycleCompleted;
        }

        Tick::PhaseStarted(self.phase())
    }

    /// The active method.
    #[must_use]
    pub const fn method(&self) -> BreathingMethod {
        self.method
    }

    /// The current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.method.phases()[self.index].phase
    }

    /// Position of the current phase within the method's sequence.
    #[must_use]
    pub const fn phase_index(&self) -> usize {
        self.index
    }

    /// Seconds elapsed within the current phase.
    #[must_use]
    pub const fn elapsed(&self) -> u32 {
        self.elapsed
    }

    /// Seconds remaining in the current phase.
    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.current_duration() - self.elapsed
    }

    /// Completed full cycles since the last reset.
    #[must_use]
    pub const fn cycles(&self) -> u32 {
        self.cycles
    }

    /// Whether ticks currently advance the timer.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Progress through the current phase (0.0 - 1.0).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn phase_progress(&self) -> f64 {
        f64::from(self.elapsed) / f64::from(self.current_duration())
    }

    fn current_duration(&self) -> u32 {
        self.method.phases()[self.index].seconds
    }
}

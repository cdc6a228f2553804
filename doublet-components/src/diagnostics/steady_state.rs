use uom::si::f64::Time;

use doublet_core::{Diagnostic, TimeWindow};

/// Per-step readings for a [`SteadyStateDetector`]: the monitored scalar and
/// the current simulation time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteadyStateInput {
    /// The upstream scalar under observation.
    pub value: f64,
    /// The current simulation time.
    pub time: Time,
}

/// Decides whether a monitored scalar has stabilized over an observation
/// window, signaling the driver that it may terminate early.
///
/// The first sample inside the window (closed at both ends, so a sample at
/// exactly the window end still counts) fixes the reference value. Every
/// later in-window sample is compared against that reference; if the
/// relative difference ever exceeds the threshold, the window is permanently
/// disqualified, even if the signal re-converges before the window closes.
/// Once a sample arrives past the window end, steady state is asserted iff
/// the window was entered and never disqualified, and stays asserted from
/// then on.
///
/// If the run ends before the window opens, steady state is never asserted.
/// The detector only reports; the external driver performs the actual stop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteadyStateDetector {
    window: TimeWindow,
    relative_diff_threshold: f64,
    reference: Option<f64>,
    disqualified: bool,
    reached: bool,
}

impl SteadyStateDetector {
    /// Creates a detector observing `window` with the given relative
    /// difference threshold.
    #[must_use]
    pub fn new(window: TimeWindow, relative_diff_threshold: f64) -> Self {
        Self {
            window,
            relative_diff_threshold,
            reference: None,
            disqualified: false,
            reached: false,
        }
    }

    /// Returns `true` once the monitored scalar has been declared steady.
    #[must_use]
    pub fn is_steady(&self) -> bool {
        self.reached
    }
}

impl Diagnostic for SteadyStateDetector {
    type Input = SteadyStateInput;
    type Value = bool;

    fn execute(&mut self, input: Self::Input) {
        if self.reached || input.time < self.window.start() {
            return;
        }

        if self.window.contains(input.time) {
            match self.reference {
                None => self.reference = Some(input.value),
                Some(reference) => {
                    if relative_diff(reference, input.value) > self.relative_diff_threshold {
                        self.disqualified = true;
                    }
                }
            }
        } else if self.reference.is_some() && !self.disqualified {
            // First sample past the window end with a clean observation.
            self.reached = true;
        }
    }

    fn value(&self) -> Self::Value {
        self.reached
    }
}

/// The relative difference of `value` from `reference`.
///
/// A zero reference with a nonzero value counts as an infinite difference
/// rather than dividing by zero.
fn relative_diff(reference: f64, value: f64) -> f64 {
    if reference == 0.0 {
        if value == 0.0 {
            0.0
        } else {
            f64::INFINITY
        }
    } else {
        ((value - reference) / reference).abs()
    }
}

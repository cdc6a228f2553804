use uom::si::f64::Time;

use doublet_core::Diagnostic;

/// Per-step readings for a [`BreakthroughLatch`]: the monitored tracer
/// signal and the current simulation time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreakthroughInput {
    /// The upstream tracer or concentration reading at the monitoring point.
    pub value: f64,
    /// The current simulation time.
    pub time: Time,
}

/// Latches the first simulation time at which a tracer signal reaches a
/// threshold.
///
/// Until the signal first satisfies `value >= threshold`, the diagnostic
/// reports `None` ("breakthrough not yet reached"). On the first step where
/// the threshold is met, the step's time is latched; from then on the value
/// never changes, regardless of further upstream input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreakthroughLatch {
    threshold: f64,
    latched: Option<Time>,
}

impl BreakthroughLatch {
    /// Creates an unlatched diagnostic firing at `threshold`.
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            latched: None,
        }
    }

    /// The latched breakthrough time, or `None` if the threshold has not
    /// been reached.
    #[must_use]
    pub fn breakthrough_time(&self) -> Option<Time> {
        self.latched
    }
}

impl Diagnostic for BreakthroughLatch {
    type Input = BreakthroughInput;
    type Value = Option<Time>;

    fn execute(&mut self, input: Self::Input) {
        if self.latched.is_none() && input.value >= self.threshold {
            self.latched = Some(input.time);
        }
    }

    fn value(&self) -> Self::Value {
        self.latched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::time::second;

    fn reading(value: f64, time: f64) -> BreakthroughInput {
        BreakthroughInput {
            value,
            time: Time::new::<second>(time),
        }
    }

    #[test]
    fn reports_none_before_threshold_is_reached() {
        let mut latch = BreakthroughLatch::new(0.5);

        latch.execute(reading(0.0, 1.0));
        latch.execute(reading(0.49, 2.0));

        assert_eq!(latch.value(), None);
    }

    #[test]
    fn latches_the_first_crossing_time() {
        let mut latch = BreakthroughLatch::new(0.5);

        latch.execute(reading(0.1, 1.0));
        latch.execute(reading(0.6, 2.0));

        assert_eq!(latch.value(), Some(Time::new::<second>(2.0)));
    }

    #[test]
    fn meeting_the_threshold_exactly_latches() {
        let mut latch = BreakthroughLatch::new(0.5);

        latch.execute(reading(0.5, 3.0));

        assert_eq!(latch.value(), Some(Time::new::<second>(3.0)));
    }

    #[test]
    fn latched_value_is_frozen_against_later_input() {
        let mut latch = BreakthroughLatch::new(0.5);

        latch.execute(reading(0.7, 2.0));
        let latched = latch.value();

        // Higher, lower, and sub-threshold readings at later times must all
        // leave the latched time unchanged.
        latch.execute(reading(0.9, 3.0));
        latch.execute(reading(0.1, 4.0));
        latch.execute(reading(100.0, 5.0));

        assert_eq!(latch.value(), latched);
        assert_eq!(latch.value(), Some(Time::new::<second>(2.0)));
    }

    #[test]
    fn initialize_does_not_clear_the_latch() {
        let mut latch = BreakthroughLatch::new(0.5);

        latch.execute(reading(0.8, 2.0));
        latch.initialize();

        assert_eq!(latch.value(), Some(Time::new::<second>(2.0)));
    }
}

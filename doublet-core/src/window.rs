use thiserror::Error;
use uom::si::{f64::Time, ratio::ratio, time::second};

use crate::{StepInterval, UnitFraction};

/// A validated time interval `[start, end]` with `end > start`.
///
/// A `TimeWindow` describes when a pulsed source is active or when a signal
/// is under observation. An inverted or empty window is a configuration
/// mistake, so construction fails fatally rather than producing a window
/// that silently never matches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeWindow {
    start: Time,
    end: Time,
}

impl TimeWindow {
    /// Creates the window `[start, end]`.
    ///
    /// # Errors
    ///
    /// Returns a [`TimeWindowError`] naming both bounds if `end <= start`
    /// (or if either bound is `NaN`).
    pub fn new(start: Time, end: Time) -> Result<Self, TimeWindowError> {
        if !(end > start) {
            return Err(TimeWindowError {
                start: start.get::<second>(),
                end: end.get::<second>(),
            });
        }
        Ok(Self { start, end })
    }

    /// The instant the window opens.
    #[must_use]
    pub fn start(&self) -> Time {
        self.start
    }

    /// The instant the window closes.
    #[must_use]
    pub fn end(&self) -> Time {
        self.end
    }

    /// Returns `true` if `time` lies within the closed interval `[start, end]`.
    #[must_use]
    pub fn contains(&self, time: Time) -> bool {
        self.start <= time && time <= self.end
    }

    /// Returns the fraction of the step interval `(t - dt, t]` that overlaps
    /// this window.
    ///
    /// A source active at a constant rate within the window contributes in
    /// proportion to this fraction, so a window boundary falling mid-step
    /// scales the step's contribution exactly, with no sub-stepping.
    ///
    /// There are six cases for the window bounds relative to `t - dt` and `t`:
    ///
    /// - The step lies entirely before or after the window: `0`.
    /// - The window opens mid-step and the step ends inside: `(t - start) / dt`.
    /// - The window opens and closes within the step: `(end - start) / dt`.
    /// - The step lies entirely inside the window: `1`.
    /// - The window closes mid-step: `(end - (t - dt)) / dt`.
    #[must_use]
    pub fn overlap_fraction(&self, step: StepInterval) -> UnitFraction {
        let t = step.end();
        let t_prev = step.start();
        let dt = step.duration();

        if t < self.start || t_prev >= self.end {
            return UnitFraction::ZERO;
        }

        let fraction = if t_prev < self.start {
            if t <= self.end {
                (t - self.start) / dt
            } else {
                (self.end - self.start) / dt
            }
        } else if t <= self.end {
            return UnitFraction::ONE;
        } else {
            (self.end - t_prev) / dt
        };

        // The case analysis bounds the ratio in [0, 1); saturate to absorb
        // floating-point rounding at the boundaries.
        UnitFraction::saturating(fraction.get::<ratio>())
    }
}

/// Error returned when a [`TimeWindow`] is constructed with `end <= start`.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("window start time is {start} s but it must be less than end time {end} s")]
pub struct TimeWindowError {
    /// The offending start time, in seconds.
    pub start: f64,
    /// The offending end time, in seconds.
    pub end: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn seconds(value: f64) -> Time {
        Time::new::<second>(value)
    }

    fn window(start: f64, end: f64) -> TimeWindow {
        TimeWindow::new(seconds(start), seconds(end)).unwrap()
    }

    fn step(t: f64, dt: f64) -> StepInterval {
        StepInterval::new(seconds(t), seconds(dt)).unwrap()
    }

    #[test]
    fn rejects_inverted_window_naming_both_bounds() {
        let error = TimeWindow::new(seconds(5.0), seconds(3.0)).unwrap_err();
        assert_eq!(error, TimeWindowError { start: 5.0, end: 3.0 });

        let message = error.to_string();
        assert!(message.contains('5'));
        assert!(message.contains('3'));
    }

    #[test]
    fn rejects_empty_window() {
        assert!(TimeWindow::new(seconds(2.0), seconds(2.0)).is_err());
    }

    #[test]
    fn zero_when_step_precedes_window() {
        assert_eq!(
            window(10.0, 20.0).overlap_fraction(step(5.0, 1.0)),
            UnitFraction::ZERO
        );
    }

    #[test]
    fn zero_when_step_follows_window() {
        // t - dt = 20 is exactly the window end; the step starts after the
        // pulse has finished.
        assert_eq!(
            window(10.0, 20.0).overlap_fraction(step(21.0, 1.0)),
            UnitFraction::ZERO
        );
    }

    #[test]
    fn one_when_step_fully_inside_window() {
        // start <= t - dt and t <= end.
        assert_eq!(
            window(10.0, 20.0).overlap_fraction(step(15.0, 5.0)),
            UnitFraction::ONE
        );
        assert_eq!(
            window(10.0, 20.0).overlap_fraction(step(20.0, 10.0)),
            UnitFraction::ONE
        );
    }

    #[test]
    fn scales_step_that_straddles_window_start() {
        // start = 0, end = 1e30, t = 0.5, dt = 1.0:
        // t - dt = -0.5 < start and t <= end, so (0.5 - 0) / 1.0 = 0.5.
        let fraction = window(0.0, 1.0e30).overlap_fraction(step(0.5, 1.0));
        assert_relative_eq!(fraction.get(), 0.5);
    }

    #[test]
    fn scales_step_that_straddles_window_end() {
        // start = 2, end = 5, t = 6, dt = 2:
        // t - dt = 4 is inside the window and t > end, so (5 - 4) / 2 = 0.5.
        let fraction = window(2.0, 5.0).overlap_fraction(step(6.0, 2.0));
        assert_relative_eq!(fraction.get(), 0.5);
    }

    #[test]
    fn scales_window_contained_within_step() {
        // The whole pulse fits inside one step: (end - start) / dt.
        let fraction = window(3.0, 4.0).overlap_fraction(step(10.0, 10.0));
        assert_relative_eq!(fraction.get(), 0.1);
    }

    #[test]
    fn fraction_stays_in_unit_interval_across_sweep() {
        let window = window(2.0, 5.0);

        for i in 0..200 {
            let t = -1.0 + 0.05 * f64::from(i);
            for &dt in &[0.1, 0.5, 1.0, 3.0, 10.0] {
                let fraction = window.overlap_fraction(step(t, dt));
                assert!((0.0..=1.0).contains(&fraction.get()), "t={t}, dt={dt}");
            }
        }
    }

    #[test]
    fn contains_uses_closed_bounds() {
        let window = window(10.0, 20.0);
        assert!(window.contains(seconds(10.0)));
        assert!(window.contains(seconds(20.0)));
        assert!(!window.contains(seconds(9.999)));
        assert!(!window.contains(seconds(20.001)));
    }
}

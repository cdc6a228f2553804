use thiserror::Error;
use uom::si::{f64::Time, time::second};

/// The time interval `(t - dt, t]` covered by a single simulation step.
///
/// The external time-stepping driver supplies a fresh `StepInterval` each
/// step. The interval is half-open: the step ends at `t` and excludes the
/// instant `t - dt`, which belongs to the previous step.
///
/// Construction enforces `dt > 0`, so downstream arithmetic such as
/// [`TimeWindow::overlap_fraction`](crate::TimeWindow::overlap_fraction) can
/// divide by the duration without further checks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepInterval {
    end: Time,
    duration: Time,
}

impl StepInterval {
    /// Creates the step interval ending at `end` with length `duration`.
    ///
    /// # Errors
    ///
    /// Returns [`StepIntervalError::NonPositiveDuration`] if `duration` is
    /// zero, negative, or `NaN`.
    /// Returns [`StepIntervalError::NotFinite`] if either endpoint of the
    /// resulting interval is not finite.
    pub fn new(end: Time, duration: Time) -> Result<Self, StepIntervalError> {
        if !(duration.value > 0.0) {
            return Err(StepIntervalError::NonPositiveDuration(
                duration.get::<second>(),
            ));
        }
        if !end.value.is_finite() {
            return Err(StepIntervalError::NotFinite(end.get::<second>()));
        }
        if !duration.value.is_finite() {
            return Err(StepIntervalError::NotFinite(duration.get::<second>()));
        }
        Ok(Self { end, duration })
    }

    /// The instant the step begins, `t - dt` (excluded from the interval).
    #[must_use]
    pub fn start(&self) -> Time {
        self.end - self.duration
    }

    /// The instant the step ends, `t` (included in the interval).
    #[must_use]
    pub fn end(&self) -> Time {
        self.end
    }

    /// The step length `dt`, always strictly positive.
    #[must_use]
    pub fn duration(&self) -> Time {
        self.duration
    }
}

/// Errors that can occur when constructing a [`StepInterval`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum StepIntervalError {
    /// The step duration was zero, negative, or `NaN`.
    #[error("step duration must be positive, got {0} s")]
    NonPositiveDuration(f64),

    /// An endpoint of the interval was infinite or `NaN`.
    #[error("step interval endpoint is not finite: {0} s")]
    NotFinite(f64),
}

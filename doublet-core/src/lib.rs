//! Core value types and the diagnostic seam for geothermal doublet components.
//!
//! This crate provides the small building blocks shared by the doublet
//! component library:
//!
//! - [`UnitFraction`], a scalar guaranteed to lie in `[0, 1]`.
//! - [`StepInterval`], the half-open time interval `(t - dt, t]` covered by a
//!   single simulation step.
//! - [`TimeWindow`], a validated `[start, end]` interval during which a
//!   source is active or a signal is observed.
//! - [`Diagnostic`], the lifecycle trait for scalar diagnostics driven once
//!   per step by an external time-stepping driver.

mod diagnostic;
mod fraction;
mod step;
mod window;

pub use diagnostic::Diagnostic;
pub use fraction::{UnitFraction, UnitFractionError};
pub use step::{StepInterval, StepIntervalError};
pub use window::{TimeWindow, TimeWindowError};

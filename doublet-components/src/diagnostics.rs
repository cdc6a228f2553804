//! Scalar diagnostics updated once per simulation step.
//!
//! Each diagnostic implements [`Diagnostic`] with its own typed input; the
//! external driver wires upstream readings into those inputs each step. For
//! drivers that construct diagnostics from declarative configuration, the
//! [`DiagnosticConfig`] registry maps string identifiers to constructors and
//! the resulting [`AnyDiagnostic`] variants are driven uniformly from a
//! [`StepReadings`] record.

mod breakthrough;
mod energy;
mod steady_state;

pub use breakthrough::{BreakthroughInput, BreakthroughLatch};
pub use energy::{EnergyAccumulator, EnergyFluxes, FluxWeights};
pub use steady_state::{SteadyStateDetector, SteadyStateInput};

use serde::Deserialize;
use thiserror::Error;
use uom::si::{
    f64::{Energy, Power, Time},
    time::second,
};

use doublet_core::{Diagnostic, TimeWindow, TimeWindowError};

/// The named per-step values a driver exposes to its diagnostics.
///
/// This record is the explicit form of the host framework's named-value
/// lookup: the wiring step fills one `StepReadings` per step, and each
/// diagnostic reads only the fields it was configured against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepReadings {
    /// The current simulation time.
    pub time: Time,
    /// The step length.
    pub dt: Time,
    /// Tracer concentration at the production well monitoring point.
    pub tracer: f64,
    /// The scalar monitored for steady state.
    pub monitored: f64,
    /// Hot-side energy flux.
    pub hot: Power,
    /// Cold-side energy flux.
    pub cold: Power,
    /// Produced-side energy flux.
    pub produced: Power,
}

/// Declarative configuration selecting and parameterizing one diagnostic.
///
/// The `type` tag is the string identifier under which each diagnostic is
/// registered, mirroring the host's name-based object construction:
///
/// ```
/// use doublet_components::diagnostics::{AnyDiagnostic, DiagnosticConfig};
///
/// let config: DiagnosticConfig = serde_json::from_str(
///     r#"{ "type": "breakthrough_time", "threshold": 0.2 }"#,
/// ).unwrap();
/// let diagnostic = config.build().unwrap();
/// assert!(matches!(diagnostic, AnyDiagnostic::Breakthrough(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticConfig {
    /// A [`BreakthroughLatch`] firing at `threshold`.
    BreakthroughTime { threshold: f64 },
    /// An [`EnergyAccumulator`] with optional flux weights.
    EnergyAccumulator {
        #[serde(default)]
        weights: FluxWeights,
    },
    /// A [`SteadyStateDetector`] observing `[start_time, end_time]` seconds.
    SteadyState {
        start_time: f64,
        end_time: f64,
        relative_diff: f64,
    },
}

impl DiagnosticConfig {
    /// Constructs the configured diagnostic.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration is invalid, such as a
    /// steady-state window with `end_time <= start_time`.
    pub fn build(&self) -> Result<AnyDiagnostic, ConfigError> {
        Ok(match *self {
            Self::BreakthroughTime { threshold } => {
                AnyDiagnostic::Breakthrough(BreakthroughLatch::new(threshold))
            }
            Self::EnergyAccumulator { weights } => {
                AnyDiagnostic::Energy(EnergyAccumulator::new(weights))
            }
            Self::SteadyState {
                start_time,
                end_time,
                relative_diff,
            } => {
                let window = TimeWindow::new(
                    Time::new::<second>(start_time),
                    Time::new::<second>(end_time),
                )?;
                AnyDiagnostic::SteadyState(SteadyStateDetector::new(window, relative_diff))
            }
        })
    }
}

/// Errors that can occur when building a diagnostic from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    /// An observation window was configured with `end <= start`.
    #[error(transparent)]
    Window(#[from] TimeWindowError),
}

/// A diagnostic built from [`DiagnosticConfig`], driven uniformly from
/// [`StepReadings`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnyDiagnostic {
    Breakthrough(BreakthroughLatch),
    Energy(EnergyAccumulator),
    SteadyState(SteadyStateDetector),
}

impl AnyDiagnostic {
    /// Resets per-step transient state.
    pub fn initialize(&mut self) {
        match self {
            Self::Breakthrough(d) => d.initialize(),
            Self::Energy(d) => d.initialize(),
            Self::SteadyState(d) => d.initialize(),
        }
    }

    /// Performs the once-per-step update from the step's readings.
    pub fn execute(&mut self, readings: &StepReadings) {
        match self {
            Self::Breakthrough(d) => d.execute(BreakthroughInput {
                value: readings.tracer,
                time: readings.time,
            }),
            Self::Energy(d) => d.execute(EnergyFluxes {
                hot: readings.hot,
                cold: readings.cold,
                produced: readings.produced,
                dt: readings.dt,
            }),
            Self::SteadyState(d) => d.execute(SteadyStateInput {
                value: readings.monitored,
                time: readings.time,
            }),
        }
    }

    /// Returns the diagnostic's current value.
    #[must_use]
    pub fn value(&self) -> DiagnosticValue {
        match self {
            Self::Breakthrough(d) => DiagnosticValue::BreakthroughTime(d.value()),
            Self::Energy(d) => DiagnosticValue::AccumulatedEnergy(d.value()),
            Self::SteadyState(d) => DiagnosticValue::SteadyState(d.value()),
        }
    }
}

/// The current value of an [`AnyDiagnostic`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DiagnosticValue {
    /// The latched breakthrough time, if reached.
    BreakthroughTime(Option<Time>),
    /// The accumulated energy balance.
    AccumulatedEnergy(Energy),
    /// Whether steady state has been declared.
    SteadyState(bool),
}

use serde::Deserialize;
use uom::{
    si::f64::{Energy, Power, Time},
    ConstZero,
};

use doublet_core::Diagnostic;

/// Weights combining the three upstream flux readings into a net power.
///
/// The per-step increment is
/// `(hot·w_hot + cold·w_cold + produced·w_produced) · dt`. The defaults
/// count both injection-side fluxes as gains and the produced-side flux as a
/// loss.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FluxWeights {
    pub hot: f64,
    pub cold: f64,
    pub produced: f64,
}

impl Default for FluxWeights {
    fn default() -> Self {
        Self {
            hot: 1.0,
            cold: 1.0,
            produced: -1.0,
        }
    }
}

/// Per-step readings for an [`EnergyAccumulator`]: the three upstream
/// flux-like quantities and the step length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyFluxes {
    /// Hot-side (injection) energy flux.
    pub hot: Power,
    /// Cold-side (return) energy flux.
    pub cold: Power,
    /// Produced-side energy flux.
    pub produced: Power,
    /// The step length `dt`.
    pub dt: Time,
}

/// Accumulates a per-step net energy balance into a running total.
///
/// The total starts at zero, is never reset, and is never clamped: with
/// non-negative weighted inputs it grows monotonically, and signed inputs
/// may move it in either direction. The sum is plain order-dependent
/// floating-point addition of the per-step increments, not a higher-order
/// quadrature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyAccumulator {
    weights: FluxWeights,
    total: Energy,
}

impl EnergyAccumulator {
    /// Creates an empty accumulator combining fluxes with the given weights.
    #[must_use]
    pub fn new(weights: FluxWeights) -> Self {
        Self {
            weights,
            total: Energy::ZERO,
        }
    }

    /// The accumulated energy balance.
    #[must_use]
    pub fn total(&self) -> Energy {
        self.total
    }
}

impl Default for EnergyAccumulator {
    fn default() -> Self {
        Self::new(FluxWeights::default())
    }
}

impl Diagnostic for EnergyAccumulator {
    type Input = EnergyFluxes;
    type Value = Energy;

    fn execute(&mut self, input: Self::Input) {
        let net = input.hot * self.weights.hot
            + input.cold * self.weights.cold
            + input.produced * self.weights.produced;
        self.total += net * input.dt;
    }

    fn value(&self) -> Self::Value {
        self.total
    }
}

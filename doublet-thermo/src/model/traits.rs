use uom::si::f64::{SpecificHeatCapacity, SpecificVolume};

use crate::{units::SpecificEnthalpy, PropertyError, State};

/// The specific enthalpy at a state together with its partial derivatives.
///
/// Residual assembly needs `h` itself; Jacobian assembly needs the slope of
/// `h` with respect to the coupled pressure and temperature variables. Both
/// are produced in one call so a model backed by an equation of state can
/// evaluate them together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnthalpyGradients {
    /// Specific enthalpy `h(p, T)`.
    pub h: SpecificEnthalpy,
    /// Partial derivative `∂h/∂p` at constant temperature, m³/kg in SI.
    pub dh_dp: SpecificVolume,
    /// Partial derivative `∂h/∂T` at constant pressure, J/(kg·K) in SI.
    pub dh_dt: SpecificHeatCapacity,
}

/// Trait for computing the specific enthalpy of a fluid from its state.
///
/// This is the seam between the doublet components and whatever property
/// backend supplies the injected fluid's behavior. A general-purpose model
/// can work with any fluid implementing a capability trait (as
/// [`Incompressible`](crate::model::Incompressible) does with
/// [`IncompressibleFluid`](crate::model::IncompressibleFluid)), or a model
/// can be implemented for one concrete fluid type for tighter domain control.
pub trait EnthalpyModel<F> {
    /// Returns the specific enthalpy for the given state.
    ///
    /// # Errors
    ///
    /// Returns a [`PropertyError`] if the enthalpy cannot be calculated.
    fn enthalpy(&self, state: &State<F>) -> Result<SpecificEnthalpy, PropertyError>;

    /// Returns the specific enthalpy and its partial derivatives for the given state.
    ///
    /// # Errors
    ///
    /// Returns a [`PropertyError`] if the enthalpy or a derivative cannot be
    /// calculated.
    fn enthalpy_gradients(&self, state: &State<F>) -> Result<EnthalpyGradients, PropertyError>;
}

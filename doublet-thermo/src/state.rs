use uom::si::f64::{Pressure, ThermodynamicTemperature};

/// The thermodynamic state of a fluid at a sample point.
///
/// A `State<Fluid>` carries the pressure and temperature at a single
/// quadrature point, together with the fluid itself. The `fluid` field is
/// usually a marker type such as [`Water`](crate::fluid::Water), but may be
/// a structured type carrying composition data.
///
/// `State` is the input to [`EnthalpyModel`](crate::model::EnthalpyModel)
/// implementations, which compute the injected fluid's specific enthalpy and
/// its derivatives from it.
#[derive(Debug, Clone, PartialEq)]
pub struct State<Fluid> {
    pub pressure: Pressure,
    pub temperature: ThermodynamicTemperature,
    pub fluid: Fluid,
}

impl<Fluid> State<Fluid> {
    /// Creates a new state with the given pressure, temperature, and fluid.
    #[must_use]
    pub fn new(pressure: Pressure, temperature: ThermodynamicTemperature, fluid: Fluid) -> Self {
        Self {
            pressure,
            temperature,
            fluid,
        }
    }

    /// Returns a new state with the given pressure, keeping other fields unchanged.
    #[must_use]
    pub fn with_pressure(self, pressure: Pressure) -> Self {
        Self { pressure, ..self }
    }

    /// Returns a new state with the given temperature, keeping other fields unchanged.
    #[must_use]
    pub fn with_temperature(self, temperature: ThermodynamicTemperature) -> Self {
        Self {
            temperature,
            ..self
        }
    }
}

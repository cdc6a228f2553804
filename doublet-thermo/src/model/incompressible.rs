use uom::{
    si::{
        f64::{
            MassDensity, Pressure, SpecificHeatCapacity, SpecificVolume, ThermodynamicTemperature,
        },
        mass_density::kilogram_per_cubic_meter,
        specific_volume::cubic_meter_per_kilogram,
    },
    ConstZero,
};

use crate::{
    units::{SpecificEnthalpy, TemperatureOps},
    PropertyError, State,
};

use super::{EnthalpyGradients, EnthalpyModel};

/// Trait used to define the constants of an incompressible fluid.
///
/// Provides the fixed properties needed to model a liquid under
/// incompressible assumptions, where density is effectively independent of
/// pressure and specific heat is effectively independent of temperature.
///
/// Any type implementing `IncompressibleFluid` can be used with the
/// [`Incompressible`] model.
pub trait IncompressibleFluid {
    /// Returns the constant specific heat capacity.
    fn specific_heat(&self) -> SpecificHeatCapacity;

    /// Returns the constant density.
    fn density(&self) -> MassDensity;

    /// Returns the reference temperature used in the enthalpy calculation.
    fn reference_temperature(&self) -> ThermodynamicTemperature;

    /// Returns the reference pressure used in the enthalpy calculation.
    fn reference_pressure(&self) -> Pressure;

    /// Returns the enthalpy at the reference state.
    ///
    /// Defaults to zero. Override to use a nonzero reference value.
    fn reference_enthalpy(&self) -> SpecificEnthalpy {
        SpecificEnthalpy::ZERO
    }
}

/// A fluid property model using incompressible liquid assumptions.
///
/// Computes enthalpy as `h = h₀ + c·(T − T₀) + (p − p₀)/ρ`, which keeps the
/// pressure dependence that matters when the fluid enters the reservoir well
/// above the reference pressure. The derivatives follow directly:
/// `∂h/∂p = 1/ρ` and `∂h/∂T = c`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Incompressible;

impl<F: IncompressibleFluid> EnthalpyModel<F> for Incompressible {
    fn enthalpy(&self, state: &State<F>) -> Result<SpecificEnthalpy, PropertyError> {
        let fluid = &state.fluid;
        let c = fluid.specific_heat();
        let rho = fluid.density();

        Ok(fluid.reference_enthalpy()
            + c * state.temperature.minus(fluid.reference_temperature())
            + (state.pressure - fluid.reference_pressure()) / rho)
    }

    fn enthalpy_gradients(&self, state: &State<F>) -> Result<EnthalpyGradients, PropertyError> {
        let rho = state.fluid.density().get::<kilogram_per_cubic_meter>();
        if rho <= 0.0 {
            return Err(PropertyError::InvalidInput(format!(
                "fluid density must be positive, got {rho} kg/m³"
            )));
        }

        Ok(EnthalpyGradients {
            h: self.enthalpy(state)?,
            dh_dp: SpecificVolume::new::<cubic_meter_per_kilogram>(1.0 / rho),
            dh_dt: state.fluid.specific_heat(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        available_energy::joule_per_kilogram,
        pressure::pascal,
        specific_heat_capacity::joule_per_kilogram_kelvin,
        thermodynamic_temperature::kelvin,
    };

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    struct MockLiquid;

    impl IncompressibleFluid for MockLiquid {
        fn specific_heat(&self) -> SpecificHeatCapacity {
            SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(2000.0)
        }

        fn density(&self) -> MassDensity {
            MassDensity::new::<kilogram_per_cubic_meter>(800.0)
        }

        fn reference_temperature(&self) -> ThermodynamicTemperature {
            ThermodynamicTemperature::new::<kelvin>(300.0)
        }

        fn reference_pressure(&self) -> Pressure {
            Pressure::new::<pascal>(1.0e5)
        }
    }

    fn state(pressure_pa: f64, temperature_k: f64) -> State<MockLiquid> {
        State::new(
            Pressure::new::<pascal>(pressure_pa),
            ThermodynamicTemperature::new::<kelvin>(temperature_k),
            MockLiquid,
        )
    }

    #[test]
    fn enthalpy_follows_reference_formula() -> Result<(), PropertyError> {
        // h = 2000 · (350 - 300) + (9e5 - 1e5) / 800 = 100_000 + 1000 J/kg.
        let h = Incompressible.enthalpy(&state(9.0e5, 350.0))?;
        assert_relative_eq!(h.get::<joule_per_kilogram>(), 101_000.0);
        Ok(())
    }

    #[test]
    fn enthalpy_is_zero_at_reference_state() -> Result<(), PropertyError> {
        let h = Incompressible.enthalpy(&state(1.0e5, 300.0))?;
        assert_relative_eq!(h.get::<joule_per_kilogram>(), 0.0);
        Ok(())
    }

    #[test]
    fn gradients_match_model_constants() -> Result<(), PropertyError> {
        let state = state(5.0e5, 320.0);
        let gradients = Incompressible.enthalpy_gradients(&state)?;

        assert_eq!(gradients.h, Incompressible.enthalpy(&state)?);
        assert_relative_eq!(
            gradients.dh_dp.get::<cubic_meter_per_kilogram>(),
            1.0 / 800.0
        );
        assert_relative_eq!(
            gradients.dh_dt.get::<joule_per_kilogram_kelvin>(),
            2000.0
        );
        Ok(())
    }

    #[test]
    fn pressure_gradient_is_consistent_with_finite_difference() -> Result<(), PropertyError> {
        let low = state(4.0e5, 320.0);
        let high = low.clone().with_pressure(Pressure::new::<pascal>(4.0e5 + 1.0));

        let dh = Incompressible.enthalpy(&high)? - Incompressible.enthalpy(&low)?;
        let gradients = Incompressible.enthalpy_gradients(&low)?;

        assert_relative_eq!(
            dh.get::<joule_per_kilogram>(),
            gradients.dh_dp.get::<cubic_meter_per_kilogram>(),
            epsilon = 1e-9
        );
        Ok(())
    }
}

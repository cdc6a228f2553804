use uom::si::{
    f64::{MassDensity, Pressure, SpecificHeatCapacity, ThermodynamicTemperature},
    mass_density::kilogram_per_cubic_meter,
    pressure::pascal,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::model::IncompressibleFluid;

/// Marker type for liquid water.
///
/// Constants correspond to water near 20 °C and atmospheric pressure, the
/// usual reference state for injected water in doublet modeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Water;

impl IncompressibleFluid for Water {
    fn specific_heat(&self) -> SpecificHeatCapacity {
        SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(4184.0)
    }

    fn density(&self) -> MassDensity {
        MassDensity::new::<kilogram_per_cubic_meter>(997.047)
    }

    fn reference_temperature(&self) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<kelvin>(293.15)
    }

    fn reference_pressure(&self) -> Pressure {
        Pressure::new::<pascal>(101_325.0)
    }
}

//! Unit aliases and extensions used throughout the fluid property seam.

use uom::{
    si::{
        f64::{TemperatureInterval, ThermodynamicTemperature},
        temperature_interval::kelvin as delta_kelvin,
        thermodynamic_temperature::kelvin as abs_kelvin,
        Quantity, ISQ, SI,
    },
    typenum::{N2, P2, Z0},
};

/// Specific enthalpy, J/kg in SI.
pub type SpecificEnthalpy = Quantity<ISQ<P2, Z0, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Extension method for `ThermodynamicTemperature` to compute a temperature difference.
pub trait TemperatureOps {
    /// Computes the signed difference `self - other`.
    ///
    /// A `TemperatureInterval` (a temperature change) is a distinct quantity
    /// from a `ThermodynamicTemperature` (a specific temperature value), and
    /// `uom` does not allow subtracting the latter directly. This method
    /// provides the unit-safe subtraction, converting internally to kelvin.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureOps for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        temperature_interval::kelvin as delta_kelvin,
        thermodynamic_temperature::{degree_celsius, kelvin as abs_kelvin},
    };

    #[test]
    fn subtracts_temperatures_with_sign() {
        let t1 = ThermodynamicTemperature::new::<abs_kelvin>(300.0);
        let t2 = ThermodynamicTemperature::new::<abs_kelvin>(310.0);

        assert_relative_eq!(t2.minus(t1).get::<delta_kelvin>(), 10.0);
        assert_relative_eq!(t1.minus(t2).get::<delta_kelvin>(), -10.0);
    }

    #[test]
    fn handles_mixed_input_units() {
        let t_in_c = ThermodynamicTemperature::new::<degree_celsius>(25.0);
        let t_in_k = ThermodynamicTemperature::new::<abs_kelvin>(298.15);

        assert_relative_eq!(t_in_k.minus(t_in_c).get::<delta_kelvin>(), 0.0, epsilon = 1e-12);
    }
}

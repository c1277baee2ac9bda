//! Extensions to [`uom`].
//!
//! Every physical quantity that crosses a public boundary of this crate is a
//! [`uom`] quantity. Two things the heatsink model needs are missing upstream:
//!
//! - [`TemperatureDifference`]: absolute temperature minus absolute
//!   temperature as a [`TemperatureInterval`], used for the headroom between a
//!   part's maximum temperature and the ambient air.
//! - [`SpecificThermalResistance`]: area-specific contact resistance
//!   (m²·K/W), the unit thermal-interface datasheets quote.
//!
//! ```
//! use heatsink_sizing::support::units::TemperatureDifference;
//! use uom::si::{
//!     f64::ThermodynamicTemperature, temperature_interval::kelvin,
//!     thermodynamic_temperature::degree_celsius,
//! };
//!
//! let t_max = ThermodynamicTemperature::new::<degree_celsius>(70.0);
//! let ambient = ThermodynamicTemperature::new::<degree_celsius>(40.0);
//! assert!((t_max.minus(ambient).get::<kelvin>() - 30.0).abs() < 1e-9);
//! ```

use uom::{
    si::{
        ISQ, Quantity, SI,
        area::square_meter,
        f64::{Area, Power, TemperatureInterval, ThermodynamicTemperature},
        power::watt,
        temperature_interval::kelvin as delta_kelvin,
        thermodynamic_temperature::kelvin as abs_kelvin,
    },
    typenum::{N1, P1, P3, Z0},
};

/// Subtraction of two absolute temperatures.
///
/// [`uom`] has no `Sub` between two [`ThermodynamicTemperature`] values that
/// yields a [`TemperatureInterval`]; see
/// [#380](https://github.com/iliekturtles/uom/issues/380).
pub trait TemperatureDifference {
    /// Returns `self - other` as an interval.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}

/// Area-specific thermal resistance, m²·K/W in SI.
///
/// Power times this, divided by the contact area, is the temperature drop
/// across the joint.
pub type SpecificThermalResistance = Quantity<ISQ<Z0, N1, P3, Z0, P1, Z0, Z0>, SI<f64>, f64>;

/// Builds a [`SpecificThermalResistance`] from a value in m²·K/W.
#[must_use]
pub fn square_meter_kelvin_per_watt(value: f64) -> SpecificThermalResistance {
    Area::new::<square_meter>(value) * TemperatureInterval::new::<delta_kelvin>(1.0)
        / Power::new::<watt>(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::thermodynamic_temperature::degree_celsius;

    #[test]
    fn headroom_above_ambient() {
        let t_max = ThermodynamicTemperature::new::<degree_celsius>(50.0);
        let ambient = ThermodynamicTemperature::new::<degree_celsius>(40.0);

        assert_relative_eq!(
            t_max.minus(ambient).get::<delta_kelvin>(),
            10.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            ambient.minus(t_max).get::<delta_kelvin>(),
            -10.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn joint_temperature_drop() {
        let resistance = square_meter_kelvin_per_watt(7.6e-5);
        let drop: TemperatureInterval =
            Power::new::<watt>(5.0) * resistance / Area::new::<square_meter>(0.013);

        assert_relative_eq!(
            drop.get::<delta_kelvin>(),
            5.0 * 7.6e-5 / 0.013,
            epsilon = 1e-15
        );
    }
}

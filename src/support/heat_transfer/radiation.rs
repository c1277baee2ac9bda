use uom::si::{
    f64::{HeatTransfer, Length, TemperatureInterval, ThermodynamicTemperature},
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use super::air;

/// Linearised radiative heat-transfer coefficients for a finned radiator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiativeCoefficients {
    /// Coefficient for flat, unshaded faces.
    pub flat: HeatTransfer,

    /// Coefficient for fin flanks, reduced for the view blocked by neighbouring fins.
    pub finned: HeatTransfer,
}

/// Returns the radiative coefficients for a surface `dt_max` above `t_air`.
///
/// The flat coefficient is `σε · (T_s⁴ − T_air⁴) / ΔT`. The finned one is
/// scaled by `half_gap / (fin_height + half_gap)`.
#[must_use]
pub fn radiative_coefficients(
    t_air: ThermodynamicTemperature,
    dt_max: TemperatureInterval,
    half_gap: Length,
    fin_height: Length,
) -> RadiativeCoefficients {
    let t_air = t_air.get::<degree_celsius>() + air::CELSIUS_OFFSET;
    let dt = dt_max.get::<delta_kelvin>();
    let t_surface = t_air + dt;

    let flat = air::RADIATIVE_EXCHANGE * (t_surface.powi(4) - t_air.powi(4)) / dt;

    let half_gap = half_gap.get::<meter>();
    let view = half_gap / (fin_height.get::<meter>() + half_gap);

    RadiativeCoefficients {
        flat: HeatTransfer::new::<watt_per_square_meter_kelvin>(flat),
        finned: HeatTransfer::new::<watt_per_square_meter_kelvin>(flat * view),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn flat_and_shaded() {
        let coeffs = radiative_coefficients(
            ThermodynamicTemperature::new::<degree_celsius>(40.0),
            TemperatureInterval::new::<delta_kelvin>(30.0),
            Length::new::<meter>(0.0045),
            Length::new::<meter>(0.0125),
        );

        assert_relative_eq!(
            coeffs.flat.get::<watt_per_square_meter_kelvin>(),
            6.365_043_36,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            coeffs.finned.get::<watt_per_square_meter_kelvin>(),
            1.684_864_418_823_528_9,
            max_relative = 1e-9
        );
    }

    #[test]
    fn zero_overheat_is_not_finite() {
        let coeffs = radiative_coefficients(
            ThermodynamicTemperature::new::<degree_celsius>(40.0),
            TemperatureInterval::new::<delta_kelvin>(0.0),
            Length::new::<meter>(0.0045),
            Length::new::<meter>(0.0125),
        );

        let flat = coeffs.flat.get::<watt_per_square_meter_kelvin>();
        assert!(!flat.is_finite());
    }
}

use uom::si::{
    f64::{TemperatureInterval, Velocity},
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
    power::watt,
    temperature_interval::kelvin,
    velocity::meter_per_second,
};

use crate::{
    models::thermal::heatsink::core::{conditions::Conditions, radiator::FinnedRadiator},
    support::heat_transfer::{
        heat_transfer_coefficient, nusselt_force_fins, nusselt_force_plane,
        radiative_coefficients, reynolds,
    },
};

use super::{CoolingPower, Estimate, EstimateError, Terms, check_conditions, finish};

/// Share of the required load assumed to leave through the fin channels.
const FIN_CHANNEL_SHARE: f64 = 0.7;

/// Empirical factor of the local hot-spot rise at the air inlet.
const HOT_SPOT_FACTOR: f64 = 0.9e-3;

/// Empirical factor in the fin parameter `m = 0.15 · √(α/δ)`.
const FIN_PARAMETER_FACTOR: f64 = 0.15;

/// Forced-convection estimator for air blown along the fins at `velocity`.
///
/// Unlike the free estimator this one is driven by the load: 70 % of the
/// required power is pushed through the fin channels, and the resulting
/// channel temperature rise (corrected for fin efficiency and the inlet hot
/// spot) becomes the effective overheat for the surface terms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForcedConvection {
    /// Approach velocity of the cooling air.
    pub velocity: Velocity,
}

impl Default for ForcedConvection {
    fn default() -> Self {
        Self {
            velocity: Velocity::new::<meter_per_second>(1.0),
        }
    }
}

impl CoolingPower for ForcedConvection {
    fn estimate(
        &self,
        radiator: &FinnedRadiator,
        conditions: &Conditions,
    ) -> Result<Estimate, EstimateError> {
        check_conditions(conditions)?;

        if !(self.velocity > Velocity::default()) {
            return Err(EstimateError::NonPositiveVelocity {
                velocity: self.velocity,
            });
        }
        if !(conditions.required_power.get::<watt>() > 0.0) {
            return Err(EstimateError::NonPositiveLoad {
                power: conditions.required_power,
            });
        }

        let fins = radiator.fin_surface_with_cutouts(conditions.excluded_fin_area);
        if !(fins.value > 0.0) {
            return Err(EstimateError::NoFinArea {
                excluded: conditions.excluded_fin_area,
            });
        }

        let t_air = conditions.ambient;
        let length = radiator.length();
        let half_gap = radiator.half_gap();
        let fin_height = radiator.fin_height();
        let pitch = radiator.fin_pitch().get::<meter>();
        let thickness = radiator.fin_thickness().get::<meter>();
        let surface = radiator.full_surface();

        let channel_load = conditions.required_power * FIN_CHANNEL_SHARE;

        let diameter = radiator.hydraulic_diameter();
        let length_ratio = length.get::<meter>() / diameter.get::<meter>();
        let channel_velocity = self.velocity * (pitch / (pitch - thickness));
        let alpha_channel = heat_transfer_coefficient(
            nusselt_force_fins(reynolds(channel_velocity, diameter), length_ratio),
            diameter,
        );

        let hot_spot = TemperatureInterval::new::<kelvin>(
            HOT_SPOT_FACTOR * channel_load.get::<watt>()
                / (self.velocity.get::<meter_per_second>()
                    * 2.0
                    * half_gap.get::<meter>()
                    * fin_height.get::<meter>()),
        );
        let channel_rise: TemperatureInterval = channel_load / (alpha_channel * fins);

        let mh = FIN_PARAMETER_FACTOR
            * (alpha_channel.get::<watt_per_square_meter_kelvin>() / thickness).sqrt()
            * fin_height.get::<meter>();
        let efficiency = EstimateError::check_finite("fin efficiency", mh.tanh() / mh)?;

        let dt = channel_rise / efficiency + hot_spot / 2.0;
        EstimateError::check_finite("effective overheat", dt.get::<kelvin>())?;

        let alpha_plane =
            heat_transfer_coefficient(nusselt_force_plane(reynolds(self.velocity, length)), length);
        let radiative = radiative_coefficients(t_air, dt, half_gap, fin_height);

        let terms = Terms {
            fin_convection: channel_load,
            surface_convection: alpha_plane * surface * dt,
            fin_radiation: radiative.finned * fins * dt,
            surface_radiation: radiative.flat * surface * dt,
            plane_coefficient: alpha_plane,
            flat_radiation: radiative.flat,
        };

        finish(&terms, radiator, conditions, dt)
    }
}

use crate::{
    models::thermal::heatsink::core::{conditions::Conditions, radiator::FinnedRadiator},
    support::heat_transfer::{
        heat_transfer_coefficient, nusselt_free_fins, nusselt_free_plane, radiative_coefficients,
    },
};

use super::{CoolingPower, Estimate, EstimateError, Terms, check_conditions, finish};

/// Natural-convection estimator.
///
/// Channel convection uses the inter-fin correlation on the half-gap, the
/// outer surface uses the plane-wall correlation on the radiator length, and
/// every term is evaluated at the governing overheat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FreeConvection;

impl CoolingPower for FreeConvection {
    fn estimate(
        &self,
        radiator: &FinnedRadiator,
        conditions: &Conditions,
    ) -> Result<Estimate, EstimateError> {
        check_conditions(conditions)?;

        let t_air = conditions.ambient;
        let dt = conditions.overheat;
        let length = radiator.length();
        let half_gap = radiator.half_gap();

        let fins = radiator.fin_surface_with_cutouts(conditions.excluded_fin_area);
        let surface = radiator.full_surface();

        let alpha_fins =
            heat_transfer_coefficient(nusselt_free_fins(t_air, dt, half_gap, length), half_gap);
        let alpha_plane =
            heat_transfer_coefficient(nusselt_free_plane(t_air, dt, length), length);
        let radiative = radiative_coefficients(t_air, dt, half_gap, radiator.fin_height());

        let terms = Terms {
            fin_convection: alpha_fins * fins * dt,
            surface_convection: alpha_plane * surface * dt,
            fin_radiation: radiative.finned * fins * dt,
            surface_radiation: radiative.flat * surface * dt,
            plane_coefficient: alpha_plane,
            flat_radiation: radiative.flat,
        };

        finish(&terms, radiator, conditions, dt)
    }
}

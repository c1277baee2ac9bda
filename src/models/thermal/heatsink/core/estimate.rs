//! Cooling-power estimators.
//!
//! Both estimators follow the same outline. Convective and radiative power is
//! computed separately for the fin channels and for the remaining outer
//! surface, then the back face is added (a flat plate when single-sided, a
//! mirror of the finned face when double-sided). The total defines an
//! effective base coefficient `α_eff`, and the deliverable power is
//! `α_eff · L·B · ΔT / β` with β the [spreading factor](spreading_factor).

mod error;
mod forced;
mod free;

pub use error::EstimateError;
pub use forced::ForcedConvection;
pub use free::FreeConvection;

use uom::si::{
    f64::{Area, HeatTransfer, Length, Power, TemperatureInterval},
    heat_transfer::watt_per_square_meter_kelvin,
    power::watt,
    temperature_interval::kelvin,
};

use super::{
    conditions::{Conditions, Sidedness},
    radiator::FinnedRadiator,
    spreading::spreading_factor,
};

/// Estimates the power a radiator can dissipate under given conditions.
pub trait CoolingPower {
    /// Returns the estimate together with its intermediate terms.
    ///
    /// # Errors
    ///
    /// Returns an [`EstimateError`] if the conditions or the geometry put the
    /// correlations outside their domain.
    fn estimate(
        &self,
        radiator: &FinnedRadiator,
        conditions: &Conditions,
    ) -> Result<Estimate, EstimateError>;

    /// Returns only the dissipatable power.
    ///
    /// # Errors
    ///
    /// See [`CoolingPower::estimate`].
    fn estimate_power(
        &self,
        radiator: &FinnedRadiator,
        conditions: &Conditions,
    ) -> Result<Power, EstimateError> {
        self.estimate(radiator, conditions)
            .map(|estimate| estimate.power)
    }
}

/// Convection mode of a sizing run.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Convection {
    /// Natural convection.
    #[default]
    Free,
    /// Fan-driven air along the fins.
    Forced(ForcedConvection),
}

impl CoolingPower for Convection {
    fn estimate(
        &self,
        radiator: &FinnedRadiator,
        conditions: &Conditions,
    ) -> Result<Estimate, EstimateError> {
        match self {
            Self::Free => FreeConvection.estimate(radiator, conditions),
            Self::Forced(forced) => forced.estimate(radiator, conditions),
        }
    }
}

/// A cooling-power estimate and the terms it was built from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    /// Power the radiator can dissipate at the governing overheat.
    pub power: Power,
    /// Convection from the fin channels.
    pub fin_convection: Power,
    /// Convection from the outer surface other than the fin flanks.
    pub surface_convection: Power,
    /// Radiation from the fin channels.
    pub fin_radiation: Power,
    /// Radiation from the outer surface.
    pub surface_radiation: Power,
    /// Power leaving the back face.
    pub back_face: Power,
    /// Effective base coefficient `α_eff`.
    pub effective_coefficient: HeatTransfer,
    /// Spreading factor β.
    pub spreading: f64,
    /// Overheat at which the surface terms were evaluated.
    pub effective_overheat: TemperatureInterval,
}

impl Estimate {
    /// Power leaving the finned face.
    #[must_use]
    pub fn finned_face(&self) -> Power {
        self.fin_convection + self.surface_convection + self.fin_radiation + self.surface_radiation
    }
}

/// Per-face terms handed to [`finish`] by each estimator.
struct Terms {
    fin_convection: Power,
    surface_convection: Power,
    fin_radiation: Power,
    surface_radiation: Power,
    plane_coefficient: HeatTransfer,
    flat_radiation: HeatTransfer,
}

/// Rejects conditions no estimator can work with.
fn check_conditions(conditions: &Conditions) -> Result<(), EstimateError> {
    if !(conditions.overheat > TemperatureInterval::default()) {
        return Err(EstimateError::NonPositiveOverheat {
            overheat: conditions.overheat,
        });
    }
    if conditions.component_count == 0 {
        return Err(EstimateError::NoComponents);
    }
    if !(conditions.concentration > Length::default()) {
        return Err(EstimateError::NonPositiveConcentration {
            concentration: conditions.concentration,
        });
    }
    Ok(())
}

/// Adds the back face, applies the spreading correction and scales the result
/// to the governing overheat.
fn finish(
    terms: &Terms,
    radiator: &FinnedRadiator,
    conditions: &Conditions,
    effective_overheat: TemperatureInterval,
) -> Result<Estimate, EstimateError> {
    let base: Area = radiator.flat_surface();

    let finned_face = terms.fin_convection
        + terms.surface_convection
        + terms.fin_radiation
        + terms.surface_radiation;

    let back_face = match conditions.sidedness {
        Sidedness::Single => {
            (terms.plane_coefficient + terms.flat_radiation) * base * effective_overheat
        }
        Sidedness::Double => finned_face,
    };

    let effective_coefficient: HeatTransfer =
        (finned_face + back_face) / (base * effective_overheat);
    EstimateError::check_finite(
        "effective heat-transfer coefficient",
        effective_coefficient.get::<watt_per_square_meter_kelvin>(),
    )?;

    let spreading = spreading_factor(
        radiator.length(),
        radiator.width(),
        conditions.component_count,
        effective_coefficient,
        conditions.concentration,
    )?;

    let power: Power = effective_coefficient * base * conditions.overheat / spreading;
    EstimateError::check_finite("cooling power", power.get::<watt>())?;

    log::debug!(
        "{:.4} x {:.4} m: fins {:.3} W + surface {:.3} W + radiation {:.3}/{:.3} W, \
         back {:.3} W, alpha_eff {:.3} W/m2K, beta {:.4}, dt {:.3} K -> {:.3} W",
        radiator.length().value,
        radiator.width().value,
        terms.fin_convection.get::<watt>(),
        terms.surface_convection.get::<watt>(),
        terms.fin_radiation.get::<watt>(),
        terms.surface_radiation.get::<watt>(),
        back_face.get::<watt>(),
        effective_coefficient.get::<watt_per_square_meter_kelvin>(),
        spreading,
        effective_overheat.get::<kelvin>(),
        power.get::<watt>(),
    );

    Ok(Estimate {
        power,
        fin_convection: terms.fin_convection,
        surface_convection: terms.surface_convection,
        fin_radiation: terms.fin_radiation,
        surface_radiation: terms.surface_radiation,
        back_face,
        effective_coefficient,
        spreading,
        effective_overheat,
    })
}

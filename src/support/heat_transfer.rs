//! Empirical heat-transfer correlations for air-cooled finned surfaces.
//!
//! These are hand-calculation grade correlations: dimensionless numbers are
//! built from air properties folded into fixed constants (see [`air`]), and
//! each Nusselt correlation is a banded power law keyed on a dimensionless
//! group.
//!
//! # Overview
//!
//! - **Free convection**: [`grashof`], [`nusselt_free_plane`], [`nusselt_free_fins`]
//! - **Forced convection**: [`reynolds`], [`nusselt_force_plane`], [`nusselt_force_fins`]
//! - **Radiation**: [`radiative_coefficients`]
//! - **Coefficient**: [`heat_transfer_coefficient`] turns a Nusselt number into α
//!
//! All functions are pure. They expect a strictly positive temperature rise
//! and strictly positive lengths; outside that domain the arithmetic yields
//! `NaN` or infinities, which callers are expected to detect.

pub mod air;
mod forced;
mod free;
mod radiation;

pub use forced::{
    ENTRANCE_CORRECTION, LAMINAR_CHANNEL_REGIMES, TURBULENT_TRANSITION, entrance_correction,
    nusselt_force_fins, nusselt_force_plane, reynolds,
};
pub use free::{FREE_PLANE_REGIMES, grashof, nusselt_free_fins, nusselt_free_plane};
pub use radiation::{RadiativeCoefficients, radiative_coefficients};

use uom::si::{
    f64::{HeatTransfer, Length},
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
};

/// One band of a piecewise power-law correlation: `Nu = coefficient · x^exponent`.
///
/// A band applies for all `x` up to and including `upper`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerLaw {
    /// Inclusive upper bound of the band.
    pub upper: f64,
    /// Leading coefficient.
    pub coefficient: f64,
    /// Exponent applied to the correlating group.
    pub exponent: f64,
}

impl PowerLaw {
    /// Evaluates this band at `x`, ignoring its bound.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        self.coefficient * x.powf(self.exponent)
    }

    /// Evaluates the first band of `bands` whose upper bound admits `x`.
    ///
    /// The last band is used for anything beyond every bound, so tables should
    /// end with an `f64::INFINITY` bound.
    #[must_use]
    pub fn banded(bands: &[PowerLaw], x: f64) -> f64 {
        bands
            .iter()
            .find(|band| x <= band.upper)
            .or(bands.last())
            .map_or(f64::NAN, |band| band.eval(x))
    }
}

/// Converts a Nusselt number into a convective heat-transfer coefficient.
///
/// Uses the thermal conductivity of air at 50 °C ([`air::CONDUCTIVITY`]),
/// `α = k · Nu / l`.
#[must_use]
pub fn heat_transfer_coefficient(nusselt: f64, length: Length) -> HeatTransfer {
    HeatTransfer::new::<watt_per_square_meter_kelvin>(
        air::CONDUCTIVITY * nusselt / length.get::<meter>(),
    )
}

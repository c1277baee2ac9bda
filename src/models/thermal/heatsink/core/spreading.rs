//! Base-plate heat-spreading correction.
//!
//! Components inject heat through small contact patches rather than over the
//! whole base. The correction treats each base direction as a 2-D fin fed over
//! a strip of width `dks` and multiplies the two directional results.

use uom::si::{
    f64::{HeatTransfer, Length},
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
};

use super::estimate::EstimateError;

/// Below this argument `sinh(r)/r` is taken as its limit of one.
const SHAPE_EPSILON: f64 = 1e-6;

/// Spreading factor β for `sources` evenly spaced components on a base of
/// `length` × `width`.
///
/// `alpha_eff` is the effective base heat-transfer coefficient and
/// `concentration` the footprint length `dks` of the smallest contact patch.
/// The result is `L·B / (4·n·dks²) · f(L/n, B) · f(B, L/n)` and is at least
/// one for realistic geometry.
///
/// # Errors
///
/// Returns an [`EstimateError`] if `sources` is zero, `alpha_eff` or
/// `concentration` is not strictly positive, or the result is not finite.
pub fn spreading_factor(
    length: Length,
    width: Length,
    sources: usize,
    alpha_eff: HeatTransfer,
    concentration: Length,
) -> Result<f64, EstimateError> {
    if sources == 0 {
        return Err(EstimateError::NoComponents);
    }
    if !(alpha_eff > HeatTransfer::default()) {
        return Err(EstimateError::NonPositiveCoefficient { alpha: alpha_eff });
    }
    if !(concentration > Length::default()) {
        return Err(EstimateError::NonPositiveConcentration { concentration });
    }

    #[allow(clippy::cast_precision_loss)]
    let n = sources as f64;
    let l = length.get::<meter>();
    let b = width.get::<meter>();
    let alpha = alpha_eff.get::<watt_per_square_meter_kelvin>();
    let dks = concentration.get::<meter>();

    let span = l / n;
    let beta = l * b / (4.0 * n * dks.powi(2))
        * axis(span, b, alpha, dks)
        * axis(b, span, alpha, dks);

    EstimateError::check_finite("spreading factor", beta)
}

/// Directional spreading function along `span`, with `transverse` across it.
fn axis(span: f64, transverse: f64, alpha: f64, dks: f64) -> f64 {
    let by = 1.2 * alpha * span.powi(2);
    let r = 2.0 * by.sqrt();
    let shape = if r < SHAPE_EPSILON { 1.0 } else { r.sinh() / r };
    let px = transverse / span * (by * (1.5 - 1.0 / (1.0 + shape))).sqrt();

    fin_profile(px, dks / transverse)
}

/// `fi = 2·sinh(px·d)·cosh²(px/2)/sinh(px) − cosh(px·d) + 1`.
///
/// Evaluated as `1 − e^(−a) + 2·sinh(a)/(e^px − 1)` with `a = px·d`, which is
/// the same function without the `sinh(px)` cancellation at small `px` or the
/// overflow at large `px`. At `px = 0` the limit `2·d` is returned.
fn fin_profile(px: f64, d: f64) -> f64 {
    if px == 0.0 {
        return 2.0 * d;
    }
    let a = px * d;
    1.0 - (-a).exp() + (a - px).exp() * -(-2.0 * a).exp_m1() / -(-px).exp_m1()
}

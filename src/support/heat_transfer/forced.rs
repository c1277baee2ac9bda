use uom::si::{
    f64::{Length, Velocity},
    length::meter,
    velocity::meter_per_second,
};

use super::{PowerLaw, air};

/// Reynolds number above which channel flow between fins is treated as turbulent.
pub const TURBULENT_TRANSITION: f64 = 2200.0;

/// Laminar channel flow, keyed on `a = 0.7 · Re / (l / d)`.
///
/// | `a` range | correlation |
/// | --- | --- |
/// | `a ≤ 5` | `9` |
/// | `5 < a ≤ 100` | `8.4 · a^0.045` |
/// | `a > 100` | `2.32 · a^0.33` |
pub const LAMINAR_CHANNEL_REGIMES: [PowerLaw; 3] = [
    PowerLaw {
        upper: 5.0,
        coefficient: 9.0,
        exponent: 0.0,
    },
    PowerLaw {
        upper: 100.0,
        coefficient: 8.4,
        exponent: 0.045,
    },
    PowerLaw {
        upper: f64::INFINITY,
        coefficient: 2.32,
        exponent: 0.33,
    },
];

/// Entrance-length correction for turbulent channel flow.
///
/// Pairs of (channel length / hydraulic diameter, multiplier). Interpolated
/// linearly and clamped to the table domain.
pub const ENTRANCE_CORRECTION: [(f64, f64); 9] = [
    (1.0, 1.9),
    (2.0, 1.7),
    (5.0, 1.44),
    (10.0, 1.28),
    (15.0, 1.18),
    (20.0, 1.13),
    (30.0, 1.05),
    (40.0, 1.02),
    (50.0, 1.0),
];

/// Returns the Reynolds number of air flowing at `velocity` over the defining size `d`.
#[must_use]
pub fn reynolds(velocity: Velocity, d: Length) -> f64 {
    air::INVERSE_KINEMATIC_VISCOSITY * velocity.get::<meter_per_second>() * d.get::<meter>()
}

/// Returns the Nusselt number for forced flow along a plane surface.
///
/// `Re ≥ 10⁵`: `0.084 · Re^0.8`; otherwise `0.792 · Re^0.5`.
#[must_use]
pub fn nusselt_force_plane(re: f64) -> f64 {
    if re >= 1e5 {
        0.084 * re.powf(0.8)
    } else {
        0.792 * re.sqrt()
    }
}

/// Returns the Nusselt number for forced flow in the channel between fins.
///
/// `length_ratio` is the channel length over its hydraulic diameter.
/// Laminar flow (`Re ≤ 2200`) uses [`LAMINAR_CHANNEL_REGIMES`]; turbulent flow
/// uses `0.0216 · Re^0.8` scaled by [`entrance_correction`].
#[must_use]
pub fn nusselt_force_fins(re: f64, length_ratio: f64) -> f64 {
    if re <= TURBULENT_TRANSITION {
        PowerLaw::banded(&LAMINAR_CHANNEL_REGIMES, 0.7 * re / length_ratio)
    } else {
        entrance_correction(length_ratio) * 0.0216 * re.powf(0.8)
    }
}

/// Interpolates [`ENTRANCE_CORRECTION`] at `length_ratio`, clamped to the table domain.
#[must_use]
pub fn entrance_correction(length_ratio: f64) -> f64 {
    let (first, last) = (ENTRANCE_CORRECTION[0], ENTRANCE_CORRECTION[8]);
    let x = length_ratio.clamp(first.0, last.0);

    ENTRANCE_CORRECTION
        .windows(2)
        .find(|pair| x <= pair[1].0)
        .map_or(last.1, |pair| {
            let ((x0, y0), (x1, y1)) = (pair[0], pair[1]);
            y0 - (y0 - y1) * (x - x0) / (x1 - x0)
        })
}

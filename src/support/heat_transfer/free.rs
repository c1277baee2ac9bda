use uom::si::{
    f64::{Length, TemperatureInterval, ThermodynamicTemperature},
    length::meter,
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use super::{PowerLaw, air};

/// Plane vertical wall in free convection, keyed on `a = Pr · Gr`.
///
/// | band | `a` range | correlation |
/// | --- | --- | --- |
/// | creeping | `a ≤ 5·10²` | `1.18 · a^0.125` |
/// | laminar | `5·10² < a ≤ 2·10⁷` | `0.54 · a^0.25` |
/// | turbulent | `a > 2·10⁷` | `0.135 · a^0.33` |
///
/// Adjacent bands differ by about 0.5 % at `a = 5·10²` and about 4 % at `a = 2·10⁷`.
pub const FREE_PLANE_REGIMES: [PowerLaw; 3] = [
    PowerLaw {
        upper: 5e2,
        coefficient: 1.18,
        exponent: 0.125,
    },
    PowerLaw {
        upper: 2e7,
        coefficient: 0.54,
        exponent: 0.25,
    },
    PowerLaw {
        upper: f64::INFINITY,
        coefficient: 0.135,
        exponent: 0.33,
    },
];

/// Returns the Grashof number for air.
///
/// `Gr = C · ΔT · l³ / (273 + t_air)` with `C` = [`air::GRASHOF_FACTOR`].
#[must_use]
pub fn grashof(t_air: ThermodynamicTemperature, dt_max: TemperatureInterval, l: Length) -> f64 {
    let t_abs = air::CELSIUS_OFFSET + t_air.get::<degree_celsius>();
    air::GRASHOF_FACTOR * dt_max.get::<delta_kelvin>() * l.get::<meter>().powi(3) / t_abs
}

/// Returns the Nusselt number for free convection on a plane vertical wall of height `l`.
///
/// See [`FREE_PLANE_REGIMES`] for the band table.
#[must_use]
pub fn nusselt_free_plane(
    t_air: ThermodynamicTemperature,
    dt_max: TemperatureInterval,
    l: Length,
) -> f64 {
    let a = air::PRANDTL * grashof(t_air, dt_max, l);
    PowerLaw::banded(&FREE_PLANE_REGIMES, a)
}

/// Returns the Nusselt number for free convection in the channel between two fins.
///
/// The defining size is the half-gap between fins; `l` is the channel length.
/// With `c = Gr(half_gap) · half_gap / l` and `q = 12.84 + c`:
///
/// `Nu = 6c/q · 1 / (1 + √(1 + 51.4c/q²))`
#[must_use]
pub fn nusselt_free_fins(
    t_air: ThermodynamicTemperature,
    dt_max: TemperatureInterval,
    half_gap: Length,
    l: Length,
) -> f64 {
    let c = grashof(t_air, dt_max, half_gap) * half_gap.get::<meter>() / l.get::<meter>();
    let q = 12.84 + c;
    6.0 * c / q / (1.0 + (1.0 + 51.4 * c / q.powi(2)).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn ambient() -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(40.0)
    }

    fn delta(k: f64) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(k)
    }

    #[test]
    fn grashof_for_catalog_length() {
        let gr = grashof(ambient(), delta(30.0), Length::new::<meter>(0.05));
        assert_relative_eq!(gr, 364_168.130_990_415_4, max_relative = 1e-9);
    }

    #[test]
    fn plane_in_laminar_band() {
        let nu = nusselt_free_plane(ambient(), delta(30.0), Length::new::<meter>(0.05));
        assert_relative_eq!(nu, 12.133_714_000_705_979, max_relative = 1e-9);
    }

    #[test]
    fn plane_in_creeping_band() {
        // a ≈ 0.0043, far below the first break.
        let nu = nusselt_free_plane(ambient(), delta(30.0), Length::new::<meter>(1e-4));
        assert_relative_eq!(nu, 0.543_961_612_901_472, max_relative = 1e-9);
    }

    #[test]
    fn plane_bands_nearly_continuous() {
        for pair in FREE_PLANE_REGIMES.windows(2) {
            let at_break = pair[0].upper;
            let below = pair[0].eval(at_break);
            let above = pair[1].eval(at_break);
            assert!(below.is_finite() && above.is_finite());
            assert!((below - above).abs() / below < 0.05);
        }
    }

    #[test]
    fn fin_channel() {
        let nu = nusselt_free_fins(
            ambient(),
            delta(30.0),
            Length::new::<meter>(0.0045),
            Length::new::<meter>(0.05),
        );
        assert_relative_eq!(nu, 1.638_355_961_074_464_5, max_relative = 1e-9);
    }

    #[test]
    fn zero_overheat_gives_zero_channel_nusselt() {
        let nu = nusselt_free_fins(
            ambient(),
            delta(0.0),
            Length::new::<meter>(0.0045),
            Length::new::<meter>(0.05),
        );
        assert_relative_eq!(nu, 0.0);
    }
}

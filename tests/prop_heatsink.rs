//! Property-based tests for the heatsink model.
//!
//! Covers: cutout clamping, spreading-factor finiteness, component-set
//! aggregation, free-convection correlation domain, and exact geometry
//! read-back.

use heatsink_sizing::{
    models::thermal::heatsink::{
        ContactDrop, Cutout, ElectronicElement, ElementSet, FinnedRadiator, RadiatorProfile,
        spreading_factor,
    },
    support::{heat_transfer::nusselt_free_plane, units::square_meter_kelvin_per_watt},
};
use proptest::prelude::*;
use uom::si::{
    area::square_meter,
    f64::{Area, HeatTransfer, Length, Power, TemperatureInterval, ThermodynamicTemperature},
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
    power::watt,
    temperature_interval::kelvin,
    thermodynamic_temperature::degree_celsius,
};

fn radiator(length: f64, width: f64, fin_height: f64, pitch: f64) -> FinnedRadiator {
    FinnedRadiator::new(
        Length::new::<meter>(length),
        Length::new::<meter>(width),
        RadiatorProfile {
            fin_height: Length::new::<meter>(fin_height),
            fin_pitch: Length::new::<meter>(pitch),
            ..RadiatorProfile::default()
        },
    )
    .unwrap()
}

fn part() -> impl Strategy<Value = ElectronicElement> {
    (0.5f64..60.0, 45.0f64..125.0, 1e-4f64..0.05, 0.0f64..2e-4, 0u8..=6).prop_map(
        |(power, max_celsius, contact, resistance, cutout)| {
            ElectronicElement::new(
                Power::new::<watt>(power),
                ThermodynamicTemperature::new::<degree_celsius>(max_celsius),
                Area::new::<square_meter>(contact),
                square_meter_kelvin_per_watt(resistance),
                Cutout::new(cutout).unwrap(),
            )
            .unwrap()
        },
    )
}

// ── Geometry ─────────────────────────────────────────────────────────

proptest! {
    /// Removing more fin area never leaves more behind, and never less than zero.
    #[test]
    fn fin_surface_is_non_increasing_and_clamped(
        length in 0.02f64..0.5,
        width in 0.02f64..0.5,
        fin_height in 0.005f64..0.05,
        pitch in 0.003f64..0.02,
        a in 0.0f64..0.2,
        b in 0.0f64..0.2,
    ) {
        let radiator = radiator(length, width, fin_height, pitch);
        let (small, large) = if a <= b { (a, b) } else { (b, a) };

        let after_small = radiator.fin_surface_with_cutouts(Area::new::<square_meter>(small));
        let after_large = radiator.fin_surface_with_cutouts(Area::new::<square_meter>(large));

        prop_assert!(after_large <= after_small);
        prop_assert!(after_large >= Area::default());

        let nominal = radiator.fin_surface();
        prop_assert_eq!(radiator.fin_surface_with_cutouts(nominal), Area::default());
        prop_assert_eq!(
            radiator.fin_surface_with_cutouts(nominal + Area::new::<square_meter>(small)),
            Area::default()
        );
    }

    /// Footprint and half-gap read back exactly.
    #[test]
    fn geometry_reads_back_exactly(
        length in 0.02f64..1.0,
        width in 0.02f64..1.0,
        fin_height in 0.005f64..0.05,
        pitch in 0.003f64..0.02,
    ) {
        let radiator = radiator(length, width, fin_height, pitch);

        prop_assert_eq!(
            radiator.flat_surface().get::<square_meter>(),
            length * width
        );
        prop_assert_eq!(
            radiator.half_gap().value,
            (radiator.fin_pitch().value - radiator.fin_thickness().value) / 2.0
        );
        prop_assert!(radiator.fin_count() >= 1);
    }
}

// ── Spreading ────────────────────────────────────────────────────────

proptest! {
    /// β is a finite positive number across the working domain.
    #[test]
    fn spreading_factor_is_finite_and_positive(
        length in 0.02f64..0.5,
        width in 0.02f64..0.5,
        sources in 1usize..8,
        alpha in 1e-6f64..500.0,
        dks in 1e-3f64..0.1,
    ) {
        let beta = spreading_factor(
            Length::new::<meter>(length),
            Length::new::<meter>(width),
            sources,
            HeatTransfer::new::<watt_per_square_meter_kelvin>(alpha),
            Length::new::<meter>(dks),
        )
        .unwrap();

        prop_assert!(beta.is_finite());
        prop_assert!(beta > 0.0);
    }
}

// ── Component sets ───────────────────────────────────────────────────

proptest! {
    /// The set's load is the sum, and its overheat the minimum, over members.
    #[test]
    fn set_aggregates_members(
        parts in prop::collection::vec(part(), 3..8),
        ambient in 0.0f64..45.0,
        add in any::<bool>(),
    ) {
        let ambient = ThermodynamicTemperature::new::<degree_celsius>(ambient);
        let convention = if add { ContactDrop::Add } else { ContactDrop::Subtract };
        let set: ElementSet = parts.iter().copied().collect();

        let sum: f64 = parts.iter().map(|p| p.power().get::<watt>()).sum();
        prop_assert!((set.total_power().get::<watt>() - sum).abs() < 1e-9 * sum.max(1.0));

        let min = parts
            .iter()
            .map(|p| p.permissible_overheat(ambient, convention).get::<kelvin>())
            .fold(f64::INFINITY, f64::min);
        let governing = set.permissible_overheat(ambient, convention).unwrap();
        prop_assert_eq!(governing.get::<kelvin>(), min);
    }
}

// ── Correlations ─────────────────────────────────────────────────────

proptest! {
    /// The plane-wall correlation stays finite and positive for ΔT > 0, l > 0.
    #[test]
    fn nusselt_free_plane_is_finite(
        ambient in -40.0f64..80.0,
        dt in 1e-3f64..200.0,
        l in 1e-4f64..2.0,
    ) {
        let nu = nusselt_free_plane(
            ThermodynamicTemperature::new::<degree_celsius>(ambient),
            TemperatureInterval::new::<kelvin>(dt),
            Length::new::<meter>(l),
        );

        prop_assert!(nu.is_finite());
        prop_assert!(nu > 0.0);
    }
}

//! Shared fixtures for the core unit tests.

use uom::si::{
    area::square_meter,
    f64::{Area, Length, Power, ThermodynamicTemperature},
    length::meter,
    power::watt,
    temperature_interval::kelvin,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::units::square_meter_kelvin_per_watt;

use super::{
    conditions::{Conditions, Sidedness},
    cutout::Cutout,
    element::{ElectronicElement, ElementSet},
    radiator::{FinnedRadiator, RadiatorProfile},
};

/// A part with the common 7.6e-5 m²·K/W contact resistance.
pub(crate) fn element(power: f64, max_celsius: f64, contact: f64, cutout: u8) -> ElectronicElement {
    ElectronicElement::new(
        Power::new::<watt>(power),
        ThermodynamicTemperature::new::<degree_celsius>(max_celsius),
        Area::new::<square_meter>(contact),
        square_meter_kelvin_per_watt(7.6e-5),
        Cutout::new(cutout).unwrap(),
    )
    .unwrap()
}

/// 12 W over two parts; the 60 °C one governs.
pub(crate) fn two_parts() -> ElementSet {
    [element(5.0, 70.0, 0.013, 6), element(7.0, 60.0, 0.01, 1)]
        .into_iter()
        .collect()
}

/// 100 mm × 92 mm with the default 12.5 mm profile.
pub(crate) fn reference_radiator() -> FinnedRadiator {
    FinnedRadiator::new(
        Length::new::<meter>(0.1),
        Length::new::<meter>(0.092),
        RadiatorProfile::default(),
    )
    .unwrap()
}

/// Conditions at 40 °C with 0.0035 m² of fin cut away.
///
/// `footprint` is the contact area that sets the concentration length.
pub(crate) fn conditions(
    overheat: f64,
    component_count: usize,
    sidedness: Sidedness,
    footprint: f64,
) -> Conditions {
    Conditions {
        ambient: ThermodynamicTemperature::new::<degree_celsius>(40.0),
        overheat: uom::si::f64::TemperatureInterval::new::<kelvin>(overheat),
        component_count,
        excluded_fin_area: Area::new::<square_meter>(0.0035),
        sidedness,
        concentration: Length::new::<meter>((footprint / std::f64::consts::PI).sqrt()),
        required_power: Power::new::<watt>(12.0),
    }
}

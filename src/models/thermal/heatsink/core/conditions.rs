//! Operating conditions shared by every candidate of a sizing run.

use std::f64::consts::PI;

use uom::si::{
    area::square_meter,
    f64::{Area, Length, Power, TemperatureInterval, ThermodynamicTemperature},
    length::meter,
};

use super::{
    config::{Concentration, SizingConfig},
    cutout::CutoutTable,
    element::ElementSet,
};

/// Whether one or both base faces carry fins exposed to the air.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Sidedness {
    /// Finned face plus a flat back face.
    #[default]
    Single,
    /// Both faces finned; the back mirrors the front.
    Double,
}

/// Operating conditions, computed once from the mounted components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conditions {
    /// Cooling air temperature.
    pub ambient: ThermodynamicTemperature,
    /// Governing permissible overheat of the base above ambient.
    pub overheat: TemperatureInterval,
    /// Number of mounted components, spaced evenly along the length.
    pub component_count: usize,
    /// Fin area removed by component cutouts.
    pub excluded_fin_area: Area,
    pub sidedness: Sidedness,
    /// Footprint length `dks = √(A/π)` of the concentrated heat source.
    pub concentration: Length,
    /// Combined heat load of every component.
    pub required_power: Power,
}

impl Conditions {
    /// Derives the conditions for `elements` under `config`.
    ///
    /// Returns `None` if `elements` is empty.
    #[must_use]
    pub fn from_elements(elements: &ElementSet, config: &SizingConfig) -> Option<Self> {
        let overheat = elements.permissible_overheat(config.ambient, config.contact_drop)?;

        let footprint = match config.concentration {
            Concentration::SmallestContact => elements.smallest_contact_area()?,
            Concentration::FixedArea(area) => area,
        };

        let table = CutoutTable::for_pitch(config.profile.fin_pitch);

        Some(Self {
            ambient: config.ambient,
            overheat,
            component_count: elements.len(),
            excluded_fin_area: elements.excluded_fin_area(&table, config.profile.fin_height),
            sidedness: config.sidedness(),
            concentration: footprint_length(footprint),
            required_power: elements.total_power(),
        })
    }
}

/// Radius of a circle with the given area.
fn footprint_length(area: Area) -> Length {
    Length::new::<meter>((area.get::<square_meter>() / PI).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{power::watt, temperature_interval::kelvin};

    use crate::models::thermal::heatsink::core::{
        config::Layout, element::ContactDrop, test_support::two_parts,
    };

    #[test]
    fn derived_from_two_parts() {
        let conditions = Conditions::from_elements(&two_parts(), &SizingConfig::default()).unwrap();

        assert_eq!(conditions.component_count, 2);
        assert_eq!(conditions.sidedness, Sidedness::Single);
        assert_relative_eq!(conditions.overheat.get::<kelvin>(), 19.9468, epsilon = 1e-9);
        assert_relative_eq!(
            conditions.required_power.get::<watt>(),
            12.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            conditions.excluded_fin_area.get::<square_meter>(),
            0.00375,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            conditions.concentration.get::<meter>(),
            0.056_418_958_354_775_63,
            max_relative = 1e-12
        );
    }

    #[test]
    fn config_choices_flow_through() {
        let config = SizingConfig {
            layout: Layout::DoubleSided,
            contact_drop: ContactDrop::Add,
            concentration: Concentration::FixedArea(Area::new::<square_meter>(0.2e-3)),
            ..SizingConfig::default()
        };
        let conditions = Conditions::from_elements(&two_parts(), &config).unwrap();

        assert_eq!(conditions.sidedness, Sidedness::Double);
        assert_relative_eq!(conditions.overheat.get::<kelvin>(), 20.0532, epsilon = 1e-9);
        assert_relative_eq!(
            conditions.concentration.get::<meter>(),
            (0.2e-3 / PI).sqrt(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn empty_set_has_no_conditions() {
        let conditions = Conditions::from_elements(&ElementSet::new(), &SizingConfig::default());
        assert!(conditions.is_none());
    }
}

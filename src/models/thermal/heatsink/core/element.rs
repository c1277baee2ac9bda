//! Mounted electronic components and their aggregate load.

use thiserror::Error;
use uom::si::f64::{Area, Length, Power, TemperatureInterval, ThermodynamicTemperature};

use crate::support::{
    constraint::{ConstraintError, NonNegative, StrictlyPositive},
    units::{SpecificThermalResistance, TemperatureDifference},
};

use super::cutout::{Cutout, CutoutTable};

/// Errors raised for component data that cannot describe a real part.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ElementError {
    #[error("component power is invalid: {0}")]
    Power(#[source] ConstraintError),

    #[error("contact area is invalid: {0}")]
    ContactArea(#[source] ConstraintError),

    #[error("contact resistance is invalid: {0}")]
    ContactResistance(#[source] ConstraintError),

    #[error("{quantity} is not finite")]
    NonFinite { quantity: &'static str },

    #[error("cutout index {index} is out of range 0..={max}", max = Cutout::MAX)]
    CutoutOutOfRange { index: u8 },
}

/// Sign convention for the temperature drop across the contact joint.
///
/// Two variants of the permissible-overheat formula are in circulation:
/// `T_max − T_air − P·R/S` and `T_max − T_air + P·R/S`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContactDrop {
    /// The joint drop eats into the headroom: `T_max − T_air − P·R/S`.
    #[default]
    Subtract,
    /// The joint drop is added back: `T_max − T_air + P·R/S`.
    Add,
}

/// An electronic component mounted on the radiator base.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElectronicElement {
    power: Power,
    max_temperature: ThermodynamicTemperature,
    contact_area: Area,
    contact_resistance: SpecificThermalResistance,
    cutout: Cutout,
}

impl ElectronicElement {
    /// Creates a component.
    ///
    /// # Errors
    ///
    /// Returns an [`ElementError`] if any value is not finite, the power or
    /// contact area is not strictly positive, or the contact resistance is
    /// negative.
    pub fn new(
        power: Power,
        max_temperature: ThermodynamicTemperature,
        contact_area: Area,
        contact_resistance: SpecificThermalResistance,
        cutout: Cutout,
    ) -> Result<Self, ElementError> {
        for (quantity, value) in [
            ("component power", power.value),
            ("maximum temperature", max_temperature.value),
            ("contact area", contact_area.value),
            ("contact resistance", contact_resistance.value),
        ] {
            if !value.is_finite() {
                return Err(ElementError::NonFinite { quantity });
            }
        }

        let power = StrictlyPositive::new(power).map_err(ElementError::Power)?;
        let contact_area =
            StrictlyPositive::new(contact_area).map_err(ElementError::ContactArea)?;
        let contact_resistance = NonNegative::new(contact_resistance)
            .map_err(ElementError::ContactResistance)?;

        Ok(Self {
            power: power.into_inner(),
            max_temperature,
            contact_area: contact_area.into_inner(),
            contact_resistance: contact_resistance.into_inner(),
            cutout,
        })
    }

    #[must_use]
    pub fn power(&self) -> Power {
        self.power
    }

    #[must_use]
    pub fn max_temperature(&self) -> ThermodynamicTemperature {
        self.max_temperature
    }

    #[must_use]
    pub fn contact_area(&self) -> Area {
        self.contact_area
    }

    #[must_use]
    pub fn contact_resistance(&self) -> SpecificThermalResistance {
        self.contact_resistance
    }

    #[must_use]
    pub fn cutout(&self) -> Cutout {
        self.cutout
    }

    /// Temperature drop across the contact joint, `P · R / S`.
    #[must_use]
    pub fn joint_drop(&self) -> TemperatureInterval {
        self.power * self.contact_resistance / self.contact_area
    }

    /// How far the base may rise above `ambient` before this part overheats.
    ///
    /// A negative result is valid: the part cannot be cooled by any radiator
    /// in that ambient.
    #[must_use]
    pub fn permissible_overheat(
        &self,
        ambient: ThermodynamicTemperature,
        convention: ContactDrop,
    ) -> TemperatureInterval {
        let headroom = self.max_temperature.minus(ambient);
        match convention {
            ContactDrop::Subtract => headroom - self.joint_drop(),
            ContactDrop::Add => headroom + self.joint_drop(),
        }
    }

    /// Fin area this part's cutout removes from fins of height `fin_height`.
    #[must_use]
    pub fn excluded_fin_area(&self, table: &CutoutTable, fin_height: Length) -> Area {
        table.excluded_area(self.cutout, fin_height)
    }
}

/// An insertion-ordered collection of mounted components.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementSet {
    elements: Vec<ElectronicElement>,
}

impl ElementSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a component.
    pub fn push(&mut self, element: ElectronicElement) {
        self.elements.push(element);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ElectronicElement> {
        self.elements.iter()
    }

    /// Total heat load of every component.
    #[must_use]
    pub fn total_power(&self) -> Power {
        self.elements.iter().map(ElectronicElement::power).sum()
    }

    /// Governing permissible overheat: the minimum over all components.
    ///
    /// Returns `None` for an empty set.
    #[must_use]
    pub fn permissible_overheat(
        &self,
        ambient: ThermodynamicTemperature,
        convention: ContactDrop,
    ) -> Option<TemperatureInterval> {
        self.elements
            .iter()
            .map(|element| element.permissible_overheat(ambient, convention))
            .reduce(|a, b| if b < a { b } else { a })
    }

    /// Fin area removed by every component's cutout.
    #[must_use]
    pub fn excluded_fin_area(&self, table: &CutoutTable, fin_height: Length) -> Area {
        self.elements
            .iter()
            .map(|element| element.excluded_fin_area(table, fin_height))
            .sum()
    }

    /// Contact area of the component with the smallest footprint.
    #[must_use]
    pub fn smallest_contact_area(&self) -> Option<Area> {
        self.elements
            .iter()
            .map(ElectronicElement::contact_area)
            .reduce(|a, b| if b < a { b } else { a })
    }
}

impl FromIterator<ElectronicElement> for ElementSet {
    fn from_iter<I: IntoIterator<Item = ElectronicElement>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl Extend<ElectronicElement> for ElementSet {
    fn extend<I: IntoIterator<Item = ElectronicElement>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<'a> IntoIterator for &'a ElementSet {
    type Item = &'a ElectronicElement;
    type IntoIter = std::slice::Iter<'a, ElectronicElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

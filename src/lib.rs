//! # Heatsink Sizing
//!
//! Empirical sizing of finned heatsinks for mounted electronic components.
//!
//! Given the components bolted to a radiator (their heat loads, maximum
//! temperatures, contact joints and fin cutouts) and the cooling conditions,
//! this crate estimates how much power a candidate radiator can dissipate and
//! scans a catalog of radiator sizes for the first one that carries the load.
//!
//! The estimate is a lumped, hand-calculation grade model: convection and
//! radiation correlations for the fin channels and flat faces, combined into
//! an effective base heat-transfer coefficient and corrected for heat spreading
//! from concentrated component footprints.
//!
//! ## Crate layout
//!
//! - [`models`]: The heatsink model, its [`twine_core::Model`] adapter, and the
//!   sizing search.
//! - [`support`]: Correlations, numeric constraints and unit extensions used by
//!   the models.
//!
//! ## Example
//!
//! ```
//! use heatsink_sizing::models::thermal::heatsink::{
//!     Cutout, ElectronicElement, ElementSet, SearchOutcome, SizingConfig, size,
//! };
//! use heatsink_sizing::support::units::square_meter_kelvin_per_watt;
//! use uom::si::{
//!     area::square_meter,
//!     f64::{Area, Power, ThermodynamicTemperature},
//!     power::watt,
//!     thermodynamic_temperature::degree_celsius,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut elements = ElementSet::new();
//! elements.push(ElectronicElement::new(
//!     Power::new::<watt>(5.0),
//!     ThermodynamicTemperature::new::<degree_celsius>(70.0),
//!     Area::new::<square_meter>(0.013),
//!     square_meter_kelvin_per_watt(7.6e-5),
//!     Cutout::new(6)?,
//! )?);
//!
//! let report = size(&elements, &SizingConfig::default())?;
//! if let SearchOutcome::Found { radiator, .. } = report.search.outcome {
//!     assert!(radiator.flat_surface().get::<square_meter>() > 0.0);
//! }
//! # Ok(())
//! # }
//! ```

pub mod models;
pub mod support;

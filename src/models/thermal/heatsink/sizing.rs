//! End-to-end sizing: from mounted components to a chosen radiator.

use thiserror::Error;
use uom::si::{
    f64::TemperatureInterval, power::watt, temperature_interval::kelvin,
    thermodynamic_temperature::degree_celsius,
};

use super::{
    ElementSet, Heatsink,
    core::{Conditions, ConfigError, EstimateError, Exhaustion, SearchReport, SizingConfig, search},
};

/// Errors that stop a sizing run before any candidate is evaluated.
///
/// An infeasible load is not one of them; see [`SearchOutcome::Exhausted`](super::SearchOutcome).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SizingError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("no components to cool")]
    NoComponents,
}

/// Conditions of a sizing run and the search they drove.
#[derive(Debug, Clone, PartialEq)]
pub struct SizingReport {
    pub conditions: Conditions,
    pub search: SearchReport<EstimateError>,
}

impl SizingReport {
    #[must_use]
    pub fn is_feasible(&self) -> bool {
        self.search.is_feasible()
    }
}

/// Sizes a radiator for `elements` under `config`.
///
/// Validates the configuration, derives the operating [`Conditions`], and
/// scans the configured catalog for the first radiator that carries the
/// combined load.
///
/// # Errors
///
/// Returns a [`SizingError`] if the configuration is invalid or `elements` is
/// empty.
pub fn size(elements: &ElementSet, config: &SizingConfig) -> Result<SizingReport, SizingError> {
    run(elements, config, search)
}

/// Parallel counterpart of [`size`]; selects the same radiator.
///
/// # Errors
///
/// See [`size`].
#[cfg(feature = "parallel")]
pub fn size_parallel(
    elements: &ElementSet,
    config: &SizingConfig,
) -> Result<SizingReport, SizingError> {
    run(elements, config, super::core::search_parallel)
}

type Scan = fn(
    &Heatsink,
    &[super::CandidateSize],
    &super::RadiatorProfile,
    &super::SizeLimits,
    uom::si::f64::Power,
) -> SearchReport<EstimateError>;

fn run(
    elements: &ElementSet,
    config: &SizingConfig,
    scan: Scan,
) -> Result<SizingReport, SizingError> {
    config.validate()?;

    let conditions =
        Conditions::from_elements(elements, config).ok_or(SizingError::NoComponents)?;

    log::info!(
        "sizing for {} component(s): {:.3} W at {:.1} C ambient, overheat {:.3} K",
        conditions.component_count,
        conditions.required_power.get::<watt>(),
        conditions.ambient.get::<degree_celsius>(),
        conditions.overheat.get::<kelvin>(),
    );

    if !(conditions.overheat > TemperatureInterval::default()) {
        log::warn!(
            "no overheat margin ({:.3} K), no radiator can cool these parts",
            conditions.overheat.get::<kelvin>()
        );
        let search = SearchReport::exhausted(
            Exhaustion::NoOverheatMargin {
                overheat: conditions.overheat,
            },
            conditions.required_power,
        );
        return Ok(SizingReport { conditions, search });
    }

    let heatsink = Heatsink::new(config.convection, conditions);
    let sizes = config.catalog().sizes();
    let search = scan(
        &heatsink,
        &sizes,
        &config.profile,
        &config.limits,
        conditions.required_power,
    );

    Ok(SizingReport { conditions, search })
}

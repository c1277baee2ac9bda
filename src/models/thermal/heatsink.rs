//! Finned heatsink sizing.
//!
//! A finned radiator carries one or more electronic components on its base.
//! This module answers two questions:
//!
//! 1. How much power can a given radiator dissipate under given conditions?
//!    See [`CoolingPower`], implemented for [`FreeConvection`],
//!    [`ForcedConvection`] and the [`Convection`] selector.
//! 2. Which radiator, taken from a [`Catalog`] in order, is the first to carry
//!    the combined component load? See [`search`] and the [`size`] entry point.
//!
//! [`Heatsink`] adapts an estimator plus a fixed [`Conditions`] bundle to
//! [`twine_core::Model`], which is the seam the search loop evaluates through.
//!
//! Reading a sizing run from a semicolon-delimited input deck is handled by
//! [`deck`].

mod core;
pub mod deck;
mod sizing;

pub use self::core::{
    CandidateError, CandidateSize, Catalog, Concentration, Conditions, ConfigError, ContactDrop,
    Convection, CoolingPower, Cutout, CutoutTable, ElectronicElement, ElementError, ElementSet,
    Estimate, EstimateError, Evaluation, Exhaustion, FinnedRadiator, ForcedConvection,
    FreeConvection, Layout, RadiatorError, RadiatorProfile, SearchOutcome, SearchReport, Sidedness,
    SizeLimits, SizingConfig, search, spreading_factor,
};
pub use sizing::{SizingError, SizingReport, size};

#[cfg(feature = "parallel")]
pub use self::core::search_parallel;
#[cfg(feature = "parallel")]
pub use sizing::size_parallel;

use twine_core::Model;
use uom::si::f64::Power;

/// A heatsink under fixed operating conditions, as a [`Model`] of its geometry.
///
/// Calling the model with a [`FinnedRadiator`] returns the power that radiator
/// can dissipate. The estimator defaults to the [`Convection`] selector.
#[derive(Debug, Clone, Copy)]
pub struct Heatsink<E = Convection> {
    estimator: E,
    conditions: Conditions,
}

impl<E: CoolingPower> Heatsink<E> {
    /// Binds an estimator to the conditions of one sizing run.
    pub fn new(estimator: E, conditions: Conditions) -> Self {
        Self {
            estimator,
            conditions,
        }
    }

    /// Returns the conditions every evaluation uses.
    pub fn conditions(&self) -> &Conditions {
        &self.conditions
    }
}

impl<E: CoolingPower> Model for Heatsink<E> {
    type Input = FinnedRadiator;
    type Output = Power;
    type Error = EstimateError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.estimator.estimate_power(input, &self.conditions)
    }
}

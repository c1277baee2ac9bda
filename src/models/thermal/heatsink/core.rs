//! Computational core of the heatsink model.
//!
//! Dependencies run leaf to root:
//!
//! - [`radiator`]: finned radiator geometry and its derived areas.
//! - [`element`] and [`cutout`]: mounted components, their aggregate load and
//!   the fin area their cutouts remove.
//! - [`conditions`]: the operating-condition bundle computed once per run.
//! - [`spreading`]: the base-plate heat-spreading correction.
//! - [`estimate`]: free- and forced-convection power estimators.
//! - [`search`]: first-fit scan over a catalog of radiator sizes.

mod conditions;
mod config;
mod cutout;
mod element;
mod estimate;
mod radiator;
mod search;
mod spreading;

#[cfg(test)]
pub(crate) mod test_support;

pub use conditions::{Conditions, Sidedness};
pub use config::{Concentration, ConfigError, Layout, SizingConfig};
pub use cutout::{Cutout, CutoutTable};
pub use element::{ContactDrop, ElectronicElement, ElementError, ElementSet};
pub use estimate::{
    Convection, CoolingPower, Estimate, EstimateError, ForcedConvection, FreeConvection,
};
pub use radiator::{FinnedRadiator, RadiatorError, RadiatorProfile};
pub use search::{
    CandidateError, CandidateSize, Catalog, Evaluation, Exhaustion, SearchOutcome, SearchReport,
    SizeLimits, search,
};
pub use spreading::spreading_factor;

#[cfg(feature = "parallel")]
pub use search::search_parallel;

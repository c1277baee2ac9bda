//! First-fit scan over an ordered catalog of radiator sizes.
//!
//! The scan visits candidates in catalog order and stops at the first one
//! whose capacity meets the required load. A candidate the model cannot
//! evaluate is disqualified and the scan moves on. The scan ends without a
//! result when a candidate exceeds the size limits or the catalog runs out;
//! both are reported as [`SearchOutcome::Exhausted`], not as errors.

mod catalog;

pub use catalog::Catalog;

use thiserror::Error;
use twine_core::Model;
use uom::si::{
    f64::{Length, Power, TemperatureInterval},
    length::meter,
    power::watt,
};

use super::radiator::{FinnedRadiator, RadiatorError, RadiatorProfile};

/// Footprint of one catalog entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateSize {
    /// Length along the fins.
    pub length: Length,
    /// Width across the fins.
    pub width: Length,
}

/// Largest footprint the caller can accommodate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeLimits {
    pub max_length: Length,
    pub max_width: Length,
}

impl SizeLimits {
    /// Whether `size` fits within both limits.
    #[must_use]
    pub fn admits(&self, size: &CandidateSize) -> bool {
        size.length <= self.max_length && size.width <= self.max_width
    }
}

/// Why a candidate was disqualified.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CandidateError<E: std::error::Error + 'static> {
    #[error("invalid geometry: {0}")]
    Geometry(#[source] RadiatorError),

    #[error("estimate failed: {0}")]
    Estimate(#[source] E),
}

/// One visited candidate and what its evaluation produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation<E: std::error::Error + 'static> {
    pub size: CandidateSize,
    /// Capacity of the candidate, or why it was disqualified.
    pub result: Result<Power, CandidateError<E>>,
}

/// Why a search ended without a radiator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Exhaustion {
    /// The governing part has no headroom above ambient, so nothing was scanned.
    NoOverheatMargin { overheat: TemperatureInterval },
    /// The scan reached a candidate larger than the size limits.
    ExceedsLimits { size: CandidateSize },
    /// Every candidate was visited and none carried the load.
    CatalogExhausted,
}

/// Terminal state of a search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SearchOutcome {
    /// The first candidate, in catalog order, able to carry the load.
    Found {
        radiator: FinnedRadiator,
        capacity: Power,
        /// Position in the catalog.
        index: usize,
    },
    /// No candidate qualified.
    Exhausted { reason: Exhaustion },
}

/// The outcome of a search with every evaluation made along the way.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchReport<E: std::error::Error + 'static> {
    pub outcome: SearchOutcome,
    /// Load the chosen radiator had to meet.
    pub required: Power,
    /// Candidates visited, in catalog order.
    pub evaluated: Vec<Evaluation<E>>,
}

impl<E: std::error::Error + 'static> SearchReport<E> {
    /// Report for a search that never started.
    #[must_use]
    pub fn exhausted(reason: Exhaustion, required: Power) -> Self {
        Self {
            outcome: SearchOutcome::Exhausted { reason },
            required,
            evaluated: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_feasible(&self) -> bool {
        matches!(self.outcome, SearchOutcome::Found { .. })
    }

    /// The chosen radiator, if any.
    #[must_use]
    pub fn radiator(&self) -> Option<&FinnedRadiator> {
        match &self.outcome {
            SearchOutcome::Found { radiator, .. } => Some(radiator),
            SearchOutcome::Exhausted { .. } => None,
        }
    }
}

/// Scans `sizes` in order and returns the first radiator whose capacity under
/// `model` is at least `required`.
///
/// Each size is built with `profile`. Candidates that fail to build or to
/// evaluate are recorded and skipped.
pub fn search<M>(
    model: &M,
    sizes: &[CandidateSize],
    profile: &RadiatorProfile,
    limits: &SizeLimits,
    required: Power,
) -> SearchReport<M::Error>
where
    M: Model<Input = FinnedRadiator, Output = Power>,
{
    let mut evaluated = Vec::new();

    for (index, size) in sizes.iter().enumerate() {
        if !limits.admits(size) {
            log::info!("{} exceeds the size limits, stopping", describe(size));
            return SearchReport {
                outcome: SearchOutcome::Exhausted {
                    reason: Exhaustion::ExceedsLimits { size: *size },
                },
                required,
                evaluated,
            };
        }

        let (evaluation, radiator) = evaluate(model, size, profile);
        evaluated.push(evaluation);

        if let Some(outcome) = qualify(radiator, index, required) {
            return SearchReport {
                outcome,
                required,
                evaluated,
            };
        }
    }

    log::info!(
        "none of {} candidates carries {:.3} W",
        sizes.len(),
        required.get::<watt>()
    );
    SearchReport::exhausted(Exhaustion::CatalogExhausted, required)
        .with_evaluated(evaluated)
}

/// Parallel counterpart of [`search`].
///
/// Every candidate within the limits is evaluated concurrently. The result is
/// the same as the sequential scan: the first adequate candidate in catalog
/// order wins, and the report lists evaluations up to and including it.
#[cfg(feature = "parallel")]
pub fn search_parallel<M>(
    model: &M,
    sizes: &[CandidateSize],
    profile: &RadiatorProfile,
    limits: &SizeLimits,
    required: Power,
) -> SearchReport<M::Error>
where
    M: Model<Input = FinnedRadiator, Output = Power> + Sync,
    M::Error: Send,
{
    use rayon::prelude::*;

    let cutoff = sizes
        .iter()
        .position(|size| !limits.admits(size))
        .unwrap_or(sizes.len());

    let results: Vec<_> = sizes[..cutoff]
        .par_iter()
        .map(|size| evaluate(model, size, profile))
        .collect();

    let mut evaluated = Vec::with_capacity(results.len());
    for (index, (evaluation, radiator)) in results.into_iter().enumerate() {
        evaluated.push(evaluation);
        if let Some(outcome) = qualify(radiator, index, required) {
            return SearchReport {
                outcome,
                required,
                evaluated,
            };
        }
    }

    let reason = match sizes.get(cutoff) {
        Some(size) => Exhaustion::ExceedsLimits { size: *size },
        None => Exhaustion::CatalogExhausted,
    };
    SearchReport::exhausted(reason, required).with_evaluated(evaluated)
}

impl<E: std::error::Error + 'static> SearchReport<E> {
    fn with_evaluated(mut self, evaluated: Vec<Evaluation<E>>) -> Self {
        self.evaluated = evaluated;
        self
    }
}

/// Builds and evaluates one candidate.
///
/// The radiator is returned alongside its capacity only when both succeed.
fn evaluate<M>(
    model: &M,
    size: &CandidateSize,
    profile: &RadiatorProfile,
) -> (Evaluation<M::Error>, Option<(FinnedRadiator, Power)>)
where
    M: Model<Input = FinnedRadiator, Output = Power>,
{
    let radiator = match FinnedRadiator::new(size.length, size.width, *profile) {
        Ok(radiator) => radiator,
        Err(error) => {
            log::warn!("{} disqualified: {error}", describe(size));
            let evaluation = Evaluation {
                size: *size,
                result: Err(CandidateError::Geometry(error)),
            };
            return (evaluation, None);
        }
    };

    match model.call(&radiator) {
        Ok(capacity) => {
            log::debug!("{} carries {:.3} W", describe(size), capacity.get::<watt>());
            let evaluation = Evaluation {
                size: *size,
                result: Ok(capacity),
            };
            (evaluation, Some((radiator, capacity)))
        }
        Err(error) => {
            log::warn!("{} disqualified: {error}", describe(size));
            let evaluation = Evaluation {
                size: *size,
                result: Err(CandidateError::Estimate(error)),
            };
            (evaluation, None)
        }
    }
}

fn qualify(
    evaluated: Option<(FinnedRadiator, Power)>,
    index: usize,
    required: Power,
) -> Option<SearchOutcome> {
    let (radiator, capacity) = evaluated?;
    if capacity < required {
        return None;
    }

    log::info!(
        "selected {} (catalog entry {index}): {:.3} W >= {:.3} W",
        describe(&CandidateSize {
            length: radiator.length(),
            width: radiator.width(),
        }),
        capacity.get::<watt>(),
        required.get::<watt>(),
    );
    Some(SearchOutcome::Found {
        radiator,
        capacity,
        index,
    })
}

fn describe(size: &CandidateSize) -> String {
    format!(
        "{:.3} m x {:.3} m",
        size.length.get::<meter>(),
        size.width.get::<meter>()
    )
}

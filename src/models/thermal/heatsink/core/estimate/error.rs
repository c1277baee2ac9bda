use thiserror::Error;
use uom::si::f64::{Area, HeatTransfer, Length, Power, TemperatureInterval, Velocity};

/// Domain errors of a single cooling-power evaluation.
///
/// During a size search these disqualify one candidate; they are not fatal to
/// the run.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum EstimateError {
    #[error("permissible overheat must be positive, got {overheat:?}")]
    NonPositiveOverheat { overheat: TemperatureInterval },

    #[error("cutouts leave no fin area (excluded {excluded:?})")]
    NoFinArea { excluded: Area },

    #[error("air velocity must be positive, got {velocity:?}")]
    NonPositiveVelocity { velocity: Velocity },

    #[error("required power must be positive, got {power:?}")]
    NonPositiveLoad { power: Power },

    #[error("at least one component is required")]
    NoComponents,

    #[error("concentration length must be positive, got {concentration:?}")]
    NonPositiveConcentration { concentration: Length },

    #[error("effective heat-transfer coefficient must be positive, got {alpha:?}")]
    NonPositiveCoefficient { alpha: HeatTransfer },

    #[error("{quantity} is not finite ({value})")]
    NonFinite { quantity: &'static str, value: f64 },
}

impl EstimateError {
    /// Passes `value` through if it is finite.
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::NonFinite`] naming `quantity` otherwise.
    pub fn check_finite(quantity: &'static str, value: f64) -> Result<f64, Self> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Self::NonFinite { quantity, value })
        }
    }
}

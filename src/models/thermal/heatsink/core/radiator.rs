//! Finned radiator geometry.

use thiserror::Error;
use uom::si::{
    f64::{Area, Length},
    length::{meter, millimeter},
};

use crate::support::constraint::{ConstraintError, NonNegative, StrictlyPositive};

/// Relative size below which remaining fin area is a rounding residue.
const RESIDUE_TOLERANCE: f64 = 1e-9;

/// Errors raised for a radiator geometry that cannot exist.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RadiatorError {
    /// A dimension violated its sign constraint.
    #[error("radiator {dimension} is invalid: {source}")]
    Dimension {
        /// Name of the offending dimension.
        dimension: &'static str,
        /// The violated constraint.
        #[source]
        source: ConstraintError,
    },

    /// Fins would touch or overlap.
    #[error("fin pitch {pitch:?} must exceed fin thickness {fin_thickness:?}")]
    PitchTooSmall {
        /// Center-to-center fin spacing.
        pitch: Length,
        /// Fin thickness.
        fin_thickness: Length,
    },

    /// The base is narrower than a single fin.
    #[error("radiator width {width:?} is narrower than one fin ({fin_thickness:?})")]
    NarrowerThanFin {
        /// Radiator width.
        width: Length,
        /// Fin thickness.
        fin_thickness: Length,
    },
}

/// Fin cross-section shared by every candidate radiator of a sizing run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiatorProfile {
    /// Fin height above the base.
    pub fin_height: Length,
    /// Center-to-center fin spacing.
    pub fin_pitch: Length,
    /// Base plate thickness.
    pub base_thickness: Length,
    /// Fin thickness.
    pub fin_thickness: Length,
}

impl Default for RadiatorProfile {
    fn default() -> Self {
        Self {
            fin_height: Length::new::<millimeter>(12.5),
            fin_pitch: Length::new::<millimeter>(10.0),
            base_thickness: Length::new::<millimeter>(4.0),
            fin_thickness: Length::new::<millimeter>(1.0),
        }
    }
}

impl RadiatorProfile {
    /// Checks that the profile describes buildable fins.
    ///
    /// # Errors
    ///
    /// Returns a [`RadiatorError`] if a dimension has the wrong sign or the
    /// pitch does not leave a gap between fins.
    pub fn validate(&self) -> Result<(), RadiatorError> {
        positive("fin height", self.fin_height)?;
        positive("fin pitch", self.fin_pitch)?;
        positive("fin thickness", self.fin_thickness)?;
        NonNegative::new(self.base_thickness).map_err(|source| {
            RadiatorError::Dimension {
                dimension: "base thickness",
                source,
            }
        })?;

        if self.fin_pitch <= self.fin_thickness {
            return Err(RadiatorError::PitchTooSmall {
                pitch: self.fin_pitch,
                fin_thickness: self.fin_thickness,
            });
        }

        Ok(())
    }
}

/// A plate radiator with straight, parallel fins running along its length.
///
/// All derived quantities are recomputed on demand from the six dimensions.
///
/// ```
/// use heatsink_sizing::models::thermal::heatsink::{FinnedRadiator, RadiatorProfile};
/// use uom::si::{area::square_meter, f64::Length, length::millimeter};
///
/// let radiator = FinnedRadiator::new(
///     Length::new::<millimeter>(35.0),
///     Length::new::<millimeter>(30.0),
///     RadiatorProfile {
///         fin_height: Length::new::<millimeter>(10.0),
///         ..RadiatorProfile::default()
///     },
/// )
/// .unwrap();
///
/// assert_eq!(radiator.fin_count(), 3);
/// assert!((radiator.fin_surface().get::<square_meter>() - 0.0014).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinnedRadiator {
    length: Length,
    width: Length,
    profile: RadiatorProfile,
}

impl FinnedRadiator {
    /// Builds a radiator of the given footprint with the given fin profile.
    ///
    /// # Errors
    ///
    /// Returns a [`RadiatorError`] if a dimension is not positive, the profile
    /// is invalid, or the width cannot hold a single fin.
    pub fn new(
        length: Length,
        width: Length,
        profile: RadiatorProfile,
    ) -> Result<Self, RadiatorError> {
        positive("length", length)?;
        positive("width", width)?;
        profile.validate()?;

        if width < profile.fin_thickness {
            return Err(RadiatorError::NarrowerThanFin {
                width,
                fin_thickness: profile.fin_thickness,
            });
        }

        Ok(Self {
            length,
            width,
            profile,
        })
    }

    /// Length along the fins.
    #[must_use]
    pub fn length(&self) -> Length {
        self.length
    }

    /// Width across the fins.
    #[must_use]
    pub fn width(&self) -> Length {
        self.width
    }

    /// Fin profile.
    #[must_use]
    pub fn profile(&self) -> &RadiatorProfile {
        &self.profile
    }

    #[must_use]
    pub fn fin_height(&self) -> Length {
        self.profile.fin_height
    }

    #[must_use]
    pub fn fin_pitch(&self) -> Length {
        self.profile.fin_pitch
    }

    #[must_use]
    pub fn fin_thickness(&self) -> Length {
        self.profile.fin_thickness
    }

    #[must_use]
    pub fn base_thickness(&self) -> Length {
        self.profile.base_thickness
    }

    /// Number of fins, `⌊(B − δ) / S⌋ + 1`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn fin_count(&self) -> usize {
        let spans = ((self.width - self.profile.fin_thickness).get::<meter>()
            / self.profile.fin_pitch.get::<meter>())
        .floor();
        spans as usize + 1
    }

    /// Flat base area, `L · B`.
    #[must_use]
    pub fn flat_surface(&self) -> Area {
        self.length * self.width
    }

    /// Half the clear gap between neighbouring fins, `(S − δ) / 2`.
    ///
    /// This is the defining size for inter-fin convection.
    #[must_use]
    pub fn half_gap(&self) -> Length {
        (self.profile.fin_pitch - self.profile.fin_thickness) / 2.0
    }

    /// Lateral area of the fin flanks facing a channel, `2 · L · H · (n − 1)`.
    #[must_use]
    pub fn fin_surface(&self) -> Area {
        self.length * self.profile.fin_height * (2.0 * self.channel_count())
    }

    /// Fin flank area left after removing `excluded` for component cutouts.
    ///
    /// Clamped at zero: overlapping cutouts may remove more than there is.
    /// A rounding residue left by cutouts that exactly consume the fins also
    /// counts as zero.
    #[must_use]
    pub fn fin_surface_with_cutouts(&self, excluded: Area) -> Area {
        let nominal = self.fin_surface();
        let remaining = nominal - excluded;
        if remaining.value > nominal.value * RESIDUE_TOLERANCE {
            remaining
        } else {
            Area::default()
        }
    }

    /// Outer area other than the fin flanks.
    ///
    /// Base face, the two outer fin faces, the base edges and the fin tips.
    #[must_use]
    pub fn full_surface(&self) -> Area {
        let RadiatorProfile {
            fin_height,
            base_thickness,
            fin_thickness,
            ..
        } = self.profile;

        self.length * self.width
            + self.length * fin_height * 2.0
            + base_thickness * (self.length + self.width) * 2.0
            + fin_height * fin_thickness * (2.0 * self.fin_count_f64())
    }

    /// Hydraulic diameter of one inter-fin channel, `4 · area / perimeter`.
    #[must_use]
    pub fn hydraulic_diameter(&self) -> Length {
        let half_gap = self.half_gap();
        let fin_height = self.profile.fin_height;

        let area = half_gap * fin_height * 2.0;
        let perimeter = (fin_height + half_gap * 2.0) * 2.0;
        area * 4.0 / perimeter
    }

    #[allow(clippy::cast_precision_loss)]
    fn fin_count_f64(&self) -> f64 {
        self.fin_count() as f64
    }

    fn channel_count(&self) -> f64 {
        self.fin_count_f64() - 1.0
    }
}

fn positive(dimension: &'static str, value: Length) -> Result<(), RadiatorError> {
    StrictlyPositive::new(value)
        .map(|_| ())
        .map_err(|source| RadiatorError::Dimension { dimension, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::area::square_meter;

    fn small() -> FinnedRadiator {
        FinnedRadiator::new(
            Length::new::<meter>(0.035),
            Length::new::<meter>(0.030),
            RadiatorProfile {
                fin_height: Length::new::<meter>(0.01),
                fin_pitch: Length::new::<meter>(0.01),
                base_thickness: Length::new::<meter>(0.004),
                fin_thickness: Length::new::<meter>(0.001),
            },
        )
        .unwrap()
    }

    #[test]
    fn derived_quantities() {
        let radiator = small();

        assert_eq!(radiator.fin_count(), 3);
        assert_relative_eq!(radiator.flat_surface().get::<square_meter>(), 0.00105);
        assert_relative_eq!(radiator.half_gap().get::<meter>(), 0.0045);
        assert_relative_eq!(radiator.fin_surface().get::<square_meter>(), 0.0014);
        assert_relative_eq!(
            radiator.hydraulic_diameter().get::<meter>(),
            0.009_473_684_210_526_315,
            max_relative = 1e-12
        );
        // 0.00105 + 0.0007 + 0.00052 + 0.00006
        assert_relative_eq!(
            radiator.full_surface().get::<square_meter>(),
            0.00233,
            max_relative = 1e-12
        );
    }

    #[test]
    fn flat_surface_and_half_gap_are_exact() {
        let radiator = small();

        assert_eq!(
            radiator.flat_surface().value,
            radiator.length().value * radiator.width().value
        );
        assert_eq!(
            radiator.half_gap().value,
            (radiator.fin_pitch().value - radiator.fin_thickness().value) / 2.0
        );
    }

    #[test]
    fn cutouts_are_clamped_at_zero() {
        let radiator = small();
        let nominal = radiator.fin_surface();

        assert_eq!(
            radiator.fin_surface_with_cutouts(Area::default()),
            nominal
        );
        assert_relative_eq!(
            radiator
                .fin_surface_with_cutouts(Area::new::<square_meter>(0.0004))
                .get::<square_meter>(),
            0.001,
            max_relative = 1e-12
        );
        assert_eq!(radiator.fin_surface_with_cutouts(nominal), Area::default());
        assert_eq!(
            radiator.fin_surface_with_cutouts(Area::new::<square_meter>(1.0)),
            Area::default()
        );

        // 50 mm x 32 mm: four fins, 3.75e-3 m² of flanks, all cut away.
        let cut_through = FinnedRadiator::new(
            Length::new::<meter>(0.05),
            Length::new::<meter>(0.032),
            RadiatorProfile::default(),
        )
        .unwrap();
        assert_eq!(
            cut_through.fin_surface_with_cutouts(Area::new::<square_meter>(0.00375)),
            Area::default()
        );
    }

    #[test]
    fn rejects_impossible_geometry() {
        let profile = RadiatorProfile::default();

        assert!(matches!(
            FinnedRadiator::new(Length::new::<meter>(0.0), Length::new::<meter>(0.05), profile),
            Err(RadiatorError::Dimension {
                dimension: "length",
                ..
            })
        ));
        assert!(matches!(
            FinnedRadiator::new(
                Length::new::<meter>(0.05),
                Length::new::<millimeter>(0.5),
                profile
            ),
            Err(RadiatorError::NarrowerThanFin { .. })
        ));

        let touching = RadiatorProfile {
            fin_pitch: Length::new::<millimeter>(1.0),
            ..profile
        };
        assert!(matches!(
            touching.validate(),
            Err(RadiatorError::PitchTooSmall { .. })
        ));
    }
}

//! Fin cutouts that seat components flush against the base.

use uom::si::{
    f64::{Area, Length},
    length::{meter, millimeter},
};

use super::element::ElementError;

/// Index into a [`CutoutTable`]; `0` means no cutout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cutout(u8);

impl Cutout {
    /// No cutout.
    pub const NONE: Self = Self(0);

    /// Largest valid index.
    pub const MAX: u8 = 6;

    /// Builds a cutout index.
    ///
    /// # Errors
    ///
    /// Returns [`ElementError::CutoutOutOfRange`] if `index` is above [`Cutout::MAX`].
    pub fn new(index: u8) -> Result<Self, ElementError> {
        if index > Self::MAX {
            return Err(ElementError::CutoutOutOfRange { index });
        }
        Ok(Self(index))
    }

    #[must_use]
    pub fn index(self) -> u8 {
        self.0
    }
}

/// Tabulated lengths of fin removed per cutout index, for one fin pitch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CutoutTable {
    /// Short label used in log output.
    pub name: &'static str,
    /// Fin pitch the table was measured for, in meters.
    pub pitch: f64,
    /// Cut length in meters, indexed by [`Cutout::index`].
    pub lengths: [f64; 7],
}

impl CutoutTable {
    /// Cut lengths for a 10 mm fin pitch.
    pub const PITCH_10MM: Self = Self {
        name: "10 mm",
        pitch: 0.010,
        lengths: [0.0, 0.010, 0.030, 0.050, 0.072, 0.105, 0.140],
    };

    /// Cut lengths for a 5 mm fin pitch.
    pub const PITCH_5MM: Self = Self {
        name: "5 mm",
        pitch: 0.005,
        lengths: [0.0, 0.020, 0.045, 0.080, 0.125, 0.180, 0.245],
    };

    const TOLERANCE: f64 = 1e-9;

    /// Selects the table measured for `pitch`.
    ///
    /// Pitches without a table of their own use [`CutoutTable::PITCH_5MM`].
    #[must_use]
    pub fn for_pitch(pitch: Length) -> Self {
        let pitch_m = pitch.get::<meter>();
        if (pitch_m - Self::PITCH_10MM.pitch).abs() < Self::TOLERANCE {
            Self::PITCH_10MM
        } else {
            if (pitch_m - Self::PITCH_5MM.pitch).abs() >= Self::TOLERANCE {
                log::warn!(
                    "no cutout table for {:.3} mm fin pitch, using the {} table",
                    pitch.get::<millimeter>(),
                    Self::PITCH_5MM.name,
                );
            }
            Self::PITCH_5MM
        }
    }

    /// Length of fin removed by `cutout`.
    #[must_use]
    pub fn cut_length(&self, cutout: Cutout) -> Length {
        Length::new::<meter>(self.lengths[usize::from(cutout.index())])
    }

    /// Fin flank area removed by `cutout` on fins of height `fin_height`.
    ///
    /// Both flanks of the channel are cut, so the area is `2 · length · H`.
    #[must_use]
    pub fn excluded_area(&self, cutout: Cutout, fin_height: Length) -> Area {
        self.cut_length(cutout) * fin_height * 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::area::square_meter;

    #[test]
    fn index_bounds() {
        assert_eq!(Cutout::new(0).unwrap(), Cutout::NONE);
        assert_eq!(Cutout::new(6).unwrap().index(), 6);
        assert!(matches!(
            Cutout::new(7),
            Err(ElementError::CutoutOutOfRange { index: 7 })
        ));
    }

    #[test]
    fn table_selection_by_pitch() {
        assert_eq!(
            CutoutTable::for_pitch(Length::new::<millimeter>(10.0)),
            CutoutTable::PITCH_10MM
        );
        assert_eq!(
            CutoutTable::for_pitch(Length::new::<millimeter>(5.0)),
            CutoutTable::PITCH_5MM
        );
        assert_eq!(
            CutoutTable::for_pitch(Length::new::<millimeter>(7.0)),
            CutoutTable::PITCH_5MM
        );
    }

    #[test]
    fn largest_cutout_area() {
        let area = CutoutTable::PITCH_10MM
            .excluded_area(Cutout::new(6).unwrap(), Length::new::<meter>(0.01));
        assert_relative_eq!(area.get::<square_meter>(), 0.0028, epsilon = 1e-6);

        let none = CutoutTable::PITCH_5MM.excluded_area(Cutout::NONE, Length::new::<meter>(0.01));
        assert_eq!(none, Area::default());
    }
}

use uom::si::{f64::Length, length::meter};

use super::CandidateSize;

/// Single-sided standard radiators as (length, width) in meters, catalog order.
const SINGLE_SIDED: [(f64, f64); 14] = [
    (0.036, 0.032),
    (0.036, 0.072),
    (0.050, 0.032),
    (0.050, 0.052),
    (0.050, 0.092),
    (0.080, 0.032),
    (0.080, 0.072),
    (0.080, 0.122),
    (0.100, 0.052),
    (0.100, 0.092),
    (0.100, 0.152),
    (0.125, 0.072),
    (0.125, 0.122),
    (0.125, 0.152),
];

/// Double-sided standard radiators as (length, width) in meters, catalog order.
const DOUBLE_SIDED: [(f64, f64); 10] = [
    (0.050, 0.052),
    (0.050, 0.092),
    (0.080, 0.072),
    (0.080, 0.122),
    (0.100, 0.052),
    (0.100, 0.092),
    (0.100, 0.152),
    (0.125, 0.072),
    (0.125, 0.122),
    (0.125, 0.152),
];

/// An ordered sequence of candidate radiator sizes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Catalog {
    /// Standard single-sided radiators.
    SingleSided,
    /// Standard double-sided radiators.
    DoubleSided,
    /// Widths `i · step` for `i` in `1..⌊max_width/step⌋`, all at `length`.
    Custom {
        length: Length,
        max_width: Length,
        step: Length,
    },
}

impl Catalog {
    /// Candidate sizes in scan order.
    #[must_use]
    pub fn sizes(&self) -> Vec<CandidateSize> {
        match *self {
            Self::SingleSided => from_table(&SINGLE_SIDED),
            Self::DoubleSided => from_table(&DOUBLE_SIDED),
            Self::Custom {
                length,
                max_width,
                step,
            } => custom_grid(length, max_width, step),
        }
    }
}

fn from_table(table: &[(f64, f64)]) -> Vec<CandidateSize> {
    table
        .iter()
        .map(|&(length, width)| CandidateSize {
            length: Length::new::<meter>(length),
            width: Length::new::<meter>(width),
        })
        .collect()
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn custom_grid(length: Length, max_width: Length, step: Length) -> Vec<CandidateSize> {
    let ratio = max_width.get::<meter>() / step.get::<meter>();
    if !(ratio.is_finite() && ratio > 0.0) {
        return Vec::new();
    }

    (1..ratio as usize)
        .map(|i| CandidateSize {
            length,
            width: step * i as f64,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn standard_catalogs_ascend_by_length() {
        for catalog in [Catalog::SingleSided, Catalog::DoubleSided] {
            let sizes = catalog.sizes();
            assert!(sizes.windows(2).all(|w| w[0].length <= w[1].length));
        }
        assert_eq!(Catalog::SingleSided.sizes().len(), 14);
        assert_eq!(Catalog::DoubleSided.sizes().len(), 10);
    }

    #[test]
    fn custom_grid_widths() {
        let sizes = Catalog::Custom {
            length: Length::new::<meter>(0.14),
            max_width: Length::new::<meter>(0.14),
            step: Length::new::<meter>(0.01),
        }
        .sizes();

        assert_eq!(sizes.len(), 13);
        assert_relative_eq!(sizes[0].width.get::<meter>(), 0.01);
        assert_relative_eq!(sizes[12].width.get::<meter>(), 0.13, max_relative = 1e-12);
        assert!(sizes.iter().all(|s| s.length == Length::new::<meter>(0.14)));
    }

    #[test]
    fn degenerate_custom_grid_is_empty() {
        let sizes = Catalog::Custom {
            length: Length::new::<meter>(0.1),
            max_width: Length::new::<meter>(0.1),
            step: Length::default(),
        }
        .sizes();

        assert!(sizes.is_empty());
    }
}

//! Semicolon-delimited input decks.
//!
//! A deck holds one conditions row and any number of component rows:
//!
//! ```text
//! 0;40;0.0125;1.125;1.152;1;0.01
//! 1;5;70;0.013;0.000076;6;
//! 2;7;60;0.01;0.000076;1;
//! ```
//!
//! The conditions row starts with `0` and lists the ambient temperature (°C),
//! fin height (m), maximum length and width (m), the layout flag (`0` custom
//! grid, `1` single-sided, `2` double-sided) and, optionally, the fin pitch
//! (m). A component row starts with its 1-based index and lists power (W),
//! maximum temperature (°C), contact area (m²), contact resistance (m²·K/W)
//! and cutout index. Trailing empty fields are ignored.
//!
//! Numbers may use a decimal comma. Blank rows and rows whose first field is
//! not an index (such as a header) are skipped.

use std::{
    fs,
    path::{Path, PathBuf},
};

use thiserror::Error;
use uom::si::{
    area::square_meter,
    f64::{Area, Length, Power, ThermodynamicTemperature},
    length::meter,
    power::watt,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::units::square_meter_kelvin_per_watt;

use super::{
    ConfigError, Cutout, ElectronicElement, ElementError, ElementSet, Layout, SizingConfig,
};

const DELIMITER: char = ';';

/// Errors raised while reading a deck.
///
/// Line and field numbers are 1-based.
#[derive(Debug, Error)]
pub enum DeckError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}, field {field}: {text:?} is not a finite number")]
    NotANumber {
        line: usize,
        field: usize,
        text: String,
    },

    #[error("line {line}: expected {expected} values, found {found}")]
    FieldCount {
        line: usize,
        expected: &'static str,
        found: usize,
    },

    #[error("line {line}: a second conditions row")]
    DuplicateConditions { line: usize },

    #[error("line {line}: cutout index {value} is not a whole number")]
    Cutout { line: usize, value: f64 },

    #[error("line {line}: {source}")]
    Layout {
        line: usize,
        #[source]
        source: ConfigError,
    },

    #[error("line {line}: {source}")]
    Element {
        line: usize,
        #[source]
        source: ElementError,
    },
}

/// Values of the conditions row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeckConditions {
    pub ambient: ThermodynamicTemperature,
    pub fin_height: Length,
    pub max_length: Length,
    pub max_width: Length,
    pub layout: Layout,
    /// Absent in decks that predate the pitch column.
    pub fin_pitch: Option<Length>,
}

/// A parsed input deck.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Deck {
    conditions: Option<DeckConditions>,
    elements: ElementSet,
}

impl Deck {
    /// Reads and parses the deck at `path`.
    ///
    /// # Errors
    ///
    /// Returns a [`DeckError`] if the file cannot be read or parsed.
    pub fn read(path: impl AsRef<Path>) -> Result<Self, DeckError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| DeckError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Parses deck text.
    ///
    /// # Errors
    ///
    /// Returns a [`DeckError`] identifying the first offending row.
    pub fn parse(text: &str) -> Result<Self, DeckError> {
        let mut deck = Self::default();

        for (index, raw) in text.lines().enumerate() {
            let line = index + 1;
            let fields: Vec<&str> = raw.split(DELIMITER).map(str::trim).collect();
            let fields = trim_trailing_empty(&fields);

            let Some(first) = fields.first() else {
                continue;
            };
            let Ok(row) = first.parse::<u32>() else {
                log::trace!("line {line}: skipped");
                continue;
            };

            let values = numbers(line, &fields[1..])?;
            if row == 0 {
                if deck.conditions.is_some() {
                    return Err(DeckError::DuplicateConditions { line });
                }
                deck.conditions = Some(conditions_row(line, &values)?);
            } else {
                deck.elements.push(element_row(line, &values)?);
            }
        }

        log::debug!(
            "deck: {} component(s), conditions row {}",
            deck.elements.len(),
            if deck.conditions.is_some() { "present" } else { "absent" },
        );
        Ok(deck)
    }

    #[must_use]
    pub fn conditions(&self) -> Option<&DeckConditions> {
        self.conditions.as_ref()
    }

    #[must_use]
    pub fn elements(&self) -> &ElementSet {
        &self.elements
    }

    #[must_use]
    pub fn into_elements(self) -> ElementSet {
        self.elements
    }

    /// Overwrites the options the conditions row sets.
    ///
    /// Options the deck does not carry are left as they are.
    pub fn apply(&self, config: &mut SizingConfig) {
        let Some(conditions) = self.conditions else {
            return;
        };

        config.ambient = conditions.ambient;
        config.profile.fin_height = conditions.fin_height;
        config.limits.max_length = conditions.max_length;
        config.limits.max_width = conditions.max_width;
        config.layout = conditions.layout;
        if let Some(pitch) = conditions.fin_pitch {
            config.profile.fin_pitch = pitch;
        }
    }
}

fn trim_trailing_empty<'a>(fields: &'a [&'a str]) -> &'a [&'a str] {
    let end = fields
        .iter()
        .rposition(|field| !field.is_empty())
        .map_or(0, |last| last + 1);
    &fields[..end]
}

/// Parses every field after the row index; `field` numbers count the index.
fn numbers(line: usize, fields: &[&str]) -> Result<Vec<f64>, DeckError> {
    fields
        .iter()
        .enumerate()
        .map(|(offset, text)| {
            text.replace(',', ".")
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .ok_or_else(|| DeckError::NotANumber {
                    line,
                    field: offset + 2,
                    text: (*text).to_string(),
                })
        })
        .collect()
}

#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
fn conditions_row(line: usize, values: &[f64]) -> Result<DeckConditions, DeckError> {
    let (fixed, pitch) = match values {
        [a, h, l, b, k] => ([*a, *h, *l, *b, *k], None),
        [a, h, l, b, k, s] => ([*a, *h, *l, *b, *k], Some(*s)),
        _ => {
            return Err(DeckError::FieldCount {
                line,
                expected: "5 or 6",
                found: values.len(),
            });
        }
    };
    let [ambient, fin_height, max_length, max_width, flag] = fixed;

    let flag_int = if flag.fract() == 0.0 { flag as i64 } else { -1 };
    let layout = Layout::from_flag(flag_int)
        .map_err(|source| DeckError::Layout { line, source })?;

    Ok(DeckConditions {
        ambient: ThermodynamicTemperature::new::<degree_celsius>(ambient),
        fin_height: Length::new::<meter>(fin_height),
        max_length: Length::new::<meter>(max_length),
        max_width: Length::new::<meter>(max_width),
        layout,
        fin_pitch: pitch.map(Length::new::<meter>),
    })
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn element_row(line: usize, values: &[f64]) -> Result<ElectronicElement, DeckError> {
    let &[power, max_temperature, contact_area, contact_resistance, cutout] = values else {
        return Err(DeckError::FieldCount {
            line,
            expected: "5",
            found: values.len(),
        });
    };

    if cutout.fract() != 0.0 || !(0.0..=f64::from(u8::MAX)).contains(&cutout) {
        return Err(DeckError::Cutout {
            line,
            value: cutout,
        });
    }

    let element = |source| DeckError::Element { line, source };

    ElectronicElement::new(
        Power::new::<watt>(power),
        ThermodynamicTemperature::new::<degree_celsius>(max_temperature),
        Area::new::<square_meter>(contact_area),
        square_meter_kelvin_per_watt(contact_resistance),
        Cutout::new(cutout as u8).map_err(element)?,
    )
    .map_err(element)
}

//! Interactive fallback when no input deck is given.

use std::io::{self, BufRead, Write};

use heatsink_sizing::models::thermal::heatsink::{
    Cutout, ElectronicElement, ElementSet, Layout, SizingConfig,
};
use heatsink_sizing::support::units::square_meter_kelvin_per_watt;
use thiserror::Error;
use uom::si::{
    area::square_meter,
    f64::{Area, Length, Power, ThermodynamicTemperature},
    length::meter,
    power::watt,
    thermodynamic_temperature::degree_celsius,
};

/// Why an answer was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnswerError {
    #[error("a value is required")]
    Missing,
    #[error("{0} is negative")]
    Negative(f64),
    #[error("{0:?} is not a number")]
    NotANumber(String),
}

/// Parses one answer; a blank answer takes `default`.
///
/// Decimal commas are accepted.
pub fn parse_answer(line: &str, default: Option<f64>) -> Result<f64, AnswerError> {
    let line = line.trim();
    if line.is_empty() {
        return default.ok_or(AnswerError::Missing);
    }

    let value = line
        .replace(',', ".")
        .parse::<f64>()
        .map_err(|_| AnswerError::NotANumber(line.to_string()))?;
    if value < 0.0 {
        return Err(AnswerError::Negative(value));
    }
    if !value.is_finite() {
        return Err(AnswerError::NotANumber(line.to_string()));
    }
    Ok(value)
}

/// Asks questions on `output` and reads answers from `input`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Asks until a non-negative number (or a blank, given a default) is entered.
    pub fn real(&mut self, message: &str, default: Option<f64>) -> io::Result<f64> {
        loop {
            match default {
                Some(default) => write!(self.output, "{message} [{default}]: ")?,
                None => write!(self.output, "{message}: ")?,
            }
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed before an answer was given",
                ));
            }

            match parse_answer(&line, default) {
                Ok(value) => return Ok(value),
                Err(error) => writeln!(self.output, "ERROR {error}")?,
            }
        }
    }

    /// Asks for a whole number within `max`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn whole(&mut self, message: &str, default: u8, max: u8) -> io::Result<u8> {
        loop {
            let value = self.real(message, Some(f64::from(default)))?;
            if value.fract() == 0.0 && value <= f64::from(max) {
                return Ok(value as u8);
            }
            writeln!(self.output, "ERROR expected a whole number up to {max}")?;
        }
    }

    /// Asks for the run conditions, updating `config` in place.
    pub fn conditions(&mut self, config: &mut SizingConfig) -> io::Result<()> {
        let ambient = self.real(
            "Ambient temperature, C",
            Some(config.ambient.get::<degree_celsius>()),
        )?;
        config.ambient = ThermodynamicTemperature::new::<degree_celsius>(ambient);

        config.profile.fin_height = self.length("Fin height, m", config.profile.fin_height)?;
        config.profile.fin_pitch = self.length("Fin pitch, m", config.profile.fin_pitch)?;
        config.limits.max_length = self.length("Maximum length, m", config.limits.max_length)?;
        config.limits.max_width = self.length("Maximum width, m", config.limits.max_width)?;

        loop {
            let flag = self.whole(
                "Layout (0 custom grid, 1 single-sided, 2 double-sided)",
                u8::try_from(config.layout.flag()).unwrap_or(1),
                2,
            )?;
            if let Ok(layout) = Layout::from_flag(i64::from(flag)) {
                config.layout = layout;
                return Ok(());
            }
        }
    }

    /// Asks for every component.
    pub fn elements(&mut self) -> io::Result<ElementSet> {
        let mut elements = ElementSet::new();
        let count = self.whole("Number of components", 1, u8::MAX)?;

        for number in 1..=count {
            writeln!(self.output, "Component {number}")?;
            loop {
                let power = self.real("  Power, W", None)?;
                let max_temperature = self.real("  Maximum temperature, C", None)?;
                let contact_area = self.real("  Contact area, m2", None)?;
                let contact_resistance = self.real("  Contact resistance, m2K/W", Some(7.6e-5))?;
                let cutout = self.whole("  Cutout index (0 none)", 0, Cutout::MAX)?;

                let element = Cutout::new(cutout).and_then(|cutout| {
                    ElectronicElement::new(
                        Power::new::<watt>(power),
                        ThermodynamicTemperature::new::<degree_celsius>(max_temperature),
                        Area::new::<square_meter>(contact_area),
                        square_meter_kelvin_per_watt(contact_resistance),
                        cutout,
                    )
                });
                match element {
                    Ok(element) => {
                        elements.push(element);
                        break;
                    }
                    Err(error) => writeln!(self.output, "ERROR {error}")?,
                }
            }
        }

        Ok(elements)
    }

    fn length(&mut self, message: &str, default: Length) -> io::Result<Length> {
        self.real(message, Some(default.get::<meter>()))
            .map(Length::new::<meter>)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Cursor;

    use uom::si::temperature_interval::kelvin;

    use heatsink_sizing::models::thermal::heatsink::ContactDrop;

    #[test]
    fn answers() {
        assert_eq!(parse_answer("12.5\n", None), Ok(12.5));
        assert_eq!(parse_answer(" 0,01 ", None), Ok(0.01));
        assert_eq!(parse_answer("", Some(40.0)), Ok(40.0));
        assert_eq!(parse_answer("  \n", None), Err(AnswerError::Missing));
        assert_eq!(
            parse_answer("-3", Some(1.0)),
            Err(AnswerError::Negative(-3.0))
        );
        assert_eq!(
            parse_answer("abc", Some(1.0)),
            Err(AnswerError::NotANumber("abc".to_string()))
        );
        assert!(parse_answer("inf", None).is_err());
    }

    #[test]
    fn reprompts_until_valid() {
        let input = Cursor::new("x\n-1\n\n");
        let mut output = Vec::new();

        let value = Prompter::new(input, &mut output)
            .real("Velocity, m/s", Some(1.0))
            .unwrap();

        assert_eq!(value, 1.0);
        let shown = String::from_utf8(output).unwrap();
        assert_eq!(shown.matches("ERROR").count(), 2);
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut output = Vec::new();
        let err = Prompter::new(Cursor::new(""), &mut output)
            .real("Power, W", None)
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn full_session() {
        let answers = "\n\n\n\n\n2\n2\n5\n70\n0.013\n\n6\n7\n60\n0.01\n\n9\n1\n";
        let mut output = Vec::new();
        let mut prompter = Prompter::new(Cursor::new(answers), &mut output);

        let mut config = SizingConfig::default();
        prompter.conditions(&mut config).unwrap();
        let elements = prompter.elements().unwrap();

        assert_eq!(config.layout, Layout::DoubleSided);
        assert_eq!(config.limits, SizingConfig::default().limits);
        assert_eq!(elements.len(), 2);
        assert_eq!(
            elements.iter().nth(1).unwrap().cutout(),
            Cutout::new(1).unwrap()
        );
        let overheat = elements
            .permissible_overheat(config.ambient, ContactDrop::Subtract)
            .unwrap();
        assert!((overheat.get::<kelvin>() - 19.9468).abs() < 1e-9);
    }
}

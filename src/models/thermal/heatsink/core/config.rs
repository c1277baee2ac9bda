//! Options of one sizing run.

use thiserror::Error;
use uom::si::{
    f64::{Area, Length, ThermodynamicTemperature, Velocity},
    length::meter,
    thermodynamic_temperature::degree_celsius,
};

use super::{
    conditions::Sidedness,
    element::ContactDrop,
    estimate::Convection,
    radiator::{RadiatorError, RadiatorProfile},
    search::{Catalog, SizeLimits},
};

/// Errors raised by [`SizingConfig::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid fin profile: {0}")]
    Profile(#[from] RadiatorError),

    #[error("size limit {which} must be positive, got {value:?}")]
    NonPositiveLimit { which: &'static str, value: Length },

    #[error("forced-convection velocity must be positive, got {velocity:?}")]
    NonPositiveVelocity { velocity: Velocity },

    #[error("fixed concentration area must be positive, got {area:?}")]
    NonPositiveConcentrationArea { area: Area },

    #[error("ambient temperature {ambient:?} is not finite")]
    NonFiniteAmbient { ambient: ThermodynamicTemperature },

    #[error("unknown layout flag {flag}, expected 0, 1 or 2")]
    UnknownLayout { flag: i64 },
}

/// Which radiators are scanned and how their back face is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Layout {
    /// Custom grid of widths at the maximum length; single-sided physics.
    Custom,
    /// Standard single-sided catalog.
    #[default]
    SingleSided,
    /// Standard double-sided catalog; the back face mirrors the finned face.
    DoubleSided,
}

impl Layout {
    /// Decodes the numeric layout flag used by input decks.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownLayout`] for anything but 0, 1 or 2.
    pub fn from_flag(flag: i64) -> Result<Self, ConfigError> {
        match flag {
            0 => Ok(Self::Custom),
            1 => Ok(Self::SingleSided),
            2 => Ok(Self::DoubleSided),
            _ => Err(ConfigError::UnknownLayout { flag }),
        }
    }

    #[must_use]
    pub fn flag(self) -> i64 {
        match self {
            Self::Custom => 0,
            Self::SingleSided => 1,
            Self::DoubleSided => 2,
        }
    }

    #[must_use]
    pub fn sidedness(self) -> Sidedness {
        match self {
            Self::Custom | Self::SingleSided => Sidedness::Single,
            Self::DoubleSided => Sidedness::Double,
        }
    }
}

/// Source of the footprint length `dks` used by the spreading correction.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Concentration {
    /// The component with the smallest contact area.
    #[default]
    SmallestContact,
    /// A fixed footprint area, regardless of the mounted parts.
    FixedArea(Area),
}

/// Every recognised option of a sizing run.
///
/// Validated once with [`SizingConfig::validate`] and then passed by reference;
/// nothing downstream reads global state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizingConfig {
    /// Cooling air temperature. Default 40 °C.
    pub ambient: ThermodynamicTemperature,
    /// Fin profile shared by every candidate.
    pub profile: RadiatorProfile,
    /// Largest acceptable footprint. Default 1.125 m × 1.152 m.
    pub limits: SizeLimits,
    pub layout: Layout,
    /// Default free convection.
    pub convection: Convection,
    pub contact_drop: ContactDrop,
    pub concentration: Concentration,
}

impl Default for SizingConfig {
    fn default() -> Self {
        Self {
            ambient: ThermodynamicTemperature::new::<degree_celsius>(40.0),
            profile: RadiatorProfile::default(),
            limits: SizeLimits {
                max_length: Length::new::<meter>(1.125),
                max_width: Length::new::<meter>(1.152),
            },
            layout: Layout::default(),
            convection: Convection::default(),
            contact_drop: ContactDrop::default(),
            concentration: Concentration::default(),
        }
    }
}

impl SizingConfig {
    /// Checks every option.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.ambient.value.is_finite() {
            return Err(ConfigError::NonFiniteAmbient {
                ambient: self.ambient,
            });
        }

        self.profile.validate()?;

        for (which, value) in [
            ("max length", self.limits.max_length),
            ("max width", self.limits.max_width),
        ] {
            if !(value > Length::default()) {
                return Err(ConfigError::NonPositiveLimit { which, value });
            }
        }

        if let Convection::Forced(forced) = self.convection
            && !(forced.velocity > Velocity::default())
        {
            return Err(ConfigError::NonPositiveVelocity {
                velocity: forced.velocity,
            });
        }

        if let Concentration::FixedArea(area) = self.concentration
            && !(area > Area::default())
        {
            return Err(ConfigError::NonPositiveConcentrationArea { area });
        }

        Ok(())
    }

    #[must_use]
    pub fn sidedness(&self) -> Sidedness {
        self.layout.sidedness()
    }

    /// The candidate sequence this configuration scans.
    #[must_use]
    pub fn catalog(&self) -> Catalog {
        match self.layout {
            Layout::SingleSided => Catalog::SingleSided,
            Layout::DoubleSided => Catalog::DoubleSided,
            Layout::Custom => Catalog::Custom {
                length: self.limits.max_length,
                max_width: self.limits.max_width,
                step: self.profile.fin_pitch,
            },
        }
    }
}

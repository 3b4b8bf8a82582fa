//! Unit names for distances and frequencies and their SI multipliers.

use std::fmt;
use std::str::FromStr;

use strum::{EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::errors::OpticsError;
use crate::math::Scalar;

/// Distance units accepted by element and horn constructors.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LengthUnit {
    /// Micrometres
    Um,
    /// Millimetres
    #[default]
    Mm,
    /// Centimetres
    Cm,
    /// Decimetres
    Dm,
    /// Metres
    M,
    /// Kilometres
    Km,
}

impl LengthUnit {
    /// Factor converting a value in this unit to metres.
    #[must_use]
    pub const fn multiplier(self) -> Scalar {
        match self {
            Self::Um => 1.0e-6,
            Self::Mm => 1.0e-3,
            Self::Cm => 1.0e-2,
            Self::Dm => 1.0e-1,
            Self::M => 1.0,
            Self::Km => 1.0e3,
        }
    }

    /// Parses a unit name, reporting [`OpticsError::InvalidUnit`] on failure.
    pub fn parse(s: &str) -> Result<Self, OpticsError> {
        Self::from_str(s.trim()).map_err(|_| OpticsError::InvalidUnit {
            unit: s.to_string(),
            kind: "distance",
        })
    }

    /// Converts `value` expressed in this unit to metres.
    #[must_use]
    pub fn to_si(self, value: Scalar) -> Scalar {
        value * self.multiplier()
    }

    /// Converts `meters` to this unit.
    #[must_use]
    pub fn from_si(self, meters: Scalar) -> Scalar {
        meters / self.multiplier()
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label: &'static str = self.into();
        f.write_str(label)
    }
}

/// Frequency units accepted by sweep constructors and queries.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum FrequencyUnit {
    /// Hertz
    Hz,
    /// Kilohertz
    KHz,
    /// Megahertz
    MHz,
    /// Gigahertz
    #[default]
    GHz,
    /// Terahertz
    THz,
}

impl FrequencyUnit {
    /// Factor converting a value in this unit to hertz.
    #[must_use]
    pub const fn multiplier(self) -> Scalar {
        match self {
            Self::Hz => 1.0,
            Self::KHz => 1.0e3,
            Self::MHz => 1.0e6,
            Self::GHz => 1.0e9,
            Self::THz => 1.0e12,
        }
    }

    /// Conventional spelling, e.g. `GHz`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hz => "Hz",
            Self::KHz => "kHz",
            Self::MHz => "MHz",
            Self::GHz => "GHz",
            Self::THz => "THz",
        }
    }

    /// Parses a unit name, reporting [`OpticsError::InvalidUnit`] on failure.
    pub fn parse(s: &str) -> Result<Self, OpticsError> {
        Self::from_str(s.trim()).map_err(|_| OpticsError::InvalidUnit {
            unit: s.to_string(),
            kind: "frequency",
        })
    }

    /// Converts `value` expressed in this unit to hertz.
    #[must_use]
    pub fn to_si(self, value: Scalar) -> Scalar {
        value * self.multiplier()
    }

    /// Converts `hz` to this unit.
    #[must_use]
    pub fn from_si(self, hz: Scalar) -> Scalar {
        hz / self.multiplier()
    }
}

impl fmt::Display for FrequencyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Multiplier converting a distance in `unit` to metres.
pub fn length_multiplier(unit: &str) -> Result<Scalar, OpticsError> {
    LengthUnit::parse(unit).map(LengthUnit::multiplier)
}

/// Multiplier converting a frequency in `unit` to hertz.
pub fn frequency_multiplier(unit: &str) -> Result<Scalar, OpticsError> {
    FrequencyUnit::parse(unit).map(FrequencyUnit::multiplier)
}

/// Every distance unit name this crate understands.
#[must_use]
pub fn length_unit_names() -> Vec<&'static str> {
    LengthUnit::iter().map(Into::into).collect()
}

/// Every frequency unit name this crate understands.
#[must_use]
pub fn frequency_unit_names() -> Vec<&'static str> {
    FrequencyUnit::iter().map(FrequencyUnit::label).collect()
}

//! Concrete density class codes

use ebis_types::Error;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Density class of the concrete mix (wire position 9)
///
/// The standard restricts this field to one of three single-letter codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DensityClass {
    /// Normal-weight concrete
    #[default]
    #[serde(rename = "N")]
    Normal,
    /// Lightweight concrete (hafif)
    #[serde(rename = "H")]
    Light,
    /// Heavyweight concrete (ağır)
    #[serde(rename = "A")]
    Heavy,
}

impl DensityClass {
    /// Single-letter code emitted on the wire
    pub fn code(&self) -> &'static str {
        match self {
            DensityClass::Normal => "N",
            DensityClass::Light => "H",
            DensityClass::Heavy => "A",
        }
    }
}

impl std::fmt::Display for DensityClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for DensityClass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "N" | "n" => Ok(DensityClass::Normal),
            "H" | "h" => Ok(DensityClass::Light),
            "A" | "a" => Ok(DensityClass::Heavy),
            other => Err(Error::InvalidDensityClass(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_codes() {
        assert_eq!("N".parse::<DensityClass>().unwrap(), DensityClass::Normal);
        assert_eq!("h".parse::<DensityClass>().unwrap(), DensityClass::Light);
        assert_eq!("A".parse::<DensityClass>().unwrap(), DensityClass::Heavy);
    }

    #[test]
    fn rejects_unknown_code() {
        assert!("X".parse::<DensityClass>().is_err());
        assert!("".parse::<DensityClass>().is_err());
    }

    #[test]
    fn serializes_as_wire_code() {
        let json = serde_json::to_string(&DensityClass::Heavy).unwrap();
        assert_eq!(json, "\"A\"");
        let back: DensityClass = serde_json::from_str("\"H\"").unwrap();
        assert_eq!(back, DensityClass::Light);
    }
}

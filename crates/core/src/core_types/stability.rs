//! Atmospheric stability and surface roughness categories

use crate::error::SimulationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Pasquill-Gifford atmospheric stability classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StabilityClass {
    /// A: Very unstable (strong solar heating, light winds)
    A,
    /// B: Moderately unstable
    B,
    /// C: Slightly unstable
    C,
    /// D: Neutral (overcast or high winds)
    D,
    /// E: Slightly stable
    E,
    /// F: Very stable (nighttime, light winds)
    F,
}

impl StabilityClass {
    /// All classes from most to least unstable
    pub const ALL: [StabilityClass; 6] = [
        StabilityClass::A,
        StabilityClass::B,
        StabilityClass::C,
        StabilityClass::D,
        StabilityClass::E,
        StabilityClass::F,
    ];

    /// Stable stratification (E, F) switches plume rise to the stable-air formulas
    #[must_use]
    pub fn is_stable(self) -> bool {
        matches!(self, StabilityClass::E | StabilityClass::F)
    }

    /// Single-letter label used by met records and the CLI
    #[must_use]
    pub fn letter(self) -> char {
        match self {
            StabilityClass::A => 'A',
            StabilityClass::B => 'B',
            StabilityClass::C => 'C',
            StabilityClass::D => 'D',
            StabilityClass::E => 'E',
            StabilityClass::F => 'F',
        }
    }
}

impl fmt::Display for StabilityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for StabilityClass {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(StabilityClass::A),
            "B" => Ok(StabilityClass::B),
            "C" => Ok(StabilityClass::C),
            "D" => Ok(StabilityClass::D),
            "E" => Ok(StabilityClass::E),
            "F" => Ok(StabilityClass::F),
            _ => Err(SimulationError::UnknownCategory {
                kind: "stability class",
                value: s.to_string(),
            }),
        }
    }
}

/// Surface roughness regime selecting the wind-profile exponent table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Roughness {
    /// Built-up terrain, stronger shear in unstable air
    #[default]
    Urban,
    /// Open country
    Rural,
}

impl fmt::Display for Roughness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Roughness::Urban => write!(f, "urban"),
            Roughness::Rural => write!(f, "rural"),
        }
    }
}

impl FromStr for Roughness {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "urban" => Ok(Roughness::Urban),
            "rural" => Ok(Roughness::Rural),
            _ => Err(SimulationError::UnknownCategory {
                kind: "roughness",
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_letters_case_insensitive() {
        assert_eq!("d".parse::<StabilityClass>().unwrap(), StabilityClass::D);
        assert_eq!(" F ".parse::<StabilityClass>().unwrap(), StabilityClass::F);
        assert!("G".parse::<StabilityClass>().is_err());
    }

    #[test]
    fn test_letter_round_trip() {
        for class in StabilityClass::ALL {
            let parsed: StabilityClass = class.to_string().parse().unwrap();
            assert_eq!(parsed, class);
        }
    }

    #[test]
    fn test_only_e_and_f_are_stable() {
        let stable: Vec<_> = StabilityClass::ALL
            .into_iter()
            .filter(|c| c.is_stable())
            .collect();
        assert_eq!(stable, vec![StabilityClass::E, StabilityClass::F]);
    }

    #[test]
    fn test_roughness_parse() {
        assert_eq!("Rural".parse::<Roughness>().unwrap(), Roughness::Rural);
        assert!("suburban".parse::<Roughness>().is_err());
    }
}

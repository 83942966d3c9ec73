//! Errors reported for structurally invalid simulation inputs
//!
//! Numerical degeneracies (upwind receptors, zero wind, undefined logarithms)
//! are never errors: they collapse to a zero contribution inside the engine.

use std::fmt;

/// Errors that can occur when setting up or running a dispersion run
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// Grid extent has a non-positive step, inverted bounds or non-finite values
    InvalidGrid {
        /// Which grid (e.g. `"plan"`, `"slice"`)
        name: &'static str,
        /// What is wrong with it
        reason: String,
    },
    /// Concentration field does not have the dimensions of its extent
    FieldMismatch {
        /// Which grid
        name: &'static str,
        /// `(cols, rows)` required by the extent
        expected: (usize, usize),
        /// `(cols, rows)` of the supplied field
        actual: (usize, usize),
    },
    /// No meteorological hours were supplied
    EmptyMet,
    /// A met record carries an unusable averaging weight
    InvalidMetHours {
        /// Position in the met sequence
        index: usize,
        /// Offending weight
        hours: f64,
    },
    /// Unrecognised stability class or roughness label
    UnknownCategory {
        /// Category being parsed
        kind: &'static str,
        /// Input text
        value: String,
    },
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::InvalidGrid { name, reason } => {
                write!(f, "Invalid {name} grid: {reason}")
            }
            SimulationError::FieldMismatch {
                name,
                expected,
                actual,
            } => write!(
                f,
                "{name} field is {}x{} but its grid requires {}x{}",
                actual.0, actual.1, expected.0, expected.1
            ),
            SimulationError::EmptyMet => write!(f, "Met sequence is empty"),
            SimulationError::InvalidMetHours { index, hours } => write!(
                f,
                "Met record {index} has hours = {hours}, must be finite and positive"
            ),
            SimulationError::UnknownCategory { kind, value } => {
                write!(f, "Unknown {kind} '{value}'")
            }
        }
    }
}

impl std::error::Error for SimulationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = SimulationError::FieldMismatch {
            name: "plan",
            expected: (201, 201),
            actual: (10, 10),
        };
        assert_eq!(
            err.to_string(),
            "plan field is 10x10 but its grid requires 201x201"
        );
        assert_eq!(SimulationError::EmptyMet.to_string(), "Met sequence is empty");
    }
}

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculatorError {
    #[error("Unrecognized {kind} '{value}' (expected one of: {expected})")]
    UnrecognizedUnit {
        kind: &'static str,
        value: String,
        expected: String,
    },

    #[error("Number of machines must be at least 1")]
    InvalidMachineCount,

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("{field} must be a number, got '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    /// The inputs were accepted but a derived figure overflowed
    #[error("{figure} is too large to represent for this scenario")]
    Overflow { figure: &'static str },
}

pub type Result<T> = std::result::Result<T, CalculatorError>;

// ============================================================================
// Numeric Errors
// Error types for precision-safe decimal arithmetic
// ============================================================================

use std::fmt;

/// Errors that can occur during decimal arithmetic operations.
///
/// Every variant identifies the precondition that was violated; the
/// arithmetic functions never panic and never return partial results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// A rounding scale below zero was requested
    InvalidScale(i32),
    /// An extremum was requested over an empty list
    EmptyInput,
    /// Attempted division by zero
    DivisionByZero,
    /// Result exceeded the largest representable decimal
    Overflow,
    /// Result fell below the smallest representable decimal
    Underflow,
    /// Input was NaN or infinite
    NonFinite,
    /// Conversion would lose significant digits
    PrecisionLoss,
    /// Value could not be parsed or converted
    InvalidInput,
    /// `RoundingMode::Unnecessary` was used but discarded digits were non-zero
    RoundingNecessary,
}

impl NumericError {
    /// True for the invalid-argument family (bad scale, empty extremum list).
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, NumericError::InvalidScale(_) | NumericError::EmptyInput)
    }
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidScale(scale) => write!(
                f,
                "invalid argument: scale must be a positive integer or zero, got {}",
                scale
            ),
            NumericError::EmptyInput => {
                write!(f, "invalid argument: value list must not be empty")
            },
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded maximum value")
            },
            NumericError::Underflow => {
                write!(f, "arithmetic underflow: result below minimum value")
            },
            NumericError::NonFinite => write!(f, "invalid input: value is NaN or infinite"),
            NumericError::PrecisionLoss => write!(
                f,
                "precision loss: conversion would lose significant digits"
            ),
            NumericError::InvalidInput => write!(f, "invalid input: could not parse value"),
            NumericError::RoundingNecessary => {
                write!(f, "rounding necessary: value has more digits than the scale allows")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

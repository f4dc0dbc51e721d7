//! Unified error hierarchy for fittrack
//!
//! Structured error types for sensor package dispatch and metric
//! calculations. All errors are fatal for the record that produced them;
//! the caller decides whether to abort or skip.

use thiserror::Error;

/// Top-level error type for all fittrack operations
#[derive(Debug, Error)]
pub enum FittrackError {
    /// Sensor package dispatch errors
    #[error("Dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    /// Metric calculation errors
    #[error("Calculation error: {0}")]
    Calculation(#[from] CalculationError),
}

/// Errors raised while mapping a sensor package to a workout
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    /// Type code is not one of the supported workout codes
    #[error("Unknown workout type code: {code}")]
    UnknownWorkoutType { code: String },

    /// Payload length does not match the resolved workout's field count
    #[error("Arity mismatch for {workout_type}: expected {expected} fields, got {actual}")]
    ArityMismatch {
        workout_type: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Errors raised by the derived-metric formulas
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalculationError {
    /// Division by zero, e.g. zero duration or zero height
    #[error("Division by zero in {calculation}")]
    DivisionByZero { calculation: &'static str },
}

/// Result type alias for fittrack operations
pub type Result<T> = std::result::Result<T, FittrackError>;

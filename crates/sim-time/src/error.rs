// crates/sim-time/src/error.rs
// ============================================================================
// Module: Time Error Definitions
// Description: Failure kinds for time arithmetic, parsing, and policy config.
// Purpose: Keep the error surface narrow and matchable for schedulers.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! Sentinel combinations resolve to sentinel values and never fail. The
//! only unconditional arithmetic failure is division by a finite zero;
//! overflow fails only when a policy opts into [`OverflowPolicy::Error`].
//!
//! [`OverflowPolicy::Error`]: crate::arithmetic::OverflowPolicy::Error

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::arithmetic::Operation;
use crate::time::Time;

// ============================================================================
// SECTION: Time Errors
// ============================================================================

/// Errors raised by time construction and arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeError {
    /// Division with a finite zero divisor.
    #[error("division by zero")]
    DivisionByZero,
    /// Finite arithmetic left the finite range.
    #[error("time overflow in {op}")]
    Overflow {
        /// Operation that overflowed.
        op: Operation,
    },
    /// The magnitude is reserved for a sentinel encoding.
    #[error("magnitude {0} is reserved for a sentinel")]
    ReservedMagnitude(i64),
    /// Text could not be parsed as a time value.
    #[error("invalid time literal: {0}")]
    Parse(String),
}

/// Result alias for time operations.
pub type TimeResult<T = Time> = Result<T, TimeError>;

// ============================================================================
// SECTION: Config Errors
// ============================================================================

/// Policy configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

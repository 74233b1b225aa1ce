// crates/sim-time/src/arithmetic.rs
// ============================================================================
// Module: Sentinel Arithmetic
// Description: Propagation rules and degenerate-case policy for time arithmetic.
// Purpose: Give every operator overload a single shared evaluation routine.
// Dependencies: serde::{Deserialize, Serialize}, crate::{error, time}
// ============================================================================

//! ## Overview
//! All four operators funnel through [`ArithmeticPolicy::apply`]. Evaluation
//! happens in two stages: sentinel propagation decides the result outright
//! or classifies the operands as a [`Degenerate`] combination, and the
//! policy then resolves the degenerate case to a value or an error.
//!
//! Propagation order:
//! 1. Any unassigned operand yields unassigned.
//! 2. A promoted `i64` operand holding a raw sentinel magnitude is
//!    [`Degenerate::Overflow`].
//! 3. A finite zero divisor is [`Degenerate::DivisionByZero`].
//! 4. Infinite operands absorb finite ones for `+`, `*`, `inf - x`, and
//!    `inf / x`; the indeterminate pairings are degenerate.
//! 5. Finite operands use checked integer arithmetic; leaving the finite
//!    range is [`Degenerate::Overflow`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::error::TimeError;
use crate::error::TimeResult;
use crate::time::Time;
use crate::time::TimeKind;

// ============================================================================
// SECTION: Operations
// ============================================================================

/// Binary arithmetic operation on time values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Add => "addition",
            Self::Sub => "subtraction",
            Self::Mul => "multiplication",
            Self::Div => "division",
        };
        f.write_str(label)
    }
}

/// Operand pairings whose result is indeterminate and resolved by policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Degenerate {
    /// `inf - inf`
    InfiniteMinusInfinite,
    /// `finite - inf`; there is no negative infinity.
    FiniteMinusInfinite,
    /// `inf * 0` or `0 * inf`
    InfiniteTimesZero,
    /// `finite / inf` or `inf / inf`
    DivisionByInfinite,
    /// Any assigned value divided by a finite zero.
    DivisionByZero,
    /// Finite result outside the finite range.
    Overflow,
}

impl fmt::Display for Degenerate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::InfiniteMinusInfinite => "infinite minus infinite",
            Self::FiniteMinusInfinite => "finite minus infinite",
            Self::InfiniteTimesZero => "infinite times zero",
            Self::DivisionByInfinite => "division by infinite",
            Self::DivisionByZero => "division by zero",
            Self::Overflow => "finite overflow",
        };
        f.write_str(label)
    }
}

// ============================================================================
// SECTION: Policy Model
// ============================================================================

/// Outcome of dividing by a finite zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroDivisionPolicy {
    /// Fail with [`TimeError::DivisionByZero`].
    #[default]
    Error,
    /// Resolve to unassigned.
    Unassigned,
}

/// Outcome of multiplying infinite by a finite zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InfiniteTimesZeroPolicy {
    /// Resolve to unassigned.
    #[default]
    Unassigned,
    /// Resolve to finite zero.
    Zero,
}

/// Outcome of finite arithmetic leaving the finite range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Resolve to unassigned.
    #[default]
    Unassigned,
    /// Fail with [`TimeError::Overflow`].
    Error,
}

/// Resolution table for degenerate arithmetic.
///
/// `inf - inf`, `finite - inf`, and division by infinite always resolve to
/// unassigned; the remaining cases are selectable.
///
/// # Invariants
/// - [`ArithmeticPolicy::STRICT`] equals `ArithmeticPolicy::default()`.
/// - Under `STRICT`, only [`Degenerate::DivisionByZero`] produces an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArithmeticPolicy {
    /// Division by a finite zero.
    #[serde(default)]
    pub zero_division: ZeroDivisionPolicy,
    /// Infinite multiplied by a finite zero.
    #[serde(default)]
    pub infinite_times_zero: InfiniteTimesZeroPolicy,
    /// Finite overflow.
    #[serde(default)]
    pub overflow: OverflowPolicy,
}

impl ArithmeticPolicy {
    /// Policy used by the operator overloads.
    pub const STRICT: Self = Self {
        zero_division: ZeroDivisionPolicy::Error,
        infinite_times_zero: InfiniteTimesZeroPolicy::Unassigned,
        overflow: OverflowPolicy::Unassigned,
    };

    /// Policy used by the `checked_*` methods: strict, but overflow fails.
    pub const CHECKED: Self = Self {
        zero_division: ZeroDivisionPolicy::Error,
        infinite_times_zero: InfiniteTimesZeroPolicy::Unassigned,
        overflow: OverflowPolicy::Error,
    };

    /// Applies `op` to the operands under this policy.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::DivisionByZero`] or [`TimeError::Overflow`] when
    /// the policy selects an error for the degenerate case encountered.
    pub fn apply(&self, op: Operation, lhs: Time, rhs: Time) -> TimeResult {
        self.apply_with_trace(op, lhs, rhs, &mut NoopTrace)
    }

    /// Applies `op` and reports any degenerate combination to `trace`.
    ///
    /// # Errors
    ///
    /// See [`ArithmeticPolicy::apply`].
    pub fn apply_with_trace<T>(
        &self,
        op: Operation,
        lhs: Time,
        rhs: Time,
        trace: &mut T,
    ) -> TimeResult
    where
        T: ArithmeticTrace + ?Sized,
    {
        match propagate(op, lhs, rhs) {
            Outcome::Value(value) => Ok(value),
            Outcome::Degenerate(kind) => {
                trace.on_degenerate(op, lhs, rhs, kind);
                self.resolve(op, kind)
            }
        }
    }

    /// Maps a degenerate combination to its configured result.
    const fn resolve(&self, op: Operation, kind: Degenerate) -> TimeResult {
        match kind {
            Degenerate::DivisionByZero => match self.zero_division {
                ZeroDivisionPolicy::Error => Err(TimeError::DivisionByZero),
                ZeroDivisionPolicy::Unassigned => Ok(Time::unassigned()),
            },
            Degenerate::InfiniteTimesZero => match self.infinite_times_zero {
                InfiniteTimesZeroPolicy::Unassigned => Ok(Time::unassigned()),
                InfiniteTimesZeroPolicy::Zero => Ok(Time::ZERO),
            },
            Degenerate::Overflow => match self.overflow {
                OverflowPolicy::Unassigned => Ok(Time::unassigned()),
                OverflowPolicy::Error => Err(TimeError::Overflow {
                    op,
                }),
            },
            Degenerate::InfiniteMinusInfinite
            | Degenerate::FiniteMinusInfinite
            | Degenerate::DivisionByInfinite => Ok(Time::unassigned()),
        }
    }
}

/// Returns the degenerate classification of `lhs op rhs`, if any.
#[must_use]
pub fn degenerate_kind(op: Operation, lhs: Time, rhs: Time) -> Option<Degenerate> {
    match propagate(op, lhs, rhs) {
        Outcome::Value(_) => None,
        Outcome::Degenerate(kind) => Some(kind),
    }
}

// ============================================================================
// SECTION: Trace Hooks
// ============================================================================

/// Trace hook for degenerate arithmetic.
pub trait ArithmeticTrace {
    /// Called whenever a degenerate combination is resolved.
    fn on_degenerate(&mut self, op: Operation, lhs: Time, rhs: Time, kind: Degenerate);
}

/// No-op trace hook for fast paths
///
/// # Invariants
/// - Zero-sized marker type; carries no state.
#[derive(Debug, Default)]
pub struct NoopTrace;

impl ArithmeticTrace for NoopTrace {
    fn on_degenerate(&mut self, _op: Operation, _lhs: Time, _rhs: Time, _kind: Degenerate) {}
}

// ============================================================================
// SECTION: Propagation
// ============================================================================

/// First-stage result of sentinel propagation.
enum Outcome {
    /// Fully determined result.
    Value(Time),
    /// Indeterminate; the policy decides.
    Degenerate(Degenerate),
}

/// Applies the sentinel propagation rules.
fn propagate(op: Operation, lhs: Time, rhs: Time) -> Outcome {
    match (lhs.kind(), rhs.kind()) {
        (TimeKind::Unassigned, _) | (_, TimeKind::Unassigned) => Outcome::Value(Time::unassigned()),
        _ if out_of_range(lhs) || out_of_range(rhs) => Outcome::Degenerate(Degenerate::Overflow),
        (TimeKind::Finite(lhs), TimeKind::Finite(rhs)) => finite(op, lhs, rhs),
        (TimeKind::Infinite, TimeKind::Infinite) => match op {
            Operation::Add | Operation::Mul => Outcome::Value(Time::inf()),
            Operation::Sub => Outcome::Degenerate(Degenerate::InfiniteMinusInfinite),
            Operation::Div => Outcome::Degenerate(Degenerate::DivisionByInfinite),
        },
        (TimeKind::Infinite, TimeKind::Finite(rhs)) => match op {
            Operation::Mul if rhs == 0 => Outcome::Degenerate(Degenerate::InfiniteTimesZero),
            Operation::Div if rhs == 0 => Outcome::Degenerate(Degenerate::DivisionByZero),
            Operation::Add | Operation::Sub | Operation::Mul | Operation::Div => {
                Outcome::Value(Time::inf())
            }
        },
        (TimeKind::Finite(lhs), TimeKind::Infinite) => match op {
            Operation::Add => Outcome::Value(Time::inf()),
            Operation::Sub => Outcome::Degenerate(Degenerate::FiniteMinusInfinite),
            Operation::Mul if lhs == 0 => Outcome::Degenerate(Degenerate::InfiniteTimesZero),
            Operation::Mul => Outcome::Value(Time::inf()),
            Operation::Div => Outcome::Degenerate(Degenerate::DivisionByInfinite),
        },
    }
}

/// Returns true for a promoted operand that carries a raw sentinel magnitude.
const fn out_of_range(time: Time) -> bool {
    matches!(time.kind(), TimeKind::Finite(Time::INF_RAW | Time::UNASSIGNED_RAW))
}

/// Checked integer arithmetic on two finite magnitudes.
fn finite(op: Operation, lhs: i64, rhs: i64) -> Outcome {
    let raw = match op {
        Operation::Add => lhs.checked_add(rhs),
        Operation::Sub => lhs.checked_sub(rhs),
        Operation::Mul => lhs.checked_mul(rhs),
        Operation::Div => {
            if rhs == 0 {
                return Outcome::Degenerate(Degenerate::DivisionByZero);
            }
            lhs.checked_div(rhs)
        }
    };
    raw.and_then(Time::checked_finite)
        .map_or(Outcome::Degenerate(Degenerate::Overflow), Outcome::Value)
}

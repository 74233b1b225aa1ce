// crates/sim-time/src/ops.rs
// ============================================================================
// Module: Time Operators
// Description: Arithmetic and comparison operator overloads for `Time`.
// Purpose: Promote integer operands and route every operator through one policy.
// Dependencies: crate::{arithmetic, error, time}
// ============================================================================

//! ## Overview
//! `+`, `-`, and `*` evaluate under [`ArithmeticPolicy::STRICT`] and always
//! produce a [`Time`]. `/` returns a [`TimeResult`] because dividing by a
//! finite zero is an error. `i64` operands on either side are promoted to
//! finite values before the shared rules run; convert narrower integers with
//! `.into()` so literals keep a single inference target.
//!
//! An `i64` operand equal to a raw sentinel encoding (`i64::MAX` or
//! `i64::MIN`) is not decoded as a sentinel. It is an out-of-range finite
//! value: arithmetic with it resolves as overflow whatever the other operand
//! is, equality with either sentinel is false, and it orders below infinite.
//!
//! Ordering follows NaN conventions for unassigned: every relational
//! comparison with an unassigned operand is false. Equality is reflexive for
//! both sentinels, so `Time` is `Eq` but `partial_cmp` yields `None` for
//! `unassigned` against itself.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::cmp::Ordering;
use std::iter::Sum;
use std::ops::Add;
use std::ops::Div;
use std::ops::Mul;
use std::ops::Sub;

use crate::arithmetic::ArithmeticPolicy;
use crate::arithmetic::Operation;
use crate::error::TimeResult;
use crate::time::Time;
use crate::time::TimeKind;

// ============================================================================
// SECTION: Checked Arithmetic
// ============================================================================

impl Time {
    /// Adds, failing on finite overflow.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::Overflow`] when the finite sum leaves the finite range.
    ///
    /// [`TimeError::Overflow`]: crate::TimeError::Overflow
    pub fn checked_add(self, rhs: Self) -> TimeResult {
        ArithmeticPolicy::CHECKED.apply(Operation::Add, self, rhs)
    }

    /// Subtracts, failing on finite overflow.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::Overflow`] when the finite difference leaves the finite range.
    ///
    /// [`TimeError::Overflow`]: crate::TimeError::Overflow
    pub fn checked_sub(self, rhs: Self) -> TimeResult {
        ArithmeticPolicy::CHECKED.apply(Operation::Sub, self, rhs)
    }

    /// Multiplies, failing on finite overflow.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::Overflow`] when the finite product leaves the finite range.
    ///
    /// [`TimeError::Overflow`]: crate::TimeError::Overflow
    pub fn checked_mul(self, rhs: Self) -> TimeResult {
        ArithmeticPolicy::CHECKED.apply(Operation::Mul, self, rhs)
    }

    /// Divides, failing on a zero divisor or finite overflow.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::DivisionByZero`] for a finite zero divisor and
    /// [`TimeError::Overflow`] for `MIN_FINITE / -1`.
    ///
    /// [`TimeError::DivisionByZero`]: crate::TimeError::DivisionByZero
    /// [`TimeError::Overflow`]: crate::TimeError::Overflow
    pub fn checked_div(self, rhs: Self) -> TimeResult {
        ArithmeticPolicy::CHECKED.apply(Operation::Div, self, rhs)
    }
}

/// Evaluates an operator that cannot fail under the strict policy.
fn infallible(op: Operation, lhs: Time, rhs: Time) -> Time {
    // STRICT only errors on a zero divisor, which `+ - *` never classify.
    ArithmeticPolicy::STRICT.apply(op, lhs, rhs).unwrap_or_else(|_| Time::unassigned())
}

// ============================================================================
// SECTION: Time op Time
// ============================================================================

impl Add for Time {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        infallible(Operation::Add, self, rhs)
    }
}

impl Sub for Time {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        infallible(Operation::Sub, self, rhs)
    }
}

impl Mul for Time {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        infallible(Operation::Mul, self, rhs)
    }
}

impl Div for Time {
    type Output = TimeResult;

    fn div(self, rhs: Self) -> TimeResult {
        ArithmeticPolicy::STRICT.apply(Operation::Div, self, rhs)
    }
}

impl Sum for Time {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |total, time| total + time)
    }
}

impl<'a> Sum<&'a Time> for Time {
    fn sum<I: Iterator<Item = &'a Time>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// ============================================================================
// SECTION: Ordering
// ============================================================================

impl PartialOrd for Time {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.kind(), other.kind()) {
            (TimeKind::Unassigned, _) | (_, TimeKind::Unassigned) => None,
            (TimeKind::Infinite, TimeKind::Infinite) => Some(Ordering::Equal),
            (TimeKind::Infinite, TimeKind::Finite(_)) => Some(Ordering::Greater),
            (TimeKind::Finite(_), TimeKind::Infinite) => Some(Ordering::Less),
            (TimeKind::Finite(lhs), TimeKind::Finite(rhs)) => Some(lhs.cmp(&rhs)),
        }
    }
}

// ============================================================================
// SECTION: Integer Operands
// ============================================================================

/// Implements mixed `Time`/integer operators by promoting the integer.
macro_rules! integer_operands {
    ($($int:ty),* $(,)?) => {
        $(
            impl Add<$int> for Time {
                type Output = Self;

                fn add(self, rhs: $int) -> Self {
                    self + Time::promote(rhs)
                }
            }

            impl Add<Time> for $int {
                type Output = Time;

                fn add(self, rhs: Time) -> Time {
                    Time::promote(self) + rhs
                }
            }

            impl Sub<$int> for Time {
                type Output = Self;

                fn sub(self, rhs: $int) -> Self {
                    self - Time::promote(rhs)
                }
            }

            impl Sub<Time> for $int {
                type Output = Time;

                fn sub(self, rhs: Time) -> Time {
                    Time::promote(self) - rhs
                }
            }

            impl Mul<$int> for Time {
                type Output = Self;

                fn mul(self, rhs: $int) -> Self {
                    self * Time::promote(rhs)
                }
            }

            impl Mul<Time> for $int {
                type Output = Time;

                fn mul(self, rhs: Time) -> Time {
                    Time::promote(self) * rhs
                }
            }

            impl Div<$int> for Time {
                type Output = TimeResult;

                fn div(self, rhs: $int) -> TimeResult {
                    self / Time::promote(rhs)
                }
            }

            impl Div<Time> for $int {
                type Output = TimeResult;

                fn div(self, rhs: Time) -> TimeResult {
                    Time::promote(self) / rhs
                }
            }

            impl PartialEq<$int> for Time {
                fn eq(&self, other: &$int) -> bool {
                    *self == Time::promote(*other)
                }
            }

            impl PartialEq<Time> for $int {
                fn eq(&self, other: &Time) -> bool {
                    Time::promote(*self) == *other
                }
            }

            impl PartialOrd<$int> for Time {
                fn partial_cmp(&self, other: &$int) -> Option<Ordering> {
                    self.partial_cmp(&Time::promote(*other))
                }
            }

            impl PartialOrd<Time> for $int {
                fn partial_cmp(&self, other: &Time) -> Option<Ordering> {
                    Time::promote(*self).partial_cmp(other)
                }
            }
        )*
    };
}

integer_operands!(i64);

// crates/sim-time/src/time.rs
// ============================================================================
// Module: Sim Time Value
// Description: Discrete time values with infinite and unassigned sentinels.
// Purpose: Provide a comparable, addable time quantity for schedulers.
// Dependencies: crate::error
// ============================================================================

//! ## Overview
//! [`Time`] is a point or duration on an integral time axis that can also
//! carry two out-of-band conditions: infinite ("never within the horizon")
//! and unassigned ("not yet determined"). The condition is a tagged variant,
//! so no finite magnitude can be mistaken for a sentinel.
//!
//! Consumers that need a single integer (sort keys, legacy tables) use the
//! raw encoding: infinite is `i64::MAX`, unassigned is `i64::MIN`, and
//! finite values live strictly between the two.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::TimeError;

// ============================================================================
// SECTION: Time Kind
// ============================================================================

/// The logical variant carried by a [`Time`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeKind {
    /// A determined magnitude.
    Finite(i64),
    /// Unbounded; never occurs within the horizon.
    Infinite,
    /// Not yet determined.
    Unassigned,
}

// ============================================================================
// SECTION: Time Value
// ============================================================================

/// Discrete time value with sentinel conditions.
///
/// # Invariants
/// - A finite magnitude always lies in [`Time::MIN_FINITE`]..=[`Time::MAX_FINITE`].
/// - Values are immutable; every operator returns a new value.
/// - `unassigned == unassigned` and `inf == inf`; the two never equal each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Time(TimeKind);

impl Time {
    /// Raw encoding of the infinite sentinel.
    pub const INF_RAW: i64 = i64::MAX;
    /// Raw encoding of the unassigned sentinel.
    pub const UNASSIGNED_RAW: i64 = i64::MIN;
    /// Smallest finite magnitude.
    pub const MIN_FINITE: i64 = i64::MIN + 1;
    /// Largest finite magnitude.
    pub const MAX_FINITE: i64 = i64::MAX - 1;
    /// Finite zero, also the default value.
    pub const ZERO: Self = Self(TimeKind::Finite(0));

    /// Creates a finite time value.
    ///
    /// The domain is `i32` so a sentinel encoding can never be passed in;
    /// use [`Time::try_from`] for wider magnitudes.
    #[must_use]
    pub fn new(value: i32) -> Self {
        Self(TimeKind::Finite(i64::from(value)))
    }

    /// Returns the canonical infinite sentinel.
    #[must_use]
    pub const fn inf() -> Self {
        Self(TimeKind::Infinite)
    }

    /// Returns the canonical unassigned sentinel.
    #[must_use]
    pub const fn unassigned() -> Self {
        Self(TimeKind::Unassigned)
    }

    /// Decodes the raw integer encoding. Total: every `i64` maps to a value.
    #[must_use]
    pub const fn from_raw(raw: i64) -> Self {
        match raw {
            Self::INF_RAW => Self::inf(),
            Self::UNASSIGNED_RAW => Self::unassigned(),
            value => Self(TimeKind::Finite(value)),
        }
    }

    /// Returns the raw integer encoding.
    #[must_use]
    pub const fn to_raw(self) -> i64 {
        match self.0 {
            TimeKind::Finite(value) => value,
            TimeKind::Infinite => Self::INF_RAW,
            TimeKind::Unassigned => Self::UNASSIGNED_RAW,
        }
    }

    /// Promotes a raw integer operand to a finite value without range checks.
    ///
    /// Only used for mixed integer operands; arithmetic re-checks the range
    /// of every result.
    pub(crate) const fn promote(value: i64) -> Self {
        Self(TimeKind::Finite(value))
    }

    /// Returns a finite value when the magnitude is inside the finite range.
    pub(crate) const fn checked_finite(value: i64) -> Option<Self> {
        match value {
            Self::INF_RAW | Self::UNASSIGNED_RAW => None,
            value => Some(Self(TimeKind::Finite(value))),
        }
    }

    /// Returns true iff this is the infinite sentinel.
    #[must_use]
    pub const fn is_inf(self) -> bool {
        matches!(self.0, TimeKind::Infinite)
    }

    /// Returns true iff this is the unassigned sentinel.
    #[must_use]
    pub const fn is_unassigned(self) -> bool {
        matches!(self.0, TimeKind::Unassigned)
    }

    /// Returns true iff this is a determined magnitude.
    #[must_use]
    pub const fn is_finite(self) -> bool {
        matches!(self.0, TimeKind::Finite(_))
    }

    /// Returns the finite magnitude, if any.
    #[must_use]
    pub const fn value(self) -> Option<i64> {
        match self.0 {
            TimeKind::Finite(value) => Some(value),
            TimeKind::Infinite | TimeKind::Unassigned => None,
        }
    }

    /// Returns the logical variant for exhaustive matching.
    #[must_use]
    pub const fn kind(self) -> TimeKind {
        self.0
    }

    /// Total order for sort keys: finite ascending, then infinite, then
    /// unassigned.
    ///
    /// Unlike `<`/`>`, this never treats unassigned as unordered.
    #[must_use]
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        match (self.0, other.0) {
            (TimeKind::Finite(lhs), TimeKind::Finite(rhs)) => lhs.cmp(&rhs),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    /// Sort rank of the variant.
    const fn rank(self) -> u8 {
        match self.0 {
            TimeKind::Finite(_) => 0,
            TimeKind::Infinite => 1,
            TimeKind::Unassigned => 2,
        }
    }

    /// Returns the later of two values.
    ///
    /// Unassigned propagates; infinite dominates any finite value.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        match (self.0, other.0) {
            (TimeKind::Unassigned, _) | (_, TimeKind::Unassigned) => Self::unassigned(),
            (TimeKind::Infinite, _) | (_, TimeKind::Infinite) => Self::inf(),
            (TimeKind::Finite(lhs), TimeKind::Finite(rhs)) => Self(TimeKind::Finite(lhs.max(rhs))),
        }
    }

    /// Returns the earlier of two values.
    ///
    /// Unassigned propagates; infinite only wins when both are infinite.
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        match (self.0, other.0) {
            (TimeKind::Unassigned, _) | (_, TimeKind::Unassigned) => Self::unassigned(),
            (TimeKind::Infinite, _) => other,
            (_, TimeKind::Infinite) => self,
            (TimeKind::Finite(lhs), TimeKind::Finite(rhs)) => Self(TimeKind::Finite(lhs.min(rhs))),
        }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::ZERO
    }
}

// ============================================================================
// SECTION: Conversions
// ============================================================================

impl From<i32> for Time {
    fn from(value: i32) -> Self {
        Self::new(value)
    }
}

impl TryFrom<i64> for Time {
    type Error = TimeError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::checked_finite(value).ok_or(TimeError::ReservedMagnitude(value))
    }
}

// ============================================================================
// SECTION: Display + Parsing
// ============================================================================

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            TimeKind::Finite(value) => value.fmt(f),
            TimeKind::Infinite => f.write_str("inf"),
            TimeKind::Unassigned => f.write_str("unassigned"),
        }
    }
}

impl FromStr for Time {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("inf") {
            return Ok(Self::inf());
        }
        if trimmed.eq_ignore_ascii_case("unassigned") {
            return Ok(Self::unassigned());
        }
        let value: i64 = trimmed.parse().map_err(|_| TimeError::Parse(trimmed.to_string()))?;
        Self::try_from(value)
    }
}

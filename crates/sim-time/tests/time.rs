// crates/sim-time/tests/time.rs
// ============================================================================
// Module: Time Value Tests
// Description: Construction, predicates, raw encoding, display, and parsing.
// ============================================================================
//! ## Overview
//! Validates how [`Time`] values are created and inspected.

mod support;

use std::collections::HashSet;

use sim_time::Time;
use sim_time::TimeError;
use sim_time::TimeKind;
use support::TestResult;
use support::ensure;

// ============================================================================
// SECTION: Construction
// ============================================================================

#[test]
fn test_default_is_finite_zero() -> TestResult {
    let time = Time::default();
    ensure(time == Time::new(0), "Expected default to equal Time::new(0)")?;
    ensure(time == Time::ZERO, "Expected default to equal Time::ZERO")?;
    ensure(!time.is_inf(), "Expected default not to be infinite")?;
    ensure(!time.is_unassigned(), "Expected default not to be unassigned")?;
    ensure(time.is_finite(), "Expected default to be finite")?;
    Ok(())
}

#[test]
fn test_value_constructor_round_trips() -> TestResult {
    for value in [i32::MIN, -1, 0, 1, 42, i32::MAX] {
        let time = Time::new(value);
        ensure(time.value() == Some(i64::from(value)), format!("Expected {value} to round trip"))?;
        ensure(time == Time::from(value), format!("Expected From<i32> to match new for {value}"))?;
    }
    Ok(())
}

#[test]
fn test_try_from_rejects_reserved_magnitudes() -> TestResult {
    ensure(
        Time::try_from(i64::MAX) == Err(TimeError::ReservedMagnitude(i64::MAX)),
        "Expected i64::MAX to be reserved",
    )?;
    ensure(
        Time::try_from(i64::MIN) == Err(TimeError::ReservedMagnitude(i64::MIN)),
        "Expected i64::MIN to be reserved",
    )?;
    let widest = Time::try_from(Time::MAX_FINITE)?;
    ensure(widest.value() == Some(Time::MAX_FINITE), "Expected MAX_FINITE to be accepted")?;
    let narrowest = Time::try_from(Time::MIN_FINITE)?;
    ensure(narrowest.value() == Some(Time::MIN_FINITE), "Expected MIN_FINITE to be accepted")?;
    Ok(())
}

// ============================================================================
// SECTION: Sentinels + Predicates
// ============================================================================

#[test]
fn test_sentinel_predicates() -> TestResult {
    ensure(Time::inf().is_inf(), "Expected inf() to be infinite")?;
    ensure(!Time::inf().is_unassigned(), "Expected inf() not to be unassigned")?;
    ensure(!Time::inf().is_finite(), "Expected inf() not to be finite")?;
    ensure(Time::unassigned().is_unassigned(), "Expected unassigned() to be unassigned")?;
    ensure(!Time::unassigned().is_inf(), "Expected unassigned() not to be infinite")?;
    ensure(Time::inf().value().is_none(), "Expected inf() to have no magnitude")?;
    ensure(Time::unassigned().value().is_none(), "Expected unassigned() to have no magnitude")?;
    Ok(())
}

#[test]
fn test_sentinel_equality() -> TestResult {
    let (inf, other_inf) = (Time::inf(), Time::inf());
    let (unassigned, other_unassigned) = (Time::unassigned(), Time::unassigned());
    ensure(inf == other_inf, "Expected inf == inf")?;
    ensure(unassigned == other_unassigned, "Expected unassigned == unassigned")?;
    ensure(Time::inf() != Time::unassigned(), "Expected inf != unassigned")?;
    ensure(Time::inf() != Time::ZERO, "Expected inf != 0")?;
    ensure(Time::unassigned() != Time::ZERO, "Expected unassigned != 0")?;
    Ok(())
}

#[test]
fn test_kind_matches_variant() -> TestResult {
    ensure(Time::new(7).kind() == TimeKind::Finite(7), "Expected finite kind")?;
    ensure(Time::inf().kind() == TimeKind::Infinite, "Expected infinite kind")?;
    ensure(Time::unassigned().kind() == TimeKind::Unassigned, "Expected unassigned kind")?;
    Ok(())
}

#[test]
fn test_hash_distinguishes_variants() -> TestResult {
    let set: HashSet<Time> =
        [Time::ZERO, Time::inf(), Time::unassigned(), Time::inf(), Time::unassigned()]
            .into_iter()
            .collect();
    ensure(set.len() == 3, "Expected three distinct hashed values")?;
    Ok(())
}

// ============================================================================
// SECTION: Raw Encoding
// ============================================================================

#[test]
fn test_raw_encoding_uses_range_extremes() -> TestResult {
    ensure(Time::inf().to_raw() == i64::MAX, "Expected infinite to encode as i64::MAX")?;
    ensure(Time::unassigned().to_raw() == i64::MIN, "Expected unassigned to encode as i64::MIN")?;
    ensure(Time::from_raw(i64::MAX).is_inf(), "Expected i64::MAX to decode as infinite")?;
    ensure(Time::from_raw(i64::MIN).is_unassigned(), "Expected i64::MIN to decode as unassigned")?;
    ensure(Time::from_raw(-1) == Time::new(-1), "Expected -1 to decode as finite")?;
    ensure(Time::new(123).to_raw() == 123, "Expected finite raw to be the magnitude")?;
    Ok(())
}

// ============================================================================
// SECTION: Display + Parsing
// ============================================================================

#[test]
fn test_display() -> TestResult {
    ensure(Time::new(-12).to_string() == "-12", "Expected finite display")?;
    ensure(Time::inf().to_string() == "inf", "Expected infinite display")?;
    ensure(Time::unassigned().to_string() == "unassigned", "Expected unassigned display")?;
    Ok(())
}

#[test]
fn test_parse_accepts_display_forms() -> TestResult {
    for time in [Time::new(-12), Time::ZERO, Time::inf(), Time::unassigned()] {
        let parsed: Time = time.to_string().parse()?;
        ensure(parsed == time, format!("Expected {time} to parse back"))?;
    }
    let padded: Time = "  INF ".parse()?;
    ensure(padded.is_inf(), "Expected case-insensitive, trimmed sentinel parsing")?;
    let mixed: Time = "Unassigned".parse()?;
    ensure(mixed.is_unassigned(), "Expected case-insensitive unassigned parsing")?;
    Ok(())
}

#[test]
fn test_parse_rejects_garbage_and_reserved() -> TestResult {
    ensure(
        "soon".parse::<Time>() == Err(TimeError::Parse("soon".to_string())),
        "Expected non-numeric text to fail",
    )?;
    ensure(
        i64::MAX.to_string().parse::<Time>() == Err(TimeError::ReservedMagnitude(i64::MAX)),
        "Expected raw sentinel magnitude to be rejected",
    )?;
    Ok(())
}

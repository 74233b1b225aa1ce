// crates/sim-time/src/lib.rs
// ============================================================================
// Module: Sim Time Root
// Description: Public API surface for sentinel-aware discrete time values.
// Purpose: Wire together the value type, operators, policy, and config.
// Dependencies: crate::{arithmetic, config, error, ops, time}
// ============================================================================

//! ## Overview
//! `sim-time` provides [`Time`], an integral time quantity for schedulers
//! and discrete-event simulations. Besides finite magnitudes it carries an
//! infinite sentinel ("never") and an unassigned sentinel ("not yet
//! determined"), both of which propagate through arithmetic the way
//! floating-point infinity and NaN do.
//!
//! ```
//! use sim_time::Time;
//!
//! let now = Time::new(10);
//! assert_eq!(now + 5, Time::new(15));
//! assert!((Time::inf() + now).is_inf());
//! assert!((Time::unassigned() + now).is_unassigned());
//! assert!(Time::inf() > now);
//! assert!(!(Time::unassigned() < now));
//! ```

// ============================================================================
// SECTION: Core Modules
// ============================================================================

pub mod arithmetic;
pub mod config;
pub mod error;
mod ops;
pub mod time;


// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use arithmetic::ArithmeticPolicy;
pub use arithmetic::ArithmeticTrace;
pub use arithmetic::Degenerate;
pub use arithmetic::InfiniteTimesZeroPolicy;
pub use arithmetic::NoopTrace;
pub use arithmetic::Operation;
pub use arithmetic::OverflowPolicy;
pub use arithmetic::ZeroDivisionPolicy;
pub use arithmetic::degenerate_kind;
pub use config::SimTimeConfig;
pub use error::ConfigError;
pub use error::TimeError;
pub use error::TimeResult;
pub use time::Time;
pub use time::TimeKind;

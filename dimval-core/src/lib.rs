//! Core types for dimensionally-checked physical quantities.
//!
//! `dimval-core` models a value as a number in the *standard unit* of its family plus a display
//! unit:
//!
//! - A *family* (length, force, …) is a zero-sized marker type implementing [`NamedFamily`],
//!   with a fixed [`Dimensions`] vector and a standard unit.
//! - A *unit* is a [`Unit<F>`], a shared [`UnitDescriptor`] carrying the factor and offset to the
//!   standard unit.
//! - A [`Scalar<F, K>`] is one value; the kind `K` is [`Rel`] (a magnitude or difference) or
//!   [`Abs`] (a point on a scale). The compiler rejects `Abs + Abs`.
//! - [`Vector`] and [`Matrix`] hold many values of one unit in dense or sparse [`Storage`].
//! - Multiplying or dividing values of arbitrary families derives the result unit at runtime
//!   through a [`UnitRegistry`], keyed by dimension vector.
//!
//! Most users should depend on `dimval` (the facade crate).
//!
//! # Quick start
//!
//! ```rust
//! use dimval_core::units::length::{Length, KILOMETER};
//! use dimval_core::units::duration::{Duration, MINUTE};
//! use dimval_core::units::speed::{Speed, KILOMETER_PER_HOUR};
//! use dimval_core::Scalar;
//!
//! let d = Scalar::<Length>::new(1.5, &KILOMETER);
//! let t = Scalar::<Duration>::new(2.0, &MINUTE);
//! let v: Scalar<Speed> = d / t;
//! assert!((v.in_units_of(&KILOMETER_PER_HOUR) - 45.0).abs() < 1e-9);
//! assert_eq!(v.unit().abbreviation(), "m/s");
//! ```
//!
//! Derivation through the registry works for any pair of families:
//!
//! ```rust
//! use dimval_core::units::force::{Force, NEWTON};
//! use dimval_core::units::length::{Length, METER};
//! use dimval_core::Scalar;
//!
//! let work = Scalar::<Force>::new(10.0, &NEWTON).times(&Scalar::<Length>::new(2.0, &METER))?;
//! assert_eq!(work.si(), 20.0);
//! assert_eq!(work.unit().name(), "joule");
//! # Ok::<(), dimval_core::Error>(())
//! ```
//!
//! # Errors
//!
//! Fallible operations return [`Result`] with the crate [`Error`]. Scalar operators never fail;
//! NaN and infinities propagate as in IEEE-754. Registry derivation (`times`, `divide_by`) fails
//! only when a dimension exponent leaves the `i8` range.
//!
//! # Logging
//!
//! The crate logs through the `log` facade and never installs a logger.

#![forbid(unsafe_code)]

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

#[macro_use]
mod macros;

mod config;
mod dimension;
mod error;
mod family;
mod kind;
mod matrix;
mod registry;
mod scalar;
mod storage;
mod unit;
mod vector;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use config::{ConfiguredUnit, RegistryConfig};
pub use dimension::{BaseDimension, Dimensions, BASE_COUNT};
pub use error::{Error, Result};
pub use family::{AbsoluteFamily, Family, NamedFamily, Si};
pub use kind::{Abs, Admits, Kind, KindAdd, KindSub, Rel, Tag};
pub use matrix::Matrix;
pub use registry::{Operation, UnitRegistry};
pub use scalar::Scalar;
pub use storage::{Storage, StorageType, PARALLEL_THRESHOLD};
pub use unit::{Origin, Unit, UnitDescriptor};
pub use vector::Vector;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined families
// ─────────────────────────────────────────────────────────────────────────────

/// Predefined families and their named units.
///
/// These live in `dimval-core` so the typed relations between them can be declared without
/// running into Rust's orphan rules.
pub mod units;

#[doc(hidden)]
pub mod __private {
    pub use once_cell::sync::Lazy;
}

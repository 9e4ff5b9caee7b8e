//! Dimensionally-safe physical quantities.
//!
//! `dimval` is the user-facing crate in this workspace. It re-exports the full API from
//! `dimval-core` plus the predefined families (length, duration, temperature, force, …) and their
//! named units.
//!
//! A value is a number stored in the *standard unit* of its family plus a display unit. Values
//! are either *relative* (a magnitude or difference) or *absolute* (a point on a scale), and the
//! kind is part of the type:
//!
//! ```rust
//! use dimval::{AbsoluteTemperature, Scalar, Temperature, DEGREE_CELSIUS, DEGREE_FAHRENHEIT};
//!
//! let morning = AbsoluteTemperature::new(12.0, &DEGREE_CELSIUS);
//! let noon = AbsoluteTemperature::new(71.6, &DEGREE_FAHRENHEIT);
//! let rise: Scalar<Temperature> = noon - morning;
//! assert!((rise.si() - 10.0).abs() < 1e-9);
//! ```
//!
//! Products and quotients of arbitrary families get their unit from the global
//! [`UnitRegistry`]:
//!
//! ```rust
//! use dimval::{Mass, Scalar, Speed, KILOGRAM, METER_PER_SECOND};
//!
//! let m = Scalar::<Mass>::new(2.0, &KILOGRAM);
//! let v = Scalar::<Speed>::new(3.0, &METER_PER_SECOND);
//! let momentum = m.times(&v)?;
//! assert_eq!(momentum.si(), 6.0);
//! assert_eq!(momentum.unit().abbreviation(), "kg.m/s");
//! # Ok::<(), dimval::Error>(())
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use dimval::{Position, METER};
//!
//! let a = Position::new(1.0, &METER);
//! let b = Position::new(2.0, &METER);
//! let _ = a + b; // two absolute positions cannot be added
//! ```
//!
//! ```compile_fail
//! use dimval::{Duration, Length, Scalar, METER, SECOND};
//!
//! let _ = Scalar::<Length>::new(1.0, &METER) + Scalar::<Duration>::new(1.0, &SECOND);
//! ```
//!
//! # Modules
//!
//! Families are grouped under [`units`] and also re-exported at the crate root, e.g.
//! `dimval::length::KILOMETER` or just `dimval::KILOMETER`.
//!
//! # Errors
//!
//! Construction of vectors and matrices, registry configuration and dimension-checked casts
//! return [`Result`]. Scalar arithmetic does not fail; NaN and infinities propagate.
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![forbid(unsafe_code)]

pub use dimval_core::*;

pub use dimval_core::units::acceleration;
pub use dimval_core::units::angle;
pub use dimval_core::units::area;
pub use dimval_core::units::density;
pub use dimval_core::units::dimensionless;
pub use dimval_core::units::duration;
pub use dimval_core::units::energy;
pub use dimval_core::units::force;
pub use dimval_core::units::frequency;
pub use dimval_core::units::length;
pub use dimval_core::units::mass;
pub use dimval_core::units::power;
pub use dimval_core::units::speed;
pub use dimval_core::units::temperature;
pub use dimval_core::units::volume;

pub use dimval_core::units::acceleration::*;
pub use dimval_core::units::angle::*;
pub use dimval_core::units::area::*;
pub use dimval_core::units::density::*;
pub use dimval_core::units::dimensionless::*;
pub use dimval_core::units::duration::*;
pub use dimval_core::units::energy::*;
pub use dimval_core::units::force::*;
pub use dimval_core::units::frequency::*;
pub use dimval_core::units::length::*;
pub use dimval_core::units::mass::*;
pub use dimval_core::units::power::*;
pub use dimval_core::units::speed::*;
pub use dimval_core::units::temperature::*;
pub use dimval_core::units::volume::*;

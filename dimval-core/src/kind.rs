//! Absolute and Relative kinds.
//!
//! Every scalar, vector and matrix carries a kind parameter. [`Rel`] values are magnitudes or
//! differences; [`Abs`] values are points on a scale. The traits in this module decide, at
//! compile time, which combinations of kinds may be added or subtracted and what kind results.
//!
//! | left | op | right | result |
//! |------|----|-------|--------|
//! | Rel  | +  | Rel   | Rel    |
//! | Abs  | +  | Rel   | Abs    |
//! | Rel  | +  | Abs   | Abs    |
//! | Rel  | -  | Rel   | Rel    |
//! | Abs  | -  | Rel   | Abs    |
//! | Abs  | -  | Abs   | Rel    |
//!
//! `Abs + Abs` has no [`KindAdd`] implementation and does not compile.

use crate::family::{AbsoluteFamily, Family};
use crate::unit::UnitDescriptor;
use std::fmt;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Abs {}
    impl Sealed for super::Rel {}
}

/// Runtime mirror of the kind parameter, used for formatting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tag {
    Absolute,
    Relative,
}

impl Tag {
    pub const fn short(self) -> &'static str {
        match self {
            Tag::Absolute => "Abs",
            Tag::Relative => "Rel",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short())
    }
}

/// Sealed trait implemented by [`Abs`] and [`Rel`] only.
pub trait Kind: sealed::Sealed + 'static + Send + Sync {
    const TAG: Tag;

    /// Converts a value expressed in `unit` into the standard unit.
    fn to_si(unit: &UnitDescriptor, value: f64) -> f64;

    /// Converts a standard-unit value into `unit`.
    fn from_si(unit: &UnitDescriptor, si: f64) -> f64;
}

/// A point on a scale. Converted with the full affine map, offset included.
#[derive(Debug)]
pub enum Abs {}

/// A magnitude or difference. Converted with the factor only.
#[derive(Debug)]
pub enum Rel {}

impl Kind for Abs {
    const TAG: Tag = Tag::Absolute;

    #[inline]
    fn to_si(unit: &UnitDescriptor, value: f64) -> f64 {
        unit.to_standard(value)
    }

    #[inline]
    fn from_si(unit: &UnitDescriptor, si: f64) -> f64 {
        unit.from_standard(si)
    }
}

impl Kind for Rel {
    const TAG: Tag = Tag::Relative;

    #[inline]
    fn to_si(unit: &UnitDescriptor, value: f64) -> f64 {
        unit.to_standard_linear(value)
    }

    #[inline]
    fn from_si(unit: &UnitDescriptor, si: f64) -> f64 {
        unit.from_standard_linear(si)
    }
}

/// Implemented by families that allow values of kind `K`.
///
/// Every family admits [`Rel`]; only [`AbsoluteFamily`] types admit [`Abs`], so a type such as
/// `Scalar<Mass, Abs>` is rejected by the compiler.
pub trait Admits<K: Kind>: Family {}

impl<F: Family> Admits<Rel> for F {}
impl<F: AbsoluteFamily> Admits<Abs> for F {}

/// Kind of `Self + R`.
pub trait KindAdd<R: Kind>: Kind {
    type Output: Kind;
}

/// Kind of `Self - R`.
pub trait KindSub<R: Kind>: Kind {
    type Output: Kind;
}

impl KindAdd<Rel> for Rel {
    type Output = Rel;
}
impl KindAdd<Rel> for Abs {
    type Output = Abs;
}
impl KindAdd<Abs> for Rel {
    type Output = Abs;
}

impl KindSub<Rel> for Rel {
    type Output = Rel;
}
impl KindSub<Rel> for Abs {
    type Output = Abs;
}
impl KindSub<Abs> for Abs {
    type Output = Rel;
}

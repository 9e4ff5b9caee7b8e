//! Plane angles.
//!
//! `rad` is a base dimension here, so an angle never collapses into a plain number. A
//! [`Direction`] is a point on the circle; subtracting two directions gives a relative
//! [`Angle`] that can be wrapped into the signed half-open range.

use crate::kind::{Abs, Rel};
use crate::Scalar;
use dimval_derive::Family;
use std::f64::consts::{PI, TAU};

/// Plane angle family. Absolute values are [`Direction`]s.
#[derive(Debug, Family)]
#[family(dimensions = "rad", unit = "radian", symbol = "rad", absolute)]
pub enum Angle {}

/// A heading or bearing.
pub type Direction = Scalar<Angle, Abs>;

define_units! {
    Angle;
    RADIAN = standard;
    DEGREE = ("degree", "°", PI / 180.0);
    ARCMINUTE = ("arcminute", "'", PI / 10_800.0);
    ARCSECOND = ("arcsecond", "\"", PI / 648_000.0);
    GRADIAN = ("gradian", "gon", PI / 200.0);
    REVOLUTION = ("revolution", "rev", TAU);
}

impl Scalar<Angle, Abs> {
    /// Wraps into `[0, 2π)`, keeping the display unit.
    pub fn normalize(&self) -> Self {
        Self::from_parts(self.si().rem_euclid(TAU), self.unit().clone())
    }

    /// Signed smallest separation from `other`, in `(-π, π]`.
    pub fn signed_separation(&self, other: &Self) -> Scalar<Angle, Rel> {
        (self.clone() - other.clone()).wrap_signed()
    }
}

impl Scalar<Angle, Rel> {
    /// Wraps into the signed range `(-π, π]`. The upper bound is inclusive.
    pub fn wrap_signed(&self) -> Self {
        let y = (self.si() + PI).rem_euclid(TAU) - PI;
        let si = if y <= -PI { y + TAU } else { y };
        Self::from_parts(si, self.unit().clone())
    }
}

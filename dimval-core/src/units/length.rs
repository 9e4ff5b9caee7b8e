//! Lengths and positions.
//!
//! Imperial units follow the international definitions (the inch is exactly `0.0254 m`); the
//! astronomical unit is the IAU 2012 value.
//!
//! ```rust
//! use dimval_core::units::length::{Position, KILOMETER, METER};
//!
//! let start = Position::new(1.0, &KILOMETER);
//! let end = Position::new(1_250.0, &METER);
//! assert_eq!((end - start).si(), 250.0);
//! ```

use crate::kind::Abs;
use crate::{Matrix, Scalar, Vector};
use dimval_derive::Family;

/// Length family. Absolute values are [`Position`]s.
#[derive(Debug, Family)]
#[family(dimensions = "m", unit = "meter", symbol = "m", absolute)]
pub enum Length {}

/// A point along an axis.
pub type Position = Scalar<Length, Abs>;
pub type LengthVector = Vector<Length>;
pub type PositionVector = Vector<Length, Abs>;
pub type LengthMatrix = Matrix<Length>;

define_units! {
    Length;
    METER = standard;
    KILOMETER = ("kilometer", "km", 1_000.0);
    CENTIMETER = ("centimeter", "cm", 1e-2);
    MILLIMETER = ("millimeter", "mm", 1e-3);
    MICROMETER = ("micrometer", "μm", 1e-6);
    NANOMETER = ("nanometer", "nm", 1e-9);
    INCH = ("inch", "in", 0.0254);
    FOOT = ("foot", "ft", 0.3048);
    YARD = ("yard", "yd", 0.9144);
    MILE = ("mile", "mi", 1_609.344);
    NAUTICAL_MILE = ("nautical mile", "NM", 1_852.0);
    /// IAU 2012, exact.
    ASTRONOMICAL_UNIT = ("astronomical unit", "AU", 149_597_870_700.0);
}

//! Accelerations.

use dimval_derive::Family;

#[derive(Debug, Family)]
#[family(dimensions = "m/s2", unit = "meter per second squared", symbol = "m/s2")]
pub enum Acceleration {}

define_units! {
    Acceleration;
    METER_PER_SECOND_SQUARED = standard;
    /// Standard gravity, exact by definition.
    STANDARD_GRAVITY = ("standard gravity", "g0", 9.806_65);
    GAL = ("gal", "Gal", 1e-2);
}

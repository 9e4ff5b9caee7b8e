//! Speeds.

use dimval_derive::Family;

#[derive(Debug, Family)]
#[family(dimensions = "m/s", unit = "meter per second", symbol = "m/s")]
pub enum Speed {}

define_units! {
    Speed;
    METER_PER_SECOND = standard;
    KILOMETER_PER_HOUR = ("kilometer per hour", "km/h", 1_000.0 / 3_600.0);
    MILE_PER_HOUR = ("mile per hour", "mph", 1_609.344 / 3_600.0);
    KNOT = ("knot", "kn", 1_852.0 / 3_600.0);
    /// Speed of light in vacuum, exact.
    SPEED_OF_LIGHT = ("speed of light", "c", 299_792_458.0);
}

//! Plain numbers.

use dimval_derive::Family;

/// Ratios and counts: every exponent is zero.
#[derive(Debug, Family)]
#[family(dimensions = "1", unit = "one", symbol = "")]
pub enum Dimensionless {}

define_units! {
    Dimensionless;
    ONE = standard;
    PERCENT = ("percent", "%", 0.01);
    PER_MILLE = ("per mille", "‰", 0.001);
    PARTS_PER_MILLION = ("parts per million", "ppm", 1e-6);
}

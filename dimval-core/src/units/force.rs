//! Forces.

use dimval_derive::Family;

#[derive(Debug, Family)]
#[family(dimensions = "kg.m/s2", unit = "newton", symbol = "N")]
pub enum Force {}

define_units! {
    Force;
    NEWTON = standard;
    KILONEWTON = ("kilonewton", "kN", 1_000.0);
    DYNE = ("dyne", "dyn", 1e-5);
    KILOGRAM_FORCE = ("kilogram-force", "kgf", 9.806_65);
    POUND_FORCE = ("pound-force", "lbf", 4.448_221_615_260_5);
}

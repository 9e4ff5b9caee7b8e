//! Powers.

use dimval_derive::Family;

#[derive(Debug, Family)]
#[family(dimensions = "kg.m2/s3", unit = "watt", symbol = "W")]
pub enum Power {}

define_units! {
    Power;
    WATT = standard;
    MILLIWATT = ("milliwatt", "mW", 1e-3);
    KILOWATT = ("kilowatt", "kW", 1_000.0);
    MEGAWATT = ("megawatt", "MW", 1e6);
    /// Mechanical horsepower.
    HORSEPOWER = ("horsepower", "hp", 745.699_871_582_270_2);
}

//! Mass densities.

use dimval_derive::Family;

#[derive(Debug, Family)]
#[family(dimensions = "kg/m3", unit = "kilogram per cubic meter", symbol = "kg/m3")]
pub enum Density {}

define_units! {
    Density;
    KILOGRAM_PER_CUBIC_METER = standard;
    GRAM_PER_CUBIC_CENTIMETER = ("gram per cubic centimeter", "g/cm3", 1_000.0);
    GRAM_PER_LITER = ("gram per liter", "g/L", 1.0);
}

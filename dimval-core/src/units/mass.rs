//! Masses. Mass has no absolute variant.

use dimval_derive::Family;

#[derive(Debug, Family)]
#[family(dimensions = "kg", unit = "kilogram", symbol = "kg")]
pub enum Mass {}

define_units! {
    Mass;
    KILOGRAM = standard;
    GRAM = ("gram", "g", 1e-3);
    MILLIGRAM = ("milligram", "mg", 1e-6);
    TONNE = ("tonne", "t", 1_000.0);
    POUND = ("pound", "lb", 0.453_592_37);
    OUNCE = ("ounce", "oz", 0.028_349_523_125);
}

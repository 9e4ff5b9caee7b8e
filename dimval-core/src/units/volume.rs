//! Volumes.

use dimval_derive::Family;

#[derive(Debug, Family)]
#[family(dimensions = "m3", unit = "cubic meter", symbol = "m3")]
pub enum Volume {}

define_units! {
    Volume;
    CUBIC_METER = standard;
    LITER = ("liter", "L", 1e-3);
    MILLILITER = ("milliliter", "mL", 1e-6);
    CUBIC_CENTIMETER = ("cubic centimeter", "cm3", 1e-6);
    /// US liquid gallon.
    GALLON = ("gallon", "gal", 3.785_411_784e-3);
}

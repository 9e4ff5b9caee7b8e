//! Areas.

use dimval_derive::Family;

#[derive(Debug, Family)]
#[family(dimensions = "m2", unit = "square meter", symbol = "m2")]
pub enum Area {}

define_units! {
    Area;
    SQUARE_METER = standard;
    SQUARE_CENTIMETER = ("square centimeter", "cm2", 1e-4);
    SQUARE_KILOMETER = ("square kilometer", "km2", 1e6);
    HECTARE = ("hectare", "ha", 1e4);
    ACRE = ("acre", "ac", 4_046.856_422_4);
}

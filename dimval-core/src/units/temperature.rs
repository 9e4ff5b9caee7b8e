//! Temperatures.
//!
//! The Celsius and Fahrenheit units carry an offset. It only applies to
//! [`AbsoluteTemperature`]; a relative temperature in °C is a difference and converts with the
//! factor alone.

use crate::kind::Abs;
use crate::Scalar;
use dimval_derive::Family;

#[derive(Debug, Family)]
#[family(dimensions = "K", unit = "kelvin", symbol = "K", absolute)]
pub enum Temperature {}

/// A thermodynamic temperature reading.
pub type AbsoluteTemperature = Scalar<Temperature, Abs>;

define_units! {
    Temperature;
    KELVIN = standard;
    DEGREE_CELSIUS = ("degree Celsius", "°C", 1.0, 273.15);
    DEGREE_FAHRENHEIT = ("degree Fahrenheit", "°F", 5.0 / 9.0, 459.67 * 5.0 / 9.0);
    DEGREE_RANKINE = ("degree Rankine", "°R", 5.0 / 9.0);
}

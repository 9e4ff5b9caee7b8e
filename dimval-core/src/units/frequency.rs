//! Frequencies.
//!
//! Hertz is `1/s`. Angular velocity would be `rad/s` and is a different family here.

use dimval_derive::Family;

#[derive(Debug, Family)]
#[family(dimensions = "1/s", unit = "hertz", symbol = "Hz")]
pub enum Frequency {}

define_units! {
    Frequency;
    HERTZ = standard;
    KILOHERTZ = ("kilohertz", "kHz", 1e3);
    MEGAHERTZ = ("megahertz", "MHz", 1e6);
    GIGAHERTZ = ("gigahertz", "GHz", 1e9);
    PER_MINUTE = ("per minute", "1/min", 1.0 / 60.0);
}

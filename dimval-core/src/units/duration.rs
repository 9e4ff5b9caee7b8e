//! Durations and instants.

use crate::kind::Abs;
use crate::Scalar;
use dimval_derive::Family;

/// Time family. Absolute values are instants ([`Time`]).
#[derive(Debug, Family)]
#[family(dimensions = "s", unit = "second", symbol = "s", absolute)]
pub enum Duration {}

/// An instant on some time scale.
pub type Time = Scalar<Duration, Abs>;

define_units! {
    Duration;
    SECOND = standard;
    NANOSECOND = ("nanosecond", "ns", 1e-9);
    MICROSECOND = ("microsecond", "μs", 1e-6);
    MILLISECOND = ("millisecond", "ms", 1e-3);
    MINUTE = ("minute", "min", 60.0);
    HOUR = ("hour", "h", 3_600.0);
    DAY = ("day", "d", 86_400.0);
    WEEK = ("week", "wk", 604_800.0);
    /// 365.25 days.
    JULIAN_YEAR = ("julian year", "a", 31_557_600.0);
}

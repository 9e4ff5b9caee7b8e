//! Quantity families.
//!
//! A *family* groups every unit that measures the same kind of thing (lengths, masses, …) around
//! one standard unit. Families are zero-sized marker types, usually declared with
//! `#[derive(Family)]`:
//!
//! ```rust,ignore
//! #[derive(Debug, Family)]
//! #[family(name = "Length", dimensions = "m", unit = "meter", symbol = "m", absolute)]
//! pub enum Length {}
//! ```

use crate::dimension::Dimensions;
use crate::unit::Unit;

/// Marker trait implemented by every family type, including the open-ended [`Si`] family.
pub trait Family: 'static + Send + Sync {
    /// Human-readable family name, stored in every descriptor of the family.
    const NAME: &'static str;
}

/// A family with a fixed dimension vector and a statically known standard unit.
pub trait NamedFamily: Family + Sized {
    /// Base-dimension exponents shared by every unit of the family.
    const DIMENSIONS: Dimensions;

    /// The standard unit (factor 1, offset 0). Every call returns a handle to the same
    /// descriptor.
    fn standard_unit() -> Unit<Self>;
}

/// A family whose values may also be Absolute (positions, instants, absolute temperatures).
pub trait AbsoluteFamily: NamedFamily {}

/// Family of units produced by derivation, covering whatever dimension vector the registry
/// returns. Convert into a named family with [`Scalar::cast`](crate::Scalar::cast).
#[derive(Debug)]
pub enum Si {}

impl Family for Si {
    const NAME: &'static str = "SI";
}

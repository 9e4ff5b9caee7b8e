//! Scalar quantities.

use crate::dimension::Dimensions;
use crate::error::{Error, Result};
use crate::family::{AbsoluteFamily, Family, NamedFamily, Si};
use crate::kind::{Abs, Admits, Kind, KindAdd, KindSub, Rel, Tag};
use crate::registry::{Operation, UnitRegistry};
use crate::unit::Unit;
use crate::units::dimensionless::Dimensionless;
use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::marker::PhantomData;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A single value of family `F` and kind `K`.
///
/// Only the standard-unit value (`si`) is stored. The unit given at construction is kept as the
/// display unit, so `in_unit()` and `Display` report the value the caller put in.
///
/// ```rust
/// use dimval_core::units::length::{Position, MILLIMETER, METER};
/// use dimval_core::Scalar;
///
/// let a = Position::new(5.0, &METER);
/// let b = Position::new(2_000.0, &MILLIMETER);
/// let gap = a - b.clone();
/// assert_eq!(gap.si(), 3.0);
/// assert_eq!((gap + b).si(), 5.0);
/// ```
pub struct Scalar<F, K = Rel>
where
    F: Admits<K>,
    K: Kind,
{
    si: f64,
    unit: Unit<F>,
    kind: PhantomData<K>,
}

impl<F, K> Scalar<F, K>
where
    F: Admits<K>,
    K: Kind,
{
    /// A value expressed in `unit`.
    #[inline]
    pub fn new(value: f64, unit: &Unit<F>) -> Self {
        Self::from_parts(K::to_si(unit, value), unit.clone())
    }

    #[inline]
    pub(crate) fn from_parts(si: f64, unit: Unit<F>) -> Self {
        Self {
            si,
            unit,
            kind: PhantomData,
        }
    }

    /// Same value, displayed in another unit of the family.
    pub fn with_unit(&self, unit: &Unit<F>) -> Self {
        Self::from_parts(self.si, unit.clone())
    }

    /// Value in the standard unit of the family.
    #[inline]
    pub fn si(&self) -> f64 {
        self.si
    }

    /// Value in the display unit.
    #[inline]
    pub fn in_unit(&self) -> f64 {
        K::from_si(&self.unit, self.si)
    }

    /// Value in `unit`.
    #[inline]
    pub fn in_units_of(&self, unit: &Unit<F>) -> f64 {
        K::from_si(unit, self.si)
    }

    pub fn unit(&self) -> &Unit<F> {
        &self.unit
    }

    pub fn tag(&self) -> Tag {
        K::TAG
    }

    pub fn is_nan(&self) -> bool {
        self.si.is_nan()
    }

    fn map_display(&self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.in_unit()), &self.unit)
    }

    pub fn ceil(&self) -> Self {
        self.map_display(f64::ceil)
    }

    pub fn floor(&self) -> Self {
        self.map_display(f64::floor)
    }

    /// Rounds half away from zero, in the display unit.
    pub fn round(&self) -> Self {
        self.map_display(f64::round)
    }

    /// Rounds half to even, in the display unit.
    pub fn rint(&self) -> Self {
        self.map_display(f64::round_ties_even)
    }

    /// Linear interpolation between `zero` (ratio 0) and `one` (ratio 1), expressed in the unit
    /// of `zero`.
    pub fn interpolate(zero: &Self, one: &Self, ratio: f64) -> Self {
        if ratio == 0.0 {
            return zero.clone();
        }
        if ratio == 1.0 {
            return one.with_unit(&zero.unit);
        }
        let value = zero.in_unit() * (1.0 - ratio) + one.in_units_of(&zero.unit) * ratio;
        Self::new(value, &zero.unit)
    }

    pub fn min(&self, other: &Self) -> Self {
        if other.si < self.si {
            other.clone()
        } else {
            self.clone()
        }
    }

    pub fn max(&self, other: &Self) -> Self {
        if other.si > self.si {
            other.clone()
        } else {
            self.clone()
        }
    }

    /// Smallest of `values`, or `None` when empty.
    pub fn min_of<I: IntoIterator<Item = Self>>(values: I) -> Option<Self> {
        values
            .into_iter()
            .reduce(|a, b| if b.si < a.si { b } else { a })
    }

    /// Largest of `values`, or `None` when empty.
    pub fn max_of<I: IntoIterator<Item = Self>>(values: I) -> Option<Self> {
        values
            .into_iter()
            .reduce(|a, b| if b.si > a.si { b } else { a })
    }

    fn same_standard(&self, other: &Self) -> bool {
        Unit::same_as(&self.unit.standard(), &other.unit.standard())
    }
}

impl<F, K> Scalar<F, K>
where
    F: NamedFamily + Admits<K>,
    K: Kind,
{
    /// A value given in the standard unit of the family.
    #[inline]
    pub fn from_si(si: f64) -> Self {
        Self::from_parts(si, F::standard_unit())
    }

    pub fn zero() -> Self {
        Self::from_si(0.0)
    }

    pub fn nan() -> Self {
        Self::from_si(f64::NAN)
    }

    pub fn infinity() -> Self {
        Self::from_si(f64::INFINITY)
    }

    pub fn neg_infinity() -> Self {
        Self::from_si(f64::NEG_INFINITY)
    }
}

impl<F: AbsoluteFamily> Scalar<F, Rel> {
    /// Reinterprets the same `si` value as a point on the scale.
    pub fn to_abs(&self) -> Scalar<F, Abs> {
        Scalar::from_parts(self.si, self.unit.clone())
    }
}

impl<F: AbsoluteFamily> Scalar<F, Abs> {
    /// Reinterprets the same `si` value as a difference.
    pub fn to_rel(&self) -> Scalar<F, Rel> {
        Scalar::from_parts(self.si, self.unit.clone())
    }
}

macro_rules! relative_fns {
    ($($(#[$meta:meta])* $name:ident => $f:expr;)+) => {
        $(
            $(#[$meta])*
            pub fn $name(&self) -> Self {
                self.map_display($f)
            }
        )+
    };
}

impl<F: Family> Scalar<F, Rel> {
    relative_fns! {
        abs => f64::abs;
        signum => f64::signum;
        sqrt => f64::sqrt;
        cbrt => f64::cbrt;
        /// Reciprocal of the display value, in the same unit.
        inv => f64::recip;
        exp => f64::exp;
        ln => f64::ln;
        log10 => f64::log10;
        sin => f64::sin;
        cos => f64::cos;
        tan => f64::tan;
        asin => f64::asin;
        acos => f64::acos;
        atan => f64::atan;
        sinh => f64::sinh;
        cosh => f64::cosh;
        tanh => f64::tanh;
    }

    /// Display value raised to `exponent`, in the same unit.
    pub fn pow(&self, exponent: f64) -> Self {
        self.map_display(|v| v.powf(exponent))
    }

    /// Product with any other relative scalar, in the unit the global registry derives.
    ///
    /// Fails with [`Error::InvalidDimensions`] when a dimension exponent overflows.
    pub fn times<G: Family>(&self, other: &Scalar<G>) -> Result<Scalar<Si>> {
        self.times_in(other, UnitRegistry::global())
    }

    /// Quotient by any other relative scalar, in the unit the global registry derives.
    pub fn divide_by<G: Family>(&self, other: &Scalar<G>) -> Result<Scalar<Si>> {
        self.divide_by_in(other, UnitRegistry::global())
    }

    pub fn times_in<G: Family>(
        &self,
        other: &Scalar<G>,
        registry: &UnitRegistry,
    ) -> Result<Scalar<Si>> {
        let unit = registry.derive(Operation::Multiply, &self.unit, &other.unit)?;
        Ok(Scalar::from_parts(self.si * other.si, Unit::from_descriptor(unit)))
    }

    pub fn divide_by_in<G: Family>(
        &self,
        other: &Scalar<G>,
        registry: &UnitRegistry,
    ) -> Result<Scalar<Si>> {
        let unit = registry.derive(Operation::Divide, &self.unit, &other.unit)?;
        Ok(Scalar::from_parts(self.si / other.si, Unit::from_descriptor(unit)))
    }
}

impl<F: NamedFamily> Scalar<F, Rel> {
    /// Forgets the family, keeping the value and unit.
    pub fn to_si_family(&self) -> Scalar<Si> {
        Scalar::from_parts(self.si, self.unit.retag())
    }
}

impl Scalar<Si> {
    pub fn dimensions(&self) -> Dimensions {
        self.unit.dimensions()
    }

    /// Re-tags the value as family `G`, in `G`'s standard unit.
    ///
    /// Fails with [`Error::DimensionMismatch`] when the dimension vectors differ.
    pub fn cast<G: NamedFamily>(&self) -> Result<Scalar<G>> {
        self.check_dimensions(G::DIMENSIONS)?;
        Ok(Scalar::from_parts(self.si, G::standard_unit()))
    }

    /// Sum of two derived values with equal dimension vectors.
    pub fn plus(&self, other: &Scalar<Si>) -> Result<Scalar<Si>> {
        self.check_dimensions(other.dimensions())?;
        Ok(combine(self, other, |a, b| a + b))
    }

    /// Difference of two derived values with equal dimension vectors.
    pub fn minus(&self, other: &Scalar<Si>) -> Result<Scalar<Si>> {
        self.check_dimensions(other.dimensions())?;
        Ok(combine(self, other, |a, b| a - b))
    }

    fn check_dimensions(&self, expected: Dimensions) -> Result<()> {
        let found = self.dimensions();
        if !found.equals(&expected) {
            return Err(Error::DimensionMismatch { expected, found });
        }
        Ok(())
    }
}

/// Fast path when both sides share a unit, SI path in the family standard unit otherwise.
fn combine<F, L, R, O>(
    left: &Scalar<F, L>,
    right: &Scalar<F, R>,
    op: impl Fn(f64, f64) -> f64,
) -> Scalar<F, O>
where
    F: Admits<L> + Admits<R> + Admits<O>,
    L: Kind,
    R: Kind,
    O: Kind,
{
    if left.unit.same_as(&right.unit) {
        Scalar::new(op(left.in_unit(), right.in_unit()), &left.unit)
    } else {
        Scalar::from_parts(op(left.si, right.si), left.unit.standard())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operators
// ─────────────────────────────────────────────────────────────────────────────

macro_rules! impl_kind_op {
    ($Op:ident, $method:ident, $Algebra:ident, $op:tt) => {
        impl<F, L, R> $Op<Scalar<F, R>> for Scalar<F, L>
        where
            F: NamedFamily + Admits<L> + Admits<R> + Admits<<L as $Algebra<R>>::Output>,
            L: $Algebra<R>,
            R: Kind,
        {
            type Output = Scalar<F, <L as $Algebra<R>>::Output>;

            #[inline]
            fn $method(self, rhs: Scalar<F, R>) -> Self::Output {
                combine(&self, &rhs, |a, b| a $op b)
            }
        }

        impl<'a, F, L, R> $Op<&'a Scalar<F, R>> for &'a Scalar<F, L>
        where
            F: NamedFamily + Admits<L> + Admits<R> + Admits<<L as $Algebra<R>>::Output>,
            L: $Algebra<R>,
            R: Kind,
        {
            type Output = Scalar<F, <L as $Algebra<R>>::Output>;

            #[inline]
            fn $method(self, rhs: &'a Scalar<F, R>) -> Self::Output {
                combine(self, rhs, |a, b| a $op b)
            }
        }
    };
}

impl_kind_op!(Add, add, KindAdd, +);
impl_kind_op!(Sub, sub, KindSub, -);

impl<F: Family> Neg for Scalar<F, Rel> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_parts(-self.si, self.unit)
    }
}

impl<F: Family> Neg for &Scalar<F, Rel> {
    type Output = Scalar<F, Rel>;

    fn neg(self) -> Scalar<F, Rel> {
        Scalar::from_parts(-self.si, self.unit.clone())
    }
}

impl<F: Family> Mul<f64> for Scalar<F, Rel> {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::from_parts(self.si * rhs, self.unit)
    }
}

impl<F: Family> Mul<Scalar<F, Rel>> for f64 {
    type Output = Scalar<F, Rel>;

    fn mul(self, rhs: Scalar<F, Rel>) -> Scalar<F, Rel> {
        rhs * self
    }
}

impl<F: Family> Div<f64> for Scalar<F, Rel> {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self::from_parts(self.si / rhs, self.unit)
    }
}

/// Two values of the same family divide to a plain number.
impl<F: NamedFamily> Div<Scalar<F, Rel>> for Scalar<F, Rel> {
    type Output = Scalar<Dimensionless>;

    fn div(self, rhs: Scalar<F, Rel>) -> Scalar<Dimensionless> {
        Scalar::from_si(self.si / rhs.si)
    }
}

impl<F: NamedFamily> Sum for Scalar<F, Rel> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Std traits
// ─────────────────────────────────────────────────────────────────────────────

impl<F, K> Clone for Scalar<F, K>
where
    F: Admits<K>,
    K: Kind,
{
    fn clone(&self) -> Self {
        Self::from_parts(self.si, self.unit.clone())
    }
}

impl<F, K> PartialEq for Scalar<F, K>
where
    F: Admits<K>,
    K: Kind,
{
    /// Bit-identical `si` and equal family standard units.
    fn eq(&self, other: &Self) -> bool {
        self.si.to_bits() == other.si.to_bits() && self.same_standard(other)
    }
}

impl<F, K> PartialOrd for Scalar<F, K>
where
    F: Admits<K>,
    K: Kind,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.same_standard(other) {
            Some(self.si.total_cmp(&other.si))
        } else {
            None
        }
    }
}

impl<F, K> fmt::Debug for Scalar<F, K>
where
    F: Admits<K>,
    K: Kind,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scalar")
            .field("family", &F::NAME)
            .field("kind", &K::TAG)
            .field("si", &self.si)
            .field("unit", &self.unit.abbreviation())
            .finish()
    }
}

impl<F, K> fmt::Display for Scalar<F, K>
where
    F: Admits<K>,
    K: Kind,
{
    /// `<value> <abbreviation>` in the display unit; `{:#}` prefixes `Abs` or `Rel`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            match K::TAG {
                Tag::Absolute => f.write_str("Abs ")?,
                Tag::Relative => f.write_str("Rel ")?,
            }
        }
        match f.precision() {
            Some(precision) => write!(f, "{:.*}", precision, self.in_unit())?,
            None => write!(f, "{}", self.in_unit())?,
        }
        let abbreviation = self.unit.abbreviation();
        if abbreviation.is_empty() {
            Ok(())
        } else {
            write!(f, " {}", abbreviation)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::area::SQUARE_METER;
    use crate::units::duration::{Duration, Time, HOUR, SECOND};
    use crate::units::energy::{Energy, JOULE};
    use crate::units::force::{Force, NEWTON};
    use crate::units::length::{Length, Position, KILOMETER, METER, MILLIMETER};
    use crate::units::mass::{Mass, GRAM, KILOGRAM};
    use crate::units::temperature::{
        AbsoluteTemperature, Temperature, DEGREE_CELSIUS, DEGREE_FAHRENHEIT, KELVIN,
    };
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;

    #[test]
    fn construction_normalizes_to_si() {
        let l = Scalar::<Length>::new(100.0, &MILLIMETER);
        assert_relative_eq!(l.si(), 0.1);
        assert_relative_eq!(l.in_unit(), 100.0);
        assert_relative_eq!(l.in_units_of(&KILOMETER), 1e-4);
        assert_eq!(l.unit(), &*MILLIMETER);
        assert_eq!(l.tag(), Tag::Relative);
    }

    #[test]
    fn absolute_temperature_uses_offset() {
        let t = AbsoluteTemperature::new(20.0, &DEGREE_CELSIUS);
        assert_relative_eq!(t.si(), 293.15);
        let d = Scalar::<Temperature>::new(20.0, &DEGREE_CELSIUS);
        assert_relative_eq!(d.si(), 20.0);
        assert_relative_eq!(t.in_units_of(&DEGREE_FAHRENHEIT), 68.0, epsilon = 1e-9);
    }

    #[test]
    fn fast_path_keeps_display_unit() {
        let a = Scalar::<Length>::new(1.5, &KILOMETER);
        let b = Scalar::<Length>::new(2.0, &KILOMETER);
        let sum = &a + &b;
        assert_eq!(sum.unit(), &*KILOMETER);
        assert_relative_eq!(sum.in_unit(), 3.5);

        let t1 = AbsoluteTemperature::new(25.0, &DEGREE_CELSIUS);
        let t0 = AbsoluteTemperature::new(20.0, &DEGREE_CELSIUS);
        let diff = t1 - t0;
        assert_eq!(diff.unit(), &*DEGREE_CELSIUS);
        assert_relative_eq!(diff.in_unit(), 5.0, epsilon = 1e-9);
        assert_relative_eq!(diff.si(), 5.0, epsilon = 1e-9);
    }

    #[test]
    fn si_path_uses_standard_unit() {
        let a = Scalar::<Length>::new(1.0, &KILOMETER);
        let b = Scalar::<Length>::new(500.0, &MILLIMETER);
        let sum = a + b;
        assert_eq!(sum.unit(), &*METER);
        assert_relative_eq!(sum.si(), 1000.5);

        let t = AbsoluteTemperature::new(68.0, &DEGREE_FAHRENHEIT);
        let warmer = t + Scalar::<Temperature>::new(5.0, &DEGREE_CELSIUS);
        assert_eq!(warmer.unit(), &*KELVIN);
        assert_relative_eq!(warmer.si(), 298.15, epsilon = 1e-9);
    }

    #[test]
    fn abs_rel_algebra() {
        let p5 = Position::from_si(5.0);
        let p2 = Position::from_si(2.0);
        let d: Scalar<Length> = &p5 - &p2;
        assert_eq!(d.si(), 3.0);
        let back: Position = d.clone() + p2.clone();
        assert_eq!(back.si(), 5.0);
        let also: Position = p2.clone() + d.clone();
        assert_eq!(also, back);
        let earlier: Position = p5 - d;
        assert_eq!(earlier, p2);
    }

    #[test]
    fn to_abs_and_to_rel_reinterpret() {
        let d = Scalar::<Duration>::new(2.0, &HOUR);
        let t: Time = d.to_abs();
        assert_eq!(t.si(), 7200.0);
        assert_eq!(t.unit(), &*HOUR);
        assert_eq!(t.to_rel(), d);
    }

    #[test]
    fn multiplication_derives_units() {
        let f = Scalar::<Force>::from_si(10.0);
        let l = Scalar::<Length>::from_si(2.0);
        let e = f.times(&l).unwrap();
        assert_eq!(e.si(), 20.0);
        assert_eq!(e.dimensions(), NEWTON.dimensions().plus(METER.dimensions()));
        assert_eq!(e.unit().name(), "joule");

        let typed: Scalar<Energy> = e.cast().unwrap();
        assert_eq!(typed.unit(), &*JOULE);
        assert!(matches!(
            e.cast::<Mass>(),
            Err(Error::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn typed_relations() {
        let f = Scalar::<Force>::new(10.0, &NEWTON);
        let l = Scalar::<Length>::new(200.0, &MILLIMETER);
        let e: Scalar<Energy> = f * l.clone();
        assert_relative_eq!(e.si(), 2.0);

        let area = l.clone() * l.clone();
        assert_eq!(area.unit(), &*SQUARE_METER);
        assert_relative_eq!(area.si(), 0.04);

        let ratio = l.clone() / Scalar::<Length>::new(1.0, &METER);
        assert_relative_eq!(ratio.si(), 0.2);
        assert!(ratio.unit().dimensions().is_dimensionless());

        let m = Scalar::<Mass>::new(500.0, &GRAM);
        let s = Scalar::<Duration>::new(2.0, &SECOND);
        assert_relative_eq!((l / s).si(), 0.1);
        assert_relative_eq!(m.si(), 0.5);
    }

    #[test]
    fn self_division_is_dimensionless_in_any_registry() {
        let registry = UnitRegistry::new();
        let m = Scalar::<Mass>::new(3.0, &KILOGRAM);
        let q = m.divide_by_in(&m, &registry).unwrap();
        assert!(q.dimensions().is_dimensionless());
        assert_eq!(q.si(), 1.0);
    }

    #[test]
    fn repeated_squaring_reports_exponent_overflow() {
        let registry = UnitRegistry::new();
        let mut x = Scalar::<Length>::from_si(1.0).to_si_family();
        let mut squarings = 0;
        let err = loop {
            match x.times_in(&x, &registry) {
                Ok(next) => {
                    x = next;
                    squarings += 1;
                }
                Err(err) => break err,
            }
        };
        // m^64 is the last power that fits in an i8 exponent.
        assert_eq!(squarings, 6);
        assert_eq!(x.dimensions().exponents()[3], 64);
        assert!(matches!(err, Error::InvalidDimensions { .. }));
        assert!(x.divide_by_in(&x, &registry).unwrap().dimensions().is_dimensionless());
    }

    #[test]
    fn si_family_arithmetic_checks_dimensions() {
        let a = Scalar::<Force>::from_si(2.0)
            .times(&Scalar::<Length>::from_si(3.0))
            .unwrap();
        let b = Scalar::<Energy>::from_si(4.0).to_si_family();
        assert_eq!(a.plus(&b).unwrap().si(), 10.0);
        assert_eq!(a.minus(&b).unwrap().si(), 2.0);
        let c = Scalar::<Mass>::from_si(1.0).to_si_family();
        assert!(a.plus(&c).is_err());
    }

    #[test]
    fn unary_functions_stay_in_display_unit() {
        let l = Scalar::<Length>::new(-2.4, &KILOMETER);
        assert_relative_eq!(l.abs().in_unit(), 2.4);
        assert_eq!(l.abs().unit(), &*KILOMETER);
        assert_relative_eq!(l.ceil().in_unit(), -2.0);
        assert_relative_eq!(l.floor().in_unit(), -3.0);
        assert_relative_eq!(l.round().in_unit(), -2.0);
        assert_relative_eq!(Scalar::<Length>::new(2.5, &METER).rint().si(), 2.0);
        assert_relative_eq!(Scalar::<Length>::new(4.0, &KILOMETER).sqrt().in_unit(), 2.0);
        assert_relative_eq!(Scalar::<Length>::new(2.0, &METER).pow(3.0).si(), 8.0);
        assert_relative_eq!(Scalar::<Length>::new(4.0, &METER).inv().si(), 0.25);
        assert_relative_eq!((-l.clone()).in_unit(), 2.4);

        let t = AbsoluteTemperature::new(20.4, &DEGREE_CELSIUS);
        assert_relative_eq!(t.floor().in_unit(), 20.0, epsilon = 1e-9);
    }

    #[test]
    fn scaling() {
        let l = Scalar::<Length>::new(3.0, &KILOMETER);
        assert_relative_eq!((l.clone() * 2.0).in_unit(), 6.0);
        assert_relative_eq!((2.0 * l.clone()).in_unit(), 6.0);
        assert_relative_eq!((l / 4.0).si(), 750.0);
    }

    #[test]
    fn interpolation_and_extremes() {
        let zero = Position::new(1.0, &KILOMETER);
        let one = Position::new(3_000.0, &METER);
        assert_eq!(Scalar::interpolate(&zero, &one, 0.0), zero);
        assert_eq!(Scalar::interpolate(&zero, &one, 1.0), one);
        let mid = Scalar::interpolate(&zero, &one, 0.5);
        assert_eq!(mid.unit(), &*KILOMETER);
        assert_relative_eq!(mid.in_unit(), 2.0);

        assert_eq!(zero.min(&one), zero);
        assert_eq!(zero.max(&one), one);
        let all = vec![one.clone(), zero.clone(), mid.clone()];
        assert_eq!(Scalar::min_of(all.clone()), Some(zero));
        assert_eq!(Scalar::max_of(all), Some(one));
        assert_eq!(Position::min_of(Vec::new()), None);
    }

    #[test]
    fn equality_and_ordering() {
        let a = Scalar::<Length>::new(1.0, &KILOMETER);
        let b = Scalar::<Length>::new(1000.0, &METER);
        assert_eq!(a, b);
        assert!(Scalar::<Length>::from_si(1.0) < Scalar::<Length>::from_si(2.0));
        assert_eq!(a.partial_cmp(&b), Some(Ordering::Equal));
        assert_eq!(Scalar::<Length>::nan(), Scalar::<Length>::nan());
        assert_ne!(Scalar::<Length>::from_si(0.0), Scalar::<Length>::from_si(-0.0));

        let energy = Scalar::<Energy>::from_si(1.0).to_si_family();
        let mass = Scalar::<Mass>::from_si(1.0).to_si_family();
        assert_ne!(energy, mass);
        assert_eq!(energy.partial_cmp(&mass), None);
    }

    #[test]
    fn sentinels_and_sum() {
        assert!(Scalar::<Length>::nan().is_nan());
        assert_eq!(Scalar::<Length>::infinity().si(), f64::INFINITY);
        assert_eq!(Scalar::<Length>::neg_infinity().si(), f64::NEG_INFINITY);
        let total: Scalar<Length> = (1..=4).map(|i| Scalar::from_si(i as f64)).sum();
        assert_eq!(total.si(), 10.0);
    }

    #[test]
    fn display() {
        let l = Scalar::<Length>::new(2.5, &KILOMETER);
        assert_eq!(l.to_string(), "2.5 km");
        assert_eq!(format!("{:#}", l), "Rel 2.5 km");
        assert_eq!(format!("{:.2}", l), "2.50 km");
        let p = Position::new(4.0, &METER);
        assert_eq!(format!("{:#}", p), "Abs 4 m");
        let ratio = l.clone() / l;
        assert_eq!(ratio.to_string(), "1");
    }

    proptest! {
        #[test]
        fn absolute_difference_round_trips(a in -1.0e6f64..1.0e6, b in -1.0e6f64..1.0e6) {
            let a1 = AbsoluteTemperature::new(a, &DEGREE_CELSIUS);
            let a2 = AbsoluteTemperature::new(b, &DEGREE_FAHRENHEIT);
            let d = &a1 - &a2;
            prop_assert_eq!(d.tag(), Tag::Relative);
            let back = d + a2;
            assert_abs_diff_eq!(back.si(), a1.si(), epsilon = 1e-6);
        }

        #[test]
        fn relative_sum_then_difference(a in -1.0e6f64..1.0e6, b in -1.0e6f64..1.0e6) {
            let r1 = Scalar::<Length>::new(a, &KILOMETER);
            let r2 = Scalar::<Length>::new(b, &MILLIMETER);
            let r = (&r1 + &r2) - r2;
            assert_abs_diff_eq!(r.si(), r1.si(), epsilon = 1e-6);
        }

        #[test]
        fn product_then_quotient_restores_dimensions(x in 0.1f64..1.0e4, y in 0.1f64..1.0e4) {
            let m = Scalar::<Mass>::from_si(x);
            let t = Scalar::<Duration>::from_si(y);
            let q = m.times(&t).unwrap().divide_by(&t).unwrap();
            prop_assert_eq!(q.dimensions(), KILOGRAM.dimensions());
            assert_relative_eq!(q.si(), x, max_relative = 1e-12);
        }
    }
}

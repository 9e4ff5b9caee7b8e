//! Vectors of values sharing one unit.
//!
//! A [`Vector`] stores standard-unit values in a [`Storage`], dense or sparse, together with a
//! display unit. Unpopulated sparse indices hold `si == 0`, which for an absolute vector with an
//! offset unit is not the same as a display value of zero.
//!
//! ```rust
//! use dimval_core::units::length::{LengthVector, METER};
//! use dimval_core::StorageType;
//!
//! let v = LengthVector::new(&[0.0, 3.0, 0.0, 7.0], &METER, StorageType::Sparse).unwrap();
//! assert_eq!(v.cardinality(), 2);
//! assert_eq!(v.to_dense().values_in_unit(), vec![0.0, 3.0, 0.0, 7.0]);
//! ```

use crate::error::{Error, Result};
use crate::family::{AbsoluteFamily, Family, NamedFamily, Si};
use crate::kind::{Abs, Admits, Kind, KindAdd, KindSub, Rel};
use crate::registry::{Operation, UnitRegistry};
use crate::scalar::Scalar;
use crate::storage::{convert, Storage, StorageType};
use crate::unit::{Unit, UnitDescriptor};
use log::trace;
use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Div, Mul, Neg};

/// An indexed collection of values of family `F` and kind `K`.
pub struct Vector<F, K = Rel>
where
    F: Admits<K>,
    K: Kind,
{
    storage: Storage,
    unit: Unit<F>,
    kind: PhantomData<K>,
}

impl<F, K> Vector<F, K>
where
    F: Admits<K>,
    K: Kind,
{
    /// A vector of `values` expressed in `unit`.
    ///
    /// Fails with [`Error::EmptyValues`] on an empty slice.
    pub fn new(values: &[f64], unit: &Unit<F>, storage_type: StorageType) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::EmptyValues("vector"));
        }
        trace!(
            "Building {} {} vector of {} values in [{}]",
            K::TAG,
            F::NAME,
            values.len(),
            unit.abbreviation()
        );
        let descriptor: &UnitDescriptor = unit;
        let si = convert(values, |v| K::to_si(descriptor, v));
        Ok(Self::from_storage(
            Storage::from_values(si, storage_type)?,
            unit.clone(),
        ))
    }

    /// A vector of the given scalars, displayed in the unit of the first one.
    pub fn from_scalars(scalars: &[Scalar<F, K>], storage_type: StorageType) -> Result<Self> {
        let first = scalars.first().ok_or(Error::EmptyValues("vector"))?;
        let si = scalars.iter().map(Scalar::si).collect();
        Ok(Self::from_storage(
            Storage::from_values(si, storage_type)?,
            first.unit().clone(),
        ))
    }

    /// A vector of length `len` populated from `map`, zero elsewhere.
    ///
    /// Fails on an empty map, a zero length or a key `>= len`.
    pub fn from_sparse_map(
        map: &BTreeMap<usize, f64>,
        len: usize,
        unit: &Unit<F>,
        storage_type: StorageType,
    ) -> Result<Self> {
        let si: BTreeMap<usize, f64> = map
            .iter()
            .map(|(index, value)| (*index, K::to_si(unit, *value)))
            .collect();
        let storage = Storage::sparse(&si, len)?;
        Ok(Self::from_storage(
            storage.to_storage_type(storage_type),
            unit.clone(),
        ))
    }

    /// Like [`Vector::from_sparse_map`], with scalar entries. The first entry decides the unit.
    pub fn from_scalar_map(
        map: &BTreeMap<usize, Scalar<F, K>>,
        len: usize,
        storage_type: StorageType,
    ) -> Result<Self> {
        let (_, first) = map
            .first_key_value()
            .ok_or(Error::EmptyValues("sparse vector"))?;
        let unit = first.unit().clone();
        let si: BTreeMap<usize, f64> = map.iter().map(|(i, s)| (*i, s.si())).collect();
        let storage = Storage::sparse(&si, len)?;
        Ok(Self::from_storage(storage.to_storage_type(storage_type), unit))
    }

    pub(crate) fn from_storage(storage: Storage, unit: Unit<F>) -> Self {
        Self {
            storage,
            unit,
            kind: PhantomData,
        }
    }

    pub fn size(&self) -> usize {
        self.storage.size()
    }

    pub fn storage_type(&self) -> StorageType {
        self.storage.storage_type()
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    pub fn unit(&self) -> &Unit<F> {
        &self.unit
    }

    /// Element `index` as a scalar in the display unit.
    pub fn get(&self, index: usize) -> Result<Scalar<F, K>> {
        Ok(Scalar::from_parts(self.get_si(index)?, self.unit.clone()))
    }

    pub fn get_si(&self, index: usize) -> Result<f64> {
        self.storage.get_si(index)
    }

    pub fn get_in_unit(&self, index: usize) -> Result<f64> {
        Ok(K::from_si(&self.unit, self.get_si(index)?))
    }

    /// Every standard-unit value, implicit zeros included.
    pub fn values_si(&self) -> Vec<f64> {
        self.storage.dense_values()
    }

    pub fn values_in_unit(&self) -> Vec<f64> {
        self.values_in(&self.unit)
    }

    pub fn values_in(&self, unit: &Unit<F>) -> Vec<f64> {
        let descriptor: &UnitDescriptor = unit;
        convert(&self.values_si(), |si| K::from_si(descriptor, si))
    }

    pub fn scalars(&self) -> Vec<Scalar<F, K>> {
        self.values_si()
            .into_iter()
            .map(|si| Scalar::from_parts(si, self.unit.clone()))
            .collect()
    }

    /// Number of non-zero standard-unit values.
    pub fn cardinality(&self) -> usize {
        self.storage.cardinality()
    }

    pub fn to_dense(&self) -> Self {
        Self::from_storage(self.storage.to_dense(), self.unit.clone())
    }

    pub fn to_sparse(&self) -> Self {
        Self::from_storage(self.storage.to_sparse(), self.unit.clone())
    }

    /// Same values, shown in `unit`.
    pub fn with_unit(&self, unit: &Unit<F>) -> Self {
        Self::from_storage(self.storage.clone(), unit.clone())
    }

    pub fn ceil(&self) -> Self {
        self.map_display(f64::ceil)
    }

    pub fn floor(&self) -> Self {
        self.map_display(f64::floor)
    }

    /// Rounds half to even.
    pub fn rint(&self) -> Self {
        self.map_display(f64::round_ties_even)
    }

    fn map_display<Op>(&self, f: Op) -> Self
    where
        Op: Fn(f64) -> f64 + Sync + Send,
    {
        let descriptor: &UnitDescriptor = &self.unit;
        let storage = self
            .storage
            .map(|si| K::to_si(descriptor, f(K::from_si(descriptor, si))));
        Self::from_storage(storage, self.unit.clone())
    }

    fn same_standard(&self, other: &Self) -> bool {
        self.unit.standard().same_as(&other.unit.standard())
    }
}

impl<F, L> Vector<F, L>
where
    F: NamedFamily + Admits<L>,
    L: Kind,
{
    /// Element-wise sum; `Abs + Abs` does not compile.
    ///
    /// The result keeps the left unit when both sides share it, and uses the standard unit
    /// otherwise.
    pub fn plus<R>(&self, other: &Vector<F, R>) -> Result<Vector<F, <L as KindAdd<R>>::Output>>
    where
        L: KindAdd<R>,
        R: Kind,
        F: Admits<R> + Admits<<L as KindAdd<R>>::Output>,
    {
        let storage = self.storage.plus(&other.storage)?;
        Ok(Vector::from_storage(storage, self.result_unit(&other.unit)))
    }

    /// Element-wise difference; `Abs - Abs` is `Rel`.
    pub fn minus<R>(&self, other: &Vector<F, R>) -> Result<Vector<F, <L as KindSub<R>>::Output>>
    where
        L: KindSub<R>,
        R: Kind,
        F: Admits<R> + Admits<<L as KindSub<R>>::Output>,
    {
        let storage = self.storage.minus(&other.storage)?;
        Ok(Vector::from_storage(storage, self.result_unit(&other.unit)))
    }

    fn result_unit(&self, other: &Unit<F>) -> Unit<F> {
        if self.unit.same_as(other) {
            self.unit.clone()
        } else {
            self.unit.standard()
        }
    }
}

impl<F: Family> Vector<F, Rel> {
    /// Sum of all elements.
    pub fn z_sum(&self) -> Scalar<F> {
        Scalar::from_parts(self.storage.z_sum(), self.unit.clone())
    }

    pub fn abs(&self) -> Self {
        Self::from_storage(self.storage.map(f64::abs), self.unit.clone())
    }

    /// Element-wise product, in the unit the global registry derives.
    pub fn times<G: Family>(&self, other: &Vector<G>) -> Result<Vector<Si>> {
        self.times_in(other, UnitRegistry::global())
    }

    /// Element-wise quotient, in the unit the global registry derives.
    pub fn divide_by<G: Family>(&self, other: &Vector<G>) -> Result<Vector<Si>> {
        self.divide_by_in(other, UnitRegistry::global())
    }

    pub fn times_in<G: Family>(
        &self,
        other: &Vector<G>,
        registry: &UnitRegistry,
    ) -> Result<Vector<Si>> {
        let storage = self.storage.times(&other.storage)?;
        let unit = registry.derive(Operation::Multiply, &self.unit, &other.unit)?;
        Ok(Vector::from_storage(storage, Unit::new(unit)))
    }

    pub fn divide_by_in<G: Family>(
        &self,
        other: &Vector<G>,
        registry: &UnitRegistry,
    ) -> Result<Vector<Si>> {
        let storage = self.storage.divide(&other.storage)?;
        let unit = registry.derive(Operation::Divide, &self.unit, &other.unit)?;
        Ok(Vector::from_storage(storage, Unit::new(unit)))
    }
}

impl<F: AbsoluteFamily> Vector<F, Rel> {
    pub fn to_abs(&self) -> Vector<F, Abs> {
        Vector::from_storage(self.storage.clone(), self.unit.clone())
    }
}

impl<F: AbsoluteFamily> Vector<F, Abs> {
    pub fn to_rel(&self) -> Vector<F, Rel> {
        Vector::from_storage(self.storage.clone(), self.unit.clone())
    }
}

impl Vector<Si> {
    /// Re-tags the values as family `G`, shown in `G`'s standard unit.
    pub fn cast<G: NamedFamily>(&self) -> Result<Vector<G>> {
        let found = self.unit.dimensions();
        if !found.equals(&G::DIMENSIONS) {
            return Err(Error::DimensionMismatch {
                expected: G::DIMENSIONS,
                found,
            });
        }
        Ok(Vector::from_storage(self.storage.clone(), G::standard_unit()))
    }

    /// Element-wise sum of two derived vectors with equal dimension vectors.
    pub fn plus(&self, other: &Vector<Si>) -> Result<Vector<Si>> {
        self.check_dimensions(other)?;
        let storage = self.storage.plus(&other.storage)?;
        Ok(Vector::from_storage(storage, self.si_result_unit(other)))
    }

    /// Element-wise difference of two derived vectors with equal dimension vectors.
    pub fn minus(&self, other: &Vector<Si>) -> Result<Vector<Si>> {
        self.check_dimensions(other)?;
        let storage = self.storage.minus(&other.storage)?;
        Ok(Vector::from_storage(storage, self.si_result_unit(other)))
    }

    fn check_dimensions(&self, other: &Vector<Si>) -> Result<()> {
        let (expected, found) = (self.unit.dimensions(), other.unit.dimensions());
        if !found.equals(&expected) {
            return Err(Error::DimensionMismatch { expected, found });
        }
        Ok(())
    }

    fn si_result_unit(&self, other: &Vector<Si>) -> Unit<Si> {
        if self.unit.same_as(&other.unit) {
            self.unit.clone()
        } else {
            self.unit.standard()
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operators
// ─────────────────────────────────────────────────────────────────────────────

impl<F: Family> Neg for &Vector<F, Rel> {
    type Output = Vector<F, Rel>;

    fn neg(self) -> Vector<F, Rel> {
        Vector::from_storage(self.storage.map(|v| -v), self.unit.clone())
    }
}

impl<F: Family> Neg for Vector<F, Rel> {
    type Output = Vector<F, Rel>;

    fn neg(self) -> Vector<F, Rel> {
        -&self
    }
}

impl<F: Family> Mul<f64> for &Vector<F, Rel> {
    type Output = Vector<F, Rel>;

    fn mul(self, rhs: f64) -> Vector<F, Rel> {
        Vector::from_storage(self.storage.map(|v| v * rhs), self.unit.clone())
    }
}

impl<F: Family> Mul<f64> for Vector<F, Rel> {
    type Output = Vector<F, Rel>;

    fn mul(self, rhs: f64) -> Vector<F, Rel> {
        &self * rhs
    }
}

impl<F: Family> Div<f64> for &Vector<F, Rel> {
    type Output = Vector<F, Rel>;

    fn div(self, rhs: f64) -> Vector<F, Rel> {
        Vector::from_storage(self.storage.map(|v| v / rhs), self.unit.clone())
    }
}

impl<F: Family> Div<f64> for Vector<F, Rel> {
    type Output = Vector<F, Rel>;

    fn div(self, rhs: f64) -> Vector<F, Rel> {
        &self / rhs
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Std traits
// ─────────────────────────────────────────────────────────────────────────────

impl<F, K> Clone for Vector<F, K>
where
    F: Admits<K>,
    K: Kind,
{
    fn clone(&self) -> Self {
        Self::from_storage(self.storage.clone(), self.unit.clone())
    }
}

impl<F, K> PartialEq for Vector<F, K>
where
    F: Admits<K>,
    K: Kind,
{
    /// Equal standard units and equal values at every index, whatever the storage type.
    fn eq(&self, other: &Self) -> bool {
        self.same_standard(other) && self.storage == other.storage
    }
}

impl<F, K> fmt::Debug for Vector<F, K>
where
    F: Admits<K>,
    K: Kind,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("family", &F::NAME)
            .field("kind", &K::TAG)
            .field("storage", &self.storage)
            .field("unit", &self.unit.abbreviation())
            .finish()
    }
}

/// Writes `[v0, v1, ...]` followed by the abbreviation, honouring the formatter precision.
pub(crate) fn write_values(
    f: &mut fmt::Formatter<'_>,
    values: &[f64],
) -> fmt::Result {
    f.write_str("[")?;
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        match f.precision() {
            Some(precision) => write!(f, "{:.*}", precision, value)?,
            None => write!(f, "{}", value)?,
        }
    }
    f.write_str("]")
}

impl<F, K> fmt::Display for Vector<F, K>
where
    F: Admits<K>,
    K: Kind,
{
    /// `[v0, v1, ...] abbr` in the display unit; `{:#}` prefixes the kind and storage type.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{} {} ", K::TAG, self.storage_type())?;
        }
        write_values(f, &self.values_in_unit())?;
        let abbreviation = self.unit.abbreviation();
        if abbreviation.is_empty() {
            Ok(())
        } else {
            write!(f, " {}", abbreviation)
        }
    }
}

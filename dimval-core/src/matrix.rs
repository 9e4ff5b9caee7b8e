//! Matrices of values sharing one unit.
//!
//! A [`Matrix`] reuses the vector storage engine with a row-major flat index
//! (`row * cols + col`).

use crate::dimension::{Dimensions, BASE_COUNT};
use crate::error::{Error, Result};
use crate::family::{Family, NamedFamily, Si};
use crate::kind::{Admits, Kind, KindAdd, KindSub, Rel};
use crate::registry::UnitRegistry;
use crate::scalar::Scalar;
use crate::storage::{convert, Storage, StorageType};
use crate::unit::{Unit, UnitDescriptor};
use crate::vector::{write_values, Vector};
use log::trace;
use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Div, Mul};

/// A `rows × cols` grid of values of family `F` and kind `K`.
///
/// ```rust
/// use dimval_core::units::length::{LengthMatrix, METER};
/// use dimval_core::StorageType;
///
/// let m = LengthMatrix::new(&[vec![1.0, 2.0], vec![3.0, 4.0]], &METER, StorageType::Dense)
///     .unwrap();
/// assert_eq!(m.get_si(1, 0).unwrap(), 3.0);
/// assert!((m.determinant_si().unwrap() + 2.0).abs() < 1e-12);
/// ```
pub struct Matrix<F, K = Rel>
where
    F: Admits<K>,
    K: Kind,
{
    storage: Storage,
    rows: usize,
    cols: usize,
    unit: Unit<F>,
    kind: PhantomData<K>,
}

impl<F, K> Matrix<F, K>
where
    F: Admits<K>,
    K: Kind,
{
    /// A matrix of `values` (one `Vec` per row) expressed in `unit`.
    ///
    /// Fails on an empty or zero-width input and on rows of different lengths.
    pub fn new(values: &[Vec<f64>], unit: &Unit<F>, storage_type: StorageType) -> Result<Self> {
        let cols = check_rows(values)?;
        trace!(
            "Building {} {} matrix {}x{} in [{}]",
            K::TAG,
            F::NAME,
            values.len(),
            cols,
            unit.abbreviation()
        );
        let descriptor: &UnitDescriptor = unit;
        let si = convert(&values.concat(), |v| K::to_si(descriptor, v));
        Ok(Self::from_storage(
            Storage::from_values(si, storage_type)?,
            values.len(),
            cols,
            unit.clone(),
        ))
    }

    /// A matrix of scalars, displayed in the unit of the top-left one.
    pub fn from_scalars(values: &[Vec<Scalar<F, K>>], storage_type: StorageType) -> Result<Self> {
        let cols = check_rows(values)?;
        let unit = values[0][0].unit().clone();
        let si = values.iter().flatten().map(Scalar::si).collect();
        Ok(Self::from_storage(
            Storage::from_values(si, storage_type)?,
            values.len(),
            cols,
            unit,
        ))
    }

    /// A `rows × cols` matrix populated from `map`, zero elsewhere.
    pub fn from_sparse_map(
        map: &BTreeMap<(usize, usize), f64>,
        rows: usize,
        cols: usize,
        unit: &Unit<F>,
        storage_type: StorageType,
    ) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::ZeroLength);
        }
        let size = rows
            .checked_mul(cols)
            .ok_or(Error::ShapeTooLarge { rows, cols })?;
        let mut flat = BTreeMap::new();
        for (&(row, col), &value) in map {
            if row >= rows || col >= cols {
                return Err(Error::MatrixIndexOutOfBounds {
                    row,
                    col,
                    rows,
                    cols,
                });
            }
            flat.insert(row * cols + col, K::to_si(unit, value));
        }
        let storage = Storage::sparse(&flat, size)?;
        Ok(Self::from_storage(
            storage.to_storage_type(storage_type),
            rows,
            cols,
            unit.clone(),
        ))
    }

    fn from_storage(storage: Storage, rows: usize, cols: usize, unit: Unit<F>) -> Self {
        Self {
            storage,
            rows,
            cols,
            unit,
            kind: PhantomData,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn storage_type(&self) -> StorageType {
        self.storage.storage_type()
    }

    pub fn unit(&self) -> &Unit<F> {
        &self.unit
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Scalar<F, K>> {
        Ok(Scalar::from_parts(self.get_si(row, col)?, self.unit.clone()))
    }

    pub fn get_si(&self, row: usize, col: usize) -> Result<f64> {
        self.check_index(row, col)?;
        Ok(self.storage.get_unchecked(row * self.cols + col))
    }

    pub fn get_in_unit(&self, row: usize, col: usize) -> Result<f64> {
        Ok(K::from_si(&self.unit, self.get_si(row, col)?))
    }

    /// Row `row` as a vector with this matrix's storage type.
    pub fn row(&self, row: usize) -> Result<Vector<F, K>> {
        self.check_index(row, 0)?;
        let values = (0..self.cols)
            .map(|col| self.storage.get_unchecked(row * self.cols + col))
            .collect();
        self.vector(values)
    }

    pub fn column(&self, col: usize) -> Result<Vector<F, K>> {
        self.check_index(0, col)?;
        let values = (0..self.rows)
            .map(|row| self.storage.get_unchecked(row * self.cols + col))
            .collect();
        self.vector(values)
    }

    /// Main diagonal; square matrices only.
    pub fn diagonal(&self) -> Result<Vector<F, K>> {
        self.check_square()?;
        let values = (0..self.rows)
            .map(|i| self.storage.get_unchecked(i * self.cols + i))
            .collect();
        self.vector(values)
    }

    pub fn values_si(&self) -> Vec<Vec<f64>> {
        self.split_rows(self.storage.dense_values())
    }

    pub fn values_in_unit(&self) -> Vec<Vec<f64>> {
        let descriptor: &UnitDescriptor = &self.unit;
        self.split_rows(convert(&self.storage.dense_values(), |si| {
            K::from_si(descriptor, si)
        }))
    }

    pub fn cardinality(&self) -> usize {
        self.storage.cardinality()
    }

    pub fn to_dense(&self) -> Self {
        Self::from_storage(
            self.storage.to_dense(),
            self.rows,
            self.cols,
            self.unit.clone(),
        )
    }

    pub fn to_sparse(&self) -> Self {
        Self::from_storage(
            self.storage.to_sparse(),
            self.rows,
            self.cols,
            self.unit.clone(),
        )
    }

    pub fn with_unit(&self, unit: &Unit<F>) -> Self {
        Self::from_storage(self.storage.clone(), self.rows, self.cols, unit.clone())
    }

    fn vector(&self, values: Vec<f64>) -> Result<Vector<F, K>> {
        let storage = Storage::from_values(values, self.storage_type())?;
        Ok(Vector::from_storage(storage, self.unit.clone()))
    }

    fn split_rows(&self, flat: Vec<f64>) -> Vec<Vec<f64>> {
        flat.chunks(self.cols).map(<[f64]>::to_vec).collect()
    }

    fn check_index(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(Error::MatrixIndexOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    fn check_square(&self) -> Result<()> {
        if !self.is_square() {
            return Err(Error::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    fn check_shape<G, R>(&self, other: &Matrix<G, R>) -> Result<()>
    where
        G: Admits<R>,
        R: Kind,
    {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(Error::ShapeMismatch {
                left_rows: self.rows,
                left_cols: self.cols,
                right_rows: other.rows,
                right_cols: other.cols,
            });
        }
        Ok(())
    }

    /// Determinant of the standard-unit values.
    ///
    /// LU decomposition with partial pivoting; a singular matrix gives `0.0`.
    pub fn determinant_si(&self) -> Result<f64> {
        self.check_square()?;
        Ok(lu_determinant(self.storage.dense_values(), self.rows))
    }
}

impl<F, L> Matrix<F, L>
where
    F: NamedFamily + Admits<L>,
    L: Kind,
{
    /// Element-wise sum of two matrices of the same shape.
    pub fn plus<R>(&self, other: &Matrix<F, R>) -> Result<Matrix<F, <L as KindAdd<R>>::Output>>
    where
        L: KindAdd<R>,
        R: Kind,
        F: Admits<R> + Admits<<L as KindAdd<R>>::Output>,
    {
        self.check_shape(other)?;
        let storage = self.storage.plus(&other.storage)?;
        Ok(Matrix::from_storage(
            storage,
            self.rows,
            self.cols,
            self.result_unit(&other.unit),
        ))
    }

    /// Element-wise difference of two matrices of the same shape.
    pub fn minus<R>(&self, other: &Matrix<F, R>) -> Result<Matrix<F, <L as KindSub<R>>::Output>>
    where
        L: KindSub<R>,
        R: Kind,
        F: Admits<R> + Admits<<L as KindSub<R>>::Output>,
    {
        self.check_shape(other)?;
        let storage = self.storage.minus(&other.storage)?;
        Ok(Matrix::from_storage(
            storage,
            self.rows,
            self.cols,
            self.result_unit(&other.unit),
        ))
    }

    fn result_unit(&self, other: &Unit<F>) -> Unit<F> {
        if self.unit.same_as(other) {
            self.unit.clone()
        } else {
            self.unit.standard()
        }
    }
}

impl<F: Family> Matrix<F, Rel> {
    /// Determinant, in the unit the global registry derives for `unit^n`.
    pub fn determinant(&self) -> Result<Scalar<Si>> {
        self.determinant_in(UnitRegistry::global())
    }

    pub fn determinant_in(&self, registry: &UnitRegistry) -> Result<Scalar<Si>> {
        let si = self.determinant_si()?;
        let dimensions = power_of(self.unit.dimensions(), self.rows)?;
        let unit = Unit::new(registry.lookup_or_create(dimensions));
        Ok(Scalar::from_parts(si, unit))
    }
}

/// `dimensions` raised to the `n`-th power, failing when an exponent leaves the `i8` range.
fn power_of(dimensions: Dimensions, n: usize) -> Result<Dimensions> {
    let overflow = || Error::InvalidDimensions {
        input: dimensions.to_string(),
        reason: format!("exponent overflow raising to the power {}", n),
    };
    let n = i8::try_from(n).map_err(|_| overflow())?;
    let mut exponents = [0i8; BASE_COUNT];
    for (slot, exponent) in exponents.iter_mut().zip(dimensions.exponents()) {
        *slot = exponent.checked_mul(n).ok_or_else(overflow)?;
    }
    Ok(Dimensions::new(exponents))
}

fn lu_determinant(mut a: Vec<f64>, n: usize) -> f64 {
    let mut det = 1.0;
    for k in 0..n {
        let pivot = (k..n)
            .max_by(|&i, &j| a[i * n + k].abs().total_cmp(&a[j * n + k].abs()))
            .unwrap_or(k);
        if a[pivot * n + k] == 0.0 {
            return 0.0;
        }
        if pivot != k {
            for col in 0..n {
                a.swap(k * n + col, pivot * n + col);
            }
            det = -det;
        }
        let diag = a[k * n + k];
        det *= diag;
        for row in k + 1..n {
            let factor = a[row * n + k] / diag;
            if factor != 0.0 {
                for col in k..n {
                    a[row * n + col] -= factor * a[k * n + col];
                }
            }
        }
    }
    det
}

/// Width of the rows; every row must have it.
fn check_rows<T>(rows: &[Vec<T>]) -> Result<usize> {
    let first = rows.first().ok_or(Error::EmptyValues("matrix"))?;
    let expected = first.len();
    if expected == 0 {
        return Err(Error::ZeroLength);
    }
    for (row, values) in rows.iter().enumerate() {
        if values.len() != expected {
            return Err(Error::RaggedRows {
                row,
                expected,
                found: values.len(),
            });
        }
    }
    Ok(expected)
}

// ─────────────────────────────────────────────────────────────────────────────
// Operators and std traits
// ─────────────────────────────────────────────────────────────────────────────

impl<F: Family> Mul<f64> for &Matrix<F, Rel> {
    type Output = Matrix<F, Rel>;

    fn mul(self, rhs: f64) -> Matrix<F, Rel> {
        Matrix::from_storage(
            self.storage.map(|v| v * rhs),
            self.rows,
            self.cols,
            self.unit.clone(),
        )
    }
}

impl<F: Family> Div<f64> for &Matrix<F, Rel> {
    type Output = Matrix<F, Rel>;

    fn div(self, rhs: f64) -> Matrix<F, Rel> {
        Matrix::from_storage(
            self.storage.map(|v| v / rhs),
            self.rows,
            self.cols,
            self.unit.clone(),
        )
    }
}

impl<F: Family> Mul<f64> for Matrix<F, Rel> {
    type Output = Matrix<F, Rel>;

    fn mul(self, rhs: f64) -> Matrix<F, Rel> {
        &self * rhs
    }
}

impl<F: Family> Div<f64> for Matrix<F, Rel> {
    type Output = Matrix<F, Rel>;

    fn div(self, rhs: f64) -> Matrix<F, Rel> {
        &self / rhs
    }
}

impl<F, K> Clone for Matrix<F, K>
where
    F: Admits<K>,
    K: Kind,
{
    fn clone(&self) -> Self {
        Self::from_storage(self.storage.clone(), self.rows, self.cols, self.unit.clone())
    }
}

impl<F, K> PartialEq for Matrix<F, K>
where
    F: Admits<K>,
    K: Kind,
{
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self.unit.standard().same_as(&other.unit.standard())
            && self.storage == other.storage
    }
}

impl<F, K> fmt::Debug for Matrix<F, K>
where
    F: Admits<K>,
    K: Kind,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matrix")
            .field("family", &F::NAME)
            .field("kind", &K::TAG)
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .field("storage", &self.storage)
            .field("unit", &self.unit.abbreviation())
            .finish()
    }
}

impl<F, K> fmt::Display for Matrix<F, K>
where
    F: Admits<K>,
    K: Kind,
{
    /// `[[a, b], [c, d]] abbr`; `{:#}` prefixes the kind and storage type.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{} {} ", K::TAG, self.storage_type())?;
        }
        f.write_str("[")?;
        for (i, row) in self.values_in_unit().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write_values(f, row)?;
        }
        f.write_str("]")?;
        let abbreviation = self.unit.abbreviation();
        if abbreviation.is_empty() {
            Ok(())
        } else {
            write!(f, " {}", abbreviation)
        }
    }
}

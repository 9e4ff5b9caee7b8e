//! Dense and sparse storage of standard-unit values.
//!
//! [`Storage`] is shared by [`Vector`](crate::Vector) and [`Matrix`](crate::Matrix): matrices
//! address it through a flat row-major index. Values are always standard-unit (`si`) numbers;
//! units and kinds live one level up.

use crate::error::{Error, Result};
use log::trace;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::fmt;

/// Above this many values, element-wise conversions run on the rayon thread pool.
pub const PARALLEL_THRESHOLD: usize = 1000;

/// Storage strategy of a vector or matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StorageType {
    /// One value per index, contiguous.
    Dense,
    /// Only non-zero values, with their indices; zero elsewhere.
    Sparse,
}

impl fmt::Display for StorageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageType::Dense => f.write_str("Dense"),
            StorageType::Sparse => f.write_str("Sparse"),
        }
    }
}

/// Applies `f` to every value, in parallel for large inputs.
pub(crate) fn convert<Op>(values: &[f64], f: Op) -> Vec<f64>
where
    Op: Fn(f64) -> f64 + Sync + Send,
{
    if values.len() > PARALLEL_THRESHOLD {
        values.par_iter().map(|v| f(*v)).collect()
    } else {
        values.iter().map(|v| f(*v)).collect()
    }
}

/// Combines two equally long slices element by element, in parallel for large inputs.
fn zip_with<Op>(left: &[f64], right: &[f64], f: Op) -> Vec<f64>
where
    Op: Fn(f64, f64) -> f64 + Sync + Send,
{
    if left.len() > PARALLEL_THRESHOLD {
        left.par_iter()
            .zip(right.par_iter())
            .map(|(a, b)| f(*a, *b))
            .collect()
    } else {
        left.iter().zip(right).map(|(a, b)| f(*a, *b)).collect()
    }
}

/// Standard-unit values in dense or sparse form.
#[derive(Clone, Debug)]
pub enum Storage {
    Dense(Vec<f64>),
    Sparse {
        size: usize,
        /// Strictly increasing, all `< size`.
        indices: Vec<usize>,
        /// Non-zero, aligned with `indices`.
        values: Vec<f64>,
    },
}

impl Storage {
    /// Dense storage over `values`; fails on empty input.
    pub fn dense(values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::EmptyValues("storage"));
        }
        Ok(Storage::Dense(values))
    }

    /// Sparse storage from an index map; zero values are dropped.
    ///
    /// Fails on an empty map, a zero `size`, or a key `>= size`.
    pub fn sparse(map: &BTreeMap<usize, f64>, size: usize) -> Result<Self> {
        if map.is_empty() {
            return Err(Error::EmptyValues("sparse storage"));
        }
        if size == 0 {
            return Err(Error::ZeroLength);
        }
        if let Some((&key, _)) = map.last_key_value() {
            if key >= size {
                return Err(Error::SparseIndexOutOfRange { key, len: size });
            }
        }

        let (indices, values) = map
            .iter()
            .filter(|(_, v)| !is_implicit_zero(**v))
            .map(|(i, v)| (*i, *v))
            .unzip();
        Ok(Storage::Sparse {
            size,
            indices,
            values,
        })
    }

    /// Stores `values` in the requested form; fails on empty input.
    pub fn from_values(values: Vec<f64>, storage_type: StorageType) -> Result<Self> {
        let dense = Self::dense(values)?;
        Ok(match storage_type {
            StorageType::Dense => dense,
            StorageType::Sparse => dense.to_sparse(),
        })
    }

    pub fn storage_type(&self) -> StorageType {
        match self {
            Storage::Dense(_) => StorageType::Dense,
            Storage::Sparse { .. } => StorageType::Sparse,
        }
    }

    pub fn size(&self) -> usize {
        match self {
            Storage::Dense(values) => values.len(),
            Storage::Sparse { size, .. } => *size,
        }
    }

    /// Value at `index`; zero for unpopulated sparse indices.
    pub fn get_si(&self, index: usize) -> Result<f64> {
        let len = self.size();
        if index >= len {
            return Err(Error::IndexOutOfBounds { index, len });
        }
        Ok(self.get_unchecked(index))
    }

    pub(crate) fn get_unchecked(&self, index: usize) -> f64 {
        match self {
            Storage::Dense(values) => values[index],
            Storage::Sparse {
                indices, values, ..
            } => match indices.binary_search(&index) {
                Ok(pos) => values[pos],
                Err(_) => 0.0,
            },
        }
    }

    /// Number of non-zero values.
    pub fn cardinality(&self) -> usize {
        match self {
            Storage::Dense(values) => values.iter().filter(|v| **v != 0.0).count(),
            Storage::Sparse { values, .. } => values.iter().filter(|v| **v != 0.0).count(),
        }
    }

    /// Sum of all values.
    pub fn z_sum(&self) -> f64 {
        match self {
            Storage::Dense(values) => values.iter().sum(),
            Storage::Sparse { values, .. } => values.iter().sum(),
        }
    }

    /// Every value in index order, zeros included.
    pub fn dense_values(&self) -> Vec<f64> {
        match self {
            Storage::Dense(values) => values.clone(),
            Storage::Sparse {
                size,
                indices,
                values,
            } => {
                let mut out = vec![0.0; *size];
                for (index, value) in indices.iter().zip(values) {
                    out[*index] = *value;
                }
                out
            }
        }
    }

    pub fn to_dense(&self) -> Storage {
        match self {
            Storage::Dense(_) => self.clone(),
            Storage::Sparse { .. } => {
                trace!("Densifying {} values", self.size());
                Storage::Dense(self.dense_values())
            }
        }
    }

    /// Sparse copy; `+0.0` entries are dropped, `-0.0` is kept so it reads back unchanged.
    pub fn to_sparse(&self) -> Storage {
        match self {
            Storage::Sparse { .. } => self.clone(),
            Storage::Dense(values) => {
                let (indices, values): (Vec<usize>, Vec<f64>) = values
                    .iter()
                    .enumerate()
                    .filter(|(_, v)| !is_implicit_zero(**v))
                    .map(|(i, v)| (i, *v))
                    .unzip();
                trace!(
                    "Sparsified {} values into {} entries",
                    self.size(),
                    indices.len()
                );
                Storage::Sparse {
                    size: self.size(),
                    indices,
                    values,
                }
            }
        }
    }

    pub fn to_storage_type(&self, storage_type: StorageType) -> Storage {
        match storage_type {
            StorageType::Dense => self.to_dense(),
            StorageType::Sparse => self.to_sparse(),
        }
    }

    /// Element-wise sum. Sparse only when both operands are sparse.
    pub fn plus(&self, other: &Storage) -> Result<Storage> {
        self.additive(other, |a, b| a + b)
    }

    /// Element-wise difference. Sparse only when both operands are sparse.
    pub fn minus(&self, other: &Storage) -> Result<Storage> {
        self.additive(other, |a, b| a - b)
    }

    /// Element-wise product. Dense only when both operands are dense.
    pub fn times(&self, other: &Storage) -> Result<Storage> {
        self.multiplicative(other, |a, b| a * b)
    }

    /// Element-wise quotient. Dense only when both operands are dense.
    pub fn divide(&self, other: &Storage) -> Result<Storage> {
        self.multiplicative(other, |a, b| a / b)
    }

    /// Applies `f` to every value, keeping the storage type.
    pub fn map<Op>(&self, f: Op) -> Storage
    where
        Op: Fn(f64) -> f64 + Sync + Send,
    {
        match self {
            Storage::Dense(values) => Storage::Dense(convert(values, f)),
            Storage::Sparse {
                size,
                indices,
                values,
            } => {
                if is_implicit_zero(f(0.0)) {
                    let mapped = convert(values, f);
                    let (indices, values) = indices
                        .iter()
                        .zip(mapped)
                        .filter(|(_, v)| !is_implicit_zero(*v))
                        .map(|(i, v)| (*i, v))
                        .unzip();
                    Storage::Sparse {
                        size: *size,
                        indices,
                        values,
                    }
                } else {
                    Storage::Dense(convert(&self.dense_values(), f)).to_sparse()
                }
            }
        }
    }

    fn check_size(&self, other: &Storage) -> Result<()> {
        if self.size() != other.size() {
            return Err(Error::LengthMismatch {
                left: self.size(),
                right: other.size(),
            });
        }
        Ok(())
    }

    fn additive<Op>(&self, other: &Storage, f: Op) -> Result<Storage>
    where
        Op: Fn(f64, f64) -> f64 + Sync + Send,
    {
        self.check_size(other)?;
        match (self, other) {
            (
                Storage::Sparse {
                    size,
                    indices: li,
                    values: lv,
                },
                Storage::Sparse {
                    indices: ri,
                    values: rv,
                    ..
                },
            ) => Ok(merge_sparse(
                *size,
                (li.as_slice(), lv.as_slice()),
                (ri.as_slice(), rv.as_slice()),
                f,
            )),
            _ => Ok(Storage::Dense(zip_with(
                &self.dense_values(),
                &other.dense_values(),
                f,
            ))),
        }
    }

    fn multiplicative<Op>(&self, other: &Storage, f: Op) -> Result<Storage>
    where
        Op: Fn(f64, f64) -> f64 + Sync + Send,
    {
        self.check_size(other)?;
        // Computed densely so that NaN and infinity meet implicit zeros exactly as they would in
        // dense form.
        let result = Storage::Dense(zip_with(&self.dense_values(), &other.dense_values(), f));
        match (self, other) {
            (Storage::Dense(_), Storage::Dense(_)) => Ok(result),
            _ => Ok(result.to_sparse()),
        }
    }
}

/// Union merge of two sorted sparse operands; `+0.0` results are dropped.
fn merge_sparse<Op>(
    size: usize,
    (li, lv): (&[usize], &[f64]),
    (ri, rv): (&[usize], &[f64]),
    f: Op,
) -> Storage
where
    Op: Fn(f64, f64) -> f64,
{
    let mut indices = Vec::with_capacity(li.len() + ri.len());
    let mut values = Vec::with_capacity(li.len() + ri.len());
    let (mut a, mut b) = (0, 0);

    while a < li.len() || b < ri.len() {
        let (index, value) = match (li.get(a), ri.get(b)) {
            (Some(&x), Some(&y)) if x == y => {
                a += 1;
                b += 1;
                (x, f(lv[a - 1], rv[b - 1]))
            }
            (Some(&x), Some(&y)) if x < y => {
                a += 1;
                (x, f(lv[a - 1], 0.0))
            }
            (Some(_), Some(&y)) => {
                b += 1;
                (y, f(0.0, rv[b - 1]))
            }
            (Some(&x), None) => {
                a += 1;
                (x, f(lv[a - 1], 0.0))
            }
            (None, Some(&y)) => {
                b += 1;
                (y, f(0.0, rv[b - 1]))
            }
            (None, None) => break,
        };
        if !is_implicit_zero(value) {
            indices.push(index);
            values.push(value);
        }
    }

    Storage::Sparse {
        size,
        indices,
        values,
    }
}

/// Unpopulated sparse indices read as `+0.0`; only that exact bit pattern may be left out.
fn is_implicit_zero(value: f64) -> bool {
    value.to_bits() == 0
}

impl PartialEq for Storage {
    /// Bit-identical values per index, whatever the storage type, so NaN equals NaN.
    fn eq(&self, other: &Self) -> bool {
        self.size() == other.size()
            && (0..self.size())
                .all(|i| self.get_unchecked(i).to_bits() == other.get_unchecked(i).to_bits())
    }
}

//! Unit descriptors and typed unit handles.

use crate::dimension::Dimensions;
use crate::error::{Error, Result};
use crate::family::{AbsoluteFamily, Family, NamedFamily, Si};
use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::Deref;
use std::sync::Arc;

/// How a descriptor came into existence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Origin {
    /// Declared statically, at runtime, or through configuration.
    Named,
    /// Created by a [`UnitRegistry`](crate::UnitRegistry) for a dimension vector nobody named.
    Synthesized,
}

/// Immutable description of one measurement unit.
///
/// A value `v` in this unit corresponds to `v * factor + offset` in the standard unit of its
/// family. The standard unit itself has factor 1 and offset 0.
///
/// Equality and hashing consider only the dimension vector, the factor and the offset, so two
/// separately synthesized descriptors for the same dimensions are interchangeable.
#[derive(Clone, Debug)]
pub struct UnitDescriptor {
    name: Cow<'static, str>,
    abbreviation: Cow<'static, str>,
    family: Cow<'static, str>,
    factor: f64,
    offset: f64,
    dimensions: Dimensions,
    origin: Origin,
    standard: Option<Arc<UnitDescriptor>>,
}

impl UnitDescriptor {
    /// A named standard unit: factor 1, offset 0.
    pub fn new_standard(
        name: impl Into<Cow<'static, str>>,
        abbreviation: impl Into<Cow<'static, str>>,
        family: impl Into<Cow<'static, str>>,
        dimensions: Dimensions,
    ) -> Self {
        Self {
            name: name.into(),
            abbreviation: abbreviation.into(),
            family: family.into(),
            factor: 1.0,
            offset: 0.0,
            dimensions,
            origin: Origin::Named,
            standard: None,
        }
    }

    /// The generic SI unit the registry creates for an unnamed dimension vector.
    pub(crate) fn synthesized(dimensions: Dimensions) -> Self {
        Self {
            name: Cow::Owned(format!("SI[{}]", dimensions)),
            abbreviation: Cow::Owned(dimensions.to_string()),
            family: Cow::Borrowed(crate::family::Si::NAME),
            factor: 1.0,
            offset: 0.0,
            dimensions,
            origin: Origin::Synthesized,
            standard: None,
        }
    }

    /// A non-standard unit of the same family as `standard`.
    ///
    /// Fails with [`Error::InvalidFactor`] when `factor` is zero or not finite, and with
    /// [`Error::InvalidOffset`] when `offset` is not finite.
    pub fn derived(
        standard: &Arc<UnitDescriptor>,
        name: impl Into<Cow<'static, str>>,
        abbreviation: impl Into<Cow<'static, str>>,
        factor: f64,
        offset: f64,
    ) -> Result<Self> {
        if !factor.is_finite() || factor == 0.0 {
            return Err(Error::InvalidFactor(factor));
        }
        if !offset.is_finite() {
            return Err(Error::InvalidOffset(offset));
        }
        Ok(Self::derived_unchecked(
            standard,
            name,
            abbreviation,
            factor,
            offset,
        ))
    }

    pub(crate) fn derived_unchecked(
        standard: &Arc<UnitDescriptor>,
        name: impl Into<Cow<'static, str>>,
        abbreviation: impl Into<Cow<'static, str>>,
        factor: f64,
        offset: f64,
    ) -> Self {
        let root = standard.standard_descriptor();
        Self {
            name: name.into(),
            abbreviation: abbreviation.into(),
            family: root.family.clone(),
            factor,
            offset,
            dimensions: root.dimensions,
            origin: Origin::Named,
            standard: Some(root),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn abbreviation(&self) -> &str {
        &self.abbreviation
    }

    /// Name of the family this unit belongs to (`"SI"` for synthesized units).
    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Base-dimension exponents, used for derivation only.
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    pub fn is_standard(&self) -> bool {
        self.standard.is_none()
    }

    pub fn is_affine(&self) -> bool {
        self.offset != 0.0
    }

    /// The standard unit of this unit's family (itself when it is the standard).
    pub fn standard_descriptor(self: &Arc<Self>) -> Arc<Self> {
        match &self.standard {
            Some(standard) => Arc::clone(standard),
            None => Arc::clone(self),
        }
    }

    /// Affine map into the standard unit.
    #[inline]
    pub fn to_standard(&self, value: f64) -> f64 {
        if self.standard.is_none() {
            return value;
        }
        value * self.factor + self.offset
    }

    /// Inverse of [`UnitDescriptor::to_standard`].
    #[inline]
    pub fn from_standard(&self, si: f64) -> f64 {
        if self.standard.is_none() {
            return si;
        }
        (si - self.offset) / self.factor
    }

    /// Scale-only map, used for differences (a step of 1 °C is a step of 1 K).
    #[inline]
    pub fn to_standard_linear(&self, value: f64) -> f64 {
        value * self.factor
    }

    #[inline]
    pub fn from_standard_linear(&self, si: f64) -> f64 {
        si / self.factor
    }
}

impl PartialEq for UnitDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.dimensions == other.dimensions
            && self.factor.to_bits() == other.factor.to_bits()
            && self.offset.to_bits() == other.offset.to_bits()
    }
}

impl Eq for UnitDescriptor {}

impl Hash for UnitDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.dimensions.hash(state);
        self.factor.to_bits().hash(state);
        self.offset.to_bits().hash(state);
    }
}

impl fmt::Display for UnitDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.abbreviation)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Typed handle
// ─────────────────────────────────────────────────────────────────────────────

/// A [`UnitDescriptor`] tagged with the family type `F`.
///
/// Cloning is cheap (one reference count). Values of `Unit<Length>` can only describe lengths,
/// which is what lets `Scalar<Length>` reject a mass unit at compile time.
///
/// ```rust
/// use dimval_core::units::length::{Length, KILOMETER};
/// use dimval_core::Unit;
///
/// let league = Unit::<Length>::scaled("league", "lea", 4_828.032).unwrap();
/// assert_eq!(league.to_standard(1.0), 4_828.032);
/// assert!((KILOMETER.from_standard(4_828.032) - 4.828032).abs() < 1e-12);
/// ```
pub struct Unit<F: Family> {
    descriptor: Arc<UnitDescriptor>,
    family: PhantomData<fn() -> F>,
}

impl<F: Family> Unit<F> {
    pub(crate) fn from_descriptor(descriptor: Arc<UnitDescriptor>) -> Self {
        Self {
            descriptor,
            family: PhantomData,
        }
    }

    pub fn descriptor(&self) -> &Arc<UnitDescriptor> {
        &self.descriptor
    }

    /// The standard unit of this unit's family.
    pub fn standard(&self) -> Unit<F> {
        Unit::from_descriptor(self.descriptor.standard_descriptor())
    }

    /// Same descriptor, different family tag. Callers check the dimensions first.
    pub(crate) fn retag<G: Family>(&self) -> Unit<G> {
        Unit::from_descriptor(Arc::clone(&self.descriptor))
    }

    /// `true` when both handles point at the same descriptor or at value-equal ones.
    pub fn same_as(&self, other: &Unit<F>) -> bool {
        Arc::ptr_eq(&self.descriptor, &other.descriptor) || self.descriptor == other.descriptor
    }
}

impl<F: NamedFamily> Unit<F> {
    pub(crate) fn standard_for_family(name: &'static str, abbreviation: &'static str) -> Self {
        Self::from_descriptor(Arc::new(UnitDescriptor::new_standard(
            name,
            abbreviation,
            F::NAME,
            F::DIMENSIONS,
        )))
    }

    pub(crate) fn scaled_unchecked(
        name: &'static str,
        abbreviation: &'static str,
        factor: f64,
        offset: f64,
    ) -> Self {
        let standard = F::standard_unit();
        Self::from_descriptor(Arc::new(UnitDescriptor::derived_unchecked(
            standard.descriptor(),
            name,
            abbreviation,
            factor,
            offset,
        )))
    }

    /// A new unit of family `F`: one of it equals `factor` standard units.
    pub fn scaled(
        name: impl Into<Cow<'static, str>>,
        abbreviation: impl Into<Cow<'static, str>>,
        factor: f64,
    ) -> Result<Self> {
        let standard = F::standard_unit();
        let descriptor =
            UnitDescriptor::derived(standard.descriptor(), name, abbreviation, factor, 0.0)?;
        Ok(Self::from_descriptor(Arc::new(descriptor)))
    }
}

impl Unit<Si> {
    /// Wraps any descriptor, typically one handed out by a [`crate::UnitRegistry`].
    pub fn new(descriptor: Arc<UnitDescriptor>) -> Self {
        Self::from_descriptor(descriptor)
    }
}

impl<F: AbsoluteFamily> Unit<F> {
    /// A new unit with an additive offset: `v` in this unit is `v * factor + offset` standard units.
    pub fn affine(
        name: impl Into<Cow<'static, str>>,
        abbreviation: impl Into<Cow<'static, str>>,
        factor: f64,
        offset: f64,
    ) -> Result<Self> {
        let standard = F::standard_unit();
        let descriptor =
            UnitDescriptor::derived(standard.descriptor(), name, abbreviation, factor, offset)?;
        Ok(Self::from_descriptor(Arc::new(descriptor)))
    }
}

impl<F: Family> Clone for Unit<F> {
    fn clone(&self) -> Self {
        Self::from_descriptor(Arc::clone(&self.descriptor))
    }
}

impl<F: Family> Deref for Unit<F> {
    type Target = UnitDescriptor;

    fn deref(&self) -> &UnitDescriptor {
        &self.descriptor
    }
}

impl<F: Family> PartialEq for Unit<F> {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl<F: Family> Eq for Unit<F> {}

impl<F: Family> Hash for Unit<F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.descriptor.hash(state);
    }
}

impl<F: Family> fmt::Debug for Unit<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unit")
            .field("family", &F::NAME)
            .field("name", &self.descriptor.name())
            .field("factor", &self.descriptor.factor())
            .field("offset", &self.descriptor.offset())
            .finish()
    }
}

impl<F: Family> fmt::Display for Unit<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.descriptor.abbreviation())
    }
}

//! Process-wide and injectable unit registries.
//!
//! The registry maps a dimension vector to the unit that represents it. Named units (the
//! standard unit of every built-in family, plus anything registered at runtime or through
//! [`RegistryConfig`]) take precedence; when a product or quotient produces a dimension vector
//! nobody named, a generic SI unit is synthesized and cached.
//!
//! ```rust
//! use dimval_core::{Operation, UnitRegistry};
//! use dimval_core::units::force::NEWTON;
//! use dimval_core::units::length::METER;
//!
//! let registry = UnitRegistry::with_standard_units();
//! let unit = registry.derive(Operation::Multiply, &NEWTON, &METER)?;
//! assert_eq!(unit.name(), "joule");
//! # Ok::<(), dimval_core::Error>(())
//! ```

use crate::config::RegistryConfig;
use crate::dimension::Dimensions;
use crate::error::{Error, Result};
use crate::family::NamedFamily;
use crate::unit::{Origin, UnitDescriptor};
use crate::units::dimensionless::Dimensionless;
use core::fmt;
use log::{debug, info, trace, warn};
use once_cell::sync::Lazy;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Binary operation whose result unit is being derived.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Multiply,
    Divide,
}

impl Operation {
    /// Dimension vector of `left <op> right`.
    ///
    /// Fails with [`Error::InvalidDimensions`] when an exponent leaves the `i8` range.
    pub fn apply(self, left: Dimensions, right: Dimensions) -> Result<Dimensions> {
        let combined = match self {
            Operation::Multiply => left.checked_plus(right),
            Operation::Divide => left.checked_minus(right),
        };
        combined.ok_or_else(|| Error::InvalidDimensions {
            input: format!("[{}] {} [{}]", left.canonical_key(), self, right.canonical_key()),
            reason: "exponent overflow".to_string(),
        })
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Multiply => f.write_str("*"),
            Operation::Divide => f.write_str("/"),
        }
    }
}

static GLOBAL: Lazy<UnitRegistry> = Lazy::new(UnitRegistry::with_standard_units);

/// Append-only cache from dimension vectors to unit descriptors.
///
/// All methods take `&self`; the map sits behind an [`RwLock`] so a registry can be shared
/// between threads. Entries are never removed.
#[derive(Debug)]
pub struct UnitRegistry {
    entries: RwLock<HashMap<Dimensions, Arc<UnitDescriptor>>>,
}

impl UnitRegistry {
    /// An isolated registry that only knows the dimensionless unit.
    pub fn new() -> Self {
        let mut entries = HashMap::new();
        let one = Arc::clone(Dimensionless::standard_unit().descriptor());
        entries.insert(one.dimensions(), one);
        Self {
            entries: RwLock::new(entries),
        }
    }

    /// An isolated registry seeded with the standard unit of every built-in family.
    ///
    /// When two families share a dimension vector (energy and torque, for instance) the one
    /// registered first keeps the entry.
    pub fn with_standard_units() -> Self {
        let registry = Self::new();
        for descriptor in crate::units::standard_descriptors() {
            registry.register(descriptor);
        }
        registry
    }

    /// The process-wide registry, seeded on first use.
    pub fn global() -> &'static UnitRegistry {
        &GLOBAL
    }

    /// Builds a registry from a configuration file's contents.
    pub fn from_config(config: &RegistryConfig) -> Result<Self> {
        let registry = if config.include_standard_units {
            Self::with_standard_units()
        } else {
            Self::new()
        };

        for unit in &config.units {
            let dimensions: Dimensions = unit.dimensions.parse()?;
            let descriptor = Arc::new(UnitDescriptor::new_standard(
                unit.name.clone(),
                unit.abbreviation.clone(),
                unit.family.clone(),
                dimensions,
            ));
            let stored = registry.register(Arc::clone(&descriptor));
            if !Arc::ptr_eq(&stored, &descriptor) {
                warn!(
                    "Configured unit '{}' [{}] conflicts with named unit '{}'; keeping '{}'",
                    unit.name,
                    dimensions.canonical_key(),
                    stored.name(),
                    stored.name()
                );
            }
        }

        info!(
            "Built unit registry from configuration: {} entries ({} configured)",
            registry.len(),
            config.units.len()
        );
        Ok(registry)
    }

    /// Adds a named unit and returns the descriptor that ends up in the registry.
    ///
    /// A named unit replaces a synthesized entry for the same dimension vector. An existing
    /// named entry is kept and returned instead. A non-standard unit (`km`, `°C`) stands in for
    /// its family's standard unit, so registry entries always have factor 1 and no offset.
    pub fn register(&self, descriptor: Arc<UnitDescriptor>) -> Arc<UnitDescriptor> {
        let descriptor = if descriptor.is_standard() {
            descriptor
        } else {
            let standard = descriptor.standard_descriptor();
            trace!(
                "Registering standard unit '{}' in place of '{}'",
                standard.name(),
                descriptor.name()
            );
            standard
        };
        let dimensions = descriptor.dimensions();
        let mut entries = self.write();
        match entries.entry(dimensions) {
            Entry::Vacant(slot) => Arc::clone(slot.insert(descriptor)),
            Entry::Occupied(mut slot) => {
                if slot.get().origin() == Origin::Synthesized
                    && descriptor.origin() == Origin::Named
                {
                    debug!(
                        "Named unit '{}' replaces synthesized unit for [{}]",
                        descriptor.name(),
                        dimensions.canonical_key()
                    );
                    slot.insert(Arc::clone(&descriptor));
                    descriptor
                } else {
                    Arc::clone(slot.get())
                }
            }
        }
    }

    /// The unit registered for `dimensions`, if any.
    pub fn lookup(&self, dimensions: &Dimensions) -> Option<Arc<UnitDescriptor>> {
        let found = self.read().get(dimensions).cloned();
        trace!(
            "Registry lookup [{}]: {}",
            dimensions.canonical_key(),
            if found.is_some() { "hit" } else { "miss" }
        );
        found
    }

    /// The unit registered for `dimensions`, synthesizing and caching one when absent.
    ///
    /// Concurrent callers asking for the same new dimension vector all receive the single
    /// descriptor that won the insert.
    pub fn lookup_or_create(&self, dimensions: Dimensions) -> Arc<UnitDescriptor> {
        if let Some(found) = self.lookup(&dimensions) {
            return found;
        }

        let mut entries = self.write();
        match entries.entry(dimensions) {
            Entry::Occupied(slot) => Arc::clone(slot.get()),
            Entry::Vacant(slot) => {
                let created = Arc::new(UnitDescriptor::synthesized(dimensions));
                debug!(
                    "Synthesized unit '{}' for [{}]",
                    created.name(),
                    dimensions.canonical_key()
                );
                Arc::clone(slot.insert(created))
            }
        }
    }

    /// Unit of `left <op> right`.
    pub fn derive(
        &self,
        operation: Operation,
        left: &UnitDescriptor,
        right: &UnitDescriptor,
    ) -> Result<Arc<UnitDescriptor>> {
        let dimensions = operation.apply(left.dimensions(), right.dimensions())?;
        Ok(self.lookup_or_create(dimensions))
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// All registered dimension vectors, sorted by their canonical key.
    pub fn keys(&self) -> Vec<Dimensions> {
        let mut keys: Vec<Dimensions> = self.read().keys().copied().collect();
        keys.sort_by_cached_key(Dimensions::canonical_key);
        keys
    }

    // Every mutation is a single map insert, so a poisoned map is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<Dimensions, Arc<UnitDescriptor>>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<Dimensions, Arc<UnitDescriptor>>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}

//! Predefined quantity families and their named units.
//!
//! `dimval-core` ships a small set of built-in families so that derivation, formatting and the
//! typed relations between them work out of the box.
//!
//! ## Modules
//!
//! - [`dimensionless`]: plain numbers (`1`).
//! - [`angle`]: plane angles, with [`angle::Direction`] as the absolute variant.
//! - [`length`]: lengths, with [`length::Position`] as the absolute variant.
//! - [`mass`]: masses (relative only).
//! - [`duration`]: durations, with [`duration::Time`] as the absolute variant.
//! - [`temperature`]: temperature differences, with [`temperature::AbsoluteTemperature`].
//! - [`area`], [`volume`], [`speed`], [`acceleration`], [`force`], [`energy`], [`power`],
//!   [`density`], [`frequency`]: derived mechanical families.

use crate::family::NamedFamily;
use crate::unit::UnitDescriptor;
use std::sync::Arc;

pub mod acceleration;
pub mod angle;
pub mod area;
pub mod density;
pub mod dimensionless;
pub mod duration;
pub mod energy;
pub mod force;
pub mod frequency;
pub mod length;
pub mod mass;
pub mod power;
pub mod speed;
pub mod temperature;
pub mod volume;

use acceleration::Acceleration;
use angle::Angle;
use area::Area;
use density::Density;
use dimensionless::Dimensionless;
use duration::Duration;
use energy::Energy;
use force::Force;
use frequency::Frequency;
use length::Length;
use mass::Mass;
use power::Power;
use speed::Speed;
use temperature::Temperature;
use volume::Volume;

/// Standard units of the built-in families, in registration order.
///
/// When two families share a dimension vector, the earlier one is what derivation returns.
pub fn standard_descriptors() -> Vec<Arc<UnitDescriptor>> {
    vec![
        Arc::clone(Dimensionless::standard_unit().descriptor()),
        Arc::clone(Angle::standard_unit().descriptor()),
        Arc::clone(Length::standard_unit().descriptor()),
        Arc::clone(Mass::standard_unit().descriptor()),
        Arc::clone(Duration::standard_unit().descriptor()),
        Arc::clone(Temperature::standard_unit().descriptor()),
        Arc::clone(Area::standard_unit().descriptor()),
        Arc::clone(Volume::standard_unit().descriptor()),
        Arc::clone(Speed::standard_unit().descriptor()),
        Arc::clone(Acceleration::standard_unit().descriptor()),
        Arc::clone(Force::standard_unit().descriptor()),
        Arc::clone(Energy::standard_unit().descriptor()),
        Arc::clone(Power::standard_unit().descriptor()),
        Arc::clone(Density::standard_unit().descriptor()),
        Arc::clone(Frequency::standard_unit().descriptor()),
    ]
}

relations! {
    Length * Length => Area;
    Area * Length => Volume;
    Length * Area => Volume;
    Area / Length => Length;
    Volume / Length => Area;
    Volume / Area => Length;

    Length / Duration => Speed;
    Speed * Duration => Length;
    Duration * Speed => Length;
    Length * Frequency => Speed;
    Speed / Duration => Acceleration;
    Acceleration * Duration => Speed;
    Duration * Acceleration => Speed;

    Mass * Acceleration => Force;
    Acceleration * Mass => Force;
    Force / Mass => Acceleration;
    Force / Acceleration => Mass;

    Force * Length => Energy;
    Length * Force => Energy;
    Energy / Length => Force;
    Energy / Force => Length;

    Energy / Duration => Power;
    Power * Duration => Energy;
    Duration * Power => Energy;
    Force * Speed => Power;
    Speed * Force => Power;
    Power / Speed => Force;
    Power / Force => Speed;

    Mass / Volume => Density;
    Density * Volume => Mass;
    Volume * Density => Mass;
    Mass / Density => Volume;

    Dimensionless / Duration => Frequency;
    Frequency * Duration => Dimensionless;
    Duration * Frequency => Dimensionless;
}

//! Energies.

use dimval_derive::Family;

#[derive(Debug, Family)]
#[family(dimensions = "kg.m2/s2", unit = "joule", symbol = "J")]
pub enum Energy {}

define_units! {
    Energy;
    JOULE = standard;
    KILOJOULE = ("kilojoule", "kJ", 1_000.0);
    MEGAJOULE = ("megajoule", "MJ", 1e6);
    /// Thermochemical calorie.
    CALORIE = ("calorie", "cal", 4.184);
    KILOCALORIE = ("kilocalorie", "kcal", 4_184.0);
    WATT_HOUR = ("watt hour", "Wh", 3_600.0);
    KILOWATT_HOUR = ("kilowatt hour", "kWh", 3.6e6);
    ELECTRONVOLT = ("electronvolt", "eV", 1.602_176_634e-19);
}

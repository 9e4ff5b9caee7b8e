//! Dimension vectors over the SI base dimensions.
//!
//! A [`Dimensions`] value records one integer exponent per [`BaseDimension`]. Units never use it
//! for conversion; it exists so that the product or quotient of two quantities can be mapped to
//! the unit of the result.
//!
//! ```rust
//! use dimval_core::Dimensions;
//!
//! let force: Dimensions = "kg.m/s2".parse().unwrap();
//! let length: Dimensions = "m".parse().unwrap();
//! assert_eq!(force.plus(length).to_string(), "kg.m2/s2");
//! ```

use crate::error::{Error, Result};
use core::fmt;
use core::str::FromStr;

/// Number of base dimensions in a [`Dimensions`] vector.
pub const BASE_COUNT: usize = 9;

/// One of the base dimensions, in the fixed order used by [`Dimensions`].
///
/// Plane and solid angle are treated as base dimensions so that angles are not dimensionless.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BaseDimension {
    PlaneAngle,
    SolidAngle,
    Mass,
    Length,
    Time,
    Current,
    Temperature,
    Amount,
    LuminousIntensity,
}

impl BaseDimension {
    /// All base dimensions in vector order.
    pub const ALL: [BaseDimension; BASE_COUNT] = [
        BaseDimension::PlaneAngle,
        BaseDimension::SolidAngle,
        BaseDimension::Mass,
        BaseDimension::Length,
        BaseDimension::Time,
        BaseDimension::Current,
        BaseDimension::Temperature,
        BaseDimension::Amount,
        BaseDimension::LuminousIntensity,
    ];

    /// SI abbreviation of the base unit (`rad`, `sr`, `kg`, `m`, `s`, `A`, `K`, `mol`, `cd`).
    pub const fn symbol(self) -> &'static str {
        match self {
            BaseDimension::PlaneAngle => "rad",
            BaseDimension::SolidAngle => "sr",
            BaseDimension::Mass => "kg",
            BaseDimension::Length => "m",
            BaseDimension::Time => "s",
            BaseDimension::Current => "A",
            BaseDimension::Temperature => "K",
            BaseDimension::Amount => "mol",
            BaseDimension::LuminousIntensity => "cd",
        }
    }

    /// Position of this base dimension in the exponent array.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Strips the longest matching base symbol from the front of `input`.
    fn strip_symbol(input: &str) -> Option<(BaseDimension, &str)> {
        // Longer symbols first so that `mol` is not read as `m` and `sr` not as `s`.
        const SEARCH_ORDER: [BaseDimension; BASE_COUNT] = [
            BaseDimension::PlaneAngle,
            BaseDimension::Amount,
            BaseDimension::SolidAngle,
            BaseDimension::Mass,
            BaseDimension::LuminousIntensity,
            BaseDimension::Length,
            BaseDimension::Time,
            BaseDimension::Current,
            BaseDimension::Temperature,
        ];
        SEARCH_ORDER.iter().find_map(|base| {
            input
                .strip_prefix(base.symbol())
                .map(|rest| (*base, rest))
        })
    }
}

/// Integer exponents over the nine [`BaseDimension`]s.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Dimensions([i8; BASE_COUNT]);

impl Dimensions {
    /// The empty dimension vector (all exponents zero).
    pub const DIMENSIONLESS: Dimensions = Dimensions([0; BASE_COUNT]);

    /// Creates a dimension vector from exponents in [`BaseDimension::ALL`] order.
    pub const fn new(exponents: [i8; BASE_COUNT]) -> Self {
        Self(exponents)
    }

    /// A vector with exponent 1 for `base` and 0 elsewhere.
    pub const fn of(base: BaseDimension) -> Self {
        let mut exponents = [0; BASE_COUNT];
        exponents[base.index()] = 1;
        Self(exponents)
    }

    pub const fn exponents(&self) -> [i8; BASE_COUNT] {
        self.0
    }

    pub const fn exponent(&self, base: BaseDimension) -> i8 {
        self.0[base.index()]
    }

    /// Component-wise sum, the dimension of a product.
    pub const fn plus(self, other: Dimensions) -> Dimensions {
        let mut out = [0; BASE_COUNT];
        let mut i = 0;
        while i < BASE_COUNT {
            out[i] = self.0[i] + other.0[i];
            i += 1;
        }
        Dimensions(out)
    }

    /// Component-wise difference, the dimension of a quotient.
    pub const fn minus(self, other: Dimensions) -> Dimensions {
        let mut out = [0; BASE_COUNT];
        let mut i = 0;
        while i < BASE_COUNT {
            out[i] = self.0[i] - other.0[i];
            i += 1;
        }
        Dimensions(out)
    }

    /// [`Dimensions::plus`], or `None` when an exponent leaves the `i8` range.
    pub const fn checked_plus(self, other: Dimensions) -> Option<Dimensions> {
        let mut out = [0; BASE_COUNT];
        let mut i = 0;
        while i < BASE_COUNT {
            out[i] = match self.0[i].checked_add(other.0[i]) {
                Some(exponent) => exponent,
                None => return None,
            };
            i += 1;
        }
        Some(Dimensions(out))
    }

    /// [`Dimensions::minus`], or `None` when an exponent leaves the `i8` range.
    pub const fn checked_minus(self, other: Dimensions) -> Option<Dimensions> {
        let mut out = [0; BASE_COUNT];
        let mut i = 0;
        while i < BASE_COUNT {
            out[i] = match self.0[i].checked_sub(other.0[i]) {
                Some(exponent) => exponent,
                None => return None,
            };
            i += 1;
        }
        Some(Dimensions(out))
    }

    pub const fn invert(self) -> Dimensions {
        Dimensions::DIMENSIONLESS.minus(self)
    }

    /// Repeated product: the dimension of `x^n`.
    pub const fn times(self, n: i8) -> Dimensions {
        let mut out = [0; BASE_COUNT];
        let mut i = 0;
        while i < BASE_COUNT {
            out[i] = self.0[i] * n;
            i += 1;
        }
        Dimensions(out)
    }

    /// `const` equality, usable in compile-time assertions.
    pub const fn equals(&self, other: &Dimensions) -> bool {
        let mut i = 0;
        while i < BASE_COUNT {
            if self.0[i] != other.0[i] {
                return false;
            }
            i += 1;
        }
        true
    }

    pub const fn is_dimensionless(&self) -> bool {
        self.equals(&Dimensions::DIMENSIONLESS)
    }

    /// Undivided form with signed exponents, e.g. `kg.m.s-2`; `1` when dimensionless.
    pub fn canonical_key(&self) -> String {
        let terms: Vec<String> = BaseDimension::ALL
            .iter()
            .filter(|base| self.exponent(**base) != 0)
            .map(|base| term(*base, self.exponent(*base)))
            .collect();
        if terms.is_empty() {
            "1".to_string()
        } else {
            terms.join(".")
        }
    }
}

fn term(base: BaseDimension, exponent: i8) -> String {
    if exponent == 1 {
        base.symbol().to_string()
    } else {
        format!("{}{}", base.symbol(), exponent)
    }
}

impl fmt::Display for Dimensions {
    /// Divided form: positive exponents, then `/` and the negated negative ones (`kg.m/s2`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let numerator: Vec<String> = BaseDimension::ALL
            .iter()
            .filter(|base| self.exponent(**base) > 0)
            .map(|base| term(*base, self.exponent(*base)))
            .collect();
        let denominator: Vec<String> = BaseDimension::ALL
            .iter()
            .filter(|base| self.exponent(**base) < 0)
            .map(|base| term(*base, -self.exponent(*base)))
            .collect();

        match (numerator.is_empty(), denominator.is_empty()) {
            (true, true) => f.write_str("1"),
            (false, true) => f.write_str(&numerator.join(".")),
            (true, false) => write!(f, "1/{}", denominator.join(".")),
            (false, false) => write!(f, "{}/{}", numerator.join("."), denominator.join(".")),
        }
    }
}

impl FromStr for Dimensions {
    type Err = Error;

    /// Parses `kg.m2/s2`, `m/s`, `1/s`, `s-1`, `kgm2/s2` and `1`.
    fn from_str(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let mut parts = trimmed.split('/');
        let numerator = parts.next().unwrap_or_default();
        let denominator = parts.next();
        if parts.next().is_some() {
            return Err(invalid(input, "more than one `/`"));
        }

        let mut exponents = parse_part(numerator, input)?;
        if let Some(denominator) = denominator {
            if denominator.trim().is_empty() {
                return Err(invalid(input, "empty denominator"));
            }
            let below = parse_part(denominator, input)?;
            for (slot, exp) in exponents.iter_mut().zip(below) {
                *slot = slot
                    .checked_sub(exp)
                    .ok_or_else(|| invalid(input, "exponent overflow"))?;
            }
        }
        Ok(Dimensions(exponents))
    }
}

fn parse_part(part: &str, input: &str) -> Result<[i8; BASE_COUNT]> {
    let mut exponents = [0i8; BASE_COUNT];
    let mut rest = part.trim();
    if rest.is_empty() || rest == "1" {
        return Ok(exponents);
    }

    while !rest.is_empty() {
        rest = rest.strip_prefix('.').unwrap_or(rest);
        let (base, after) = BaseDimension::strip_symbol(rest)
            .ok_or_else(|| invalid(input, &format!("unknown base dimension at `{}`", rest)))?;
        let after = after.strip_prefix('^').unwrap_or(after);

        let negative = after.starts_with('-');
        let digits_start = usize::from(negative);
        let digits_len = after[digits_start..]
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();
        if negative && digits_len == 0 {
            return Err(invalid(input, "dangling minus sign"));
        }

        let exponent: i8 = if digits_len == 0 {
            1
        } else {
            after[..digits_start + digits_len]
                .parse()
                .map_err(|_| invalid(input, "exponent out of range"))?
        };
        let slot = &mut exponents[base.index()];
        *slot = slot
            .checked_add(exponent)
            .ok_or_else(|| invalid(input, "exponent overflow"))?;

        rest = &after[digits_start + digits_len..];
    }
    Ok(exponents)
}

fn invalid(input: &str, reason: &str) -> Error {
    Error::InvalidDimensions {
        input: input.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const NEWTON: Dimensions = Dimensions::new([0, 0, 1, 1, -2, 0, 0, 0, 0]);

    #[test]
    fn display_uses_divided_form() {
        assert_eq!(NEWTON.to_string(), "kg.m/s2");
        assert_eq!(Dimensions::DIMENSIONLESS.to_string(), "1");
        assert_eq!(Dimensions::of(BaseDimension::Time).invert().to_string(), "1/s");
        assert_eq!(
            Dimensions::new([0, 0, 0, 0, 0, 0, 0, 1, 0]).to_string(),
            "mol"
        );
    }

    #[test]
    fn canonical_key_is_undivided() {
        assert_eq!(NEWTON.canonical_key(), "kg.m.s-2");
        assert_eq!(Dimensions::DIMENSIONLESS.canonical_key(), "1");
    }

    #[test]
    fn parses_si_coefficient_notation() {
        let joule: Dimensions = "kg.m2/s2".parse().unwrap();
        assert_eq!(joule, NEWTON.plus(Dimensions::of(BaseDimension::Length)));
        assert_eq!("kgm2/s2".parse::<Dimensions>().unwrap(), joule);
        assert_eq!("kg.m^2.s-2".parse::<Dimensions>().unwrap(), joule);
        assert_eq!(
            "s-1".parse::<Dimensions>().unwrap(),
            "1/s".parse::<Dimensions>().unwrap()
        );
        assert_eq!("1".parse::<Dimensions>().unwrap(), Dimensions::DIMENSIONLESS);
        assert_eq!("".parse::<Dimensions>().unwrap(), Dimensions::DIMENSIONLESS);
    }

    #[test]
    fn longest_symbol_wins() {
        let d: Dimensions = "mol/sr".parse().unwrap();
        assert_eq!(d.exponent(BaseDimension::Amount), 1);
        assert_eq!(d.exponent(BaseDimension::SolidAngle), -1);
        assert_eq!(d.exponent(BaseDimension::Length), 0);
        assert_eq!(d.exponent(BaseDimension::Time), 0);
    }

    #[test]
    fn rejects_malformed_strings() {
        for bad in ["m/s/s", "kg.x", "m-", "m/", "m2q", "m200"] {
            assert!(
                matches!(bad.parse::<Dimensions>(), Err(Error::InvalidDimensions { .. })),
                "expected `{}` to be rejected",
                bad
            );
        }
    }

    #[test]
    fn const_arithmetic() {
        const SPEED: Dimensions = Dimensions::of(BaseDimension::Length)
            .minus(Dimensions::of(BaseDimension::Time));
        const _: () = assert!(SPEED.minus(SPEED).is_dimensionless());
        assert_eq!(SPEED.to_string(), "m/s");
        assert_eq!(SPEED.times(2).to_string(), "m2/s2");
        assert!(SPEED.plus(SPEED.invert()).is_dimensionless());
    }

    #[test]
    fn checked_arithmetic_detects_exponent_overflow() {
        let big = Dimensions::new([0, 0, 0, 100, 0, 0, 0, 0, 0]);
        assert_eq!(big.checked_plus(big), None);
        assert_eq!(big.invert().checked_minus(big), None);
        assert_eq!(big.checked_minus(big), Some(Dimensions::DIMENSIONLESS));
        assert_eq!(NEWTON.checked_plus(NEWTON), Some(NEWTON.times(2)));
    }

    fn small_dims() -> impl Strategy<Value = Dimensions> {
        prop::array::uniform9(-4i8..=4).prop_map(Dimensions::new)
    }

    proptest! {
        #[test]
        fn display_parses_back(d in small_dims()) {
            prop_assert_eq!(d.to_string().parse::<Dimensions>().unwrap(), d);
            prop_assert_eq!(d.canonical_key().parse::<Dimensions>().unwrap(), d);
        }

        #[test]
        fn plus_then_minus_is_identity(a in small_dims(), b in small_dims()) {
            prop_assert_eq!(a.plus(b).minus(b), a);
            prop_assert_eq!(a.checked_plus(b), Some(a.plus(b)));
            prop_assert_eq!(a.checked_minus(b), Some(a.minus(b)));
        }
    }
}

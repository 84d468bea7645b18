//! Dimensional unit vectors over the seven SI base dimensions.
//!
//! Every physical unit is represented as a vector of signed integer
//! exponents in a fixed slot order: length (m), time (s), mass (kg),
//! electric current (A), temperature (K), amount of substance (mol),
//! luminous intensity (cd). Multiplying quantities adds exponents,
//! dividing subtracts them, raising to an integer power scales them.

use std::fmt;
use std::ops::{Div, Mul};

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// Number of base dimensions in a unit vector.
pub const DIMENSION_COUNT: usize = 7;

/// Exponents of the seven SI base dimensions, in the fixed slot order
/// m, s, kg, A, K, mol, cd.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitVec([i32; DIMENSION_COUNT]);

impl UnitVec {
    /// The zero vector: a pure number with no physical dimension.
    pub const DIMENSIONLESS: Self = Self([0; DIMENSION_COUNT]);

    #[must_use]
    pub const fn new(exponents: [i32; DIMENSION_COUNT]) -> Self {
        Self(exponents)
    }

    /// Build a unit vector from a runtime slice.
    ///
    /// Catalog files and host payloads carry exponents as plain arrays;
    /// anything other than exactly seven entries is rejected.
    pub fn from_slice(exponents: &[i32]) -> Result<Self, ModelError> {
        let exponents: [i32; DIMENSION_COUNT] = exponents
            .try_into()
            .map_err(|_| ModelError::InvalidDimensionCount {
                found: exponents.len(),
            })?;
        Ok(Self(exponents))
    }

    #[must_use]
    pub const fn exponents(self) -> [i32; DIMENSION_COUNT] {
        self.0
    }

    /// Exponent of a single base dimension by slot index.
    ///
    /// # Panics
    ///
    /// Panics if `slot >= DIMENSION_COUNT`.
    #[must_use]
    pub const fn exponent(self, slot: usize) -> i32 {
        self.0[slot]
    }

    /// Unit of a product: exponents add component-wise.
    #[must_use]
    pub fn multiply(self, other: Self) -> Self {
        let mut out = self.0;
        for (slot, exp) in out.iter_mut().zip(other.0) {
            *slot += exp;
        }
        Self(out)
    }

    /// Unit of a quotient: exponents subtract component-wise.
    #[must_use]
    pub fn divide(self, other: Self) -> Self {
        let mut out = self.0;
        for (slot, exp) in out.iter_mut().zip(other.0) {
            *slot -= exp;
        }
        Self(out)
    }

    /// Unit of an integer power: every exponent scales by `exponent`.
    ///
    /// Only integer exponents exist in this algebra, so no rounding can
    /// occur. `power(0)` is dimensionless for every input.
    #[must_use]
    pub fn power(self, exponent: i32) -> Self {
        let mut out = self.0;
        for slot in &mut out {
            *slot *= exponent;
        }
        Self(out)
    }

    #[must_use]
    pub fn is_dimensionless(self) -> bool {
        self.0.iter().all(|&exp| exp == 0)
    }
}

impl Mul for UnitVec {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(rhs)
    }
}

impl Div for UnitVec {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        self.divide(rhs)
    }
}

impl fmt::Display for UnitVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, exp) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{exp}")?;
        }
        write!(f, "]")
    }
}

/// Whether a raw exponent slice denotes a pure number.
///
/// An empty slice counts as dimensionless; hosts hand over optional unit
/// payloads and absence means "no dimension" rather than an error.
#[must_use]
pub fn slice_is_dimensionless(exponents: &[i32]) -> bool {
    exponents.iter().all(|&exp| exp == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const METER: UnitVec = UnitVec::new([1, 0, 0, 0, 0, 0, 0]);
    const SECOND: UnitVec = UnitVec::new([0, 1, 0, 0, 0, 0, 0]);

    #[test]
    fn multiply_adds_exponents() {
        let speed = METER.divide(SECOND);
        assert_eq!(speed.exponents(), [1, -1, 0, 0, 0, 0, 0]);
        assert_eq!(speed.multiply(SECOND), METER);
    }

    #[test]
    fn operators_match_named_functions() {
        assert_eq!(METER * SECOND, METER.multiply(SECOND));
        assert_eq!(METER / SECOND, METER.divide(SECOND));
    }

    #[test]
    fn power_scales_every_slot() {
        let volume = METER.power(3);
        assert_eq!(volume.exponents(), [3, 0, 0, 0, 0, 0, 0]);
        assert!(METER.power(0).is_dimensionless());
    }

    #[test]
    fn dimensionless_checks() {
        assert!(UnitVec::DIMENSIONLESS.is_dimensionless());
        assert!(!METER.is_dimensionless());
        assert!(slice_is_dimensionless(&[]));
        assert!(slice_is_dimensionless(&[0, 0, 0]));
        assert!(!slice_is_dimensionless(&[0, 1, 0]));
    }

    #[test]
    fn from_slice_rejects_wrong_arity() {
        assert!(UnitVec::from_slice(&[1, 0, 0]).is_err());
        assert_eq!(
            UnitVec::from_slice(&[1, 0, 0, 0, 0, 0, 0]).unwrap(),
            METER
        );
    }

    #[test]
    fn serializes_as_plain_array() {
        let json = serde_json::to_string(&METER).unwrap();
        assert_eq!(json, "[1,0,0,0,0,0,0]");
        let round: UnitVec = serde_json::from_str(&json).unwrap();
        assert_eq!(round, METER);
    }

    #[test]
    fn displays_bracketed() {
        assert_eq!(METER.to_string(), "[1,0,0,0,0,0,0]");
    }
}

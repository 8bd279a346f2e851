//! Prime fields Z_p.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::traits::{Field, Ring};

/// The finite field Z_p for a prime `P`.
///
/// Elements are stored as their canonical residue in `[0, P)`. The field has
/// no order compatible with its arithmetic, so it implements `Field` but not
/// `OrderedRing`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct FiniteField<const P: u64>(u64);

impl<const P: u64> FiniteField<P> {
    /// Creates a new field element, reducing `value` modulo `P`.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value % P)
    }

    /// Creates a field element from a signed value.
    #[must_use]
    pub fn from_signed(value: i64) -> Self {
        // rem_euclid keeps the residue non-negative
        let r = i128::from(value).rem_euclid(i128::from(P));
        Self(u64::try_from(r).unwrap_or_default())
    }

    /// Returns the canonical residue.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns the characteristic (the prime p).
    #[must_use]
    pub const fn characteristic() -> u64 {
        P
    }

    fn mul_mod(a: u64, b: u64) -> u64 {
        let wide = u128::from(a) * u128::from(b) % u128::from(P);
        // wide < P, so it always fits
        u64::try_from(wide).unwrap_or_default()
    }
}

impl<const P: u64> Ring for FiniteField<P> {
    fn zero() -> Self {
        Self(0)
    }

    fn one() -> Self {
        Self::new(1)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }

    fn is_one(&self) -> bool {
        self.0 == 1 % P
    }
}

impl<const P: u64> Field for FiniteField<P> {
    fn inv(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            // Fermat: a^(p-2) = a^-1
            Some(Ring::pow(self, P - 2))
        }
    }
}

impl<const P: u64> Add for FiniteField<P> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let sum = u128::from(self.0) + u128::from(rhs.0);
        Self(u64::try_from(sum % u128::from(P)).unwrap_or_default())
    }
}

impl<const P: u64> Sub for FiniteField<P> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + (-rhs)
    }
}

impl<const P: u64> Mul for FiniteField<P> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(Self::mul_mod(self.0, rhs.0))
    }
}

impl<const P: u64> Div for FiniteField<P> {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    fn div(self, rhs: Self) -> Self::Output {
        match rhs.inv() {
            Some(inv) => self * inv,
            None => panic!("division by zero in Z_{}", P),
        }
    }
}

impl<const P: u64> Neg for FiniteField<P> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        if self.0 == 0 {
            self
        } else {
            Self(P - self.0)
        }
    }
}

impl<const P: u64> From<u64> for FiniteField<P> {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl<const P: u64> From<i64> for FiniteField<P> {
    fn from(value: i64) -> Self {
        Self::from_signed(value)
    }
}

impl<const P: u64> fmt::Display for FiniteField<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The field with two elements.
pub type GF2 = FiniteField<2>;

/// The NTT-friendly prime field 998244353.
pub type GF998244353 = FiniteField<998_244_353>;

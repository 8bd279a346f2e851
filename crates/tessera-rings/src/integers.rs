//! The ring of integers Z.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use dashu::integer::IBig;

use crate::traits::{OrderedRing, Ring};

/// The ring of arbitrary precision integers.
///
/// Wraps `dashu`'s `IBig`, so products never overflow the way machine
/// integers do.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Z(pub IBig);

impl Z {
    /// Creates a new integer.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(IBig::from(value))
    }

    /// Returns the inner `IBig`.
    #[must_use]
    pub fn into_inner(self) -> IBig {
        self.0
    }

    /// Returns a reference to the inner `IBig`.
    #[must_use]
    pub fn as_inner(&self) -> &IBig {
        &self.0
    }
}

impl Ring for Z {
    fn zero() -> Self {
        Self(IBig::ZERO)
    }

    fn one() -> Self {
        Self(IBig::ONE)
    }

    fn is_zero(&self) -> bool {
        self.0 == IBig::ZERO
    }

    fn is_one(&self) -> bool {
        self.0 == IBig::ONE
    }
}

impl OrderedRing for Z {}

impl num_traits::Zero for Z {
    fn zero() -> Self {
        <Self as Ring>::zero()
    }

    fn is_zero(&self) -> bool {
        <Self as Ring>::is_zero(self)
    }
}

impl num_traits::One for Z {
    fn one() -> Self {
        <Self as Ring>::one()
    }
}

impl Add for Z {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Z {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Mul for Z {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Neg for Z {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<i64> for Z {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<IBig> for Z {
    fn from(value: IBig) -> Self {
        Self(value)
    }
}

impl fmt::Display for Z {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

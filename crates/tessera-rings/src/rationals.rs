//! The field of rational numbers Q.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use dashu::base::UnsignedAbs;
use dashu::integer::{IBig, UBig};
use dashu::rational::RBig;

use crate::integers::Z;
use crate::traits::{Field, OrderedRing, Ring};

/// The field of arbitrary precision rational numbers.
///
/// Values are always kept in lowest terms with a positive denominator, so
/// structural equality is numeric equality.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Q(pub RBig);

impl Q {
    /// Creates a new rational from numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn new(num: i64, den: i64) -> Self {
        assert!(den != 0, "denominator cannot be zero");
        let (num, den) = if den < 0 {
            (-IBig::from(num), -IBig::from(den))
        } else {
            (IBig::from(num), IBig::from(den))
        };
        Self(RBig::from_parts(num, den.unsigned_abs()))
    }

    /// Creates a rational from an integer.
    #[must_use]
    pub fn from_integer(n: i64) -> Self {
        Self(RBig::from(IBig::from(n)))
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> Z {
        Z(self.0.numerator().clone())
    }

    /// Returns the (always positive) denominator.
    #[must_use]
    pub fn denominator(&self) -> Z {
        Z(IBig::from(self.0.denominator().clone()))
    }

    /// Returns true if the denominator is one.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        *self.0.denominator() == UBig::ONE
    }

    /// Returns the inner `RBig`.
    #[must_use]
    pub fn into_inner(self) -> RBig {
        self.0
    }

    /// Returns a reference to the inner `RBig`.
    #[must_use]
    pub fn as_inner(&self) -> &RBig {
        &self.0
    }
}

impl Ring for Q {
    fn zero() -> Self {
        Self(RBig::ZERO)
    }

    fn one() -> Self {
        Self(RBig::ONE)
    }

    fn is_zero(&self) -> bool {
        self.0 == RBig::ZERO
    }

    fn is_one(&self) -> bool {
        self.0 == RBig::ONE
    }
}

impl Field for Q {}

impl OrderedRing for Q {}

impl num_traits::Zero for Q {
    fn zero() -> Self {
        <Self as Ring>::zero()
    }

    fn is_zero(&self) -> bool {
        <Self as Ring>::is_zero(self)
    }
}

impl num_traits::One for Q {
    fn one() -> Self {
        <Self as Ring>::one()
    }
}

impl Add for Q {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Q {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Mul for Q {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Div for Q {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    fn div(self, rhs: Self) -> Self::Output {
        Self(self.0 / rhs.0)
    }
}

impl Neg for Q {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<i64> for Q {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl From<Z> for Q {
    fn from(value: Z) -> Self {
        Self(RBig::from(value.0))
    }
}

impl From<RBig> for Q {
    fn from(value: RBig) -> Self {
        Self(value)
    }
}

impl fmt::Display for Q {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.0.numerator())
        } else {
            write!(f, "{}/{}", self.0.numerator(), self.0.denominator())
        }
    }
}

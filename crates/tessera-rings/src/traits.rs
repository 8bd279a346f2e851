//! Algebraic structure traits.
//!
//! These traits describe the capabilities a coefficient type must supply
//! before polynomials can be built over it. Every polynomial algorithm is
//! written purely in terms of this capability set.

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A commutative ring with identity.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative and commutative with identity `one()`
/// - Multiplication distributes over addition
/// - Every element has an additive inverse (`neg`)
pub trait Ring:
    Clone + Eq + Debug + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Neg<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool {
        *self == Self::one()
    }

    /// Computes self + self + ... (n times).
    #[must_use]
    fn mul_by_scalar(&self, n: i64) -> Self {
        if n == 0 {
            return Self::zero();
        }

        // Double-and-add, so large multipliers stay cheap.
        let mut result = Self::zero();
        let mut base = self.clone();
        let mut k = n.unsigned_abs();

        while k > 0 {
            if k & 1 == 1 {
                result = result + base.clone();
            }
            k >>= 1;
            if k > 0 {
                base = base.clone() + base;
            }
        }

        if n < 0 {
            -result
        } else {
            result
        }
    }

    /// Computes self^n by repeated squaring.
    ///
    /// Uses O(log n) multiplications; `pow(0)` is `one()` for every element,
    /// including zero.
    #[must_use]
    fn pow(&self, n: u64) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base.clone();
            }
            exp >>= 1;
            if exp > 0 {
                base = base.clone() * base;
            }
        }

        result
    }
}

/// A field: a ring where every non-zero element has a multiplicative inverse.
///
/// Division by zero is outside the contract; implementors may panic.
pub trait Field: Ring + Div<Output = Self> {
    /// Computes the multiplicative inverse.
    ///
    /// Returns `None` if the element is zero.
    fn inv(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            Some(Self::one() / self.clone())
        }
    }

    /// Divides by another element, returning `None` when `other` is zero.
    fn checked_div(&self, other: &Self) -> Option<Self> {
        if other.is_zero() {
            None
        } else {
            Some(self.clone() / other.clone())
        }
    }
}

/// A ring with a total order compatible with its arithmetic.
///
/// The order is what decides signs when polynomials are rendered as text.
pub trait OrderedRing: Ring + Ord {
    /// Returns the absolute value.
    #[must_use]
    fn abs(&self) -> Self {
        if self.is_negative() {
            -self.clone()
        } else {
            self.clone()
        }
    }

    /// Returns the sign: -1, 0, or 1.
    fn signum(&self) -> i8 {
        match self.cmp(&Self::zero()) {
            std::cmp::Ordering::Less => -1,
            std::cmp::Ordering::Equal => 0,
            std::cmp::Ordering::Greater => 1,
        }
    }

    /// Returns true if strictly greater than zero.
    fn is_positive(&self) -> bool {
        *self > Self::zero()
    }

    /// Returns true if strictly less than zero.
    fn is_negative(&self) -> bool {
        *self < Self::zero()
    }
}

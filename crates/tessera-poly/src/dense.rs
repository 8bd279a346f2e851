//! Dense univariate polynomials.
//!
//! Coefficients live in a contiguous vector indexed by exponent. The vector
//! never ends in a zero, so the zero polynomial is the empty vector and the
//! degree is always `len - 1`.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use tessera_rings::{Field, OrderedRing, Ring};
use tracing::{debug, instrument, trace};

use crate::display;
use crate::error::{PolyError, Result};

/// A dense univariate polynomial.
///
/// Coefficients are stored in ascending degree order with trailing zeros
/// removed after every mutation. Multiplication is the schoolbook
/// convolution and evaluation accumulates a running power of the point, so
/// both cost grows with the degree rather than with the number of terms.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct DensePoly<R: Ring> {
    /// Coefficients in ascending degree order, without trailing zeros.
    coeffs: Vec<R>,
}

/// Pops trailing zero coefficients.
fn trim<R: Ring>(coeffs: &mut Vec<R>) {
    while coeffs.last().is_some_and(|c| c.is_zero()) {
        coeffs.pop();
    }
}

impl<R: Ring> DensePoly<R> {
    /// Creates a new polynomial from coefficients, `coeffs[i]` being the
    /// coefficient of x^i.
    #[must_use]
    pub fn new(mut coeffs: Vec<R>) -> Self {
        trim(&mut coeffs);
        Self { coeffs }
    }

    /// Creates a polynomial from any source of coefficients in ascending
    /// degree order.
    #[must_use]
    pub fn from_coeffs<I: IntoIterator<Item = R>>(coeffs: I) -> Self {
        Self::new(coeffs.into_iter().collect())
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self::constant(R::one())
    }

    /// Creates a constant polynomial. A zero constant gives the zero
    /// polynomial.
    #[must_use]
    pub fn constant(c: R) -> Self {
        Self::new(vec![c])
    }

    /// Creates the polynomial x.
    #[must_use]
    pub fn x() -> Self {
        Self::monomial(R::one(), 1)
    }

    /// Creates the monomial c * x^n.
    #[must_use]
    pub fn monomial(c: R, n: usize) -> Self {
        if c.is_zero() {
            return Self::zero();
        }
        let mut coeffs = vec![R::zero(); n + 1];
        coeffs[n] = c;
        Self { coeffs }
    }

    /// Returns the degree of the polynomial, or -1 for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> isize {
        // a Vec never holds more than isize::MAX elements
        isize::try_from(self.coeffs.len()).unwrap_or(isize::MAX) - 1
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Returns the leading coefficient, or `None` for the zero polynomial.
    #[must_use]
    pub fn leading_coeff(&self) -> Option<&R> {
        self.coeffs.last()
    }

    /// Returns true if the leading coefficient is one.
    #[must_use]
    pub fn is_monic(&self) -> bool {
        self.leading_coeff().is_some_and(Ring::is_one)
    }

    /// Returns the coefficient of x^i, zero when `i` exceeds the degree.
    #[must_use]
    pub fn coeff(&self, i: usize) -> R {
        self.coeffs.get(i).cloned().unwrap_or_else(R::zero)
    }

    /// Returns all coefficients in ascending degree order.
    #[must_use]
    pub fn coeffs(&self) -> &[R] {
        &self.coeffs
    }

    /// Iterates over the coefficients in ascending degree order.
    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.coeffs.iter()
    }

    /// Evaluates the polynomial at a point.
    ///
    /// Walks the coefficients upward, keeping a running power of `x`.
    #[must_use]
    pub fn eval(&self, x: &R) -> R {
        let mut result = R::zero();
        let mut power = R::one();
        let last = self.coeffs.len().saturating_sub(1);

        for (i, c) in self.coeffs.iter().enumerate() {
            if !c.is_zero() {
                result = result + c.clone() * power.clone();
            }
            if i < last {
                power = power * x.clone();
            }
        }

        result
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, c: &R) -> Self {
        if c.is_zero() {
            return Self::zero();
        }
        Self::new(self.coeffs.iter().map(|x| x.clone() * c.clone()).collect())
    }

    /// Shifts the polynomial by multiplying by x^n.
    #[must_use]
    pub fn shift(&self, n: usize) -> Self {
        if self.is_zero() || n == 0 {
            return self.clone();
        }

        let mut coeffs = vec![R::zero(); n];
        coeffs.extend(self.coeffs.iter().cloned());
        Self { coeffs }
    }

    /// Raises the polynomial to a non-negative integer power.
    #[must_use]
    pub fn pow(&self, n: u64) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result *= &base;
            }
            exp >>= 1;
            if exp > 0 {
                base = &base * &base;
            }
        }

        result
    }

    /// Computes the formal derivative.
    #[must_use]
    pub fn derivative(&self) -> Self {
        Self::new(
            self.coeffs
                .iter()
                .skip(1)
                .zip(1i64..)
                .map(|(c, k)| c.mul_by_scalar(k))
                .collect(),
        )
    }

    /// Computes the composition `self(inner(x))`.
    ///
    /// Accumulates `coeff(i) * inner^i`, extending the running power of
    /// `inner` by one multiplication per degree.
    #[must_use]
    pub fn compose(&self, inner: &Self) -> Self {
        let mut result = Self::zero();
        let mut power = Self::one();
        let last = self.coeffs.len().saturating_sub(1);

        for (i, c) in self.coeffs.iter().enumerate() {
            if !c.is_zero() {
                result += &power.scale(c);
            }
            if i < last {
                power *= inner;
            }
        }

        result
    }
}

impl<F: Field> DensePoly<F> {
    /// Divides by `divisor`, returning (quotient, remainder).
    ///
    /// The remainder has degree strictly below the divisor's.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DivisionByZeroPolynomial`] if `divisor` is zero.
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self)> {
        let lead = divisor
            .leading_coeff()
            .ok_or(PolyError::DivisionByZeroPolynomial)?;
        let d = divisor.coeffs.len() - 1;

        if self.coeffs.len() <= d {
            return Ok((Self::zero(), self.clone()));
        }

        let mut quotient = vec![F::zero(); self.coeffs.len() - d];
        let mut remainder = self.coeffs.clone();
        let mut steps = 0usize;

        while remainder.len() > d {
            let top = remainder.len() - 1;
            let shift = top - d;
            let factor = remainder[top].clone() / lead.clone();

            // The leading terms cancel exactly; drop the top slot.
            remainder.pop();
            for (j, dc) in divisor.coeffs[..d].iter().enumerate() {
                remainder[shift + j] =
                    remainder[shift + j].clone() - factor.clone() * dc.clone();
            }
            trim(&mut remainder);

            quotient[shift] = factor;
            steps += 1;
        }

        trace!(steps, divisor_degree = d, "dense long division");
        Ok((Self::new(quotient), Self::new(remainder)))
    }

    /// Returns the quotient of long division.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DivisionByZeroPolynomial`] if `divisor` is zero.
    pub fn div(&self, divisor: &Self) -> Result<Self> {
        self.div_rem(divisor).map(|(q, _)| q)
    }

    /// Returns the remainder of long division, `self - (self / divisor) * divisor`.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DivisionByZeroPolynomial`] if `divisor` is zero.
    pub fn rem(&self, divisor: &Self) -> Result<Self> {
        self.div_rem(divisor).map(|(_, r)| r)
    }

    /// Divides every coefficient by the leading one.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DivisionByZeroPolynomial`] for the zero polynomial,
    /// which has no leading coefficient to divide by.
    pub fn monic(&self) -> Result<Self> {
        let lead = self
            .leading_coeff()
            .ok_or(PolyError::DivisionByZeroPolynomial)?;
        if lead.is_one() {
            return Ok(self.clone());
        }
        Ok(Self::new(
            self.coeffs.iter().map(|c| c.clone() / lead.clone()).collect(),
        ))
    }

    /// Computes the monic greatest common divisor with the Euclidean
    /// algorithm.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DivisionByZeroPolynomial`] if both inputs are zero.
    #[instrument(level = "debug", skip_all)]
    pub fn gcd(&self, other: &Self) -> Result<Self> {
        let mut a = self.clone();
        let mut b = other.clone();
        let mut rounds = 0usize;

        while !b.is_zero() {
            let r = a.rem(&b)?;
            a = std::mem::replace(&mut b, r);
            rounds += 1;
        }

        let g = a.monic()?;
        debug!(rounds, degree = g.degree(), "dense gcd");
        Ok(g)
    }
}

impl<R: Ring> AddAssign<&DensePoly<R>> for DensePoly<R> {
    fn add_assign(&mut self, rhs: &DensePoly<R>) {
        if self.coeffs.len() < rhs.coeffs.len() {
            self.coeffs.resize(rhs.coeffs.len(), R::zero());
        }
        for (a, b) in self.coeffs.iter_mut().zip(&rhs.coeffs) {
            *a = a.clone() + b.clone();
        }
        trim(&mut self.coeffs);
    }
}

impl<R: Ring> SubAssign<&DensePoly<R>> for DensePoly<R> {
    fn sub_assign(&mut self, rhs: &DensePoly<R>) {
        if self.coeffs.len() < rhs.coeffs.len() {
            self.coeffs.resize(rhs.coeffs.len(), R::zero());
        }
        for (a, b) in self.coeffs.iter_mut().zip(&rhs.coeffs) {
            *a = a.clone() - b.clone();
        }
        trim(&mut self.coeffs);
    }
}

impl<R: Ring> MulAssign<&DensePoly<R>> for DensePoly<R> {
    /// Schoolbook multiplication: O(n·m).
    fn mul_assign(&mut self, rhs: &DensePoly<R>) {
        if self.is_zero() || rhs.is_zero() {
            self.coeffs.clear();
            return;
        }

        let n = self.coeffs.len();
        let m = rhs.coeffs.len();
        let mut result = vec![R::zero(); n + m - 1];

        for (i, a) in self.coeffs.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (j, b) in rhs.coeffs.iter().enumerate() {
                result[i + j] = result[i + j].clone() + a.clone() * b.clone();
            }
        }

        trim(&mut result);
        self.coeffs = result;
    }
}

forward_binops!(DensePoly, Add, add, AddAssign, add_assign);
forward_binops!(DensePoly, Sub, sub, SubAssign, sub_assign);
forward_binops!(DensePoly, Mul, mul, MulAssign, mul_assign);

impl<R: Ring> Neg for DensePoly<R> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        // negation never creates a zero, so no trim is needed
        Self {
            coeffs: self.coeffs.into_iter().map(|c| -c).collect(),
        }
    }
}

impl<R: Ring> Neg for &DensePoly<R> {
    type Output = DensePoly<R>;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

impl<R: Ring> From<Vec<R>> for DensePoly<R> {
    fn from(coeffs: Vec<R>) -> Self {
        Self::new(coeffs)
    }
}

impl<R: Ring> FromIterator<R> for DensePoly<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self::from_coeffs(iter)
    }
}

impl<'a, R: Ring> IntoIterator for &'a DensePoly<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.coeffs.iter()
    }
}

impl<R: Ring> IntoIterator for DensePoly<R> {
    type Item = R;
    type IntoIter = std::vec::IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.coeffs.into_iter()
    }
}

impl<R: OrderedRing + fmt::Display> fmt::Display for DensePoly<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::write_terms(f, self.coeffs.iter().enumerate().rev())
    }
}

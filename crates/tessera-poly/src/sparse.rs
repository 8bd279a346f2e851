//! Sparse univariate polynomials.
//!
//! Only non-zero coefficients are stored, keyed by exponent. Work scales
//! with the number of terms instead of the degree, which pays off for
//! polynomials like `x^1000000 + 1`.

use std::collections::btree_map::{self, BTreeMap, Entry};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use tessera_rings::{Field, OrderedRing, Ring};
use tracing::{debug, instrument, trace};

use crate::display;
use crate::error::{PolyError, Result};

/// A sparse univariate polynomial.
///
/// Terms are stored as exponent → coefficient in an ordered map. A
/// coefficient that becomes zero is removed immediately, so an absent key
/// always means zero and the zero polynomial is the empty map.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SparsePoly<R: Ring> {
    /// Non-zero terms ordered by exponent.
    terms: BTreeMap<usize, R>,
}

impl<R: Ring> SparsePoly<R> {
    /// Creates a new polynomial from a dense coefficient sequence,
    /// `coeffs[i]` being the coefficient of x^i.
    #[must_use]
    pub fn new(coeffs: Vec<R>) -> Self {
        Self::from_coeffs(coeffs)
    }

    /// Creates a polynomial from any source of coefficients in ascending
    /// degree order.
    #[must_use]
    pub fn from_coeffs<I: IntoIterator<Item = R>>(coeffs: I) -> Self {
        let terms = coeffs
            .into_iter()
            .enumerate()
            .filter(|(_, c)| !c.is_zero())
            .collect();
        Self { terms }
    }

    /// Creates a polynomial from `(exponent, coefficient)` pairs.
    ///
    /// Repeated exponents are summed; zero results are dropped.
    #[must_use]
    pub fn from_terms<I: IntoIterator<Item = (usize, R)>>(terms: I) -> Self {
        let mut poly = Self::zero();
        for (exp, c) in terms {
            poly.add_term(exp, c);
        }
        poly
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            terms: BTreeMap::new(),
        }
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
        Self::monomial(c, 0)
    }

    /// Creates the polynomial x.
    #[must_use]
    pub fn x() -> Self {
        Self::monomial(R::one(), 1)
    }

    /// Creates the monomial c * x^n.
    #[must_use]
    pub fn monomial(c: R, n: usize) -> Self {
        let mut poly = Self::zero();
        poly.add_term(n, c);
        poly
    }

    /// Adds `c * x^exp` in place, removing the entry if it cancels.
    fn add_term(&mut self, exp: usize, c: R) {
        if c.is_zero() {
            return;
        }
        match self.terms.entry(exp) {
            Entry::Vacant(slot) => {
                slot.insert(c);
            }
            Entry::Occupied(mut slot) => {
                let sum = slot.get().clone() + c;
                if sum.is_zero() {
                    slot.remove();
                } else {
                    *slot.get_mut() = sum;
                }
            }
        }
    }

    /// Returns the highest term as (exponent, coefficient).
    fn lead(&self) -> Option<(usize, &R)> {
        self.terms.last_key_value().map(|(e, c)| (*e, c))
    }

    /// Returns the degree of the polynomial, or -1 for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> isize {
        self.lead()
            .map_or(-1, |(e, _)| isize::try_from(e).unwrap_or(isize::MAX))
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the number of non-zero terms.
    #[must_use]
    pub fn num_terms(&self) -> usize {
        self.terms.len()
    }

    /// Returns the leading coefficient, or `None` for the zero polynomial.
    #[must_use]
    pub fn leading_coeff(&self) -> Option<&R> {
        self.lead().map(|(_, c)| c)
    }

    /// Returns true if the leading coefficient is one.
    #[must_use]
    pub fn is_monic(&self) -> bool {
        self.leading_coeff().is_some_and(Ring::is_one)
    }

    /// Returns the coefficient of x^i, zero when no term is stored.
    #[must_use]
    pub fn coeff(&self, i: usize) -> R {
        self.terms.get(&i).cloned().unwrap_or_else(R::zero)
    }

    /// Iterates over `(exponent, coefficient)` in ascending exponent order.
    pub fn iter(&self) -> Terms<'_, R> {
        Terms {
            inner: self.terms.iter(),
        }
    }

    /// Evaluates the polynomial at a point.
    ///
    /// Each power `x^e` is computed by repeated squaring, so the cost is
    /// O(t log d) for t terms of degree at most d.
    #[must_use]
    pub fn eval(&self, x: &R) -> R {
        self.terms.iter().fold(R::zero(), |acc, (&e, c)| {
            acc + c.clone() * x.pow(e as u64)
        })
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, c: &R) -> Self {
        Self::from_terms(self.terms.iter().map(|(&e, x)| (e, x.clone() * c.clone())))
    }

    /// Shifts the polynomial by multiplying by x^n.
    #[must_use]
    pub fn shift(&self, n: usize) -> Self {
        Self {
            terms: self.terms.iter().map(|(&e, c)| (e + n, c.clone())).collect(),
        }
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
    #[allow(clippy::cast_possible_wrap)]
    pub fn derivative(&self) -> Self {
        Self::from_terms(
            self.terms
                .iter()
                .filter(|(&e, _)| e > 0)
                .map(|(&e, c)| (e - 1, c.mul_by_scalar(e as i64))),
        )
    }

    /// Computes the composition `self(inner(x))`.
    ///
    /// Each `inner^e` is computed independently by repeated squaring, so
    /// only the stored terms of `self` cost anything.
    #[must_use]
    pub fn compose(&self, inner: &Self) -> Self {
        let mut result = Self::zero();
        for (&e, c) in &self.terms {
            result += &inner.pow(e as u64).scale(c);
        }
        result
    }
}

impl<F: Field> SparsePoly<F> {
    /// Divides by `divisor`, returning (quotient, remainder).
    ///
    /// The remainder has degree strictly below the divisor's.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DivisionByZeroPolynomial`] if `divisor` is zero.
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self)> {
        let (d, lead) = divisor
            .lead()
            .ok_or(PolyError::DivisionByZeroPolynomial)?;

        let mut quotient = Self::zero();
        let mut remainder = self.clone();
        let mut steps = 0usize;

        while let Some((top, top_coeff)) = remainder.lead() {
            if top < d {
                break;
            }
            let shift = top - d;
            let factor = top_coeff.clone() / lead.clone();

            // The leading terms cancel exactly; drop the top entry.
            remainder.terms.remove(&top);
            for (&e, c) in divisor.terms.range(..d) {
                remainder.add_term(e + shift, -(factor.clone() * c.clone()));
            }

            quotient.add_term(shift, factor);
            steps += 1;
        }

        trace!(steps, divisor_terms = divisor.num_terms(), "sparse long division");
        Ok((quotient, remainder))
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
    /// Returns [`PolyError::DivisionByZeroPolynomial`] for the zero polynomial.
    pub fn monic(&self) -> Result<Self> {
        let lead = self
            .leading_coeff()
            .ok_or(PolyError::DivisionByZeroPolynomial)?;
        if lead.is_one() {
            return Ok(self.clone());
        }
        Ok(Self::from_terms(
            self.terms.iter().map(|(&e, c)| (e, c.clone() / lead.clone())),
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
        debug!(rounds, degree = g.degree(), terms = g.num_terms(), "sparse gcd");
        Ok(g)
    }
}

impl<R: Ring> AddAssign<&SparsePoly<R>> for SparsePoly<R> {
    fn add_assign(&mut self, rhs: &SparsePoly<R>) {
        for (&e, c) in &rhs.terms {
            self.add_term(e, c.clone());
        }
    }
}

impl<R: Ring> SubAssign<&SparsePoly<R>> for SparsePoly<R> {
    fn sub_assign(&mut self, rhs: &SparsePoly<R>) {
        for (&e, c) in &rhs.terms {
            self.add_term(e, -c.clone());
        }
    }
}

impl<R: Ring> MulAssign<&SparsePoly<R>> for SparsePoly<R> {
    /// Multiplies stored terms pairwise: O(t·s) for t and s terms.
    fn mul_assign(&mut self, rhs: &SparsePoly<R>) {
        let mut product = Self::zero();
        for (&e1, c1) in &self.terms {
            for (&e2, c2) in &rhs.terms {
                product.add_term(e1 + e2, c1.clone() * c2.clone());
            }
        }
        *self = product;
    }
}

forward_binops!(SparsePoly, Add, add, AddAssign, add_assign);
forward_binops!(SparsePoly, Sub, sub, SubAssign, sub_assign);
forward_binops!(SparsePoly, Mul, mul, MulAssign, mul_assign);

impl<R: Ring> Neg for SparsePoly<R> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            terms: self.terms.into_iter().map(|(e, c)| (e, -c)).collect(),
        }
    }
}

impl<R: Ring> Neg for &SparsePoly<R> {
    type Output = SparsePoly<R>;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

impl<R: Ring> From<Vec<R>> for SparsePoly<R> {
    fn from(coeffs: Vec<R>) -> Self {
        Self::new(coeffs)
    }
}

impl<R: Ring> FromIterator<R> for SparsePoly<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self::from_coeffs(iter)
    }
}

/// Iterator over the stored terms of a [`SparsePoly`], in ascending
/// exponent order.
#[derive(Clone, Debug)]
pub struct Terms<'a, R> {
    inner: btree_map::Iter<'a, usize, R>,
}

impl<'a, R> Iterator for Terms<'a, R> {
    type Item = (usize, &'a R);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(e, c)| (*e, c))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<R> DoubleEndedIterator for Terms<'_, R> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(e, c)| (*e, c))
    }
}

impl<R> ExactSizeIterator for Terms<'_, R> {}

impl<'a, R: Ring> IntoIterator for &'a SparsePoly<R> {
    type Item = (usize, &'a R);
    type IntoIter = Terms<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<R: OrderedRing + fmt::Display> fmt::Display for SparsePoly<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::write_terms(f, self.iter().rev())
    }
}

//! # tessera-poly
//!
//! Univariate polynomial arithmetic over generic coefficient rings.
//!
//! This crate provides two representations with the same contract:
//! - [`DensePoly`]: coefficients in a vector indexed by exponent
//! - [`SparsePoly`]: non-zero coefficients in a map keyed by exponent
//!
//! Both support `+ - *`, evaluation, composition, and over a field long
//! division, remainder and monic GCD. Results are identical between the two;
//! only the cost profile differs:
//!
//! | Operation   | Dense                      | Sparse                          |
//! |-------------|----------------------------|---------------------------------|
//! | Multiply    | O(n·m) over all slots      | O(t·s) over stored terms        |
//! | Evaluate    | O(d) running power         | O(t log d) by repeated squaring |
//! | Compose     | one multiply per degree    | `inner^e` per stored term       |
//!
//! Neither type converts into the other.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

/// Derives the by-value and by-reference binary operators of a polynomial
/// type from its `OpAssign<&Self>` impl.
macro_rules! forward_binops {
    ($poly:ident, $op:ident, $method:ident, $assign_op:ident, $assign:ident) => {
        impl<R: Ring> $assign_op<$poly<R>> for $poly<R> {
            fn $assign(&mut self, rhs: $poly<R>) {
                $assign_op::$assign(self, &rhs);
            }
        }

        impl<R: Ring> $op<&$poly<R>> for $poly<R> {
            type Output = $poly<R>;

            fn $method(mut self, rhs: &$poly<R>) -> $poly<R> {
                $assign_op::$assign(&mut self, rhs);
                self
            }
        }

        impl<R: Ring> $op<$poly<R>> for $poly<R> {
            type Output = $poly<R>;

            fn $method(self, rhs: $poly<R>) -> $poly<R> {
                $op::$method(self, &rhs)
            }
        }

        impl<R: Ring> $op<&$poly<R>> for &$poly<R> {
            type Output = $poly<R>;

            fn $method(self, rhs: &$poly<R>) -> $poly<R> {
                $op::$method(self.clone(), rhs)
            }
        }

        impl<R: Ring> $op<$poly<R>> for &$poly<R> {
            type Output = $poly<R>;

            fn $method(self, rhs: $poly<R>) -> $poly<R> {
                $op::$method(self.clone(), &rhs)
            }
        }
    };
}

pub mod dense;
mod display;
pub mod error;
pub mod sparse;

#[cfg(test)]
mod proptests;

pub use dense::DensePoly;
pub use error::{PolyError, Result};
pub use sparse::SparsePoly;

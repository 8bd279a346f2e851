//! Errors raised by polynomial division.

use thiserror::Error;

/// Errors that can occur during polynomial arithmetic.
///
/// Only division can fail; addition, multiplication, evaluation and
/// composition are total.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PolyError {
    /// A quotient, remainder, gcd or monic normalization was asked to divide
    /// by the zero polynomial.
    #[error("division by the zero polynomial")]
    DivisionByZeroPolynomial,
}

/// Result alias for fallible polynomial operations.
pub type Result<T> = std::result::Result<T, PolyError>;

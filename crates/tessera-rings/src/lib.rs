//! # tessera-rings
//!
//! Coefficient rings and fields for tessera polynomials.
//!
//! This crate provides:
//! - Capability traits: `Ring`, `Field`, `OrderedRing`
//! - Concrete coefficients: Z, Q, Z_p
//! - `Ring` impls for machine integers
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Ring
//!  ├── Field        (adds `/`)
//!  └── OrderedRing  (adds a total order)
//! ```
//!
//! `Q` is both a `Field` and an `OrderedRing`; `FiniteField<P>` is a field
//! without order; `Z` and the machine integers are ordered rings.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod finite_field;
pub mod integers;
pub mod primitive;
pub mod rationals;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use finite_field::FiniteField;
pub use integers::Z;
pub use rationals::Q;
pub use traits::{Field, OrderedRing, Ring};

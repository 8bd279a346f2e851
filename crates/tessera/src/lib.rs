//! # Tessera
//!
//! Univariate polynomial algebra over generic coefficient fields.
//!
//! Two representations share one contract: [`poly::DensePoly`] stores every
//! coefficient up to the degree, [`poly::SparsePoly`] stores only the
//! non-zero ones. Both give identical results for addition, multiplication,
//! evaluation, composition, long division and GCD.
//!
//! ## Quick Start
//!
//! ```rust
//! use tessera::prelude::*;
//!
//! // x^2 - 1 and x - 1 over the rationals
//! let p: DensePoly<Q> = [-1, 0, 1].into_iter().map(Q::from_integer).collect();
//! let d: DensePoly<Q> = [-1, 1].into_iter().map(Q::from_integer).collect();
//!
//! let (quot, rem) = p.div_rem(&d).unwrap();
//! assert_eq!(quot.to_string(), "x+1");
//! assert!(rem.is_zero());
//! assert_eq!(p.gcd(&d).unwrap().to_string(), "x-1");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use tessera_poly as poly;
pub use tessera_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use tessera_poly::{DensePoly, PolyError, SparsePoly};
    pub use tessera_rings::{Field, FiniteField, OrderedRing, Ring, Q, Z};
}

//! Machine integers as coefficient rings.
//!
//! Fixed-width integers form a ring (up to overflow) but not a field, so
//! polynomials over them support every total operation while division
//! stays unavailable at the type level.

use crate::traits::{OrderedRing, Ring};

macro_rules! impl_machine_ring {
    ($($t:ty),* $(,)?) => {
        $(
            impl Ring for $t {
                #[inline]
                fn zero() -> Self {
                    0
                }

                #[inline]
                fn one() -> Self {
                    1
                }

                #[inline]
                fn is_zero(&self) -> bool {
                    *self == 0
                }

                #[inline]
                fn is_one(&self) -> bool {
                    *self == 1
                }
            }

            impl OrderedRing for $t {}
        )*
    };
}

impl_machine_ring!(i32, i64, i128);

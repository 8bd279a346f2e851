//! Property-based tests for the coefficient types.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::finite_field::FiniteField;
    use crate::rationals::Q;
    use crate::traits::{Field, OrderedRing, Ring};

    type F101 = FiniteField<101>;

    // Strategy for generating small rationals
    fn small_q() -> impl Strategy<Value = Q> {
        (-50i64..50i64, 1i64..20i64).prop_map(|(n, d)| Q::new(n, d))
    }

    // Strategy for generating non-zero rationals
    fn nonzero_q() -> impl Strategy<Value = Q> {
        small_q().prop_filter("rational must be non-zero", |q| !q.is_zero())
    }

    fn small_fp() -> impl Strategy<Value = F101> {
        (0u64..101).prop_map(F101::new)
    }

    proptest! {
        #[test]
        fn q_add_commutative(a in small_q(), b in small_q()) {
            prop_assert_eq!(a.clone() + b.clone(), b + a);
        }

        #[test]
        fn q_mul_associative(a in small_q(), b in small_q(), c in small_q()) {
            prop_assert_eq!(
                (a.clone() * b.clone()) * c.clone(),
                a * (b * c)
            );
        }

        #[test]
        fn q_distributive(a in small_q(), b in small_q(), c in small_q()) {
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn q_division_inverts_multiplication(a in small_q(), b in nonzero_q()) {
            prop_assert_eq!((a.clone() * b.clone()) / b, a);
        }

        #[test]
        fn q_inverse(a in nonzero_q()) {
            let inv = a.inv().unwrap();
            prop_assert!((a * inv).is_one());
        }

        #[test]
        fn q_order_matches_sign(a in small_q()) {
            let sign = a.signum();
            prop_assert_eq!(sign > 0, a.is_positive());
            prop_assert_eq!(sign < 0, a.is_negative());
            prop_assert!(a.abs() >= Q::zero());
        }

        #[test]
        fn q_pow_adds_exponents(a in nonzero_q(), m in 0u64..6, n in 0u64..6) {
            prop_assert_eq!(a.pow(m) * a.pow(n), a.pow(m + n));
        }

        #[test]
        fn fp_inverse(a in small_fp()) {
            match a.inv() {
                Some(inv) => prop_assert!((a * inv).is_one()),
                None => prop_assert!(a.is_zero()),
            }
        }

        #[test]
        fn fp_sub_is_add_neg(a in small_fp(), b in small_fp()) {
            prop_assert_eq!(a - b, a + (-b));
        }

        #[test]
        fn fp_mul_by_scalar_matches_product(a in small_fp(), n in -300i64..300) {
            prop_assert_eq!(a.mul_by_scalar(n), a * F101::from_signed(n));
        }
    }
}

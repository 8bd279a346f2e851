//! Property-based tests shared by both representations.
//!
//! Every generated coefficient vector is turned into a dense and a sparse
//! polynomial; each law is checked on both, and the two results are then
//! compared against each other.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::dense::DensePoly;
    use crate::error::PolyError;
    use crate::sparse::SparsePoly;
    use tessera_rings::{Q, Ring};

    // Strategy for small rational coefficients, zero-heavy so that
    // cancellation and sparse gaps actually occur.
    fn small_coeff() -> impl Strategy<Value = Q> {
        prop_oneof![Just(0i64), -9i64..=9].prop_map(Q::from_integer)
    }

    // Strategy for evaluation points, including non-integers.
    fn point() -> impl Strategy<Value = Q> {
        (-6i64..=6, 1i64..=3).prop_map(|(n, d)| Q::new(n, d))
    }

    // Coefficient vectors of degree at most 5, possibly all zero.
    fn coeffs() -> impl Strategy<Value = Vec<Q>> {
        proptest::collection::vec(small_coeff(), 0..=6)
    }

    fn nonzero_coeffs() -> impl Strategy<Value = Vec<Q>> {
        coeffs().prop_filter("polynomial must be non-zero", |c| c.iter().any(|x| !x.is_zero()))
    }

    fn both(c: &[Q]) -> (DensePoly<Q>, SparsePoly<Q>) {
        (DensePoly::new(c.to_vec()), SparsePoly::new(c.to_vec()))
    }

    // Same degree, same coefficients, same rendering.
    fn agree(d: &DensePoly<Q>, s: &SparsePoly<Q>) -> bool {
        d.degree() == s.degree()
            && (0..d.coeffs().len()).all(|i| d.coeff(i) == s.coeff(i))
            && d.to_string() == s.to_string()
    }

    fn dense_is_canonical(d: &DensePoly<Q>) -> bool {
        d.coeffs().last().map_or(true, |c| !c.is_zero())
    }

    fn sparse_is_canonical(s: &SparsePoly<Q>) -> bool {
        s.iter().all(|(_, c)| !c.is_zero())
    }

    proptest! {
        // Ring axioms

        #[test]
        fn add_commutative(a in coeffs(), b in coeffs()) {
            let (da, sa) = both(&a);
            let (db, sb) = both(&b);
            prop_assert_eq!(&da + &db, &db + &da);
            prop_assert_eq!(&sa + &sb, &sb + &sa);
        }

        #[test]
        fn mul_associative(a in coeffs(), b in coeffs(), c in coeffs()) {
            let (da, sa) = both(&a);
            let (db, sb) = both(&b);
            let (dc, sc) = both(&c);
            prop_assert_eq!(&(&da * &db) * &dc, &da * &(&db * &dc));
            prop_assert_eq!(&(&sa * &sb) * &sc, &sa * &(&sb * &sc));
        }

        #[test]
        fn distributive(a in coeffs(), b in coeffs(), c in coeffs()) {
            let (da, sa) = both(&a);
            let (db, sb) = both(&b);
            let (dc, sc) = both(&c);
            prop_assert_eq!(&da * &(&db + &dc), &da * &db + &da * &dc);
            prop_assert_eq!(&sa * &(&sb + &sc), &sa * &sb + &sa * &sc);
        }

        #[test]
        fn additive_inverse(a in coeffs()) {
            let (da, sa) = both(&a);
            prop_assert!((&da + &(-&da)).is_zero());
            prop_assert!((&sa + &(-&sa)).is_zero());
        }

        // (p + q) - q == p

        #[test]
        fn add_then_sub_roundtrips(a in coeffs(), b in coeffs()) {
            let (da, sa) = both(&a);
            let (db, sb) = both(&b);
            prop_assert_eq!(&(&da + &db) - &db, da);
            prop_assert_eq!(&(&sa + &sb) - &sb, sa);
        }

        // Results never store a zero where the invariant forbids it

        #[test]
        fn results_stay_canonical(a in coeffs(), b in coeffs()) {
            let (da, sa) = both(&a);
            let (db, sb) = both(&b);
            for d in [&da + &db, &da - &db, &da * &db, da.compose(&db)] {
                prop_assert!(dense_is_canonical(&d));
            }
            for s in [&sa + &sb, &sa - &sb, &sa * &sb, sa.compose(&sb)] {
                prop_assert!(sparse_is_canonical(&s));
            }
        }

        // Degree bookkeeping

        #[test]
        fn mul_degree_adds(a in nonzero_coeffs(), b in nonzero_coeffs()) {
            let (da, sa) = both(&a);
            let (db, sb) = both(&b);
            prop_assert_eq!((&da * &db).degree(), da.degree() + db.degree());
            prop_assert_eq!((&sa * &sb).degree(), sa.degree() + sb.degree());
        }

        #[test]
        fn add_degree_bound(a in coeffs(), b in coeffs()) {
            let (da, sa) = both(&a);
            let (db, sb) = both(&b);
            prop_assert!((&da + &db).degree() <= da.degree().max(db.degree()));
            prop_assert!((&sa + &sb).degree() <= sa.degree().max(sb.degree()));
        }

        // Evaluation is a ring homomorphism

        #[test]
        fn eval_mul(a in coeffs(), b in coeffs(), x in point()) {
            let (da, sa) = both(&a);
            let (db, sb) = both(&b);
            prop_assert_eq!((&da * &db).eval(&x), da.eval(&x) * db.eval(&x));
            prop_assert_eq!((&sa * &sb).eval(&x), sa.eval(&x) * sb.eval(&x));
        }

        #[test]
        fn eval_add(a in coeffs(), b in coeffs(), x in point()) {
            let (da, sa) = both(&a);
            let (db, sb) = both(&b);
            prop_assert_eq!((&da + &db).eval(&x), da.eval(&x) + db.eval(&x));
            prop_assert_eq!((&sa + &sb).eval(&x), sa.eval(&x) + sb.eval(&x));
        }

        // Composition law: (p & q)(x) == p(q(x))

        #[test]
        fn compose_evaluates(a in coeffs(), b in coeffs(), x in point()) {
            let (da, sa) = both(&a);
            let (db, sb) = both(&b);
            prop_assert_eq!(da.compose(&db).eval(&x), da.eval(&db.eval(&x)));
            prop_assert_eq!(sa.compose(&sb).eval(&x), sa.eval(&sb.eval(&x)));
        }

        // Division: (p / q) * q + (p % q) == p

        #[test]
        fn div_rem_reconstructs(a in coeffs(), b in nonzero_coeffs()) {
            let (da, sa) = both(&a);
            let (db, sb) = both(&b);

            let (dq, dr) = da.div_rem(&db).unwrap();
            prop_assert!(dr.degree() < db.degree());
            prop_assert_eq!(&dq * &db + &dr, da.clone());
            prop_assert_eq!(&da.div(&db).unwrap() * &db + &da.rem(&db).unwrap(), da);

            let (sq, sr) = sa.div_rem(&sb).unwrap();
            prop_assert!(sr.degree() < sb.degree());
            prop_assert_eq!(&sq * &sb + &sr, sa.clone());
            prop_assert_eq!(&sa.div(&sb).unwrap() * &sb + &sa.rem(&sb).unwrap(), sa);
        }

        #[test]
        fn div_by_zero_fails(a in coeffs()) {
            let (da, sa) = both(&a);
            prop_assert_eq!(da.div_rem(&DensePoly::zero()), Err(PolyError::DivisionByZeroPolynomial));
            prop_assert_eq!(sa.div_rem(&SparsePoly::zero()), Err(PolyError::DivisionByZeroPolynomial));
        }

        // GCD is monic, bounded in degree and divides both inputs

        #[test]
        fn gcd_properties(a in nonzero_coeffs(), b in nonzero_coeffs()) {
            let (da, sa) = both(&a);
            let (db, sb) = both(&b);

            let dg = da.gcd(&db).unwrap();
            prop_assert!(dg.is_monic());
            prop_assert!(dg.degree() <= da.degree().min(db.degree()));
            prop_assert!(da.rem(&dg).unwrap().is_zero());
            prop_assert!(db.rem(&dg).unwrap().is_zero());

            let sg = sa.gcd(&sb).unwrap();
            prop_assert!(sg.is_monic());
            prop_assert!(sg.degree() <= sa.degree().min(sb.degree()));
            prop_assert!(sa.rem(&sg).unwrap().is_zero());
            prop_assert!(sb.rem(&sg).unwrap().is_zero());
        }

        #[test]
        fn gcd_of_common_factor(a in nonzero_coeffs(), b in nonzero_coeffs(), c in nonzero_coeffs()) {
            // c divides both a*c and b*c, so it divides their gcd
            let (da, _) = both(&a);
            let (db, _) = both(&b);
            let (dc, _) = both(&c);
            let g = (&da * &dc).gcd(&(&db * &dc)).unwrap();
            prop_assert!(g.rem(&dc).unwrap().is_zero());
        }

        // Cross-representation equivalence

        #[test]
        fn representations_agree(a in coeffs(), b in coeffs(), x in point(), n in 0u64..4) {
            let (da, sa) = both(&a);
            let (db, sb) = both(&b);

            prop_assert!(agree(&da, &sa));
            prop_assert!(agree(&(&da + &db), &(&sa + &sb)));
            prop_assert!(agree(&(&da - &db), &(&sa - &sb)));
            prop_assert!(agree(&(&da * &db), &(&sa * &sb)));
            prop_assert!(agree(&da.compose(&db), &sa.compose(&sb)));
            prop_assert!(agree(&da.derivative(), &sa.derivative()));
            prop_assert!(agree(&da.pow(n), &sa.pow(n)));
            prop_assert_eq!(da.eval(&x), sa.eval(&x));
        }

        #[test]
        fn division_representations_agree(a in coeffs(), b in nonzero_coeffs()) {
            let (da, sa) = both(&a);
            let (db, sb) = both(&b);

            let (dq, dr) = da.div_rem(&db).unwrap();
            let (sq, sr) = sa.div_rem(&sb).unwrap();
            prop_assert!(agree(&dq, &sq));
            prop_assert!(agree(&dr, &sr));
            prop_assert!(agree(&da.gcd(&db).unwrap(), &sa.gcd(&sb).unwrap()));
        }

        #[test]
        fn compound_matches_binary(a in coeffs(), b in coeffs()) {
            let (da, sa) = both(&a);
            let (db, sb) = both(&b);

            let mut d = da.clone();
            d += &db;
            d *= &db;
            d -= &da;
            prop_assert_eq!(d, &(&da + &db) * &db - &da);

            let mut s = sa.clone();
            s += &sb;
            s *= &sb;
            s -= &sa;
            prop_assert_eq!(s, &(&sa + &sb) * &sb - &sa);
        }
    }
}

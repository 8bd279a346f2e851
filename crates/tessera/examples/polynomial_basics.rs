//! Walk through the polynomial API on both representations.
//!
//! Run with `TESSERA_LOG=debug` to see the gcd and division diagnostics.

use tessera::prelude::*;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn dense(coeffs: &[i64]) -> DensePoly<Q> {
    coeffs.iter().copied().map(Q::from_integer).collect()
}

fn sparse(coeffs: &[i64]) -> SparsePoly<Q> {
    coeffs.iter().copied().map(Q::from_integer).collect()
}

fn main() -> Result<(), PolyError> {
    let level = std::env::var("TESSERA_LOG")
        .ok()
        .and_then(|s| s.parse::<Level>().ok())
        .unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {e}");
    }

    let p = dense(&[1, 2, 3]);
    let q = dense(&[1, 1]);
    println!("p = {p}");
    println!("q = {q}");
    println!("p + q = {}", &p + &q);
    println!("p * q = {}", &p * &q);
    println!("p(2) = {}", p.eval(&Q::from_integer(2)));
    println!("p & q = {}", p.compose(&q));

    let (quot, rem) = (&p * &q + dense(&[5])).div_rem(&q)?;
    println!("(p*q + 5) / q = {quot}, remainder {rem}");

    let a = sparse(&[-1, 0, 1]);
    let b = sparse(&[1, -2, 1]);
    println!("gcd({a}, {b}) = {}", a.gcd(&b)?);

    // Sparse terms make huge degrees cheap.
    let big = SparsePoly::from_terms([(1_000_000, Q::from_integer(1)), (0, Q::from_integer(-1))]);
    let modulus = SparsePoly::from_terms([(1000, Q::from_integer(1)), (0, Q::from_integer(1))]);
    println!("({big}) mod ({modulus}) = {}", big.rem(&modulus)?);
    println!("({big})(-1) = {}", big.eval(&Q::from_integer(-1)));

    match p.div(&DensePoly::zero()) {
        Ok(_) => println!("unexpected quotient"),
        Err(e) => println!("p / 0: {e}"),
    }

    Ok(())
}

//! Canonical textual form shared by both representations.
//!
//! Terms are written highest degree first. A coefficient of exactly 1 is
//! omitted, -1 becomes a bare `-`, and every later positive term gets an
//! explicit `+`. The zero polynomial prints as the coefficient zero.

use std::fmt;

use tessera_rings::OrderedRing;

/// The indeterminate symbol.
pub(crate) const VAR: char = 'x';

/// Writes `terms`, given as `(exponent, coefficient)` in descending
/// exponent order.
pub(crate) fn write_terms<'a, R, I>(f: &mut fmt::Formatter<'_>, terms: I) -> fmt::Result
where
    R: OrderedRing + fmt::Display + 'a,
    I: Iterator<Item = (usize, &'a R)>,
{
    let minus_one = -R::one();
    let mut first = true;

    for (exp, c) in terms {
        if c.is_zero() {
            continue;
        }

        if !first && c.is_positive() {
            write!(f, "+")?;
        }

        if exp == 0 {
            write!(f, "{c}")?;
        } else {
            if *c == minus_one {
                write!(f, "-")?;
            } else if !c.is_one() {
                write!(f, "{c}*")?;
            }
            write!(f, "{}", VAR)?;
            if exp > 1 {
                write!(f, "^{exp}")?;
            }
        }

        first = false;
    }

    if first {
        write!(f, "{}", R::zero())?;
    }

    Ok(())
}

//! Counting functions over unbounded integers.
//!
//! Arguments are signed so that out-of-domain input is representable and
//! rejected with [`Error::InvalidArgument`] rather than wrapping.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::error::{Error, Result};

pub fn factorial(n: i64) -> Result<BigUint> {
    if n < 0 {
        return Err(Error::InvalidArgument {
            operation: "factorial",
            n,
            r: None,
        });
    }
    Ok((2..=n as u64).fold(BigUint::one(), |acc, i| acc * i))
}

#[inline]
fn check_choose(operation: &'static str, n: i64, r: i64) -> Result<()> {
    if r < 0 || r > n {
        return Err(Error::InvalidArgument {
            operation,
            n,
            r: Some(r),
        });
    }
    Ok(())
}

/// Unordered selections of `r` items from `n`: `n! / ((n - r)! r!)`.
pub fn combination(n: i64, r: i64) -> Result<BigUint> {
    check_choose("combination", n, r)?;
    let denominator = factorial(n - r)? * factorial(r)?;
    Ok(exact_div(&factorial(n)?, &denominator))
}

/// Ordered selections of `r` items from `n`: `n! / (n - r)!`.
pub fn permutation(n: i64, r: i64) -> Result<BigUint> {
    check_choose("permutation", n, r)?;
    Ok(exact_div(&factorial(n)?, &factorial(n - r)?))
}

/// Multisets of size `r` drawn from `n` kinds: `C(n + r - 1, r)`.
pub fn combination_with_repetition(n: i64, r: i64) -> Result<BigUint> {
    let invalid = Error::InvalidArgument {
        operation: "combination_with_repetition",
        n,
        r: Some(r),
    };
    if r < 0 || n < 0 {
        return Err(invalid);
    }
    if n == 0 {
        // only the empty multiset can be drawn from no kinds
        return if r == 0 { Ok(BigUint::one()) } else { Err(invalid) };
    }
    let top = n.checked_add(r - 1).ok_or(invalid)?;
    combination(top, r)
}

/// Integer division that must leave no remainder.
///
/// Every caller divides by a product that is known to divide the numerator,
/// so a remainder means the arithmetic above is wrong.
pub fn exact_div(numerator: &BigUint, denominator: &BigUint) -> BigUint {
    let (quotient, remainder) = numerator.div_rem(denominator);
    assert!(
        remainder.is_zero(),
        "{} is not divisible by {}",
        numerator,
        denominator
    );
    quotient
}

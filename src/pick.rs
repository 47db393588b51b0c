//! One-shot selection helpers.
//!
//! These do not build a bag: each call scans its input once and draws once.
//!
//! - `select_uniform`: every candidate equally likely.
//! - `select_weighted`: probability proportional to an `f64` weight.
//!
//! The `*_with_rng` variants take a caller-supplied RNG for deterministic tests.

use rand::prelude::*;

use crate::error::{Error, Result};

/// Pick one value uniformly at random.
pub fn select_uniform<T>(values: &[T]) -> Result<&T> {
    let mut rng = rand::rng();
    select_uniform_with_rng(values, &mut rng)
}

/// Uniform pick with a caller-supplied RNG.
pub fn select_uniform_with_rng<'a, T, R: Rng + ?Sized>(
    values: &'a [T],
    rng: &mut R,
) -> Result<&'a T> {
    if values.is_empty() {
        return Err(Error::EmptyInput);
    }
    Ok(&values[rng.random_range(0..values.len())])
}

/// Pick one value with probability proportional to its weight.
///
/// Weights must be finite and non-negative; the first offending weight fails
/// the whole call. Zero-weight values are never picked.
pub fn select_weighted<T>(values: &[(T, f64)]) -> Result<&T> {
    let mut rng = rand::rng();
    select_weighted_with_rng(values, &mut rng)
}

/// Weighted pick with a caller-supplied RNG.
pub fn select_weighted_with_rng<'a, T, R: Rng + ?Sized>(
    values: &'a [(T, f64)],
    rng: &mut R,
) -> Result<&'a T> {
    if values.is_empty() {
        return Err(Error::EmptyInput);
    }

    let mut cumulative = Vec::with_capacity(values.len());
    let mut acc = 0.0_f64;
    for (index, &(_, weight)) in values.iter().enumerate() {
        if !weight.is_finite() || weight < 0.0 {
            return Err(Error::InvalidWeight { weight, index });
        }
        acc += weight;
        cumulative.push(acc);
    }

    if !acc.is_finite() {
        return Err(Error::WeightOverflow);
    }
    if acc <= 0.0 {
        return Err(Error::ZeroTotalWeight);
    }

    // The last cumulative value is `acc` itself and `r < acc`, so `i` is in
    // bounds and never lands on a trailing zero-weight value.
    let r = rng.random_range(0.0..acc);
    let i = cumulative.partition_point(|&c| c <= r);
    Ok(&values[i].0)
}

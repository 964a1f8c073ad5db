// SPDX-License-Identifier: MIT
// Q64.96 Fixed-Point Arithmetic and 256-bit Helpers

use soroban_sdk::{Env, U256};

use crate::error::MathError;

const LO_MASK: u128 = 0xFFFFFFFFFFFFFFFF;

/// Multiply two u128 values and return the upper 128 bits of the product.
/// Uses 64-bit limb decomposition, so it never leaves native arithmetic.
#[inline]
pub fn mul_shr_128(a: u128, b: u128) -> u128 {
    let a_hi = a >> 64;
    let a_lo = a & LO_MASK;
    let b_hi = b >> 64;
    let b_lo = b & LO_MASK;

    let term_hh = a_hi * b_hi;
    let term_hl = a_hi * b_lo;
    let term_lh = a_lo * b_hi;
    let term_ll = a_lo * b_lo;

    let carry = (term_hl & LO_MASK) + (term_lh & LO_MASK) + (term_ll >> 64);

    term_hh + (term_hl >> 64) + (term_lh >> 64) + (carry >> 64)
}

/// Divide with rounding up
#[inline]
pub fn div_rounding_up(numerator: u128, denominator: u128) -> Result<u128, MathError> {
    if denominator == 0 {
        return Err(MathError::DivisionByZero);
    }
    let result = numerator / denominator;
    if numerator % denominator != 0 {
        Ok(result + 1)
    } else {
        Ok(result)
    }
}

// ============================================================
// U256 HELPERS
// ============================================================

#[inline]
pub fn u256_zero(env: &Env) -> U256 {
    U256::from_u32(env, 0)
}

#[inline]
pub fn u256_max(env: &Env) -> U256 {
    U256::from_parts(env, u64::MAX, u64::MAX, u64::MAX, u64::MAX)
}

/// Narrow a U256 to u128, failing instead of truncating.
#[inline]
pub fn to_u128(value: &U256) -> Result<u128, MathError> {
    value.to_u128().ok_or(MathError::Overflow)
}

pub fn checked_add(env: &Env, a: &U256, b: &U256) -> Result<U256, MathError> {
    if *a > u256_max(env).sub(b) {
        return Err(MathError::Overflow);
    }
    Ok(a.add(b))
}

pub fn checked_mul(env: &Env, a: &U256, b: &U256) -> Result<U256, MathError> {
    let zero = u256_zero(env);
    if *a == zero || *b == zero {
        return Ok(zero);
    }
    if *a > u256_max(env).div(b) {
        return Err(MathError::Overflow);
    }
    Ok(a.mul(b))
}

/// `a - b` modulo 2^256.
///
/// Only for differences of fee-growth accumulators, where the snapshot
/// arithmetic is defined modulo the accumulator width.
pub fn wrapping_sub(env: &Env, a: &U256, b: &U256) -> U256 {
    if *a >= *b {
        a.sub(b)
    } else {
        // MAX - (b - a) + 1 never overflows because b - a >= 1.
        u256_max(env).sub(&b.sub(a)).add(&U256::from_u32(env, 1))
    }
}

/// `floor(a * b / denominator)` (or the ceiling when `round_up`) with the
/// product carried beyond 256 bits.
///
/// Splits `a = q * denominator + r` so that
/// `a * b / denominator = q * b + r * b / denominator`. The only product that
/// must fit 256 bits is `r * b`, which holds whenever `b` and `denominator`
/// are both at most 2^128.
pub fn mul_div_u256(
    env: &Env,
    a: &U256,
    b: &U256,
    denominator: &U256,
    round_up: bool,
) -> Result<U256, MathError> {
    let zero = u256_zero(env);
    if *denominator == zero {
        return Err(MathError::DivisionByZero);
    }

    let q = a.div(denominator);
    let r = a.rem_euclid(denominator);

    let whole = checked_mul(env, &q, b)?;
    let partial = checked_mul(env, &r, b)?;
    let mut result = checked_add(env, &whole, &partial.div(denominator))?;

    if round_up && partial.rem_euclid(denominator) != zero {
        result = checked_add(env, &result, &U256::from_u32(env, 1))?;
    }

    Ok(result)
}

/// Calculates `floor(a * b / denominator)` through U256.
pub fn mul_div(env: &Env, a: u128, b: u128, denominator: u128) -> Result<u128, MathError> {
    if denominator == 0 {
        return Err(MathError::DivisionByZero);
    }
    let product = U256::from_u128(env, a).mul(&U256::from_u128(env, b));
    to_u128(&product.div(&U256::from_u128(env, denominator)))
}

/// Calculates `ceil(a * b / denominator)` through U256.
pub fn mul_div_rounding_up(
    env: &Env,
    a: u128,
    b: u128,
    denominator: u128,
) -> Result<u128, MathError> {
    if denominator == 0 {
        return Err(MathError::DivisionByZero);
    }
    let den = U256::from_u128(env, denominator);
    let product = U256::from_u128(env, a).mul(&U256::from_u128(env, b));
    let mut result = to_u128(&product.div(&den))?;
    if product.rem_euclid(&den) != u256_zero(env) {
        result = result.checked_add(1).ok_or(MathError::Overflow)?;
    }
    Ok(result)
}

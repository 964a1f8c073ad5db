// SPDX-License-Identifier: MIT
// Liquidity Calculations

use soroban_sdk::{Env, U256};

use crate::constants::{Q96, RESOLUTION};
use crate::error::MathError;
use crate::q96::{checked_add, mul_div, mul_div_rounding_up, mul_div_u256, to_u128, u256_zero};
use crate::sqrt_price::get_sqrt_ratio_at_tick;

#[inline]
fn sort(a: u128, b: u128) -> (u128, u128) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Calculate token0 amount for a liquidity and price range
/// Formula: L * 2^96 * (upper - lower) / (upper * lower)
pub fn get_amount_0_delta(
    env: &Env,
    sqrt_price_a: u128,
    sqrt_price_b: u128,
    liquidity: u128,
    round_up: bool,
) -> Result<u128, MathError> {
    let (sqrt_lower, sqrt_upper) = sort(sqrt_price_a, sqrt_price_b);
    if sqrt_lower == 0 {
        return Err(MathError::SqrtPriceOutOfRange);
    }

    let numerator1 = U256::from_u128(env, liquidity).shl(RESOLUTION);
    let numerator2 = U256::from_u128(env, sqrt_upper - sqrt_lower);
    let upper = U256::from_u128(env, sqrt_upper);
    let lower = U256::from_u128(env, sqrt_lower);

    let scaled = mul_div_u256(env, &numerator1, &numerator2, &upper, round_up)?;
    let mut amount = scaled.div(&lower);
    if round_up && scaled.rem_euclid(&lower) != u256_zero(env) {
        amount = checked_add(env, &amount, &U256::from_u32(env, 1))?;
    }

    to_u128(&amount)
}

/// Calculate token1 amount for a liquidity and price range
/// Formula: L * (upper - lower) / 2^96
pub fn get_amount_1_delta(
    env: &Env,
    sqrt_price_a: u128,
    sqrt_price_b: u128,
    liquidity: u128,
    round_up: bool,
) -> Result<u128, MathError> {
    let (sqrt_lower, sqrt_upper) = sort(sqrt_price_a, sqrt_price_b);

    if round_up {
        mul_div_rounding_up(env, liquidity, sqrt_upper - sqrt_lower, Q96)
    } else {
        mul_div(env, liquidity, sqrt_upper - sqrt_lower, Q96)
    }
}

/// Token amounts represented by `liquidity` over `[tick_lower, tick_upper)`
/// at the current price.
///
/// Below the range the position is all token0, above it all token1, and
/// inside it is split at the current price. Amounts owed to the pool round
/// up, amounts owed to the user round down.
pub fn get_amounts_for_liquidity(
    env: &Env,
    sqrt_price_x96: u128,
    current_tick: i32,
    tick_lower: i32,
    tick_upper: i32,
    liquidity: u128,
    round_up: bool,
) -> Result<(u128, u128), MathError> {
    let sqrt_lower = get_sqrt_ratio_at_tick(env, tick_lower)?;
    let sqrt_upper = get_sqrt_ratio_at_tick(env, tick_upper)?;

    if current_tick < tick_lower {
        let amount0 = get_amount_0_delta(env, sqrt_lower, sqrt_upper, liquidity, round_up)?;
        Ok((amount0, 0))
    } else if current_tick < tick_upper {
        let amount0 = get_amount_0_delta(env, sqrt_price_x96, sqrt_upper, liquidity, round_up)?;
        let amount1 = get_amount_1_delta(env, sqrt_lower, sqrt_price_x96, liquidity, round_up)?;
        Ok((amount0, amount1))
    } else {
        let amount1 = get_amount_1_delta(env, sqrt_lower, sqrt_upper, liquidity, round_up)?;
        Ok((0, amount1))
    }
}

/// Apply a signed liquidity delta to an unsigned liquidity value.
#[inline]
pub fn add_delta(liquidity: u128, delta: i128) -> Result<u128, MathError> {
    if delta < 0 {
        liquidity
            .checked_sub(delta.unsigned_abs())
            .ok_or(MathError::LiquidityUnderflow)
    } else {
        liquidity
            .checked_add(delta as u128)
            .ok_or(MathError::LiquidityOverflow)
    }
}

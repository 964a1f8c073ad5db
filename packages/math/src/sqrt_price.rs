// SPDX-License-Identifier: MIT
// Sqrt Price Calculations (Q64.96)

use soroban_sdk::{Env, U256};

use crate::constants::{MAX_SQRT_RATIO, MAX_TICK, MIN_SQRT_RATIO, MIN_TICK, Q96, RESOLUTION};
use crate::error::MathError;
use crate::q96::{checked_add, mul_shr_128, to_u128, u256_max, u256_zero};

/// `sqrt(1.0001^-(2^i)) * 2^128` for i = 1..=18.
/// Bit 0 seeds the ratio directly and is handled separately.
const TICK_FACTORS: [(u32, u128); 18] = [
    (0x2, 0xfff97272373d413259a46990580e213a),
    (0x4, 0xfff2e50f5f656932ef12357cf3c7fdcc),
    (0x8, 0xffe5caca7e10e4e61c3624eaa0941cd0),
    (0x10, 0xffcb9843d60f6159c9db58835c926644),
    (0x20, 0xff973b41fa98c081472e6896dfb254c0),
    (0x40, 0xff2ea16466c96a3843ec78b326b52861),
    (0x80, 0xfe5dee046a99a2a811c461f1969c3053),
    (0x100, 0xfcbe86c7900a88aedcffc83b479aa3a4),
    (0x200, 0xf987a7253ac413176f2b074cf7815e54),
    (0x400, 0xf3392b0822b70005940c7a398e4b70f3),
    (0x800, 0xe7159475a2c29b7443b29c7fa6e889d9),
    (0x1000, 0xd097f3bdfd2022b8845ad8f792aa5825),
    (0x2000, 0xa9f746462d870fdf8a65dc1f90e061e5),
    (0x4000, 0x70d869a156d2a1b890bb3df62baf32f7),
    (0x8000, 0x31be135f97d08fd981231505542fcfa6),
    (0x10000, 0x9aa508b5b7a84e1c677de54f3e99bc9),
    (0x20000, 0x5d6af8dedb81196699c329225ee604),
    (0x40000, 0x2216e584f5fa1ea926041bedfe98),
];

const TICK_ONE_FACTOR: u128 = 0xfffcb933bd6fad37aa2d162d1a594001;

// ============================================================
// TICK <-> SQRT PRICE
// ============================================================

/// Convert tick to sqrt price in Q64.96 format
/// Formula: sqrt(1.0001^tick) * 2^96, rounded up
///
/// Multiplies the Q128.128 factors of every set bit of |tick|, which yields
/// the ratio for the negative tick, then inverts for positive ticks.
pub fn get_sqrt_ratio_at_tick(env: &Env, tick: i32) -> Result<u128, MathError> {
    if !(MIN_TICK..=MAX_TICK).contains(&tick) {
        return Err(MathError::TickOutOfRange);
    }

    let abs_tick = tick.unsigned_abs();

    // `None` is exactly 2^128, one past what a u128 can hold.
    let mut ratio: Option<u128> = if abs_tick & 0x1 != 0 {
        Some(TICK_ONE_FACTOR)
    } else {
        None
    };

    for (bit, factor) in TICK_FACTORS.iter() {
        if abs_tick & bit != 0 {
            ratio = Some(match ratio {
                Some(r) => mul_shr_128(r, *factor),
                None => *factor,
            });
        }
    }

    let ratio = match ratio {
        Some(r) => r,
        None => return Ok(Q96),
    };

    if tick > 0 {
        let inverted = u256_max(env).div(&U256::from_u128(env, ratio));
        let shifted = to_u128(&inverted.shr(32))?;
        let remainder = inverted.rem_euclid(&U256::from_u128(env, 1u128 << 32));
        if remainder != u256_zero(env) {
            return shifted.checked_add(1).ok_or(MathError::Overflow);
        }
        Ok(shifted)
    } else {
        let shifted = ratio >> 32;
        if ratio & 0xFFFFFFFF != 0 {
            Ok(shifted + 1)
        } else {
            Ok(shifted)
        }
    }
}

/// Greatest tick whose sqrt ratio is less than or equal to `sqrt_price_x96`.
pub fn get_tick_at_sqrt_ratio(env: &Env, sqrt_price_x96: u128) -> Result<i32, MathError> {
    if !(MIN_SQRT_RATIO..MAX_SQRT_RATIO).contains(&sqrt_price_x96) {
        return Err(MathError::SqrtPriceOutOfRange);
    }

    let mut low = MIN_TICK;
    let mut high = MAX_TICK;

    while low < high {
        let mid = low + (high - low + 1) / 2;
        if get_sqrt_ratio_at_tick(env, mid)? <= sqrt_price_x96 {
            low = mid;
        } else {
            high = mid - 1;
        }
    }

    Ok(low)
}

// ============================================================
// NEXT SQRT PRICE
// ============================================================

/// Price after adding or removing `amount` of token0 at constant liquidity.
///
/// Computes `L * 2^96 / (L * 2^96 / P +- amount)`, always rounding the
/// result up. Adding token0 lowers the price by no more than the exact
/// value; removing it raises the price at least as far, so the trader is
/// never charged less input.
pub fn get_next_sqrt_price_from_amount0_rounding_up(
    env: &Env,
    sqrt_price_x96: u128,
    liquidity: u128,
    amount: u128,
    add: bool,
) -> Result<u128, MathError> {
    if amount == 0 {
        return Ok(sqrt_price_x96);
    }
    if liquidity == 0 {
        return Err(MathError::ZeroLiquidity);
    }
    if sqrt_price_x96 == 0 {
        return Err(MathError::SqrtPriceOutOfRange);
    }

    let numerator = U256::from_u128(env, liquidity).shl(RESOLUTION);
    let base = numerator.div(&U256::from_u128(env, sqrt_price_x96));
    let amount = U256::from_u128(env, amount);

    let denominator = if add {
        checked_add(env, &base, &amount)?
    } else {
        if base <= amount {
            return Err(MathError::NotEnoughLiquidity);
        }
        base.sub(&amount)
    };

    let quotient = numerator.div(&denominator);
    let next = to_u128(&quotient)?;
    if numerator.rem_euclid(&denominator) != u256_zero(env) {
        return next.checked_add(1).ok_or(MathError::Overflow);
    }
    Ok(next)
}

/// Price after adding or removing `amount` of token1 at constant liquidity.
pub fn get_next_sqrt_price_from_amount1_rounding_down(
    env: &Env,
    sqrt_price_x96: u128,
    liquidity: u128,
    amount: u128,
    add: bool,
) -> Result<u128, MathError> {
    if liquidity == 0 {
        return Err(MathError::ZeroLiquidity);
    }

    let numerator = U256::from_u128(env, amount).shl(RESOLUTION);
    let liquidity = U256::from_u128(env, liquidity);

    if add {
        let quotient = to_u128(&numerator.div(&liquidity))?;
        sqrt_price_x96
            .checked_add(quotient)
            .ok_or(MathError::Overflow)
    } else {
        let mut quotient = to_u128(&numerator.div(&liquidity))?;
        if numerator.rem_euclid(&liquidity) != u256_zero(env) {
            quotient = quotient.checked_add(1).ok_or(MathError::Overflow)?;
        }
        if sqrt_price_x96 <= quotient {
            return Err(MathError::NotEnoughLiquidity);
        }
        Ok(sqrt_price_x96 - quotient)
    }
}

/// Next sqrt price given an input amount of token0 or token1.
pub fn get_next_sqrt_price_from_input(
    env: &Env,
    sqrt_price_x96: u128,
    liquidity: u128,
    amount_in: u128,
    zero_for_one: bool,
) -> Result<u128, MathError> {
    if zero_for_one {
        get_next_sqrt_price_from_amount0_rounding_up(env, sqrt_price_x96, liquidity, amount_in, true)
    } else {
        get_next_sqrt_price_from_amount1_rounding_down(env, sqrt_price_x96, liquidity, amount_in, true)
    }
}

/// Next sqrt price given an output amount of token0 or token1.
pub fn get_next_sqrt_price_from_output(
    env: &Env,
    sqrt_price_x96: u128,
    liquidity: u128,
    amount_out: u128,
    zero_for_one: bool,
) -> Result<u128, MathError> {
    if zero_for_one {
        get_next_sqrt_price_from_amount1_rounding_down(env, sqrt_price_x96, liquidity, amount_out, false)
    } else {
        get_next_sqrt_price_from_amount0_rounding_up(env, sqrt_price_x96, liquidity, amount_out, false)
    }
}

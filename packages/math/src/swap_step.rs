// SPDX-License-Identifier: MIT
// Constant-Liquidity Swap Step

use soroban_sdk::Env;

use crate::constants::FEE_DENOMINATOR;
use crate::error::MathError;
use crate::liquidity::{get_amount_0_delta, get_amount_1_delta};
use crate::q96::{mul_div, mul_div_rounding_up};
use crate::sqrt_price::{get_next_sqrt_price_from_input, get_next_sqrt_price_from_output};

/// Outcome of swapping within a single liquidity segment.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SwapStep {
    /// Price reached at the end of the step
    pub sqrt_price_next_x96: u128,
    /// Input consumed, excluding the fee
    pub amount_in: u128,
    /// Output produced
    pub amount_out: u128,
    /// Fee charged on the input
    pub fee_amount: u128,
}

/// Swap as far as possible from `sqrt_price_current_x96` towards
/// `sqrt_price_target_x96` at constant `liquidity`.
///
/// Direction follows from the two prices: a target below the current price
/// sells token0. For exact input `amount_remaining` includes the fee. For
/// exact output it is the output still wanted. `fee_pips` is out of
/// `FEE_DENOMINATOR`.
pub fn compute_swap_step(
    env: &Env,
    sqrt_price_current_x96: u128,
    sqrt_price_target_x96: u128,
    liquidity: u128,
    amount_remaining: u128,
    exact_input: bool,
    fee_pips: u32,
) -> Result<SwapStep, MathError> {
    if fee_pips >= FEE_DENOMINATOR {
        return Err(MathError::Overflow);
    }

    let zero_for_one = sqrt_price_current_x96 >= sqrt_price_target_x96;
    let fee = fee_pips as u128;
    let fee_complement = (FEE_DENOMINATOR - fee_pips) as u128;
    let denominator = FEE_DENOMINATOR as u128;

    // Amount needed to reach the target, in the specified direction
    let to_target = if exact_input {
        if zero_for_one {
            get_amount_0_delta(env, sqrt_price_target_x96, sqrt_price_current_x96, liquidity, true)?
        } else {
            get_amount_1_delta(env, sqrt_price_current_x96, sqrt_price_target_x96, liquidity, true)?
        }
    } else if zero_for_one {
        get_amount_1_delta(env, sqrt_price_target_x96, sqrt_price_current_x96, liquidity, false)?
    } else {
        get_amount_0_delta(env, sqrt_price_current_x96, sqrt_price_target_x96, liquidity, false)?
    };

    let sqrt_price_next_x96 = if exact_input {
        let remaining_less_fee = mul_div(env, amount_remaining, fee_complement, denominator)?;
        if remaining_less_fee >= to_target {
            sqrt_price_target_x96
        } else {
            get_next_sqrt_price_from_input(
                env,
                sqrt_price_current_x96,
                liquidity,
                remaining_less_fee,
                zero_for_one,
            )?
        }
    } else if amount_remaining >= to_target {
        sqrt_price_target_x96
    } else {
        get_next_sqrt_price_from_output(
            env,
            sqrt_price_current_x96,
            liquidity,
            amount_remaining,
            zero_for_one,
        )?
    };

    let reached_target = sqrt_price_next_x96 == sqrt_price_target_x96;

    let (amount_in, mut amount_out) = if zero_for_one {
        let amount_in = if reached_target && exact_input {
            to_target
        } else {
            get_amount_0_delta(env, sqrt_price_next_x96, sqrt_price_current_x96, liquidity, true)?
        };
        let amount_out = if reached_target && !exact_input {
            to_target
        } else {
            get_amount_1_delta(env, sqrt_price_next_x96, sqrt_price_current_x96, liquidity, false)?
        };
        (amount_in, amount_out)
    } else {
        let amount_in = if reached_target && exact_input {
            to_target
        } else {
            get_amount_1_delta(env, sqrt_price_current_x96, sqrt_price_next_x96, liquidity, true)?
        };
        let amount_out = if reached_target && !exact_input {
            to_target
        } else {
            get_amount_0_delta(env, sqrt_price_current_x96, sqrt_price_next_x96, liquidity, false)?
        };
        (amount_in, amount_out)
    };

    // Never hand out more than was asked for
    if !exact_input && amount_out > amount_remaining {
        amount_out = amount_remaining;
    }

    let fee_amount = if exact_input && !reached_target {
        // The remainder beyond what moved the price is all fee
        amount_remaining
            .checked_sub(amount_in)
            .ok_or(MathError::Overflow)?
    } else {
        mul_div_rounding_up(env, amount_in, fee, fee_complement)?
    };

    Ok(SwapStep {
        sqrt_price_next_x96,
        amount_in,
        amount_out,
        fee_amount,
    })
}

// Position Management Logic

use meridian_math::{add_delta, MathError};
use soroban_sdk::{Env, U256};

use crate::fees::calculate_pending_fees;
use crate::types::{Position, RangeError};

/// Accrue fees into `pos` and apply `liquidity_delta`.
///
/// Fees are credited on the liquidity held before the change, then the
/// checkpoints move to the current inside growth. A zero delta only accrues
/// fees and is rejected on a position without liquidity.
pub fn update_position(
    env: &Env,
    pos: &mut Position,
    liquidity_delta: i128,
    fee_growth_inside_0: &U256,
    fee_growth_inside_1: &U256,
) -> Result<(), MathError> {
    if liquidity_delta == 0 && pos.liquidity == 0 {
        return Err(MathError::ZeroLiquidity);
    }

    let liquidity_next = add_delta(pos.liquidity, liquidity_delta)?;
    let (owed_0, owed_1) =
        calculate_pending_fees(env, pos, fee_growth_inside_0, fee_growth_inside_1)?;

    pos.tokens_owed_0 = pos
        .tokens_owed_0
        .checked_add(owed_0)
        .ok_or(MathError::Overflow)?;
    pos.tokens_owed_1 = pos
        .tokens_owed_1
        .checked_add(owed_1)
        .ok_or(MathError::Overflow)?;

    pos.liquidity = liquidity_next;
    pos.fee_growth_inside_last_0 = fee_growth_inside_0.clone();
    pos.fee_growth_inside_last_1 = fee_growth_inside_1.clone();

    Ok(())
}

/// Credit principal released by a burn.
pub fn credit_tokens_owed(pos: &mut Position, amount0: u128, amount1: u128) -> Result<(), MathError> {
    pos.tokens_owed_0 = pos
        .tokens_owed_0
        .checked_add(amount0)
        .ok_or(MathError::Overflow)?;
    pos.tokens_owed_1 = pos
        .tokens_owed_1
        .checked_add(amount1)
        .ok_or(MathError::Overflow)?;
    Ok(())
}

/// Take up to the requested maximum of each owed token out of `pos`.
/// Returns the amounts actually taken.
pub fn collect_owed(pos: &mut Position, amount0_max: u128, amount1_max: u128) -> (u128, u128) {
    let amount0 = pos.tokens_owed_0.min(amount0_max);
    let amount1 = pos.tokens_owed_1.min(amount1_max);

    pos.tokens_owed_0 -= amount0;
    pos.tokens_owed_1 -= amount1;

    (amount0, amount1)
}

// ============================================================
// POSITION VALIDATION
// ============================================================

/// Validate a position's range against the pool's admissible range.
pub fn validate_position_range(
    tick_lower: i32,
    tick_upper: i32,
    pool_tick_lower: i32,
    pool_tick_upper: i32,
) -> Result<(), RangeError> {
    if tick_lower >= tick_upper {
        return Err(RangeError::Inverted);
    }
    if tick_lower < pool_tick_lower || tick_upper > pool_tick_upper {
        return Err(RangeError::OutOfBounds);
    }
    Ok(())
}

// Tick Update and Crossing Logic

use meridian_math::{add_delta, wrapping_sub, MathError, MAX_TICK, MIN_TICK};
use soroban_sdk::{Env, U256};

use crate::types::TickInfo;

/// Update a tick when liquidity is added or removed.
///
/// Returns whether the tick flipped between initialized and uninitialized.
/// A tick initialized at or below the current tick assumes all fee growth so
/// far happened below it.
pub fn update_tick(
    env: &Env,
    read_tick: impl Fn(&Env, i32) -> TickInfo,
    write_tick: impl Fn(&Env, i32, &TickInfo),
    tick: i32,
    current_tick: i32,
    liquidity_delta: i128,
    fee_growth_global_0: &U256,
    fee_growth_global_1: &U256,
    upper: bool,
) -> Result<bool, MathError> {
    let mut info = read_tick(env, tick);

    let liquidity_gross_before = info.liquidity_gross;
    let liquidity_gross_after = add_delta(liquidity_gross_before, liquidity_delta)?;

    let flipped = (liquidity_gross_after == 0) != (liquidity_gross_before == 0);

    if liquidity_gross_before == 0 {
        if tick <= current_tick {
            info.fee_growth_outside_0 = fee_growth_global_0.clone();
            info.fee_growth_outside_1 = fee_growth_global_1.clone();
        }
        info.initialized = true;
    }

    info.liquidity_gross = liquidity_gross_after;

    // Crossing the upper boundary upwards removes the position's liquidity
    info.liquidity_net = if upper {
        info.liquidity_net.checked_sub(liquidity_delta)
    } else {
        info.liquidity_net.checked_add(liquidity_delta)
    }
    .ok_or(MathError::Overflow)?;

    if liquidity_gross_after == 0 {
        info.initialized = false;
    }

    write_tick(env, tick, &info);

    Ok(flipped)
}

/// Cross a tick boundary during a swap.
///
/// Flips the outside accumulators to the other side of the tick and returns
/// the tick's net liquidity, to be added when moving up and subtracted when
/// moving down.
pub fn cross_tick(
    env: &Env,
    info: &mut TickInfo,
    fee_growth_global_0: &U256,
    fee_growth_global_1: &U256,
) -> i128 {
    info.fee_growth_outside_0 = wrapping_sub(env, fee_growth_global_0, &info.fee_growth_outside_0);
    info.fee_growth_outside_1 = wrapping_sub(env, fee_growth_global_1, &info.fee_growth_outside_1);
    info.liquidity_net
}

/// Check if a tick is within valid range
#[inline]
pub fn is_valid_tick(tick: i32) -> bool {
    (MIN_TICK..=MAX_TICK).contains(&tick)
}

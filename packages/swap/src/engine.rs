use meridian_math::{
    add_delta, checked_add, compute_swap_step, get_sqrt_ratio_at_tick, get_tick_at_sqrt_ratio,
    MathError, FEE_GROWTH_RESOLUTION, MAX_SWAP_ITERATIONS, MAX_TICK, MIN_TICK,
};
use meridian_tick::{cross_tick, TickIndex, TickInfo};
use soroban_sdk::{Env, Map, U256};

use crate::types::{SwapOutcome, SwapParams, SwapState};

// ============================================================
// SWAP LOOP
// ============================================================

/// Run a swap against `state` without touching storage.
///
/// The loop walks from one initialized tick to the next in the direction of
/// travel, swapping at constant liquidity inside each segment. Crossed ticks
/// are read through `read_tick` and returned in the outcome with their
/// accumulators flipped, so the caller decides whether to persist them.
/// Execution and simulation share this function, which is what keeps quotes
/// identical to real swaps.
///
/// The price limit must already be validated against the current price.
pub fn compute_swap<F>(
    env: &Env,
    state: &SwapState,
    index: &TickIndex,
    read_tick: F,
    params: &SwapParams,
) -> Result<SwapOutcome, MathError>
where
    F: Fn(&Env, i32) -> TickInfo,
{
    let zero_for_one = params.zero_for_one;
    let mut state = state.clone();
    let mut crossed: Map<i32, TickInfo> = Map::new(env);

    let mut amount_remaining = params.amount_specified;
    // Output so far for exact input, input so far for exact output
    let mut amount_calculated: u128 = 0;
    let mut fee_total: u128 = 0;
    let mut iterations: u32 = 0;

    while amount_remaining != 0 && state.sqrt_price_x96 != params.sqrt_price_limit_x96 {
        iterations += 1;
        if iterations > MAX_SWAP_ITERATIONS {
            return Err(MathError::TooManyIterations);
        }

        let (tick_next, initialized) = match index.next_initialized(state.tick, zero_for_one) {
            Some(tick) => (tick.clamp(MIN_TICK, MAX_TICK), true),
            None if zero_for_one => (MIN_TICK, false),
            None => (MAX_TICK, false),
        };

        let sqrt_price_start = state.sqrt_price_x96;
        let sqrt_price_next_tick = get_sqrt_ratio_at_tick(env, tick_next)?;

        let sqrt_price_target = if zero_for_one {
            sqrt_price_next_tick.max(params.sqrt_price_limit_x96)
        } else {
            sqrt_price_next_tick.min(params.sqrt_price_limit_x96)
        };

        let step = compute_swap_step(
            env,
            sqrt_price_start,
            sqrt_price_target,
            state.liquidity,
            amount_remaining,
            params.exact_input,
            params.fee,
        )?;

        let step_in = step
            .amount_in
            .checked_add(step.fee_amount)
            .ok_or(MathError::Overflow)?;

        if params.exact_input {
            amount_remaining = amount_remaining
                .checked_sub(step_in)
                .ok_or(MathError::Overflow)?;
            amount_calculated = amount_calculated
                .checked_add(step.amount_out)
                .ok_or(MathError::Overflow)?;
        } else {
            amount_remaining = amount_remaining
                .checked_sub(step.amount_out)
                .ok_or(MathError::Overflow)?;
            amount_calculated = amount_calculated
                .checked_add(step_in)
                .ok_or(MathError::Overflow)?;
        }

        fee_total = fee_total
            .checked_add(step.fee_amount)
            .ok_or(MathError::Overflow)?;

        if state.liquidity > 0 && step.fee_amount > 0 {
            let growth = U256::from_u128(env, step.fee_amount)
                .shl(FEE_GROWTH_RESOLUTION)
                .div(&U256::from_u128(env, state.liquidity));
            if zero_for_one {
                state.fee_growth_global_0 = checked_add(env, &state.fee_growth_global_0, &growth)?;
            } else {
                state.fee_growth_global_1 = checked_add(env, &state.fee_growth_global_1, &growth)?;
            }
        }

        state.sqrt_price_x96 = step.sqrt_price_next_x96;

        if step.sqrt_price_next_x96 == sqrt_price_next_tick {
            if initialized {
                let mut info = read_tick(env, tick_next);
                let liquidity_net = cross_tick(
                    env,
                    &mut info,
                    &state.fee_growth_global_0,
                    &state.fee_growth_global_1,
                );
                crossed.set(tick_next, info);

                let liquidity_delta = if zero_for_one {
                    liquidity_net.checked_neg().ok_or(MathError::Overflow)?
                } else {
                    liquidity_net
                };
                state.liquidity = add_delta(state.liquidity, liquidity_delta)?;
            }
            state.tick = if zero_for_one { tick_next - 1 } else { tick_next };
        } else if step.sqrt_price_next_x96 != sqrt_price_start {
            state.tick = get_tick_at_sqrt_ratio(env, step.sqrt_price_next_x96)?;
        }
    }

    let settled = params.amount_specified - amount_remaining;
    let (amount_in, amount_out) = if params.exact_input {
        (settled, amount_calculated)
    } else {
        (amount_calculated, settled)
    };

    Ok(SwapOutcome {
        amount_in,
        amount_out,
        fee_amount: fee_total,
        state,
        crossed,
        filled: amount_remaining == 0,
    })
}

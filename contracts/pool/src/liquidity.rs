// Position and tick bookkeeping shared by mint and burn

use meridian_math::{add_delta, get_amounts_for_liquidity};
use meridian_position::update_position;
use meridian_tick::{get_fee_growth_inside, update_tick, TickIndex, TickInfo};
use soroban_sdk::{Address, BytesN, Env};

use crate::error::PoolError;
use crate::storage::{read_position, read_tick, read_tick_index, remove_tick, write_tick, write_tick_index};
use crate::types::{PoolState, Position};

/// Result of applying a liquidity delta to a position.
pub struct PositionChange {
    pub position: Position,
    pub amount0: u128,
    pub amount1: u128,
}

/// Apply `liquidity_delta` to the position `(owner, tick_lower, tick_upper)`.
///
/// Updates both boundary ticks and the tick index, accrues fees into the
/// position, and adjusts `state.liquidity` when the range contains the current
/// tick. Token amounts round up when liquidity is added and down when it is
/// removed. The position is returned, not written.
pub fn modify_position(
    env: &Env,
    pool_id: &BytesN<32>,
    state: &mut PoolState,
    owner: &Address,
    tick_lower: i32,
    tick_upper: i32,
    liquidity_delta: i128,
) -> Result<PositionChange, PoolError> {
    let read = |e: &Env, tick: i32| read_tick(e, pool_id, tick);
    let write = |e: &Env, tick: i32, info: &TickInfo| write_tick(e, pool_id, tick, info);

    let mut position = read_position(env, pool_id, owner, tick_lower, tick_upper);

    let mut flipped_lower = false;
    let mut flipped_upper = false;
    if liquidity_delta != 0 {
        flipped_lower = update_tick(
            env,
            read,
            write,
            tick_lower,
            state.tick,
            liquidity_delta,
            &state.fee_growth_global_0,
            &state.fee_growth_global_1,
            false,
        )?;
        flipped_upper = update_tick(
            env,
            read,
            write,
            tick_upper,
            state.tick,
            liquidity_delta,
            &state.fee_growth_global_0,
            &state.fee_growth_global_1,
            true,
        )?;
    }

    let lower_info = read(env, tick_lower);
    let upper_info = read(env, tick_upper);
    let (inside_0, inside_1) = get_fee_growth_inside(
        env,
        &lower_info,
        &upper_info,
        tick_lower,
        tick_upper,
        state.tick,
        &state.fee_growth_global_0,
        &state.fee_growth_global_1,
    );

    update_position(env, &mut position, liquidity_delta, &inside_0, &inside_1)?;

    if flipped_lower || flipped_upper {
        let mut index = TickIndex::from_vec(read_tick_index(env, pool_id));
        for (flipped, tick, info) in [
            (flipped_lower, tick_lower, &lower_info),
            (flipped_upper, tick_upper, &upper_info),
        ] {
            if !flipped {
                continue;
            }
            if info.initialized {
                index.insert(tick);
            } else {
                index.remove(tick);
                remove_tick(env, pool_id, tick);
            }
        }
        write_tick_index(env, pool_id, index.as_vec());
    }

    let (amount0, amount1) = if liquidity_delta == 0 {
        (0, 0)
    } else {
        let in_range = state.tick >= tick_lower && state.tick < tick_upper;
        if in_range {
            state.liquidity = add_delta(state.liquidity, liquidity_delta)?;
        }
        get_amounts_for_liquidity(
            env,
            state.sqrt_price_x96,
            state.tick,
            tick_lower,
            tick_upper,
            liquidity_delta.unsigned_abs(),
            liquidity_delta > 0,
        )?
    };

    Ok(PositionChange {
        position,
        amount0,
        amount1,
    })
}

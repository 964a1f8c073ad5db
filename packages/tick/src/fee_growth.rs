// Fee Growth Calculations

use meridian_math::wrapping_sub;
use soroban_sdk::{Env, U256};

use crate::types::TickInfo;

/// Fee growth per unit of liquidity accumulated inside `[lower_tick, upper_tick)`.
///
/// `global - below(lower) - above(upper)`, where each tick's outside value is
/// read as below or above depending on which side of it the current tick is.
/// All differences are modulo 2^256; only differences between two readings of
/// the result are meaningful.
pub fn get_fee_growth_inside(
    env: &Env,
    lower_info: &TickInfo,
    upper_info: &TickInfo,
    lower_tick: i32,
    upper_tick: i32,
    current_tick: i32,
    fee_growth_global_0: &U256,
    fee_growth_global_1: &U256,
) -> (U256, U256) {
    let (fee_growth_below_0, fee_growth_below_1) = if current_tick >= lower_tick {
        (
            lower_info.fee_growth_outside_0.clone(),
            lower_info.fee_growth_outside_1.clone(),
        )
    } else {
        (
            wrapping_sub(env, fee_growth_global_0, &lower_info.fee_growth_outside_0),
            wrapping_sub(env, fee_growth_global_1, &lower_info.fee_growth_outside_1),
        )
    };

    let (fee_growth_above_0, fee_growth_above_1) = if current_tick < upper_tick {
        (
            upper_info.fee_growth_outside_0.clone(),
            upper_info.fee_growth_outside_1.clone(),
        )
    } else {
        (
            wrapping_sub(env, fee_growth_global_0, &upper_info.fee_growth_outside_0),
            wrapping_sub(env, fee_growth_global_1, &upper_info.fee_growth_outside_1),
        )
    };

    let fee_growth_inside_0 = wrapping_sub(
        env,
        &wrapping_sub(env, fee_growth_global_0, &fee_growth_below_0),
        &fee_growth_above_0,
    );
    let fee_growth_inside_1 = wrapping_sub(
        env,
        &wrapping_sub(env, fee_growth_global_1, &fee_growth_below_1),
        &fee_growth_above_1,
    );

    (fee_growth_inside_0, fee_growth_inside_1)
}

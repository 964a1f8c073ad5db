use meridian_math::{mul_div_u256, to_u128, wrapping_sub, MathError, FEE_GROWTH_RESOLUTION};
use soroban_sdk::{Env, U256};

use crate::types::Position;

/// Fees earned by `pos` since its last touch, given the current fee growth
/// inside its range.
///
/// `(inside - inside_last) * liquidity / 2^128` per token.
pub fn calculate_pending_fees(
    env: &Env,
    pos: &Position,
    fee_growth_inside_0: &U256,
    fee_growth_inside_1: &U256,
) -> Result<(u128, u128), MathError> {
    if pos.liquidity == 0 {
        return Ok((0, 0));
    }

    let liquidity = U256::from_u128(env, pos.liquidity);
    let q128 = U256::from_u32(env, 1).shl(FEE_GROWTH_RESOLUTION);

    let delta_0 = wrapping_sub(env, fee_growth_inside_0, &pos.fee_growth_inside_last_0);
    let delta_1 = wrapping_sub(env, fee_growth_inside_1, &pos.fee_growth_inside_last_1);

    let pending_0 = to_u128(&mul_div_u256(env, &delta_0, &liquidity, &q128, false)?)?;
    let pending_1 = to_u128(&mul_div_u256(env, &delta_1, &liquidity, &q128, false)?)?;

    Ok((pending_0, pending_1))
}

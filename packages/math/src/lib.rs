// Meridian Math Package

#![no_std]

pub mod constants;
pub mod error;
pub mod liquidity;
pub mod q96;
pub mod sqrt_price;
pub mod swap_step;

pub use constants::*;
pub use error::MathError;

pub use q96::{
    checked_add,
    checked_mul,
    div_rounding_up,
    mul_div,
    mul_div_rounding_up,
    mul_div_u256,
    mul_shr_128,
    to_u128,
    u256_max,
    u256_zero,
    wrapping_sub,
};

pub use sqrt_price::{
    get_next_sqrt_price_from_amount0_rounding_up,
    get_next_sqrt_price_from_amount1_rounding_down,
    get_next_sqrt_price_from_input,
    get_next_sqrt_price_from_output,
    get_sqrt_ratio_at_tick,
    get_tick_at_sqrt_ratio,
};

pub use liquidity::{add_delta, get_amount_0_delta, get_amount_1_delta, get_amounts_for_liquidity};

pub use swap_step::{compute_swap_step, SwapStep};

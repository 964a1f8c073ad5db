use meridian_tick::TickInfo;
use soroban_sdk::{Map, U256};

/// The part of a pool's state a swap reads and advances.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapState {
    pub sqrt_price_x96: u128,
    pub tick: i32,
    pub liquidity: u128,
    pub fee_growth_global_0: U256,
    pub fee_growth_global_1: U256,
}

/// What the caller asked for.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SwapParams {
    /// Sell token0 for token1 (price falls) when true
    pub zero_for_one: bool,
    /// Input for exact-input swaps, wanted output for exact-output swaps
    pub amount_specified: u128,
    pub sqrt_price_limit_x96: u128,
    pub exact_input: bool,
    /// Fee in pips
    pub fee: u32,
}

/// Result of running the swap loop.
#[derive(Clone, Debug)]
pub struct SwapOutcome {
    /// Input taken from the trader, fees included
    pub amount_in: u128,
    /// Output owed to the trader
    pub amount_out: u128,
    /// Fees charged on the input
    pub fee_amount: u128,
    /// State after the swap
    pub state: SwapState,
    /// Ticks crossed, with their outside accumulators already flipped
    pub crossed: Map<i32, TickInfo>,
    /// Whether `amount_specified` was fully consumed or delivered
    pub filled: bool,
}

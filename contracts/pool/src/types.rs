// Pool Types

use soroban_sdk::{contracttype, Address, Env, U256};

pub use meridian_position::Position;
pub use meridian_tick::TickInfo;

// ============================================================
// POOL CONFIGURATION
// ============================================================

/// Immutable parameters fixed at registration.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolConfig {
    /// token0 < token1
    pub token0: Address,
    pub token1: Address,
    /// Swap fee in pips
    pub fee: u32,
    /// Admissible range for positions
    pub tick_lower: i32,
    pub tick_upper: i32,
}

// ============================================================
// POOL STATE
// ============================================================

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolState {
    /// Current sqrt price as Q64.96 fixed point
    pub sqrt_price_x96: u128,
    pub tick: i32,
    /// Liquidity of the positions whose range contains `tick`
    pub liquidity: u128,
    /// Fee growth per unit of liquidity, X128
    pub fee_growth_global_0: U256,
    pub fee_growth_global_1: U256,
    /// Tokens held on this pool's account
    pub reserve0: u128,
    pub reserve1: u128,
    pub initialized: bool,
}

impl PoolState {
    pub fn uninitialized(env: &Env) -> Self {
        Self {
            sqrt_price_x96: 0,
            tick: 0,
            liquidity: 0,
            fee_growth_global_0: U256::from_u32(env, 0),
            fee_growth_global_1: U256::from_u32(env, 0),
            reserve0: 0,
            reserve1: 0,
            initialized: false,
        }
    }
}

// ============================================================
// SWAP RESULTS
// ============================================================

/// Net token movements of a swap from the pool's side: positive amounts
/// were paid in, negative amounts were paid out.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapAmounts {
    pub amount0: i128,
    pub amount1: i128,
    pub sqrt_price_x96: u128,
    pub liquidity: u128,
    pub tick: i32,
}

/// What a swap would do against the current state.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapSimulation {
    pub amount0: i128,
    pub amount1: i128,
    /// Input consumed, fees included
    pub amount_in: i128,
    pub amount_out: i128,
    pub fee_amount: i128,
    pub sqrt_price_x96: u128,
    pub liquidity: u128,
    pub tick: i32,
    /// False when the price limit stopped the swap early
    pub filled: bool,
}

//! Router type definitions

use soroban_sdk::{contracttype, Address, Vec, U256};

// ============================================================
// SWAP PARAMS
// ============================================================

/// Sell exactly `amount_in` of `token_in` across the listed pools of the
/// pair. `index_path` holds indices into the factory's pool list for the
/// pair; pools are used in the order given.
#[contracttype]
#[derive(Clone, Debug)]
pub struct ExactInputParams {
    pub token_in: Address,
    pub token_out: Address,
    pub index_path: Vec<u32>,
    pub amount_in: i128,
    pub amount_out_minimum: i128,
    /// 0 for no limit
    pub sqrt_price_limit_x96: u128,
    pub recipient: Address,
    /// Latest ledger timestamp at which the swap may execute
    pub deadline: u64,
}

/// Buy exactly `amount_out` of `token_out`
#[contracttype]
#[derive(Clone, Debug)]
pub struct ExactOutputParams {
    pub token_in: Address,
    pub token_out: Address,
    pub index_path: Vec<u32>,
    pub amount_out: i128,
    pub amount_in_maximum: i128,
    /// 0 for no limit
    pub sqrt_price_limit_x96: u128,
    pub recipient: Address,
    pub deadline: u64,
}

// ============================================================
// ENGINE TYPES (cross-contract)
// ============================================================

/// Mirrors the engine's `SwapAmounts`
#[contracttype]
#[derive(Clone, Debug)]
pub struct SwapAmounts {
    pub amount0: i128,
    pub amount1: i128,
    pub sqrt_price_x96: u128,
    pub liquidity: u128,
    pub tick: i32,
}

/// Mirrors the engine's `SwapSimulation`
#[contracttype]
#[derive(Clone, Debug)]
pub struct SwapSimulation {
    pub amount0: i128,
    pub amount1: i128,
    pub amount_in: i128,
    pub amount_out: i128,
    pub fee_amount: i128,
    pub sqrt_price_x96: u128,
    pub liquidity: u128,
    pub tick: i32,
    pub filled: bool,
}

/// Mirrors the engine's `PoolState`
#[contracttype]
#[derive(Clone, Debug)]
pub struct PoolState {
    pub sqrt_price_x96: u128,
    pub tick: i32,
    pub liquidity: u128,
    pub fee_growth_global_0: U256,
    pub fee_growth_global_1: U256,
    pub reserve0: u128,
    pub reserve1: u128,
    pub initialized: bool,
}

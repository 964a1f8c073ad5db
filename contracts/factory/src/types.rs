//! Factory type definitions

use soroban_sdk::{contracttype, Address, BytesN, U256};

// ============================================================
// REGISTRY RECORDS
// ============================================================

/// Canonically ordered token pair, token0 < token1
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Pair {
    pub token0: Address,
    pub token1: Address,
}

/// Parameters a pool was created with, as recorded by the registry
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolRecord {
    pub pool_id: BytesN<32>,
    pub token0: Address,
    pub token1: Address,
    pub fee: u32,
    pub tick_lower: i32,
    pub tick_upper: i32,
    /// Position in the pair's pool list
    pub index: u32,
}

/// A registered pool together with its live engine state
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolInfo {
    pub pool_id: BytesN<32>,
    pub token0: Address,
    pub token1: Address,
    pub fee: u32,
    pub tick_lower: i32,
    pub tick_upper: i32,
    pub index: u32,
    pub sqrt_price_x96: u128,
    pub tick: i32,
    pub liquidity: u128,
    pub initialized: bool,
}

// ============================================================
// ENGINE TYPES (cross-contract)
// ============================================================

/// Mirrors the engine's `PoolConfig`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolConfig {
    pub token0: Address,
    pub token1: Address,
    pub fee: u32,
    pub tick_lower: i32,
    pub tick_upper: i32,
}

/// Mirrors the engine's `PoolState`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
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

// Tick Types

use soroban_sdk::{contracttype, Env, U256};

/// Information stored for each initialized tick
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TickInfo {
    /// Total liquidity referencing this tick as a boundary
    pub liquidity_gross: u128,
    /// Net liquidity added when the price crosses this tick upwards
    pub liquidity_net: i128,
    /// Fee growth on the far side of this tick for token0 (X128)
    pub fee_growth_outside_0: U256,
    /// Fee growth on the far side of this tick for token1 (X128)
    pub fee_growth_outside_1: U256,
    /// Whether this tick is initialized
    pub initialized: bool,
}

impl TickInfo {
    /// An uninitialized tick, as read for a missing storage entry.
    pub fn empty(env: &Env) -> Self {
        Self {
            liquidity_gross: 0,
            liquidity_net: 0,
            fee_growth_outside_0: U256::from_u32(env, 0),
            fee_growth_outside_1: U256::from_u32(env, 0),
            initialized: false,
        }
    }
}

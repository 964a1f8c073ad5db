//! Factory events

use soroban_sdk::{contractevent, Address, BytesN, Env};

/// Emitted once per newly created pool. Deduplicated calls emit nothing.
#[contractevent]
pub struct PoolCreated {
    #[topic]
    pub token0: Address,
    #[topic]
    pub token1: Address,
    pub index: u32,
    pub tick_lower: i32,
    pub tick_upper: i32,
    pub fee: u32,
    pub pool: BytesN<32>,
}

#[allow(clippy::too_many_arguments)]
pub fn emit_pool_created(
    env: &Env,
    token0: &Address,
    token1: &Address,
    index: u32,
    tick_lower: i32,
    tick_upper: i32,
    fee: u32,
    pool: &BytesN<32>,
) {
    PoolCreated {
        token0: token0.clone(),
        token1: token1.clone(),
        index,
        tick_lower,
        tick_upper,
        fee,
        pool: pool.clone(),
    }
    .publish(env);
}

// Pool engine events
// Every event carries the pool id as its first topic after the event name.

use soroban_sdk::{contractevent, Address, BytesN, Env};

use crate::types::{PoolConfig, SwapAmounts};

#[contractevent]
pub struct PoolRegistered {
    #[topic]
    pub pool_id: BytesN<32>,
    pub token0: Address,
    pub token1: Address,
    pub fee: u32,
    pub tick_lower: i32,
    pub tick_upper: i32,
}

#[contractevent]
pub struct Initialize {
    #[topic]
    pub pool_id: BytesN<32>,
    pub sqrt_price_x96: u128,
    pub tick: i32,
}

#[contractevent]
pub struct Mint {
    #[topic]
    pub pool_id: BytesN<32>,
    #[topic]
    pub owner: Address,
    pub payer: Address,
    pub tick_lower: i32,
    pub tick_upper: i32,
    pub liquidity: u128,
    pub amount0: i128,
    pub amount1: i128,
}

#[contractevent]
pub struct Burn {
    #[topic]
    pub pool_id: BytesN<32>,
    #[topic]
    pub owner: Address,
    pub tick_lower: i32,
    pub tick_upper: i32,
    pub liquidity: u128,
    pub amount0: i128,
    pub amount1: i128,
}

#[contractevent]
pub struct Collect {
    #[topic]
    pub pool_id: BytesN<32>,
    #[topic]
    pub owner: Address,
    pub recipient: Address,
    pub tick_lower: i32,
    pub tick_upper: i32,
    pub amount0: i128,
    pub amount1: i128,
}

#[contractevent]
pub struct Swap {
    #[topic]
    pub pool_id: BytesN<32>,
    #[topic]
    pub payer: Address,
    pub recipient: Address,
    pub amount0: i128,
    pub amount1: i128,
    pub sqrt_price_x96: u128,
    pub liquidity: u128,
    pub tick: i32,
}

pub fn emit_pool_registered(env: &Env, pool_id: &BytesN<32>, config: &PoolConfig) {
    PoolRegistered {
        pool_id: pool_id.clone(),
        token0: config.token0.clone(),
        token1: config.token1.clone(),
        fee: config.fee,
        tick_lower: config.tick_lower,
        tick_upper: config.tick_upper,
    }
    .publish(env);
}

pub fn emit_initialize(env: &Env, pool_id: &BytesN<32>, sqrt_price_x96: u128, tick: i32) {
    Initialize {
        pool_id: pool_id.clone(),
        sqrt_price_x96,
        tick,
    }
    .publish(env);
}

#[allow(clippy::too_many_arguments)]
pub fn emit_mint(
    env: &Env,
    pool_id: &BytesN<32>,
    owner: &Address,
    payer: &Address,
    tick_lower: i32,
    tick_upper: i32,
    liquidity: u128,
    amount0: i128,
    amount1: i128,
) {
    Mint {
        pool_id: pool_id.clone(),
        owner: owner.clone(),
        payer: payer.clone(),
        tick_lower,
        tick_upper,
        liquidity,
        amount0,
        amount1,
    }
    .publish(env);
}

#[allow(clippy::too_many_arguments)]
pub fn emit_burn(
    env: &Env,
    pool_id: &BytesN<32>,
    owner: &Address,
    tick_lower: i32,
    tick_upper: i32,
    liquidity: u128,
    amount0: i128,
    amount1: i128,
) {
    Burn {
        pool_id: pool_id.clone(),
        owner: owner.clone(),
        tick_lower,
        tick_upper,
        liquidity,
        amount0,
        amount1,
    }
    .publish(env);
}

#[allow(clippy::too_many_arguments)]
pub fn emit_collect(
    env: &Env,
    pool_id: &BytesN<32>,
    owner: &Address,
    recipient: &Address,
    tick_lower: i32,
    tick_upper: i32,
    amount0: i128,
    amount1: i128,
) {
    Collect {
        pool_id: pool_id.clone(),
        owner: owner.clone(),
        recipient: recipient.clone(),
        tick_lower,
        tick_upper,
        amount0,
        amount1,
    }
    .publish(env);
}

pub fn emit_swap(
    env: &Env,
    pool_id: &BytesN<32>,
    payer: &Address,
    recipient: &Address,
    amounts: &SwapAmounts,
) {
    Swap {
        pool_id: pool_id.clone(),
        payer: payer.clone(),
        recipient: recipient.clone(),
        amount0: amounts.amount0,
        amount1: amounts.amount1,
        sqrt_price_x96: amounts.sqrt_price_x96,
        liquidity: amounts.liquidity,
        tick: amounts.tick,
    }
    .publish(env);
}

#![no_std]

//! # Meridian Factory
//!
//! Permissionless pool registry.
//!
//! ## Responsibilities:
//! 1. Deterministic pool ids: sha256 over the canonical creation parameters
//! 2. Duplicate prevention: creating an existing pool returns its id
//! 3. Per-pair pool lists and the list of distinct pairs
//! 4. Registering new pools with the engine

use soroban_sdk::{
    contract, contractimpl, log, vec, xdr::ToXdr, Address, BytesN, Env, IntoVal, Symbol, Vec,
};

use meridian_math::{MAX_TICK, MIN_TICK};

/// Supported fee tiers in pips, shared with the engine's math.
pub use meridian_math::FEE_TIERS;

mod error;
mod events;
mod storage;
mod types;

pub use error::FactoryError;
use events::*;
use storage::*;
pub use types::*;

// ============================================================
// CONTRACT
// ============================================================

#[contract]
pub struct MeridianFactory;

#[contractimpl]
impl MeridianFactory {
    /// Deploy the factory against the engine that will host its pools.
    pub fn __constructor(env: Env, engine: Address) {
        write_engine(&env, &engine);
        extend_instance_ttl(&env);
    }

    // ========================================================
    // WRITE FUNCTIONS
    // ========================================================

    /// Create a pool, or return the id of the identical pool that already
    /// exists. Token order does not matter.
    pub fn create_pool(
        env: Env,
        token_a: Address,
        token_b: Address,
        tick_lower: i32,
        tick_upper: i32,
        fee: u32,
    ) -> Result<BytesN<32>, FactoryError> {
        if token_a == token_b {
            return Err(FactoryError::IdenticalTokens);
        }
        let (token0, token1) = sort_tokens(token_a, token_b);
        Self::create(&env, token0, token1, tick_lower, tick_upper, fee)
    }

    /// Create the pool if missing and set its price if it has none yet.
    ///
    /// An already initialized pool keeps its price; `sqrt_price_x96` is then
    /// ignored.
    pub fn create_and_initialize_pool_if_necessary(
        env: Env,
        token0: Address,
        token1: Address,
        fee: u32,
        tick_lower: i32,
        tick_upper: i32,
        sqrt_price_x96: u128,
    ) -> Result<BytesN<32>, FactoryError> {
        if token0 == token1 {
            return Err(FactoryError::IdenticalTokens);
        }
        if token0 > token1 {
            return Err(FactoryError::TokensNotSorted);
        }

        let pool_id = Self::create(&env, token0, token1, tick_lower, tick_upper, fee)?;

        let engine = read_engine(&env).ok_or(FactoryError::NotInitialized)?;
        let state = engine_pool_state(&env, &engine, &pool_id);
        if !state.initialized {
            let tick: i32 = env.invoke_contract(
                &engine,
                &Symbol::new(&env, "initialize"),
                vec![&env, pool_id.clone().into_val(&env), sqrt_price_x96.into_val(&env)],
            );
            log!(&env, "pool initialized", pool_id, tick);
        }

        Ok(pool_id)
    }

    // ========================================================
    // READ FUNCTIONS
    // ========================================================

    /// Id of the `index`-th pool created for the pair, in either token order
    pub fn get_pool(env: Env, token_a: Address, token_b: Address, index: u32) -> Option<BytesN<32>> {
        let (token0, token1) = sort_tokens(token_a, token_b);
        read_pair_pools(&env, &token0, &token1).get(index)
    }

    /// All pool ids of the pair, in creation order
    pub fn get_pools(env: Env, token_a: Address, token_b: Address) -> Vec<BytesN<32>> {
        let (token0, token1) = sort_tokens(token_a, token_b);
        read_pair_pools(&env, &token0, &token1)
    }

    pub fn get_pairs(env: Env) -> Vec<Pair> {
        read_pairs(&env)
    }

    /// Creation parameters of a pool
    pub fn get_pool_record(env: Env, pool_id: BytesN<32>) -> Result<PoolRecord, FactoryError> {
        read_pool_record(&env, &pool_id).ok_or(FactoryError::PoolNotFound)
    }

    /// Every pool with its current price, tick and liquidity
    pub fn get_all_pools(env: Env) -> Result<Vec<PoolInfo>, FactoryError> {
        let engine = read_engine(&env).ok_or(FactoryError::NotInitialized)?;
        let mut pools = Vec::new(&env);

        for pool_id in read_all_pools(&env).iter() {
            let record = read_pool_record(&env, &pool_id).ok_or(FactoryError::PoolNotFound)?;
            let state = engine_pool_state(&env, &engine, &pool_id);
            pools.push_back(PoolInfo {
                pool_id: record.pool_id,
                token0: record.token0,
                token1: record.token1,
                fee: record.fee,
                tick_lower: record.tick_lower,
                tick_upper: record.tick_upper,
                index: record.index,
                sqrt_price_x96: state.sqrt_price_x96,
                tick: state.tick,
                liquidity: state.liquidity,
                initialized: state.initialized,
            });
        }

        Ok(pools)
    }

    /// Pool id for a parameter tuple, whether or not the pool exists
    pub fn compute_pool_id(
        env: Env,
        token_a: Address,
        token_b: Address,
        tick_lower: i32,
        tick_upper: i32,
        fee: u32,
    ) -> BytesN<32> {
        let (token0, token1) = sort_tokens(token_a, token_b);
        pool_id_for(&env, &token0, &token1, tick_lower, tick_upper, fee)
    }

    pub fn engine(env: Env) -> Result<Address, FactoryError> {
        read_engine(&env).ok_or(FactoryError::NotInitialized)
    }

    // ========================================================
    // INTERNAL HELPERS
    // ========================================================

    fn create(
        env: &Env,
        token0: Address,
        token1: Address,
        tick_lower: i32,
        tick_upper: i32,
        fee: u32,
    ) -> Result<BytesN<32>, FactoryError> {
        if !FEE_TIERS.contains(&fee) {
            return Err(FactoryError::InvalidFeeTier);
        }
        if tick_lower >= tick_upper {
            return Err(FactoryError::InvalidTickRange);
        }
        if tick_lower < MIN_TICK || tick_upper > MAX_TICK {
            return Err(FactoryError::TickOutOfBounds);
        }

        let pool_id = pool_id_for(env, &token0, &token1, tick_lower, tick_upper, fee);
        if read_pool_record(env, &pool_id).is_some() {
            return Ok(pool_id);
        }

        let engine = read_engine(env).ok_or(FactoryError::NotInitialized)?;

        let mut pair_pools = read_pair_pools(env, &token0, &token1);
        if pair_pools.is_empty() {
            add_pair(
                env,
                Pair {
                    token0: token0.clone(),
                    token1: token1.clone(),
                },
            );
        }
        let index = pair_pools.len();
        pair_pools.push_back(pool_id.clone());
        write_pair_pools(env, &token0, &token1, &pair_pools);
        add_to_all_pools(env, &pool_id);

        write_pool_record(
            env,
            &PoolRecord {
                pool_id: pool_id.clone(),
                token0: token0.clone(),
                token1: token1.clone(),
                fee,
                tick_lower,
                tick_upper,
                index,
            },
        );

        let config = PoolConfig {
            token0: token0.clone(),
            token1: token1.clone(),
            fee,
            tick_lower,
            tick_upper,
        };
        let _: () = env.invoke_contract(
            &engine,
            &Symbol::new(env, "register_pool"),
            vec![env, pool_id.clone().into_val(env), config.into_val(env)],
        );

        extend_instance_ttl(env);
        emit_pool_created(env, &token0, &token1, index, tick_lower, tick_upper, fee, &pool_id);
        log!(env, "pool created", pool_id, index);

        Ok(pool_id)
    }
}

fn sort_tokens(token_a: Address, token_b: Address) -> (Address, Address) {
    if token_a < token_b {
        (token_a, token_b)
    } else {
        (token_b, token_a)
    }
}

/// sha256 over the XDR of `(token0, token1, tick_lower, tick_upper, fee)`
fn pool_id_for(
    env: &Env,
    token0: &Address,
    token1: &Address,
    tick_lower: i32,
    tick_upper: i32,
    fee: u32,
) -> BytesN<32> {
    let mut data = token0.clone().to_xdr(env);
    data.append(&token1.clone().to_xdr(env));
    data.append(&tick_lower.to_xdr(env));
    data.append(&tick_upper.to_xdr(env));
    data.append(&fee.to_xdr(env));
    env.crypto().sha256(&data).into()
}

fn engine_pool_state(env: &Env, engine: &Address, pool_id: &BytesN<32>) -> PoolState {
    env.invoke_contract(
        engine,
        &Symbol::new(env, "get_pool"),
        vec![env, pool_id.clone().into_val(env)],
    )
}

// Pool storage module

use soroban_sdk::{contracttype, Address, BytesN, Env, Vec};

use crate::error::PoolError;
use crate::types::{PoolConfig, PoolState, Position, TickInfo};

// ============================================================
// STORAGE KEYS
// ============================================================

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Registry allowed to register pools (instance)
    Factory,
    /// Immutable pool parameters
    Config(BytesN<32>),
    /// Mutable pool state
    State(BytesN<32>),
    /// Tick entry by (pool, tick)
    Tick(BytesN<32>, i32),
    /// Sorted initialized ticks of a pool
    TickIndex(BytesN<32>),
    /// Position by (pool, owner, tick_lower, tick_upper)
    Position(BytesN<32>, Address, i32, i32),
    /// Busy flag held for the duration of a mutating call (temporary)
    Busy(BytesN<32>),
}

// ============================================================
// TTL CONFIGURATION
// ============================================================

const DAY_IN_LEDGERS: u32 = 17_280;
/// Persistent storage lifetime in ledgers (~1 year at 5s/ledger)
const PERSISTENT_LIFETIME: u32 = 365 * DAY_IN_LEDGERS;
/// Extend once fewer than this many ledgers remain
const PERSISTENT_THRESHOLD: u32 = PERSISTENT_LIFETIME - 30 * DAY_IN_LEDGERS;

fn extend_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_THRESHOLD, PERSISTENT_LIFETIME);
}

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(PERSISTENT_THRESHOLD, PERSISTENT_LIFETIME);
}

// ============================================================
// FACTORY
// ============================================================

pub fn write_factory(env: &Env, factory: &Address) {
    env.storage().instance().set(&DataKey::Factory, factory);
}

pub fn read_factory(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Factory)
}

// ============================================================
// POOL CONFIG / STATE
// ============================================================

pub fn has_pool(env: &Env, pool_id: &BytesN<32>) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Config(pool_id.clone()))
}

pub fn write_pool_config(env: &Env, pool_id: &BytesN<32>, config: &PoolConfig) {
    let key = DataKey::Config(pool_id.clone());
    env.storage().persistent().set(&key, config);
    extend_ttl(env, &key);
}

pub fn read_pool_config(env: &Env, pool_id: &BytesN<32>) -> Result<PoolConfig, PoolError> {
    let key = DataKey::Config(pool_id.clone());
    let config = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(PoolError::PoolNotFound)?;
    extend_ttl(env, &key);
    Ok(config)
}

pub fn write_pool_state(env: &Env, pool_id: &BytesN<32>, state: &PoolState) {
    let key = DataKey::State(pool_id.clone());
    env.storage().persistent().set(&key, state);
    extend_ttl(env, &key);
}

pub fn read_pool_state(env: &Env, pool_id: &BytesN<32>) -> Result<PoolState, PoolError> {
    let key = DataKey::State(pool_id.clone());
    let state = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(PoolError::PoolNotFound)?;
    extend_ttl(env, &key);
    Ok(state)
}

/// Pool state, failing unless the pool exists and has a price.
pub fn read_initialized_state(env: &Env, pool_id: &BytesN<32>) -> Result<PoolState, PoolError> {
    let state = read_pool_state(env, pool_id)?;
    if !state.initialized {
        return Err(PoolError::NotInitialized);
    }
    Ok(state)
}

// ============================================================
// TICKS
// ============================================================

pub fn read_tick(env: &Env, pool_id: &BytesN<32>, tick: i32) -> TickInfo {
    let key = DataKey::Tick(pool_id.clone(), tick);
    match env.storage().persistent().get(&key) {
        Some(info) => {
            extend_ttl(env, &key);
            info
        }
        None => TickInfo::empty(env),
    }
}

pub fn write_tick(env: &Env, pool_id: &BytesN<32>, tick: i32, info: &TickInfo) {
    let key = DataKey::Tick(pool_id.clone(), tick);
    env.storage().persistent().set(&key, info);
    extend_ttl(env, &key);
}

pub fn remove_tick(env: &Env, pool_id: &BytesN<32>, tick: i32) {
    env.storage()
        .persistent()
        .remove(&DataKey::Tick(pool_id.clone(), tick));
}

pub fn read_tick_index(env: &Env, pool_id: &BytesN<32>) -> Vec<i32> {
    let key = DataKey::TickIndex(pool_id.clone());
    match env.storage().persistent().get(&key) {
        Some(ticks) => {
            extend_ttl(env, &key);
            ticks
        }
        None => Vec::new(env),
    }
}

pub fn write_tick_index(env: &Env, pool_id: &BytesN<32>, ticks: &Vec<i32>) {
    let key = DataKey::TickIndex(pool_id.clone());
    env.storage().persistent().set(&key, ticks);
    extend_ttl(env, &key);
}

// ============================================================
// POSITIONS
// ============================================================

pub fn read_position(
    env: &Env,
    pool_id: &BytesN<32>,
    owner: &Address,
    tick_lower: i32,
    tick_upper: i32,
) -> Position {
    let key = DataKey::Position(pool_id.clone(), owner.clone(), tick_lower, tick_upper);
    match env.storage().persistent().get(&key) {
        Some(position) => {
            extend_ttl(env, &key);
            position
        }
        None => Position::empty(env),
    }
}

pub fn write_position(
    env: &Env,
    pool_id: &BytesN<32>,
    owner: &Address,
    tick_lower: i32,
    tick_upper: i32,
    position: &Position,
) {
    let key = DataKey::Position(pool_id.clone(), owner.clone(), tick_lower, tick_upper);
    env.storage().persistent().set(&key, position);
    extend_ttl(env, &key);
}

// ============================================================
// BUSY FLAG
// ============================================================

pub fn is_busy(env: &Env, pool_id: &BytesN<32>) -> bool {
    env.storage()
        .temporary()
        .has(&DataKey::Busy(pool_id.clone()))
}

pub fn set_busy(env: &Env, pool_id: &BytesN<32>) {
    env.storage()
        .temporary()
        .set(&DataKey::Busy(pool_id.clone()), &true);
}

pub fn clear_busy(env: &Env, pool_id: &BytesN<32>) {
    env.storage()
        .temporary()
        .remove(&DataKey::Busy(pool_id.clone()));
}

// Factory storage module

use soroban_sdk::{contracttype, Address, BytesN, Env, Vec};

use crate::types::{Pair, PoolRecord};

// ============================================================
// STORAGE KEYS
// ============================================================

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Engine hosting the pools (instance)
    Engine,
    /// Pool ids of a pair, in creation order
    PairPools(Address, Address),
    /// Distinct pairs, in creation order
    Pairs,
    /// Every pool id, in creation order
    AllPools,
    /// Creation parameters by pool id
    Pool(BytesN<32>),
}

// ============================================================
// TTL CONFIGURATION
// ============================================================

const DAY_IN_LEDGERS: u32 = 17_280;
const PERSISTENT_LIFETIME: u32 = 365 * DAY_IN_LEDGERS;
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
// ENGINE
// ============================================================

pub fn write_engine(env: &Env, engine: &Address) {
    env.storage().instance().set(&DataKey::Engine, engine);
}

pub fn read_engine(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Engine)
}

// ============================================================
// POOL REGISTRY
// ============================================================

pub fn read_pool_record(env: &Env, pool_id: &BytesN<32>) -> Option<PoolRecord> {
    let key = DataKey::Pool(pool_id.clone());
    let record = env.storage().persistent().get(&key);
    if record.is_some() {
        extend_ttl(env, &key);
    }
    record
}

pub fn write_pool_record(env: &Env, record: &PoolRecord) {
    let key = DataKey::Pool(record.pool_id.clone());
    env.storage().persistent().set(&key, record);
    extend_ttl(env, &key);
}

/// Pool ids of the pair `token0 < token1`
pub fn read_pair_pools(env: &Env, token0: &Address, token1: &Address) -> Vec<BytesN<32>> {
    let key = DataKey::PairPools(token0.clone(), token1.clone());
    match env.storage().persistent().get(&key) {
        Some(pools) => {
            extend_ttl(env, &key);
            pools
        }
        None => Vec::new(env),
    }
}

pub fn write_pair_pools(env: &Env, token0: &Address, token1: &Address, pools: &Vec<BytesN<32>>) {
    let key = DataKey::PairPools(token0.clone(), token1.clone());
    env.storage().persistent().set(&key, pools);
    extend_ttl(env, &key);
}

pub fn read_pairs(env: &Env) -> Vec<Pair> {
    env.storage()
        .persistent()
        .get(&DataKey::Pairs)
        .unwrap_or(Vec::new(env))
}

pub fn add_pair(env: &Env, pair: Pair) {
    let mut pairs = read_pairs(env);
    pairs.push_back(pair);
    env.storage().persistent().set(&DataKey::Pairs, &pairs);
    extend_ttl(env, &DataKey::Pairs);
}

pub fn read_all_pools(env: &Env) -> Vec<BytesN<32>> {
    env.storage()
        .persistent()
        .get(&DataKey::AllPools)
        .unwrap_or(Vec::new(env))
}

pub fn add_to_all_pools(env: &Env, pool_id: &BytesN<32>) {
    let mut pools = read_all_pools(env);
    pools.push_back(pool_id.clone());
    env.storage().persistent().set(&DataKey::AllPools, &pools);
    extend_ttl(env, &DataKey::AllPools);
}

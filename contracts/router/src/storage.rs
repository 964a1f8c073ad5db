//! Router storage operations

use soroban_sdk::{contracttype, Address, Env};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Factory,
    Engine,
}

// ============================================================
// TTL CONFIG
// ============================================================

const DAY_IN_LEDGERS: u32 = 17_280;
const INSTANCE_LIFETIME: u32 = 365 * DAY_IN_LEDGERS;
const INSTANCE_THRESHOLD: u32 = INSTANCE_LIFETIME - 30 * DAY_IN_LEDGERS;

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_THRESHOLD, INSTANCE_LIFETIME);
}

// ============================================================
// CONFIG
// ============================================================

pub fn write_config(env: &Env, factory: &Address, engine: &Address) {
    env.storage().instance().set(&DataKey::Factory, factory);
    env.storage().instance().set(&DataKey::Engine, engine);
}

pub fn read_factory(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Factory)
}

pub fn read_engine(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Engine)
}

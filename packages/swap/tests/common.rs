#![allow(dead_code)]

use meridian_math::get_tick_at_sqrt_ratio;
use meridian_swap::SwapState;
use meridian_tick::{TickIndex, TickInfo};
use soroban_sdk::{Env, Map, U256};

/// In-memory tick book for driving the swap loop without a contract.
pub struct TickBook {
    pub ticks: Map<i32, TickInfo>,
    pub index: TickIndex,
}

impl TickBook {
    pub fn new(env: &Env) -> Self {
        Self {
            ticks: Map::new(env),
            index: TickIndex::new(env),
        }
    }

    /// Add `liquidity` over `[lower, upper)`. Outside growth starts at zero.
    pub fn add_range(&mut self, env: &Env, lower: i32, upper: i32, liquidity: u128) {
        self.bump(env, lower, liquidity as i128, liquidity);
        self.bump(env, upper, -(liquidity as i128), liquidity);
    }

    fn bump(&mut self, env: &Env, tick: i32, net: i128, gross: u128) {
        let mut info = self.ticks.get(tick).unwrap_or(TickInfo::empty(env));
        info.liquidity_gross += gross;
        info.liquidity_net += net;
        info.initialized = true;
        self.ticks.set(tick, info);
        self.index.insert(tick);
    }

    pub fn read(&self, env: &Env, tick: i32) -> TickInfo {
        self.ticks.get(tick).unwrap_or(TickInfo::empty(env))
    }

    /// Sum of `liquidity_net` over every tick at or below `tick`.
    pub fn active_liquidity(&self, tick: i32) -> u128 {
        let mut total: i128 = 0;
        for (t, info) in self.ticks.iter() {
            if t <= tick {
                total += info.liquidity_net;
            }
        }
        total as u128
    }
}

pub fn state_at(env: &Env, sqrt_price_x96: u128, liquidity: u128) -> SwapState {
    SwapState {
        sqrt_price_x96,
        tick: get_tick_at_sqrt_ratio(env, sqrt_price_x96).unwrap(),
        liquidity,
        fee_growth_global_0: U256::from_u32(env, 0),
        fee_growth_global_1: U256::from_u32(env, 0),
    }
}

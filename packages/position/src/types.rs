use soroban_sdk::{contracttype, Env, U256};

/// Liquidity and fee accounting for one (owner, tick_lower, tick_upper) range.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Position {
    pub liquidity: u128,
    /// Fee growth inside the range at the last touch (X128)
    pub fee_growth_inside_last_0: U256,
    pub fee_growth_inside_last_1: U256,
    /// Accrued but uncollected amounts, principal from burns plus fees
    pub tokens_owed_0: u128,
    pub tokens_owed_1: u128,
}

impl Position {
    pub fn empty(env: &Env) -> Self {
        Self {
            liquidity: 0,
            fee_growth_inside_last_0: U256::from_u32(env, 0),
            fee_growth_inside_last_1: U256::from_u32(env, 0),
            tokens_owed_0: 0,
            tokens_owed_1: 0,
        }
    }
}

/// Why a tick range was rejected.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RangeError {
    /// `tick_lower >= tick_upper`
    Inverted,
    /// A boundary lies outside the pool's admissible range.
    OutOfBounds,
}

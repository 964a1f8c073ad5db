#![no_std]

//! # Meridian Router
//!
//! Splits one trade across several pools of the same pair.
//!
//! ## Features:
//! 1. Exact-input swaps that carry the unfilled remainder from pool to pool
//! 2. Exact-output swaps sized by simulation so no pool is asked for more
//!    than it can deliver
//! 3. Quotes that run the same path logic without touching state
//!
//! ## Functions:
//! - Write (2): exact_input, exact_output
//! - Read (4): quote_exact_input, quote_exact_output, factory, engine

use soroban_sdk::{
    contract, contractimpl, log, vec, Address, BytesN, Env, IntoVal, Symbol, Vec,
};

use meridian_math::{MAX_SQRT_RATIO, MIN_SQRT_RATIO};

mod error;
mod events;
mod storage;
mod types;

pub use error::RouterError;
use events::*;
use storage::*;
pub use types::*;

// ============================================================
// CONSTANTS
// ============================================================

/// Maximum number of pools in an index path
const MAX_PATH_LENGTH: u32 = 8;

// ============================================================
// CONTRACT
// ============================================================

#[contract]
pub struct MeridianRouter;

/// Whether a route moves tokens or only simulates
#[derive(Clone, Copy)]
enum Mode<'a> {
    Quote,
    Execute {
        payer: &'a Address,
        recipient: &'a Address,
    },
}

#[contractimpl]
impl MeridianRouter {
    pub fn __constructor(env: Env, factory: Address, engine: Address) {
        write_config(&env, &factory, &engine);
        extend_instance_ttl(&env);
    }

    // ========================================================
    // SWAP FUNCTIONS (Write)
    // ========================================================

    /// Sell exactly `params.amount_in`, or less if every pool in the path
    /// reaches the price limit first. Returns `(amount_in, amount_out)`.
    pub fn exact_input(
        env: Env,
        payer: Address,
        params: ExactInputParams,
    ) -> Result<(i128, i128), RouterError> {
        payer.require_auth();
        check_deadline(&env, params.deadline)?;
        if params.amount_in <= 0 {
            return Err(RouterError::InvalidAmount);
        }

        let (engine, pools, zero_for_one) =
            Self::prepare(&env, &params.token_in, &params.token_out, &params.index_path)?;
        let limit = resolve_limit(params.sqrt_price_limit_x96, zero_for_one);

        let (amount_in, amount_out) = Self::route_exact_input(
            &env,
            &engine,
            &pools,
            zero_for_one,
            params.amount_in,
            limit,
            Mode::Execute {
                payer: &payer,
                recipient: &params.recipient,
            },
        )?;

        if amount_out < params.amount_out_minimum {
            return Err(RouterError::TooLittleReceived);
        }

        extend_instance_ttl(&env);
        emit_swap(
            &env,
            &payer,
            &params.token_in,
            &params.token_out,
            amount_in,
            amount_out,
            &params.recipient,
        );
        log!(&env, "exact input routed", amount_in, amount_out);

        Ok((amount_in, amount_out))
    }

    /// Buy exactly `params.amount_out`. Fails unless the path delivers it
    /// in full within `params.amount_in_maximum`.
    pub fn exact_output(
        env: Env,
        payer: Address,
        params: ExactOutputParams,
    ) -> Result<(i128, i128), RouterError> {
        payer.require_auth();
        check_deadline(&env, params.deadline)?;
        if params.amount_out <= 0 {
            return Err(RouterError::InvalidAmount);
        }

        let (engine, pools, zero_for_one) =
            Self::prepare(&env, &params.token_in, &params.token_out, &params.index_path)?;
        let limit = resolve_limit(params.sqrt_price_limit_x96, zero_for_one);

        let (amount_in, amount_out) = Self::route_exact_output(
            &env,
            &engine,
            &pools,
            zero_for_one,
            params.amount_out,
            limit,
            Mode::Execute {
                payer: &payer,
                recipient: &params.recipient,
            },
        )?;

        if amount_in > params.amount_in_maximum {
            return Err(RouterError::TooMuchRequested);
        }

        extend_instance_ttl(&env);
        emit_swap(
            &env,
            &payer,
            &params.token_in,
            &params.token_out,
            amount_in,
            amount_out,
            &params.recipient,
        );
        log!(&env, "exact output routed", amount_in, amount_out);

        Ok((amount_in, amount_out))
    }

    // ========================================================
    // QUOTE FUNCTIONS (Read)
    // ========================================================

    /// What `exact_input` would return against the current state
    pub fn quote_exact_input(
        env: Env,
        token_in: Address,
        token_out: Address,
        index_path: Vec<u32>,
        amount_in: i128,
        sqrt_price_limit_x96: u128,
    ) -> Result<(i128, i128), RouterError> {
        if amount_in <= 0 {
            return Err(RouterError::InvalidAmount);
        }
        let (engine, pools, zero_for_one) = Self::prepare(&env, &token_in, &token_out, &index_path)?;
        let limit = resolve_limit(sqrt_price_limit_x96, zero_for_one);

        Self::route_exact_input(&env, &engine, &pools, zero_for_one, amount_in, limit, Mode::Quote)
    }

    /// What `exact_output` would return against the current state
    pub fn quote_exact_output(
        env: Env,
        token_in: Address,
        token_out: Address,
        index_path: Vec<u32>,
        amount_out: i128,
        sqrt_price_limit_x96: u128,
    ) -> Result<(i128, i128), RouterError> {
        if amount_out <= 0 {
            return Err(RouterError::InvalidAmount);
        }
        let (engine, pools, zero_for_one) = Self::prepare(&env, &token_in, &token_out, &index_path)?;
        let limit = resolve_limit(sqrt_price_limit_x96, zero_for_one);

        Self::route_exact_output(&env, &engine, &pools, zero_for_one, amount_out, limit, Mode::Quote)
    }

    // ========================================================
    // VIEW FUNCTIONS
    // ========================================================

    pub fn factory(env: Env) -> Result<Address, RouterError> {
        read_factory(&env).ok_or(RouterError::NotInitialized)
    }

    pub fn engine(env: Env) -> Result<Address, RouterError> {
        read_engine(&env).ok_or(RouterError::NotInitialized)
    }

    // ========================================================
    // INTERNAL HELPERS
    // ========================================================

    /// Resolve the engine, the pool ids of the path and the swap direction.
    fn prepare(
        env: &Env,
        token_in: &Address,
        token_out: &Address,
        index_path: &Vec<u32>,
    ) -> Result<(Address, Vec<BytesN<32>>, bool), RouterError> {
        if token_in == token_out {
            return Err(RouterError::IdenticalTokens);
        }
        if index_path.is_empty() || index_path.len() > MAX_PATH_LENGTH {
            return Err(RouterError::InvalidPath);
        }

        let factory = read_factory(env).ok_or(RouterError::NotInitialized)?;
        let engine = read_engine(env).ok_or(RouterError::NotInitialized)?;

        let mut pools = Vec::new(env);
        for (position, index) in index_path.iter().enumerate() {
            // A pool used twice would see its own earlier fill
            if index_path.iter().take(position).any(|earlier| earlier == index) {
                return Err(RouterError::InvalidPath);
            }
            let pool: Option<BytesN<32>> = env.invoke_contract(
                &factory,
                &Symbol::new(env, "get_pool"),
                vec![
                    env,
                    token_in.clone().into_val(env),
                    token_out.clone().into_val(env),
                    index.into_val(env),
                ],
            );
            pools.push_back(pool.ok_or(RouterError::InvalidPath)?);
        }

        Ok((engine, pools, token_in < token_out))
    }

    fn route_exact_input(
        env: &Env,
        engine: &Address,
        pools: &Vec<BytesN<32>>,
        zero_for_one: bool,
        amount_in: i128,
        limit: u128,
        mode: Mode,
    ) -> Result<(i128, i128), RouterError> {
        let mut remaining = amount_in;
        let mut total_in: i128 = 0;
        let mut total_out: i128 = 0;

        for pool_id in pools.iter() {
            if remaining == 0 {
                break;
            }
            if !can_trade(&pool_state(env, engine, &pool_id), limit, zero_for_one) {
                continue;
            }

            let (paid, received) = match mode {
                Mode::Quote => {
                    let sim = simulate(env, engine, &pool_id, zero_for_one, remaining, limit, true);
                    split_amounts(sim.amount0, sim.amount1, zero_for_one)
                }
                Mode::Execute { payer, recipient } => {
                    let amounts = swap(
                        env, engine, &pool_id, payer, recipient, zero_for_one, remaining, limit,
                        true,
                    );
                    split_amounts(amounts.amount0, amounts.amount1, zero_for_one)
                }
            };

            remaining = remaining.checked_sub(paid).ok_or(RouterError::Overflow)?;
            total_in = total_in.checked_add(paid).ok_or(RouterError::Overflow)?;
            total_out = total_out.checked_add(received).ok_or(RouterError::Overflow)?;
        }

        Ok((total_in, total_out))
    }

    fn route_exact_output(
        env: &Env,
        engine: &Address,
        pools: &Vec<BytesN<32>>,
        zero_for_one: bool,
        amount_out: i128,
        limit: u128,
        mode: Mode,
    ) -> Result<(i128, i128), RouterError> {
        let mut remaining = amount_out;
        let mut total_in: i128 = 0;
        let mut total_out: i128 = 0;

        for pool_id in pools.iter() {
            if remaining == 0 {
                break;
            }
            if !can_trade(&pool_state(env, engine, &pool_id), limit, zero_for_one) {
                continue;
            }

            // Ask each pool only for what it can deliver before the limit
            let sizing = simulate(env, engine, &pool_id, zero_for_one, remaining, limit, false);
            let request = sizing.amount_out;
            if request <= 0 {
                continue;
            }

            let (paid, received) = match mode {
                Mode::Quote if sizing.filled => {
                    split_amounts(sizing.amount0, sizing.amount1, zero_for_one)
                }
                Mode::Quote => {
                    let sim = simulate(env, engine, &pool_id, zero_for_one, request, limit, false);
                    split_amounts(sim.amount0, sim.amount1, zero_for_one)
                }
                Mode::Execute { payer, recipient } => {
                    let amounts = swap(
                        env, engine, &pool_id, payer, recipient, zero_for_one, request, limit,
                        false,
                    );
                    split_amounts(amounts.amount0, amounts.amount1, zero_for_one)
                }
            };

            remaining = remaining.checked_sub(received).ok_or(RouterError::Overflow)?;
            total_in = total_in.checked_add(paid).ok_or(RouterError::Overflow)?;
            total_out = total_out.checked_add(received).ok_or(RouterError::Overflow)?;
        }

        if remaining > 0 {
            return Err(RouterError::AmountNotReached);
        }
        Ok((total_in, total_out))
    }
}

// ============================================================
// ENGINE CALLS
// ============================================================

fn pool_state(env: &Env, engine: &Address, pool_id: &BytesN<32>) -> PoolState {
    env.invoke_contract(
        engine,
        &Symbol::new(env, "get_pool"),
        vec![env, pool_id.clone().into_val(env)],
    )
}

fn simulate(
    env: &Env,
    engine: &Address,
    pool_id: &BytesN<32>,
    zero_for_one: bool,
    amount: i128,
    limit: u128,
    exact_input: bool,
) -> SwapSimulation {
    env.invoke_contract(
        engine,
        &Symbol::new(env, "simulate_swap"),
        vec![
            env,
            pool_id.clone().into_val(env),
            zero_for_one.into_val(env),
            amount.into_val(env),
            limit.into_val(env),
            exact_input.into_val(env),
        ],
    )
}

#[allow(clippy::too_many_arguments)]
fn swap(
    env: &Env,
    engine: &Address,
    pool_id: &BytesN<32>,
    payer: &Address,
    recipient: &Address,
    zero_for_one: bool,
    amount: i128,
    limit: u128,
    exact_input: bool,
) -> SwapAmounts {
    env.invoke_contract(
        engine,
        &Symbol::new(env, "swap"),
        vec![
            env,
            pool_id.clone().into_val(env),
            payer.clone().into_val(env),
            recipient.clone().into_val(env),
            zero_for_one.into_val(env),
            amount.into_val(env),
            limit.into_val(env),
            exact_input.into_val(env),
        ],
    )
}

// ============================================================
// PURE HELPERS
// ============================================================

fn check_deadline(env: &Env, deadline: u64) -> Result<(), RouterError> {
    if env.ledger().timestamp() > deadline {
        return Err(RouterError::DeadlineExpired);
    }
    Ok(())
}

/// A zero limit means the edge of the price domain in the direction of travel.
fn resolve_limit(sqrt_price_limit_x96: u128, zero_for_one: bool) -> u128 {
    match (sqrt_price_limit_x96, zero_for_one) {
        (0, true) => MIN_SQRT_RATIO + 1,
        (0, false) => MAX_SQRT_RATIO - 1,
        (limit, _) => limit,
    }
}

/// A pool can take part only if its price has room to move towards the limit.
fn can_trade(state: &PoolState, limit: u128, zero_for_one: bool) -> bool {
    state.initialized
        && if zero_for_one {
            limit < state.sqrt_price_x96
        } else {
            limit > state.sqrt_price_x96
        }
}

/// `(paid in, paid out)` from the engine's signed pool-side amounts
fn split_amounts(amount0: i128, amount1: i128, zero_for_one: bool) -> (i128, i128) {
    if zero_for_one {
        (amount0, -amount1)
    } else {
        (amount1, -amount0)
    }
}

#![no_std]

//! # Meridian Pool Engine
//!
//! Concentrated-liquidity pools hosted by a single contract. Each pool lives
//! under its own 32-byte id, assigned by the factory at registration.
//!
//! ## Functions:
//! - Write (6): register_pool, initialize, mint, burn, collect, swap
//! - Read (8): simulate_swap, get_pool, get_pool_config, get_tick,
//!   get_initialized_ticks, get_position, get_pending_fees, factory

use soroban_sdk::{contract, contractimpl, log, Address, BytesN, Env, Vec};

use meridian_math::{
    get_tick_at_sqrt_ratio, MathError, FEE_DENOMINATOR, MAX_SQRT_RATIO, MAX_TICK, MIN_SQRT_RATIO,
    MIN_TICK,
};
use meridian_position::{
    calculate_pending_fees, collect_owed, credit_tokens_owed, validate_position_range, RangeError,
};
use meridian_swap::{compute_swap, SwapOutcome, SwapParams, SwapState};
use meridian_tick::{get_fee_growth_inside, TickIndex};

mod error;
mod events;
mod guard;
mod liquidity;
mod settlement;
mod storage;
pub mod types;

pub use error::PoolError;
use events::*;
use guard::PoolGuard;
use liquidity::modify_position;
use settlement::{collect_payment, pay, to_i128};
use storage::*;
pub use types::{PoolConfig, PoolState, Position, SwapAmounts, SwapSimulation, TickInfo};

#[contract]
pub struct MeridianPool;

#[contractimpl]
impl MeridianPool {
    // ========================================================
    // CONSTRUCTOR
    // ========================================================

    /// Deploy the engine. Only `factory` may register pools.
    pub fn __constructor(env: Env, factory: Address) {
        write_factory(&env, &factory);
        extend_instance_ttl(&env);
    }

    // ========================================================
    // REGISTRATION / INITIALIZATION
    // ========================================================

    /// Register a new, uninitialized pool under `pool_id`.
    pub fn register_pool(env: Env, pool_id: BytesN<32>, config: PoolConfig) -> Result<(), PoolError> {
        let factory = read_factory(&env).ok_or(PoolError::NotInitialized)?;
        factory.require_auth();

        if has_pool(&env, &pool_id) {
            return Err(PoolError::PoolAlreadyRegistered);
        }
        if config.token0 >= config.token1 {
            return Err(PoolError::InvalidTokenOrder);
        }
        if config.fee >= FEE_DENOMINATOR {
            return Err(PoolError::InvalidFee);
        }
        if config.tick_lower >= config.tick_upper {
            return Err(PoolError::InvalidTickRange);
        }
        if config.tick_lower < MIN_TICK || config.tick_upper > MAX_TICK {
            return Err(PoolError::TickOutOfBounds);
        }

        write_pool_config(&env, &pool_id, &config);
        write_pool_state(&env, &pool_id, &PoolState::uninitialized(&env));
        extend_instance_ttl(&env);

        emit_pool_registered(&env, &pool_id, &config);
        Ok(())
    }

    /// Set the starting price. Returns the derived tick.
    pub fn initialize(env: Env, pool_id: BytesN<32>, sqrt_price_x96: u128) -> Result<i32, PoolError> {
        let config = read_pool_config(&env, &pool_id)?;
        let mut state = read_pool_state(&env, &pool_id)?;
        if state.initialized {
            return Err(PoolError::AlreadyInitialized);
        }

        if !(MIN_SQRT_RATIO..MAX_SQRT_RATIO).contains(&sqrt_price_x96) {
            return Err(PoolError::InvalidSqrtPrice);
        }
        let tick = get_tick_at_sqrt_ratio(&env, sqrt_price_x96)?;
        if tick < config.tick_lower || tick > config.tick_upper {
            return Err(PoolError::InvalidSqrtPrice);
        }

        state.sqrt_price_x96 = sqrt_price_x96;
        state.tick = tick;
        state.initialized = true;
        write_pool_state(&env, &pool_id, &state);

        emit_initialize(&env, &pool_id, sqrt_price_x96, tick);
        log!(&env, "pool initialized", pool_id, sqrt_price_x96, tick);
        Ok(tick)
    }

    // ========================================================
    // LIQUIDITY FUNCTIONS
    // ========================================================

    /// Add `liquidity` to `owner`'s position over `[tick_lower, tick_upper)`,
    /// paid for by `payer`. Returns the amounts paid.
    pub fn mint(
        env: Env,
        pool_id: BytesN<32>,
        payer: Address,
        owner: Address,
        tick_lower: i32,
        tick_upper: i32,
        liquidity: u128,
    ) -> Result<(i128, i128), PoolError> {
        payer.require_auth();
        let _guard = PoolGuard::acquire(&env, &pool_id)?;

        let config = read_pool_config(&env, &pool_id)?;
        let mut state = read_initialized_state(&env, &pool_id)?;
        check_range(&config, tick_lower, tick_upper)?;

        if liquidity == 0 {
            return Err(PoolError::ZeroLiquidity);
        }
        let delta = to_i128(liquidity)?;

        let change = modify_position(&env, &pool_id, &mut state, &owner, tick_lower, tick_upper, delta)?;
        if change.amount0 == 0 && change.amount1 == 0 {
            return Err(PoolError::ZeroLiquidity);
        }

        state.reserve0 = state
            .reserve0
            .checked_add(change.amount0)
            .ok_or(PoolError::Overflow)?;
        state.reserve1 = state
            .reserve1
            .checked_add(change.amount1)
            .ok_or(PoolError::Overflow)?;

        write_position(&env, &pool_id, &owner, tick_lower, tick_upper, &change.position);
        write_pool_state(&env, &pool_id, &state);

        collect_payment(&env, &config.token0, &payer, change.amount0)?;
        collect_payment(&env, &config.token1, &payer, change.amount1)?;

        let amount0 = to_i128(change.amount0)?;
        let amount1 = to_i128(change.amount1)?;
        emit_mint(
            &env, &pool_id, &owner, &payer, tick_lower, tick_upper, liquidity, amount0, amount1,
        );
        Ok((amount0, amount1))
    }

    /// Remove `liquidity` from a position. The released tokens are credited
    /// to the position's owed balances, to be taken out with `collect`.
    /// Burning zero only accrues fees.
    pub fn burn(
        env: Env,
        pool_id: BytesN<32>,
        owner: Address,
        tick_lower: i32,
        tick_upper: i32,
        liquidity: u128,
    ) -> Result<(i128, i128), PoolError> {
        owner.require_auth();
        let _guard = PoolGuard::acquire(&env, &pool_id)?;

        let config = read_pool_config(&env, &pool_id)?;
        let mut state = read_initialized_state(&env, &pool_id)?;
        check_range(&config, tick_lower, tick_upper)?;

        let held = read_position(&env, &pool_id, &owner, tick_lower, tick_upper).liquidity;
        if liquidity > held {
            return Err(PoolError::InsufficientLiquidity);
        }
        let delta = to_i128(liquidity)?
            .checked_neg()
            .ok_or(PoolError::Overflow)?;

        let mut change =
            modify_position(&env, &pool_id, &mut state, &owner, tick_lower, tick_upper, delta)?;
        credit_tokens_owed(&mut change.position, change.amount0, change.amount1)?;

        write_position(&env, &pool_id, &owner, tick_lower, tick_upper, &change.position);
        write_pool_state(&env, &pool_id, &state);

        let amount0 = to_i128(change.amount0)?;
        let amount1 = to_i128(change.amount1)?;
        emit_burn(&env, &pool_id, &owner, tick_lower, tick_upper, liquidity, amount0, amount1);
        Ok((amount0, amount1))
    }

    /// Send up to `amount0_max` / `amount1_max` of a position's owed tokens to
    /// `recipient`. Returns the amounts sent.
    #[allow(clippy::too_many_arguments)]
    pub fn collect(
        env: Env,
        pool_id: BytesN<32>,
        owner: Address,
        tick_lower: i32,
        tick_upper: i32,
        recipient: Address,
        amount0_max: u128,
        amount1_max: u128,
    ) -> Result<(i128, i128), PoolError> {
        owner.require_auth();
        let _guard = PoolGuard::acquire(&env, &pool_id)?;

        let config = read_pool_config(&env, &pool_id)?;
        let mut state = read_initialized_state(&env, &pool_id)?;

        let mut position = read_position(&env, &pool_id, &owner, tick_lower, tick_upper);
        let (amount0, amount1) = collect_owed(&mut position, amount0_max, amount1_max);

        if amount0 > 0 || amount1 > 0 {
            state.reserve0 = state
                .reserve0
                .checked_sub(amount0)
                .ok_or(PoolError::InsufficientReserves)?;
            state.reserve1 = state
                .reserve1
                .checked_sub(amount1)
                .ok_or(PoolError::InsufficientReserves)?;

            write_position(&env, &pool_id, &owner, tick_lower, tick_upper, &position);
            write_pool_state(&env, &pool_id, &state);

            pay(&env, &config.token0, &recipient, amount0)?;
            pay(&env, &config.token1, &recipient, amount1)?;
        }

        let amount0 = to_i128(amount0)?;
        let amount1 = to_i128(amount1)?;
        // Nothing owed is a no-op and stays silent
        if amount0 > 0 || amount1 > 0 {
            emit_collect(
                &env, &pool_id, &owner, &recipient, tick_lower, tick_upper, amount0, amount1,
            );
        }
        Ok((amount0, amount1))
    }

    // ========================================================
    // SWAP FUNCTIONS
    // ========================================================

    /// Swap against a pool.
    ///
    /// `amount_specified` is the input for exact-input swaps and the wanted
    /// output otherwise. An exact-input swap may stop early at the price
    /// limit; an exact-output swap that cannot deliver in full fails with
    /// `PriceLimitReached`. The output is sent to `recipient` and the input is
    /// pulled from `payer`.
    #[allow(clippy::too_many_arguments)]
    pub fn swap(
        env: Env,
        pool_id: BytesN<32>,
        payer: Address,
        recipient: Address,
        zero_for_one: bool,
        amount_specified: i128,
        sqrt_price_limit_x96: u128,
        exact_input: bool,
    ) -> Result<SwapAmounts, PoolError> {
        payer.require_auth();
        let _guard = PoolGuard::acquire(&env, &pool_id)?;

        let (config, mut state, outcome) = prepare_swap(
            &env,
            &pool_id,
            zero_for_one,
            amount_specified,
            sqrt_price_limit_x96,
            exact_input,
        )?;

        if !exact_input && !outcome.filled {
            return Err(PoolError::PriceLimitReached);
        }

        for (tick, info) in outcome.crossed.iter() {
            write_tick(&env, &pool_id, tick, &info);
        }

        let amount_in = outcome.amount_in;
        let amount_out = outcome.amount_out;
        let (token_in, token_out) = if zero_for_one {
            state.reserve1 = state
                .reserve1
                .checked_sub(amount_out)
                .ok_or(PoolError::InsufficientReserves)?;
            state.reserve0 = state
                .reserve0
                .checked_add(amount_in)
                .ok_or(PoolError::Overflow)?;
            (&config.token0, &config.token1)
        } else {
            state.reserve0 = state
                .reserve0
                .checked_sub(amount_out)
                .ok_or(PoolError::InsufficientReserves)?;
            state.reserve1 = state
                .reserve1
                .checked_add(amount_in)
                .ok_or(PoolError::Overflow)?;
            (&config.token1, &config.token0)
        };

        state.sqrt_price_x96 = outcome.state.sqrt_price_x96;
        state.tick = outcome.state.tick;
        state.liquidity = outcome.state.liquidity;
        state.fee_growth_global_0 = outcome.state.fee_growth_global_0.clone();
        state.fee_growth_global_1 = outcome.state.fee_growth_global_1.clone();
        write_pool_state(&env, &pool_id, &state);

        pay(&env, token_out, &recipient, amount_out)?;
        collect_payment(&env, token_in, &payer, amount_in)?;

        let (amount0, amount1) = signed_amounts(&outcome, zero_for_one)?;
        let amounts = SwapAmounts {
            amount0,
            amount1,
            sqrt_price_x96: state.sqrt_price_x96,
            liquidity: state.liquidity,
            tick: state.tick,
        };

        emit_swap(&env, &pool_id, &payer, &recipient, &amounts);
        log!(&env, "swap", pool_id, amount0, amount1, state.tick);
        Ok(amounts)
    }

    /// Run a swap against the current state without persisting anything or
    /// moving tokens. Partial exact-output fills are reported, not rejected.
    pub fn simulate_swap(
        env: Env,
        pool_id: BytesN<32>,
        zero_for_one: bool,
        amount_specified: i128,
        sqrt_price_limit_x96: u128,
        exact_input: bool,
    ) -> Result<SwapSimulation, PoolError> {
        let (_, _, outcome) = prepare_swap(
            &env,
            &pool_id,
            zero_for_one,
            amount_specified,
            sqrt_price_limit_x96,
            exact_input,
        )?;

        let (amount0, amount1) = signed_amounts(&outcome, zero_for_one)?;
        Ok(SwapSimulation {
            amount0,
            amount1,
            amount_in: to_i128(outcome.amount_in)?,
            amount_out: to_i128(outcome.amount_out)?,
            fee_amount: to_i128(outcome.fee_amount)?,
            sqrt_price_x96: outcome.state.sqrt_price_x96,
            liquidity: outcome.state.liquidity,
            tick: outcome.state.tick,
            filled: outcome.filled,
        })
    }

    // ========================================================
    // VIEW FUNCTIONS
    // ========================================================

    pub fn factory(env: Env) -> Result<Address, PoolError> {
        read_factory(&env).ok_or(PoolError::NotInitialized)
    }

    /// Current price, tick, liquidity, accumulators and reserves.
    pub fn get_pool(env: Env, pool_id: BytesN<32>) -> Result<PoolState, PoolError> {
        read_pool_state(&env, &pool_id)
    }

    pub fn get_pool_config(env: Env, pool_id: BytesN<32>) -> Result<PoolConfig, PoolError> {
        read_pool_config(&env, &pool_id)
    }

    /// Tick entry, empty if the tick is not initialized.
    pub fn get_tick(env: Env, pool_id: BytesN<32>, tick: i32) -> TickInfo {
        read_tick(&env, &pool_id, tick)
    }

    /// Initialized ticks in ascending order.
    pub fn get_initialized_ticks(env: Env, pool_id: BytesN<32>) -> Vec<i32> {
        read_tick_index(&env, &pool_id)
    }

    pub fn get_position(
        env: Env,
        pool_id: BytesN<32>,
        owner: Address,
        tick_lower: i32,
        tick_upper: i32,
    ) -> Position {
        read_position(&env, &pool_id, &owner, tick_lower, tick_upper)
    }

    /// Tokens a position could collect after a poke: what it is owed plus
    /// fees accrued since its last touch.
    pub fn get_pending_fees(
        env: Env,
        pool_id: BytesN<32>,
        owner: Address,
        tick_lower: i32,
        tick_upper: i32,
    ) -> Result<(i128, i128), PoolError> {
        let state = read_initialized_state(&env, &pool_id)?;
        let position = read_position(&env, &pool_id, &owner, tick_lower, tick_upper);

        let lower_info = read_tick(&env, &pool_id, tick_lower);
        let upper_info = read_tick(&env, &pool_id, tick_upper);
        let (inside_0, inside_1) = get_fee_growth_inside(
            &env,
            &lower_info,
            &upper_info,
            tick_lower,
            tick_upper,
            state.tick,
            &state.fee_growth_global_0,
            &state.fee_growth_global_1,
        );
        let (pending_0, pending_1) = calculate_pending_fees(&env, &position, &inside_0, &inside_1)?;

        let owed_0 = position
            .tokens_owed_0
            .checked_add(pending_0)
            .ok_or(PoolError::Overflow)?;
        let owed_1 = position
            .tokens_owed_1
            .checked_add(pending_1)
            .ok_or(PoolError::Overflow)?;
        Ok((to_i128(owed_0)?, to_i128(owed_1)?))
    }
}

// ============================================================
// INTERNAL HELPERS
// ============================================================

fn check_range(config: &PoolConfig, tick_lower: i32, tick_upper: i32) -> Result<(), PoolError> {
    validate_position_range(tick_lower, tick_upper, config.tick_lower, config.tick_upper).map_err(
        |err| match err {
            RangeError::Inverted => PoolError::InvalidTickRange,
            RangeError::OutOfBounds => PoolError::TickOutOfBounds,
        },
    )
}

/// Validate a swap request and run the swap loop against stored state.
fn prepare_swap(
    env: &Env,
    pool_id: &BytesN<32>,
    zero_for_one: bool,
    amount_specified: i128,
    sqrt_price_limit_x96: u128,
    exact_input: bool,
) -> Result<(PoolConfig, PoolState, SwapOutcome), PoolError> {
    let config = read_pool_config(env, pool_id)?;
    let state = read_initialized_state(env, pool_id)?;

    if amount_specified <= 0 {
        return Err(PoolError::InvalidAmount);
    }

    let limit_ok = if zero_for_one {
        sqrt_price_limit_x96 < state.sqrt_price_x96 && sqrt_price_limit_x96 > MIN_SQRT_RATIO
    } else {
        sqrt_price_limit_x96 > state.sqrt_price_x96 && sqrt_price_limit_x96 < MAX_SQRT_RATIO
    };
    if !limit_ok {
        return Err(PoolError::InvalidPriceLimit);
    }

    let swap_state = SwapState {
        sqrt_price_x96: state.sqrt_price_x96,
        tick: state.tick,
        liquidity: state.liquidity,
        fee_growth_global_0: state.fee_growth_global_0.clone(),
        fee_growth_global_1: state.fee_growth_global_1.clone(),
    };
    let index = TickIndex::from_vec(read_tick_index(env, pool_id));

    let outcome = compute_swap(
        env,
        &swap_state,
        &index,
        |e, tick| read_tick(e, pool_id, tick),
        &SwapParams {
            zero_for_one,
            amount_specified: amount_specified as u128,
            sqrt_price_limit_x96,
            exact_input,
            fee: config.fee,
        },
    )
    .map_err(PoolError::from)?;

    Ok((config, state, outcome))
}

/// Pool-side token deltas: input positive, output negative.
fn signed_amounts(outcome: &SwapOutcome, zero_for_one: bool) -> Result<(i128, i128), PoolError> {
    let amount_in = to_i128(outcome.amount_in)?;
    let amount_out = to_i128(outcome.amount_out)?
        .checked_neg()
        .ok_or(MathError::Overflow)?;
    Ok(if zero_for_one {
        (amount_in, amount_out)
    } else {
        (amount_out, amount_in)
    })
}

mod common;

use common::*;
use meridian_pool::PoolError;
use soroban_sdk::{testutils::Address as _, testutils::Events as _, Address};

const DEEP_LIQUIDITY: u128 = 1_000_000_000_000_000_000_000_000_000;
const SWAP_IN: i128 = 100_000_000_000_000_000_000;

fn swap_token0_in(t: &PoolTest, amount: i128) {
    t.engine.swap(
        &t.pool_id,
        &t.trader,
        &t.trader,
        &true,
        &amount,
        &SQRT_PRICE_LIMIT_1000,
        &true,
    );
}

fn collect_all(t: &PoolTest, owner: &Address, lower: i32, upper: i32) -> (i128, i128) {
    t.engine.collect(
        &t.pool_id,
        owner,
        &lower,
        &upper,
        owner,
        &u128::MAX,
        &u128::MAX,
    )
}

#[test]
fn test_fees_are_not_owed_until_the_position_is_touched() {
    let t = setup_pool_with_liquidity(DEEP_LIQUIDITY);
    swap_token0_in(&t, SWAP_IN);

    assert_eq!(collect_all(&t, &t.lp, 0, TICK_PRICE_40000), (0, 0));
    assert_eq!(
        t.engine
            .get_pending_fees(&t.pool_id, &t.lp, &0, &TICK_PRICE_40000),
        (299999999999999999, 0)
    );
}

#[test]
fn test_burn_then_collect_returns_principal_and_fees() {
    let t = setup_pool_with_liquidity(DEEP_LIQUIDITY);
    swap_token0_in(&t, SWAP_IN);

    let burned = t
        .engine
        .burn(&t.pool_id, &t.lp, &0, &TICK_PRICE_40000, &DEEP_LIQUIDITY);
    assert_eq!(
        burned,
        (4999938315457919621513784, 98999003009939990898290744041)
    );

    let position = t
        .engine
        .get_position(&t.pool_id, &t.lp, &0, &TICK_PRICE_40000);
    assert_eq!(position.liquidity, 0);
    assert_eq!(position.tokens_owed_0, 4999938615457919621513783);
    assert_eq!(position.tokens_owed_1, 98999003009939990898290744041);

    let before0 = t.balance(&t.token0, &t.lp);
    let before1 = t.balance(&t.token1, &t.lp);
    let collected = collect_all(&t, &t.lp, 0, TICK_PRICE_40000);
    assert_eq!(
        collected,
        (4999938615457919621513783, 98999003009939990898290744041)
    );
    assert_eq!(t.balance(&t.token0, &t.lp), before0 + collected.0);
    assert_eq!(t.balance(&t.token1, &t.lp), before1 + collected.1);

    // Nothing left behind
    assert_eq!(collect_all(&t, &t.lp, 0, TICK_PRICE_40000), (0, 0));
    let state = t.engine.get_pool(&t.pool_id);
    assert_eq!(state.liquidity, 0);
    assert!(state.reserve0 <= 2);
    assert!(state.reserve1 <= 2);
}

#[test]
fn test_poke_credits_fees_without_moving_liquidity() {
    let t = setup_pool_with_liquidity(DEEP_LIQUIDITY);
    swap_token0_in(&t, SWAP_IN);

    let poked = t.engine.burn(&t.pool_id, &t.lp, &0, &TICK_PRICE_40000, &0);
    assert_eq!(poked, (0, 0));

    let position = t
        .engine
        .get_position(&t.pool_id, &t.lp, &0, &TICK_PRICE_40000);
    assert_eq!(position.liquidity, DEEP_LIQUIDITY);
    assert_eq!(position.tokens_owed_0, 299999999999999999);
    assert_eq!(position.tokens_owed_1, 0);

    // A second poke finds nothing new
    t.engine.burn(&t.pool_id, &t.lp, &0, &TICK_PRICE_40000, &0);
    let position = t
        .engine
        .get_position(&t.pool_id, &t.lp, &0, &TICK_PRICE_40000);
    assert_eq!(position.tokens_owed_0, 299999999999999999);
}

#[test]
fn test_partial_collect_respects_maximums() {
    let t = setup_pool_with_liquidity(DEEP_LIQUIDITY);
    swap_token0_in(&t, SWAP_IN);
    t.engine.burn(&t.pool_id, &t.lp, &0, &TICK_PRICE_40000, &0);

    let collected = t.engine.collect(
        &t.pool_id,
        &t.lp,
        &0,
        &TICK_PRICE_40000,
        &t.lp,
        &1_000,
        &0,
    );
    assert_eq!(collected, (1_000, 0));

    let position = t
        .engine
        .get_position(&t.pool_id, &t.lp, &0, &TICK_PRICE_40000);
    assert_eq!(position.tokens_owed_0, 299999999999999999 - 1_000);
}

#[test]
fn test_collect_to_another_recipient() {
    let t = setup_pool_with_liquidity(DEEP_LIQUIDITY);
    swap_token0_in(&t, SWAP_IN);
    t.engine.burn(&t.pool_id, &t.lp, &0, &TICK_PRICE_40000, &0);

    let recipient = Address::generate(&t.env);
    t.engine.collect(
        &t.pool_id,
        &t.lp,
        &0,
        &TICK_PRICE_40000,
        &recipient,
        &u128::MAX,
        &u128::MAX,
    );

    assert_eq!(t.balance(&t.token0, &recipient), 299999999999999999);
    assert_eq!(t.balance(&t.token1, &recipient), 0);
}

#[test]
fn test_empty_collect_emits_nothing() {
    let t = setup_pool();
    let owner = Address::generate(&t.env);

    assert_eq!(collect_all(&t, &owner, 0, TICK_PRICE_40000), (0, 0));
    let events = t.env.events().all().filter_by_contract(&t.engine.address);
    assert_eq!(events.events().len(), 0);
}

#[test]
fn test_collect_requires_initialized_pool() {
    let t = setup_registered(FEE_MEDIUM, 0, TICK_PRICE_40000);
    let result = t.engine.try_collect(
        &t.pool_id,
        &t.lp,
        &0,
        &TICK_PRICE_40000,
        &t.lp,
        &u128::MAX,
        &u128::MAX,
    );
    assert_eq!(result, Err(Ok(PoolError::NotInitialized)));
}

#[test]
fn test_equal_positions_split_fees_evenly() {
    let t = setup_pool_with_liquidity(DEEP_LIQUIDITY);
    let second = Address::generate(&t.env);
    t.fund(&second);
    t.engine.mint(
        &t.pool_id,
        &second,
        &second,
        &0,
        &TICK_PRICE_40000,
        &DEEP_LIQUIDITY,
    );

    swap_token0_in(&t, SWAP_IN);

    let (first0, first1) = t
        .engine
        .get_pending_fees(&t.pool_id, &t.lp, &0, &TICK_PRICE_40000);
    let (second0, second1) = t
        .engine
        .get_pending_fees(&t.pool_id, &second, &0, &TICK_PRICE_40000);

    assert_eq!(first0, second0);
    assert_eq!((first1, second1), (0, 0));
    // 0.3% of the input, give or take rounding
    let total = first0 + second0;
    assert!(total <= 300_000_000_000_000_010);
    assert!(total >= 300_000_000_000_000_000 - 10);
}

#[test]
fn test_out_of_range_position_earns_nothing() {
    let t = setup_pool_with_liquidity(DEEP_LIQUIDITY);
    t.engine.mint(
        &t.pool_id,
        &t.lp,
        &t.lp,
        &95_000,
        &100_000,
        &DEEP_LIQUIDITY,
    );

    swap_token0_in(&t, SWAP_IN);

    assert_eq!(
        t.engine.get_pending_fees(&t.pool_id, &t.lp, &95_000, &100_000),
        (0, 0)
    );
    assert!(
        t.engine
            .get_pending_fees(&t.pool_id, &t.lp, &0, &TICK_PRICE_40000)
            .0
            > 0
    );
}

#[test]
fn test_fees_follow_the_active_range() {
    let t = setup_pool_with_liquidity(20_000_000);
    t.engine
        .mint(&t.pool_id, &t.lp, &t.lp, &92_000, &92_200, &1_000_000_000);

    // Moves the price out of the narrow range and below it
    swap_token0_in(&t, 300_000);
    let narrow = t.engine.get_pending_fees(&t.pool_id, &t.lp, &92_000, &92_200);
    let wide_before = t
        .engine
        .get_pending_fees(&t.pool_id, &t.lp, &0, &TICK_PRICE_40000);
    assert!(narrow.0 > 0);

    // Trading below the narrow range only pays the wide one
    swap_token0_in(&t, 100_000);
    assert_eq!(
        t.engine.get_pending_fees(&t.pool_id, &t.lp, &92_000, &92_200),
        narrow
    );
    let wide_after = t
        .engine
        .get_pending_fees(&t.pool_id, &t.lp, &0, &TICK_PRICE_40000);
    assert!(wide_after.0 > wide_before.0);
}

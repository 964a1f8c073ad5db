mod common;

use common::*;
use meridian_factory::FactoryError;

#[test]
fn test_creates_and_initializes() {
    let t = setup();

    let pool_id = t.factory.create_and_initialize_pool_if_necessary(
        &t.token0,
        &t.token1,
        &FEE_MEDIUM,
        &-600,
        &600,
        &Q96,
    );

    let state = t.engine.get_pool(&pool_id);
    assert!(state.initialized);
    assert_eq!(state.sqrt_price_x96, Q96);
    assert_eq!(state.tick, 0);
}

#[test]
fn test_existing_price_is_kept() {
    let t = setup();

    let first = t.factory.create_and_initialize_pool_if_necessary(
        &t.token0,
        &t.token1,
        &FEE_MEDIUM,
        &-600,
        &600,
        &Q96,
    );
    let second = t.factory.create_and_initialize_pool_if_necessary(
        &t.token0,
        &t.token1,
        &FEE_MEDIUM,
        &-600,
        &600,
        &(Q96 + Q96 / 100),
    );

    assert_eq!(first, second);
    assert_eq!(t.engine.get_pool(&first).sqrt_price_x96, Q96);
}

#[test]
fn test_initializes_pool_created_earlier() {
    let t = setup();
    let pool_id = t
        .factory
        .create_pool(&t.token0, &t.token1, &-600, &600, &FEE_MEDIUM);
    assert!(!t.engine.get_pool(&pool_id).initialized);

    let same = t.factory.create_and_initialize_pool_if_necessary(
        &t.token0,
        &t.token1,
        &FEE_MEDIUM,
        &-600,
        &600,
        &Q96,
    );

    assert_eq!(same, pool_id);
    assert!(t.engine.get_pool(&pool_id).initialized);
}

#[test]
fn test_requires_sorted_tokens() {
    let t = setup();
    let result = t.factory.try_create_and_initialize_pool_if_necessary(
        &t.token1,
        &t.token0,
        &FEE_MEDIUM,
        &-600,
        &600,
        &Q96,
    );
    assert_eq!(result, Err(Ok(FactoryError::TokensNotSorted)));

    let result = t.factory.try_create_and_initialize_pool_if_necessary(
        &t.token0,
        &t.token0,
        &FEE_MEDIUM,
        &-600,
        &600,
        &Q96,
    );
    assert_eq!(result, Err(Ok(FactoryError::IdenticalTokens)));
}

#[test]
fn test_price_outside_range_fails_whole_call() {
    let t = setup();

    // 2 * Q96 is tick 13863, above the pool's upper bound
    let result = t.factory.try_create_and_initialize_pool_if_necessary(
        &t.token0,
        &t.token1,
        &FEE_MEDIUM,
        &-600,
        &600,
        &(2 * Q96),
    );
    assert!(result.is_err());

    // Nothing was recorded
    assert_eq!(t.factory.get_pools(&t.token0, &t.token1).len(), 0);
}

#[test]
fn test_all_pools_report_engine_state() {
    let t = setup();

    let live = t.factory.create_and_initialize_pool_if_necessary(
        &t.token0,
        &t.token1,
        &FEE_MEDIUM,
        &-600,
        &600,
        &Q96,
    );
    let idle = t
        .factory
        .create_pool(&t.token0, &t.token1, &-6_000, &6_000, &500);

    let pools = t.factory.get_all_pools();
    assert_eq!(pools.len(), 2);

    let first = pools.get(0).unwrap();
    assert_eq!(first.pool_id, live);
    assert!(first.initialized);
    assert_eq!(first.sqrt_price_x96, Q96);
    assert_eq!(first.tick, 0);
    assert_eq!(first.liquidity, 0);

    let second = pools.get(1).unwrap();
    assert_eq!(second.pool_id, idle);
    assert!(!second.initialized);
    assert_eq!(second.index, 1);
    assert_eq!(second.fee, 500);
}

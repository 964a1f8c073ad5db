// Property-Based Testing with Proptest
// Run with: cargo test -p meridian-math --test test_proptest

use meridian_math::*;
use proptest::prelude::*;
use soroban_sdk::Env;

// ============================================================
// TICK MATH PROPERTIES
// ============================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: get_tick_at_sqrt_ratio inverts get_sqrt_ratio_at_tick
    #[test]
    fn prop_tick_round_trip(tick in MIN_TICK..MAX_TICK) {
        let env = Env::default();
        let sqrt_price = get_sqrt_ratio_at_tick(&env, tick).unwrap();
        prop_assert_eq!(get_tick_at_sqrt_ratio(&env, sqrt_price).unwrap(), tick);
    }

    /// Property: any price maps to the tick whose range contains it
    #[test]
    fn prop_tick_brackets_price(sqrt_price in MIN_SQRT_RATIO..MAX_SQRT_RATIO) {
        let env = Env::default();
        let tick = get_tick_at_sqrt_ratio(&env, sqrt_price).unwrap();
        prop_assert!(get_sqrt_ratio_at_tick(&env, tick).unwrap() <= sqrt_price);
        if tick < MAX_TICK {
            prop_assert!(get_sqrt_ratio_at_tick(&env, tick + 1).unwrap() > sqrt_price);
        }
    }
}

// ============================================================
// ROUNDING PROPERTIES
// ============================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Property: rounding up never yields less, and differs by at most one
    #[test]
    fn prop_amount_deltas_round_consistently(
        tick_a in -100_000i32..100_000,
        width in 1i32..50_000,
        liquidity in 1u128..(1u128 << 100),
    ) {
        let env = Env::default();
        let lower = get_sqrt_ratio_at_tick(&env, tick_a).unwrap();
        let upper = get_sqrt_ratio_at_tick(&env, tick_a + width).unwrap();

        let up0 = get_amount_0_delta(&env, lower, upper, liquidity, true).unwrap();
        let down0 = get_amount_0_delta(&env, lower, upper, liquidity, false).unwrap();
        prop_assert!(up0 >= down0 && up0 - down0 <= 1);

        let up1 = get_amount_1_delta(&env, lower, upper, liquidity, true).unwrap();
        let down1 = get_amount_1_delta(&env, lower, upper, liquidity, false).unwrap();
        prop_assert!(up1 >= down1 && up1 - down1 <= 1);
    }
}

// ============================================================
// SWAP STEP PROPERTIES
// ============================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Property: exact input never spends more than offered and stays
    /// between the current and target prices
    #[test]
    fn prop_exact_input_conserves_amount(
        current_tick in -50_000i32..50_000,
        distance in 1i32..5_000,
        zero_for_one in any::<bool>(),
        liquidity in 1_000u128..(1u128 << 96),
        amount in 1u128..(1u128 << 96),
        fee_index in 0usize..3,
    ) {
        let env = Env::default();
        let current = get_sqrt_ratio_at_tick(&env, current_tick).unwrap();
        let target_tick = if zero_for_one { current_tick - distance } else { current_tick + distance };
        let target = get_sqrt_ratio_at_tick(&env, target_tick).unwrap();

        let step = compute_swap_step(&env, current, target, liquidity, amount, true, FEE_TIERS[fee_index]).unwrap();

        prop_assert!(step.amount_in + step.fee_amount <= amount);
        if zero_for_one {
            prop_assert!(step.sqrt_price_next_x96 <= current && step.sqrt_price_next_x96 >= target);
        } else {
            prop_assert!(step.sqrt_price_next_x96 >= current && step.sqrt_price_next_x96 <= target);
        }
        if step.sqrt_price_next_x96 != target {
            prop_assert_eq!(step.amount_in + step.fee_amount, amount);
        }
    }

    /// Property: exact output never delivers more than requested
    #[test]
    fn prop_exact_output_caps_amount(
        current_tick in -50_000i32..50_000,
        distance in 1i32..5_000,
        zero_for_one in any::<bool>(),
        liquidity in 1_000u128..(1u128 << 96),
        amount in 1u128..(1u128 << 96),
    ) {
        let env = Env::default();
        let current = get_sqrt_ratio_at_tick(&env, current_tick).unwrap();
        let target_tick = if zero_for_one { current_tick - distance } else { current_tick + distance };
        let target = get_sqrt_ratio_at_tick(&env, target_tick).unwrap();

        let step = compute_swap_step(&env, current, target, liquidity, amount, false, 3000).unwrap();

        prop_assert!(step.amount_out <= amount);
        if step.sqrt_price_next_x96 != target {
            prop_assert_eq!(step.amount_out, amount);
        }
    }
}

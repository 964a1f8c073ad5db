#![allow(dead_code)]

use meridian_pool::{MeridianPool, MeridianPoolClient, PoolConfig};
use soroban_sdk::{
    testutils::Address as _,
    token::{StellarAssetClient, TokenClient},
    Address, BytesN, Env,
};

// Test constants
pub const FEE_MEDIUM: u32 = 3000; // 0.30%
/// sqrt(10000) * 2^96: 10000 token1 per token0
pub const SQRT_PRICE_100: u128 = 100 * (1u128 << 96);
/// sqrt(1000) * 2^96
pub const SQRT_PRICE_LIMIT_1000: u128 = 2505414483750479311864138015696;
/// Tick of sqrt(40000) * 2^96
pub const TICK_PRICE_40000: i32 = 105971;
pub const INITIAL_BALANCE: i128 = 100_000_000_000_000_000_000_000_000_000_000;

pub struct PoolTest<'a> {
    pub env: Env,
    pub engine: MeridianPoolClient<'a>,
    pub factory: Address,
    pub token0: Address,
    pub token1: Address,
    pub pool_id: BytesN<32>,
    pub lp: Address,
    pub trader: Address,
}

impl<'a> PoolTest<'a> {
    pub fn balance(&self, token: &Address, who: &Address) -> i128 {
        TokenClient::new(&self.env, token).balance(who)
    }

    pub fn fund(&self, who: &Address) {
        mint_tokens(&self.env, &self.token0, who, INITIAL_BALANCE);
        mint_tokens(&self.env, &self.token1, who, INITIAL_BALANCE);
    }
}

/// Engine with one registered pool over `[tick_lower, tick_upper]`, not yet
/// initialized.
pub fn setup_registered<'a>(fee: u32, tick_lower: i32, tick_upper: i32) -> PoolTest<'a> {
    let env = Env::default();
    env.mock_all_auths();
    env.cost_estimate().budget().reset_unlimited();

    let admin = Address::generate(&env);
    let factory = Address::generate(&env);
    let (token0, token1) = sorted(create_token(&env, &admin), create_token(&env, &admin));

    let engine_id = env.register(MeridianPool, (factory.clone(),));
    let engine = MeridianPoolClient::new(&env, &engine_id);

    let pool_id = BytesN::from_array(&env, &[42; 32]);
    engine.register_pool(
        &pool_id,
        &PoolConfig {
            token0: token0.clone(),
            token1: token1.clone(),
            fee,
            tick_lower,
            tick_upper,
        },
    );

    let lp = Address::generate(&env);
    let trader = Address::generate(&env);

    let test = PoolTest {
        env,
        engine,
        factory,
        token0,
        token1,
        pool_id,
        lp,
        trader,
    };
    test.fund(&test.lp);
    test.fund(&test.trader);
    test
}

/// Pool over `[0, 105971]` at 10000 token1 per token0.
pub fn setup_pool<'a>() -> PoolTest<'a> {
    let test = setup_registered(FEE_MEDIUM, 0, TICK_PRICE_40000);
    test.engine.initialize(&test.pool_id, &SQRT_PRICE_100);
    test
}

/// `setup_pool` with `liquidity` minted by the LP over the whole pool range.
pub fn setup_pool_with_liquidity<'a>(liquidity: u128) -> PoolTest<'a> {
    let test = setup_pool();
    test.engine
        .mint(&test.pool_id, &test.lp, &test.lp, &0, &TICK_PRICE_40000, &liquidity);
    test
}

pub fn sorted(a: Address, b: Address) -> (Address, Address) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Create a test token
pub fn create_token(env: &Env, admin: &Address) -> Address {
    let token_id = env.register_stellar_asset_contract_v2(admin.clone());
    token_id.address()
}

/// Mint tokens to an address
pub fn mint_tokens(env: &Env, token: &Address, to: &Address, amount: i128) {
    StellarAssetClient::new(env, token).mint(to, &amount);
}

#![allow(dead_code)]

use meridian_factory::{MeridianFactory, MeridianFactoryClient};
use meridian_pool::{MeridianPool, MeridianPoolClient};
use meridian_router::{ExactInputParams, ExactOutputParams, MeridianRouter, MeridianRouterClient};
use soroban_sdk::{
    testutils::Address as _,
    token::{StellarAssetClient, TokenClient},
    Address, BytesN, Env, Vec,
};

pub const FEE_MEDIUM: u32 = 3000;
pub const FEE_LOW: u32 = 500;
/// sqrt(10000) * 2^96
pub const SQRT_PRICE_100: u128 = 100 * (1u128 << 96);
/// sqrt(9801) * 2^96, about 2% below the starting price
pub const SQRT_PRICE_99: u128 = 99 * (1u128 << 96);
pub const TICK_UPPER: i32 = 105971;
pub const INITIAL_BALANCE: i128 = 100_000_000_000_000_000_000_000_000_000_000;

pub struct RouterTest<'a> {
    pub env: Env,
    pub router: MeridianRouterClient<'a>,
    pub factory: MeridianFactoryClient<'a>,
    pub engine: MeridianPoolClient<'a>,
    pub token0: Address,
    pub token1: Address,
    /// Pool index 0: fee 3000; pool index 1: fee 500. Same range and price.
    pub pools: Vec<BytesN<32>>,
    pub lp: Address,
    pub trader: Address,
}

impl<'a> RouterTest<'a> {
    pub fn balance(&self, token: &Address, who: &Address) -> i128 {
        TokenClient::new(&self.env, token).balance(who)
    }

    pub fn pool(&self, index: u32) -> BytesN<32> {
        self.pools.get(index).unwrap()
    }

    pub fn exact_input_params(
        &self,
        token_in: &Address,
        token_out: &Address,
        index_path: Vec<u32>,
        amount_in: i128,
        sqrt_price_limit_x96: u128,
    ) -> ExactInputParams {
        ExactInputParams {
            token_in: token_in.clone(),
            token_out: token_out.clone(),
            index_path,
            amount_in,
            amount_out_minimum: 0,
            sqrt_price_limit_x96,
            recipient: self.trader.clone(),
            deadline: u64::MAX,
        }
    }

    pub fn exact_output_params(
        &self,
        token_in: &Address,
        token_out: &Address,
        index_path: Vec<u32>,
        amount_out: i128,
        sqrt_price_limit_x96: u128,
    ) -> ExactOutputParams {
        ExactOutputParams {
            token_in: token_in.clone(),
            token_out: token_out.clone(),
            index_path,
            amount_out,
            amount_in_maximum: i128::MAX,
            sqrt_price_limit_x96,
            recipient: self.trader.clone(),
            deadline: u64::MAX,
        }
    }
}

/// Two pools of one pair at 10000 token1 per token0 over `[0, 105971]`,
/// holding `liquidity0` and `liquidity1` from the LP (zero skips the mint).
pub fn setup<'a>(liquidity0: u128, liquidity1: u128) -> RouterTest<'a> {
    let env = Env::default();
    env.mock_all_auths();
    env.cost_estimate().budget().reset_unlimited();

    let factory_id = Address::generate(&env);
    let engine_id = env.register(MeridianPool, (factory_id.clone(),));
    env.register_at(&factory_id, MeridianFactory, (engine_id.clone(),));
    let router_id = env.register(MeridianRouter, (factory_id.clone(), engine_id.clone()));

    let factory = MeridianFactoryClient::new(&env, &factory_id);
    let engine = MeridianPoolClient::new(&env, &engine_id);
    let router = MeridianRouterClient::new(&env, &router_id);

    let (token0, token1) = sorted(create_token(&env), create_token(&env));

    let mut pools = Vec::new(&env);
    for fee in [FEE_MEDIUM, FEE_LOW] {
        pools.push_back(factory.create_and_initialize_pool_if_necessary(
            &token0,
            &token1,
            &fee,
            &0,
            &TICK_UPPER,
            &SQRT_PRICE_100,
        ));
    }

    let lp = Address::generate(&env);
    let trader = Address::generate(&env);
    for who in [&lp, &trader] {
        StellarAssetClient::new(&env, &token0).mint(who, &INITIAL_BALANCE);
        StellarAssetClient::new(&env, &token1).mint(who, &INITIAL_BALANCE);
    }

    for (index, liquidity) in [(0u32, liquidity0), (1, liquidity1)] {
        if liquidity > 0 {
            engine.mint(&pools.get(index).unwrap(), &lp, &lp, &0, &TICK_UPPER, &liquidity);
        }
    }

    RouterTest {
        env,
        router,
        factory,
        engine,
        token0,
        token1,
        pools,
        lp,
        trader,
    }
}

pub fn path(env: &Env, indices: &[u32]) -> Vec<u32> {
    let mut out = Vec::new(env);
    for index in indices {
        out.push_back(*index);
    }
    out
}

pub fn create_token(env: &Env) -> Address {
    let admin = Address::generate(env);
    env.register_stellar_asset_contract_v2(admin).address()
}

pub fn sorted(a: Address, b: Address) -> (Address, Address) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

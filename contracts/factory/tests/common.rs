#![allow(dead_code)]

use meridian_factory::{MeridianFactory, MeridianFactoryClient};
use meridian_pool::{MeridianPool, MeridianPoolClient};
use soroban_sdk::{testutils::Address as _, Address, Env};

pub const FEE_MEDIUM: u32 = 3000;
pub const Q96: u128 = 1u128 << 96;

pub struct FactoryTest<'a> {
    pub env: Env,
    pub factory: MeridianFactoryClient<'a>,
    pub engine: MeridianPoolClient<'a>,
    /// token0 < token1
    pub token0: Address,
    pub token1: Address,
}

/// Factory and engine wired to each other, plus two sorted tokens.
pub fn setup<'a>() -> FactoryTest<'a> {
    let env = Env::default();
    env.mock_all_auths();
    env.cost_estimate().budget().reset_unlimited();

    // Each contract is constructed with the other's address
    let factory_id = Address::generate(&env);
    let engine_id = env.register(MeridianPool, (factory_id.clone(),));
    env.register_at(&factory_id, MeridianFactory, (engine_id.clone(),));

    let (token0, token1) = sorted(create_token(&env), create_token(&env));

    FactoryTest {
        factory: MeridianFactoryClient::new(&env, &factory_id),
        engine: MeridianPoolClient::new(&env, &engine_id),
        env,
        token0,
        token1,
    }
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

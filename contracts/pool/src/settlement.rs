// Token settlement

use soroban_sdk::{token, Address, Env};

use crate::error::PoolError;

pub fn to_i128(amount: u128) -> Result<i128, PoolError> {
    i128::try_from(amount).map_err(|_| PoolError::Overflow)
}

/// Pull `amount` of `token` from `payer` and verify it arrived.
///
/// The engine's own balance is read before and after the transfer; only the
/// observed increase counts as payment.
pub fn collect_payment(
    env: &Env,
    token: &Address,
    payer: &Address,
    amount: u128,
) -> Result<(), PoolError> {
    if amount == 0 {
        return Ok(());
    }
    let owed = to_i128(amount)?;
    let client = token::Client::new(env, token);
    let engine = env.current_contract_address();

    let balance_before = client.balance(&engine);
    client.transfer(payer, &engine, &owed);
    let balance_after = client.balance(&engine);

    let received = balance_after
        .checked_sub(balance_before)
        .ok_or(PoolError::Overflow)?;
    if received < owed {
        return Err(PoolError::InsufficientPayment);
    }
    Ok(())
}

/// Send `amount` of `token` from the engine to `recipient`.
pub fn pay(env: &Env, token: &Address, recipient: &Address, amount: u128) -> Result<(), PoolError> {
    if amount == 0 {
        return Ok(());
    }
    let amount = to_i128(amount)?;
    token::Client::new(env, token).transfer(&env.current_contract_address(), recipient, &amount);
    Ok(())
}

//! Router events

use soroban_sdk::{contractevent, Address, Env};

/// Emitted once per routed swap
#[contractevent]
pub struct RouterSwap {
    #[topic]
    pub payer: Address,
    pub token_in: Address,
    pub token_out: Address,
    pub amount_in: i128,
    pub amount_out: i128,
    pub recipient: Address,
}

pub fn emit_swap(
    env: &Env,
    payer: &Address,
    token_in: &Address,
    token_out: &Address,
    amount_in: i128,
    amount_out: i128,
    recipient: &Address,
) {
    RouterSwap {
        payer: payer.clone(),
        token_in: token_in.clone(),
        token_out: token_out.clone(),
        amount_in,
        amount_out,
        recipient: recipient.clone(),
    }
    .publish(env);
}

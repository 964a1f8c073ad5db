// Per-pool reentrancy guard

use soroban_sdk::{BytesN, Env};

use crate::error::PoolError;
use crate::storage::{clear_busy, is_busy, set_busy};

/// Holds a pool's busy flag until dropped.
///
/// Dropped on every return path, including early `?` returns, so the flag
/// never outlives the call that set it.
pub struct PoolGuard<'a> {
    env: &'a Env,
    pool_id: BytesN<32>,
}

impl<'a> PoolGuard<'a> {
    pub fn acquire(env: &'a Env, pool_id: &BytesN<32>) -> Result<Self, PoolError> {
        if is_busy(env, pool_id) {
            return Err(PoolError::Locked);
        }
        set_busy(env, pool_id);
        Ok(Self {
            env,
            pool_id: pool_id.clone(),
        })
    }
}

impl Drop for PoolGuard<'_> {
    fn drop(&mut self) {
        clear_busy(self.env, &self.pool_id);
    }
}

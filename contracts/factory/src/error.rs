// Factory error module

use meridian_math::MathError;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FactoryError {
    // Initialization errors (1-9)
    NotInitialized = 1,
    PoolNotFound = 2,

    // Validation errors (10-29)
    /// Both sides of the pair are the same token
    IdenticalTokens = 10,
    /// token0 must sort before token1
    TokensNotSorted = 11,
    /// Fee is not one of the supported tiers
    InvalidFeeTier = 12,
    /// tick_lower must be below tick_upper
    InvalidTickRange = 13,
    /// Tick outside the supported domain
    TickOutOfBounds = 14,
    InvalidSqrtPrice = 15,

    // Arithmetic errors (60-69)
    Overflow = 60,
}

impl From<MathError> for FactoryError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::TickOutOfRange => FactoryError::TickOutOfBounds,
            MathError::SqrtPriceOutOfRange => FactoryError::InvalidSqrtPrice,
            _ => FactoryError::Overflow,
        }
    }
}

// Pool engine errors

use meridian_math::MathError;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PoolError {
    // Initialization errors (1-9)
    /// Pool price has already been set
    AlreadyInitialized = 1,
    /// Pool price has not been set yet
    NotInitialized = 2,
    /// No pool is registered under this id
    PoolNotFound = 3,
    /// A pool is already registered under this id
    PoolAlreadyRegistered = 4,

    // Validation errors (10-29)
    /// tick_lower must be below tick_upper
    InvalidTickRange = 10,
    /// Tick outside the pool's admissible range
    TickOutOfBounds = 11,
    InvalidSqrtPrice = 12,
    /// Price limit is on the wrong side of the current price or out of domain
    InvalidPriceLimit = 13,
    /// Amounts must be positive
    InvalidAmount = 14,
    /// Liquidity change moves no tokens
    ZeroLiquidity = 15,
    InvalidFee = 16,
    /// Tokens must be distinct and ordered
    InvalidTokenOrder = 17,

    // State errors (30-49)
    /// Re-entrant call into a pool that is mid-operation
    Locked = 30,
    /// Burn exceeds the position's liquidity
    InsufficientLiquidity = 31,
    /// Exact-output swap hit its price limit before delivering in full
    PriceLimitReached = 32,
    /// Pool would pay out more than it holds
    InsufficientReserves = 33,

    // Payment errors (50-59)
    /// Token balance did not increase by the amount owed
    InsufficientPayment = 50,

    // Arithmetic errors (60-69)
    Overflow = 60,
    DivisionByZero = 61,
    NotEnoughLiquidity = 62,
    LiquidityOverflow = 63,
    TooManyIterations = 64,
}

impl From<MathError> for PoolError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::Overflow => PoolError::Overflow,
            MathError::DivisionByZero => PoolError::DivisionByZero,
            MathError::TickOutOfRange => PoolError::TickOutOfBounds,
            MathError::SqrtPriceOutOfRange => PoolError::InvalidSqrtPrice,
            MathError::ZeroLiquidity => PoolError::ZeroLiquidity,
            MathError::NotEnoughLiquidity => PoolError::NotEnoughLiquidity,
            MathError::LiquidityUnderflow => PoolError::InsufficientLiquidity,
            MathError::LiquidityOverflow => PoolError::LiquidityOverflow,
            MathError::TooManyIterations => PoolError::TooManyIterations,
        }
    }
}

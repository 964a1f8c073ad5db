//! Router error types

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RouterError {
    // Initialization (1-9)
    NotInitialized = 1,

    // Validation (10-29)
    /// Empty, too long, repeated or unknown pool index
    InvalidPath = 10,
    /// Amounts must be positive
    InvalidAmount = 11,
    IdenticalTokens = 12,

    // Swap outcome (30-49)
    DeadlineExpired = 30,
    /// Output below the caller's minimum
    TooLittleReceived = 31,
    /// The path could not deliver the requested output
    AmountNotReached = 32,
    /// Input above the caller's maximum
    TooMuchRequested = 33,

    // Arithmetic (60-69)
    Overflow = 60,
}

/// Failure modes of the fixed-point math.
///
/// Contracts convert this into their own `#[contracterror]` enums, so the
/// variants stay plain Rust here.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MathError {
    /// A result does not fit its target width.
    Overflow,
    DivisionByZero,
    /// Tick outside `[MIN_TICK, MAX_TICK]`.
    TickOutOfRange,
    /// Sqrt price outside `[MIN_SQRT_RATIO, MAX_SQRT_RATIO)`.
    SqrtPriceOutOfRange,
    /// An operation that needs liquidity was handed zero.
    ZeroLiquidity,
    /// Requested output exceeds what the liquidity segment can provide.
    NotEnoughLiquidity,
    /// Adding a negative delta took liquidity below zero.
    LiquidityUnderflow,
    /// Adding a positive delta overflowed u128.
    LiquidityOverflow,
    /// The swap loop did not converge within `MAX_SWAP_ITERATIONS`.
    TooManyIterations,
}

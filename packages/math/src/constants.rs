// ============================================================
// TICK CONSTANTS
// ============================================================

/// Minimum valid tick value.
/// The tick domain is the widest symmetric range whose sqrt ratio still
/// fits a u128 in Q64.96.
pub const MIN_TICK: i32 = -443636;

/// Maximum valid tick value.
pub const MAX_TICK: i32 = 443636;

// ============================================================
// SQRT PRICE CONSTANTS (Q64.96 format)
// ============================================================

/// `get_sqrt_ratio_at_tick(MIN_TICK)`, the lowest admissible sqrt price.
pub const MIN_SQRT_RATIO: u128 = 18447090764788882728;

/// `get_sqrt_ratio_at_tick(MAX_TICK)`. Prices must stay strictly below it.
pub const MAX_SQRT_RATIO: u128 = 340275971719517849884101479065584693834;

/// Number of fractional bits in a sqrt price.
pub const RESOLUTION: u32 = 96;

/// 2^96, the sqrt price for a 1:1 price ratio.
pub const Q96: u128 = 1u128 << RESOLUTION;

// ============================================================
// FEE CONSTANTS
// ============================================================

/// Fees are expressed in pips: hundredths of a basis point.
pub const FEE_DENOMINATOR: u32 = 1_000_000;

/// Fee tiers accepted by the registry (0.05%, 0.30%, 1.00%).
pub const FEE_TIERS: [u32; 3] = [500, 3000, 10000];

/// Fee-growth accumulators are scaled by 2^128.
pub const FEE_GROWTH_RESOLUTION: u32 = 128;

// ============================================================
// SWAP CONSTANTS
// ============================================================

/// Maximum iterations in the swap loop.
/// Every iteration either exhausts the amount, reaches the limit or crosses
/// an initialized tick, so this only bounds pathological tick densities.
pub const MAX_SWAP_ITERATIONS: u32 = 1024;

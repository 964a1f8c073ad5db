#![no_std]

pub mod engine;
pub mod types;

pub use engine::compute_swap;
pub use types::{SwapOutcome, SwapParams, SwapState};

#![no_std]

pub mod fees;
pub mod manager;
pub mod types;

pub use fees::calculate_pending_fees;
pub use manager::{collect_owed, credit_tokens_owed, update_position, validate_position_range};
pub use types::{Position, RangeError};

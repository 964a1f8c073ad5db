#![no_std]

pub mod fee_growth;
pub mod index;
pub mod types;
pub mod update;

pub use fee_growth::get_fee_growth_inside;
pub use index::TickIndex;
pub use types::TickInfo;
pub use update::{cross_tick, is_valid_tick, update_tick};

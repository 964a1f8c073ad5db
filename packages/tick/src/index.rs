// Tick Index: ordered set of initialized ticks

use soroban_sdk::{Env, Vec};

/// Sorted set of the ticks whose `liquidity_gross` is non-zero.
///
/// Backed by a sorted host vector, so neighbour queries are binary searches.
#[derive(Clone, Debug)]
pub struct TickIndex {
    ticks: Vec<i32>,
}

impl TickIndex {
    pub fn new(env: &Env) -> Self {
        Self { ticks: Vec::new(env) }
    }

    /// Wrap a vector previously produced by [`TickIndex::into_vec`].
    pub fn from_vec(ticks: Vec<i32>) -> Self {
        Self { ticks }
    }

    pub fn into_vec(self) -> Vec<i32> {
        self.ticks
    }

    pub fn len(&self) -> u32 {
        self.ticks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }

    pub fn contains(&self, tick: i32) -> bool {
        self.ticks.binary_search(tick).is_ok()
    }

    /// Insert a tick. Returns false if it was already present.
    pub fn insert(&mut self, tick: i32) -> bool {
        match self.ticks.binary_search(tick) {
            Ok(_) => false,
            Err(pos) => {
                self.ticks.insert(pos, tick);
                true
            }
        }
    }

    /// Remove a tick. Returns false if it was not present.
    pub fn remove(&mut self, tick: i32) -> bool {
        match self.ticks.binary_search(tick) {
            Ok(pos) => self.ticks.remove(pos).is_some(),
            Err(_) => false,
        }
    }

    /// Next initialized tick strictly greater than `tick`.
    pub fn next_initialized_above(&self, tick: i32) -> Option<i32> {
        match self.ticks.binary_search(tick) {
            Ok(pos) => self.ticks.get(pos + 1),
            Err(pos) => self.ticks.get(pos),
        }
    }

    /// Next initialized tick less than or equal to `tick`.
    pub fn next_initialized_at_or_below(&self, tick: i32) -> Option<i32> {
        match self.ticks.binary_search(tick) {
            Ok(pos) => self.ticks.get(pos),
            Err(0) => None,
            Err(pos) => self.ticks.get(pos - 1),
        }
    }

    /// Next initialized tick in the direction of a swap.
    ///
    /// A falling price (`zero_for_one`) may still cross the tick it sits on,
    /// a rising price only ticks strictly above it.
    pub fn next_initialized(&self, tick: i32, zero_for_one: bool) -> Option<i32> {
        if zero_for_one {
            self.next_initialized_at_or_below(tick)
        } else {
            self.next_initialized_above(tick)
        }
    }

    pub fn as_vec(&self) -> &Vec<i32> {
        &self.ticks
    }
}

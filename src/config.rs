//! Run configuration
//!
//! Built from the command line in `main.rs`. Out-of-range values are clamped
//! rather than rejected so a typo in `--speed` still gives a usable session.

use crate::engine::constants::{
    DEFAULT_LIST_SIZE, DEFAULT_SPEED_MS, MAX_LIST_SIZE, MAX_SPEED_MS, MIN_LIST_SIZE, MIN_SPEED_MS,
};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimConfig {
    /// Node count of generated lists, 3..=10
    pub list_size: usize,
    /// Step delay in milliseconds, 80..=900
    pub speed_ms: u64,
    /// Seed for node values; `None` draws from the OS
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            list_size: DEFAULT_LIST_SIZE,
            speed_ms: DEFAULT_SPEED_MS,
            seed: None,
        }
    }
}

impl SimConfig {
    /// Build a config, clamping size and speed into range
    pub fn new(list_size: usize, speed_ms: u64, seed: Option<u64>) -> Self {
        SimConfig {
            list_size: list_size.clamp(MIN_LIST_SIZE, MAX_LIST_SIZE),
            speed_ms: speed_ms.clamp(MIN_SPEED_MS, MAX_SPEED_MS),
            seed,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn speed(&self) -> Duration {
        Duration::from_millis(self.speed_ms)
    }

    pub fn clamp_speed(speed_ms: u64) -> Duration {
        Duration::from_millis(speed_ms.clamp(MIN_SPEED_MS, MAX_SPEED_MS))
    }
}

//! Value generation for new nodes

use crate::engine::constants::{VALUE_MAX, VALUE_MIN};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Supplies the value of a node created without an explicit one
pub trait ValueSource {
    fn next_value(&mut self) -> i32;
}

impl<F: FnMut() -> i32> ValueSource for F {
    fn next_value(&mut self) -> i32 {
        self()
    }
}

/// Two-digit random values
#[derive(Debug, Clone)]
pub struct RandomValues {
    rng: SmallRng,
}

impl RandomValues {
    /// Seeded for reproducible lists, or from OS entropy when `seed` is `None`
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        RandomValues { rng }
    }
}

impl Default for RandomValues {
    fn default() -> Self {
        Self::new(None)
    }
}

impl ValueSource for RandomValues {
    fn next_value(&mut self) -> i32 {
        self.rng.random_range(VALUE_MIN..=VALUE_MAX)
    }
}

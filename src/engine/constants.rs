// Constants for the simulation engine

use std::time::Duration;

/// Default delay per visible step
pub const DEFAULT_SPEED_MS: u64 = 380;

/// Slowest and fastest accepted step delays
pub const MIN_SPEED_MS: u64 = 80;
pub const MAX_SPEED_MS: u64 = 900;

/// Amount `+`/`-` change the step delay by
pub const SPEED_STEP_MS: u64 = 40;

/// Initial list size and the range `regenerate` accepts
pub const DEFAULT_LIST_SIZE: usize = 5;
pub const MIN_LIST_SIZE: usize = 3;
pub const MAX_LIST_SIZE: usize = 10;

/// A suspension is consumed in slices of this length; cancellation is checked between slices
pub const WAIT_SLICE: Duration = Duration::from_millis(40);

/// Poll interval while a run is paused
pub const PAUSE_POLL: Duration = Duration::from_millis(80);

/// The fade-out before a tail removal runs at 0.6x the step delay, never under 120ms
pub const FADE_OUT_FACTOR: f64 = 0.6;
pub const FADE_OUT_MIN: Duration = Duration::from_millis(120);

/// Range of generated node values (two digits)
pub const VALUE_MIN: i32 = 10;
pub const VALUE_MAX: i32 = 99;

//! Cooperative scheduler for stepwise operations
//!
//! Operations never block. Between two visible steps an operation suspends,
//! and the driver (the TUI event loop, or the headless runner with virtual
//! time) feeds elapsed time into [`Scheduler::poll`] until the suspension
//! resolves:
//!
//! ```text
//! wait_with_control(d) ──poll(dt)──▶ Pending ──poll(dt)──▶ Elapsed   (true)
//!                                           └─────────────▶ Cancelled (false)
//! ```
//!
//! Pause and cancellation are plain atomic flags behind a [`ControlHandle`],
//! so they can be raised from anywhere holding a clone of the handle. Time is
//! consumed in [`WAIT_SLICE`] slices and the cancel flag is checked before
//! each one. Time fed in while paused never counts toward the wait.

use super::constants::WAIT_SLICE;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Default)]
struct ControlFlags {
    cancel: AtomicBool,
    pause: AtomicBool,
}

/// Shared pause/cancel flags of the active run
#[derive(Debug, Clone, Default)]
pub struct ControlHandle {
    flags: Arc<ControlFlags>,
}

impl ControlHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the active run to stop at its next suspension point
    pub fn request_cancel(&self) {
        self.flags.cancel.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flags.cancel.load(Ordering::SeqCst)
    }

    pub fn set_paused(&self, paused: bool) {
        self.flags.pause.store(paused, Ordering::SeqCst);
    }

    pub fn is_paused(&self) -> bool {
        self.flags.pause.load(Ordering::SeqCst)
    }

    /// Cancel and un-pause in one go. Idempotent.
    pub fn hard_stop(&self) {
        self.flags.cancel.store(true, Ordering::SeqCst);
        self.flags.pause.store(false, Ordering::SeqCst);
    }

    /// Clear both flags before a new run
    pub fn arm(&self) {
        self.flags.cancel.store(false, Ordering::SeqCst);
        self.flags.pause.store(false, Ordering::SeqCst);
    }
}

/// An in-progress suspension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingWait {
    duration: Duration,
    elapsed: Duration,
    /// Time handed in that did not yet fill a whole slice
    banked: Duration,
}

impl PendingWait {
    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Time still needed to resolve, assuming no pause
    pub fn remaining(&self) -> Duration {
        self.duration
            .saturating_sub(self.elapsed)
            .saturating_sub(self.banked)
    }
}

/// Result of feeding time into a suspension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitPoll {
    Pending,
    /// The full duration passed without cancellation
    Elapsed,
    Cancelled,
}

impl WaitPoll {
    /// `Some(true)` when elapsed, `Some(false)` when cancelled
    pub fn resolved(self) -> Option<bool> {
        match self {
            WaitPoll::Pending => None,
            WaitPoll::Elapsed => Some(true),
            WaitPoll::Cancelled => Some(false),
        }
    }
}

/// Creates and advances suspensions against a [`ControlHandle`]
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    handle: ControlHandle,
}

impl Scheduler {
    pub fn new(handle: ControlHandle) -> Self {
        Scheduler { handle }
    }

    pub fn handle(&self) -> &ControlHandle {
        &self.handle
    }

    /// Begin a suspension of `duration`
    pub fn wait_with_control(&self, duration: Duration) -> PendingWait {
        PendingWait {
            duration,
            elapsed: Duration::ZERO,
            banked: Duration::ZERO,
        }
    }

    /// Feed `dt` of elapsed time into `wait`
    pub fn poll(&self, wait: &mut PendingWait, dt: Duration) -> WaitPoll {
        if self.handle.is_cancelled() {
            return WaitPoll::Cancelled;
        }
        if self.handle.is_paused() {
            wait.banked = Duration::ZERO;
            return WaitPoll::Pending;
        }

        let mut budget = wait.banked + dt;
        while wait.elapsed < wait.duration {
            if self.handle.is_cancelled() {
                return WaitPoll::Cancelled;
            }
            let slice = WAIT_SLICE.min(wait.duration - wait.elapsed);
            if budget < slice {
                wait.banked = budget;
                return WaitPoll::Pending;
            }
            budget -= slice;
            wait.elapsed += slice;
        }
        wait.banked = Duration::ZERO;

        if self.handle.is_cancelled() {
            WaitPoll::Cancelled
        } else {
            WaitPoll::Elapsed
        }
    }
}

//! # Simulation engine
//!
//! Runs one list operation at a time as a sequence of narrated steps.
//!
//! - [`controller`]: [`controller::RunController`] owns the list and drives a run
//! - [`ops`]: the six operations as resumable state machines
//! - [`scheduler`]: tick-driven suspensions with pause and cancel
//! - [`params`]: parsing of the value and position inputs
//! - [`narration`]: the status line each step rewrites
//! - [`errors`]: [`errors::SimError`] and the run [`errors::Outcome`]
//! - [`constants`]: speeds, sizes, value range

pub mod constants;
pub mod controller;
pub mod errors;
pub mod narration;
pub mod ops;
pub mod params;
pub mod scheduler;

pub use controller::{RunController, RunReport, RunState, RunStatus, Snapshot};
pub use errors::{AbortReason, Outcome, SimError};
pub use params::{OperationParams, ValueInput};

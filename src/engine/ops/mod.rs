//! Stepwise list operations
//!
//! Each operation is a resumable state machine. A call to
//! [`StepOperation::step`] performs one synchronous mutation of the list and
//! markers, narrates it, and either suspends or finishes:
//!
//! ```text
//! mutate ─▶ mark ─▶ narrate ─▶ Step::Suspend(delay)   (driver waits, then resumes)
//!                           └▶ Step::Finished(outcome)
//! ```
//!
//! Between two steps the list may be transiently inconsistent (one link set
//! before its partner); that intermediate state is what the viewer sees.
//! A resume after a cancelled wait finishes the operation without touching
//! anything, so partial work is left in place for inspection.
//!
//! - [`insert`]: insert at head, tail, position
//! - [`delete`]: delete from head, tail, by value

pub mod delete;
pub mod insert;

use super::constants::{FADE_OUT_FACTOR, FADE_OUT_MIN};
use super::errors::{AbortReason, Outcome};
use super::narration::Narration;
use super::params::{OperationParams, ValueInput};
use crate::catalog::OperationKind;
use crate::history::{HistoryEntry, OperationHistory};
use crate::structure::{ListStore, Markers, Node, ValueSource};
use std::fmt;
use std::time::Duration;

pub use delete::{DeleteByValue, DeleteFromHead, DeleteFromTail};
pub use insert::{InsertAtHead, InsertAtPosition, InsertAtTail};

/// How long a suspension lasts, resolved against the speed when it begins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delay {
    /// One step delay
    Step,
    /// The shorter fade before a tail removal
    FadeOut,
}

impl Delay {
    pub fn resolve(self, speed: Duration) -> Duration {
        match self {
            Delay::Step => speed,
            Delay::FadeOut => speed.mul_f64(FADE_OUT_FACTOR).max(FADE_OUT_MIN),
        }
    }
}

/// What an operation does after a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Suspend(Delay),
    Finished(Outcome),
}

impl Step {
    fn wait() -> Self {
        Step::Suspend(Delay::Step)
    }

    fn done() -> Self {
        Step::Finished(Outcome::Completed)
    }

    fn abort(reason: AbortReason) -> Self {
        Step::Finished(Outcome::Aborted(reason))
    }
}

/// Everything a step may read or write
pub struct StepContext<'a> {
    pub list: &'a mut ListStore,
    pub markers: &'a mut Markers,
    pub history: &'a mut OperationHistory,
    pub narration: &'a mut Narration,
    pub step_count: &'a mut usize,
    pub values: &'a mut dyn ValueSource,
}

impl StepContext<'_> {
    pub fn narrate(&mut self, message: impl Into<String>) {
        self.narration.say(message);
    }

    pub fn set_step(&mut self, step: usize) {
        *self.step_count = step;
    }

    pub fn record(&mut self, entry: HistoryEntry) {
        self.history.record(entry);
    }

    /// Remove a slot and remap the list and the markers in one go
    pub fn remove_node(&mut self, index: usize) -> Option<Node> {
        let (node, remap) = self.list.remove_at(index)?;
        self.markers.remap(&remap);
        Some(node)
    }

    /// Resolve the value input of an insert. `None` after narrating an invalid input.
    fn insert_value(&mut self, input: &ValueInput) -> Option<i32> {
        match input {
            ValueInput::Given(value) => Some(*value),
            ValueInput::Random => Some(self.values.next_value()),
            ValueInput::Invalid(text) => {
                self.narrate(format!("'{}' is not a number. Enter an integer value.", text));
                None
            }
        }
    }

    /// Value of a slot for narration, `null` when there is none
    fn value_label(&self, index: Option<usize>) -> String {
        index
            .and_then(|i| self.list.value_of(i))
            .map(|v| v.to_string())
            .unwrap_or_else(|| "null".to_string())
    }

    /// Clear all statuses and leave only the head marker
    fn settle(&mut self) {
        self.list.clear_statuses();
        *self.markers = Markers::with_head(self.list.head());
    }
}

/// A list operation that runs as a sequence of suspensions
pub trait StepOperation: fmt::Debug {
    fn kind(&self) -> OperationKind;

    /// Run the next step
    fn step(&mut self, ctx: &mut StepContext<'_>) -> Step;

    /// Continue after a suspension; `waited` is `false` if it was cancelled
    fn resume(&mut self, ctx: &mut StepContext<'_>, waited: bool) -> Step {
        if !waited {
            return Step::abort(AbortReason::Cancelled);
        }
        self.step(ctx)
    }
}

/// Build the operation for `kind`
pub fn build_operation(kind: OperationKind, params: &OperationParams) -> Box<dyn StepOperation> {
    let value = params.value.clone();
    match kind {
        OperationKind::InsertHead => Box::new(InsertAtHead::new(value)),
        OperationKind::InsertTail => Box::new(InsertAtTail::new(value)),
        OperationKind::InsertPosition => insert::at_position(value, params.position),
        OperationKind::DeleteHead => Box::new(DeleteFromHead::new()),
        OperationKind::DeleteTail => Box::new(DeleteFromTail::new()),
        OperationKind::DeleteByValue => Box::new(DeleteByValue::new(value.given())),
    }
}

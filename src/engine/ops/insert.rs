//! Insertion operations

use super::{Step, StepContext, StepOperation};
use crate::catalog::OperationKind;
use crate::engine::errors::AbortReason;
use crate::engine::params::ValueInput;
use crate::history::HistoryEntry;
use crate::structure::{Link, Markers, NodeStatus, Role};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HeadPhase {
    Create,
    Link,
    Settle,
}

/// Create, link both directions, move the head. Three steps at any length.
#[derive(Debug)]
pub struct InsertAtHead {
    input: ValueInput,
    /// Set when this runs as an insert at position 0
    as_position: bool,
    phase: HeadPhase,
    value: i32,
    new_index: usize,
    old_head: Link,
}

impl InsertAtHead {
    pub fn new(input: ValueInput) -> Self {
        InsertAtHead {
            input,
            as_position: false,
            phase: HeadPhase::Create,
            value: 0,
            new_index: 0,
            old_head: None,
        }
    }

    /// Same steps, recorded as an insert at position 0
    pub fn at_position_zero(input: ValueInput) -> Self {
        InsertAtHead {
            as_position: true,
            ..Self::new(input)
        }
    }
}

impl StepOperation for InsertAtHead {
    fn kind(&self) -> OperationKind {
        if self.as_position {
            OperationKind::InsertPosition
        } else {
            OperationKind::InsertHead
        }
    }

    fn step(&mut self, ctx: &mut StepContext<'_>) -> Step {
        match self.phase {
            HeadPhase::Create => {
                let Some(value) = ctx.insert_value(&self.input) else {
                    return Step::abort(AbortReason::InvalidParameter);
                };
                self.value = value;
                self.old_head = ctx.list.head();
                self.new_index = ctx.list.push_detached(value, NodeStatus::NewNode);

                ctx.set_step(1);
                ctx.narrate(format!("Step 1: Create new node with value {}.", value));
                *ctx.markers =
                    Markers::with_head(self.old_head).and(Role::NewNode, Some(self.new_index));
                self.phase = HeadPhase::Link;
                Step::wait()
            }
            HeadPhase::Link => {
                ctx.set_step(2);
                let old_label = ctx.value_label(self.old_head);
                ctx.narrate(format!(
                    "Step 2: new→next = old head ({}). old head→prev = new.",
                    old_label
                ));
                ctx.list.set_next(self.new_index, self.old_head);
                if let Some(old_head) = self.old_head {
                    ctx.list.set_prev(old_head, Some(self.new_index));
                }
                self.phase = HeadPhase::Settle;
                Step::wait()
            }
            HeadPhase::Settle => {
                ctx.set_step(3);
                ctx.list.set_head(Some(self.new_index));
                ctx.settle();
                if self.as_position {
                    ctx.narrate(format!(
                        "Step 3: Update head pointer to new node ({}). Inserted at position 0. Done!",
                        self.value
                    ));
                    ctx.record(HistoryEntry::new(OperationKind::InsertPosition, self.value).at(0));
                } else {
                    ctx.narrate(format!(
                        "Step 3: Update head pointer to new node ({}). new→prev = null. Done!",
                        self.value
                    ));
                    ctx.record(HistoryEntry::new(OperationKind::InsertHead, self.value));
                }
                Step::done()
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TailPhase {
    Create,
    Advance,
    Settle,
}

/// Walk to the tail one hop per step, then link the new node after it
#[derive(Debug)]
pub struct InsertAtTail {
    input: ValueInput,
    phase: TailPhase,
    value: i32,
    new_index: usize,
    cursor: usize,
    step: usize,
}

impl InsertAtTail {
    pub fn new(input: ValueInput) -> Self {
        InsertAtTail {
            input,
            phase: TailPhase::Create,
            value: 0,
            new_index: 0,
            cursor: 0,
            step: 0,
        }
    }

    /// Suspend on the cursor if it has a successor, otherwise link to it
    fn walk(&mut self, ctx: &mut StepContext<'_>) -> Step {
        let head = ctx.list.head();
        let (cursor, new_index) = (self.cursor, self.new_index);
        self.step += 1;
        ctx.set_step(self.step);

        if ctx.list.next_of(cursor).is_some() {
            ctx.list.paint(|i| match i {
                i if i == cursor => NodeStatus::Current,
                i if i == new_index => NodeStatus::NewNode,
                _ => NodeStatus::Default,
            });
            *ctx.markers = Markers::with_head(head)
                .and(Role::Current, Some(cursor))
                .and(Role::NewNode, Some(new_index));
            let label = ctx.value_label(Some(cursor));
            ctx.narrate(format!("Traversing: at node {}...", label));
            self.phase = TailPhase::Advance;
            return Step::wait();
        }

        let label = ctx.value_label(Some(cursor));
        ctx.narrate(format!(
            "Found tail ({}). Linking: tail→next = new, new→prev = tail.",
            label
        ));
        ctx.list.paint(|i| match i {
            i if i == cursor => NodeStatus::Highlight,
            i if i == new_index => NodeStatus::NewNode,
            _ => NodeStatus::Default,
        });
        *ctx.markers = Markers::with_head(head)
            .and(Role::Current, Some(cursor))
            .and(Role::NewNode, Some(new_index));
        ctx.list.set_next(cursor, Some(new_index));
        ctx.list.set_prev(new_index, Some(cursor));
        self.phase = TailPhase::Settle;
        Step::wait()
    }
}

impl StepOperation for InsertAtTail {
    fn kind(&self) -> OperationKind {
        OperationKind::InsertTail
    }

    fn step(&mut self, ctx: &mut StepContext<'_>) -> Step {
        match self.phase {
            TailPhase::Create => {
                let Some(value) = ctx.insert_value(&self.input) else {
                    return Step::abort(AbortReason::InvalidParameter);
                };
                self.value = value;

                let Some(head) = ctx.list.head() else {
                    let index = ctx.list.push_detached(value, NodeStatus::Default);
                    ctx.list.set_head(Some(index));
                    *ctx.markers = Markers::with_head(Some(index));
                    ctx.narrate(format!("Empty list. {} becomes the only node. Done!", value));
                    ctx.record(HistoryEntry::new(OperationKind::InsertTail, value));
                    return Step::done();
                };

                self.new_index = ctx.list.push_detached(value, NodeStatus::NewNode);
                self.cursor = head;
                self.step = 1;
                ctx.set_step(1);
                ctx.narrate(format!("Created new node ({}). Traversing to tail...", value));
                self.walk(ctx)
            }
            TailPhase::Advance => {
                if let Some(next) = ctx.list.next_of(self.cursor) {
                    self.cursor = next;
                }
                self.walk(ctx)
            }
            TailPhase::Settle => {
                ctx.settle();
                ctx.narrate(format!("Inserted {} at tail. Done!", self.value));
                ctx.record(HistoryEntry::new(OperationKind::InsertTail, self.value));
                Step::done()
            }
        }
    }
}

/// An insert at `position`; position 0 runs the head insert
pub fn at_position(input: ValueInput, position: usize) -> Box<dyn StepOperation> {
    if position == 0 {
        Box::new(InsertAtHead::at_position_zero(input))
    } else {
        Box::new(InsertAtPosition::new(input, position))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PositionPhase {
    Start,
    Advance,
    Settle,
}

/// Walk `position - 1` hops, then splice the new node in with four link updates
///
/// The node is only created once the predecessor is reached, so an
/// out-of-bounds position leaves the list untouched.
#[derive(Debug)]
pub struct InsertAtPosition {
    input: ValueInput,
    position: usize,
    phase: PositionPhase,
    value: i32,
    cursor: Link,
    hops: usize,
}

impl InsertAtPosition {
    /// `position` must be at least 1; use [`at_position`] for the general case
    pub fn new(input: ValueInput, position: usize) -> Self {
        InsertAtPosition {
            input,
            position: position.max(1),
            phase: PositionPhase::Start,
            value: 0,
            cursor: None,
            hops: 0,
        }
    }

    fn walk(&mut self, ctx: &mut StepContext<'_>) -> Step {
        let head = ctx.list.head();

        if let Some(cursor) = self.cursor {
            if self.hops < self.position - 1 {
                ctx.set_step(self.hops + 1);
                ctx.list.paint(|i| {
                    if i == cursor {
                        NodeStatus::Current
                    } else {
                        NodeStatus::Default
                    }
                });
                *ctx.markers = Markers::with_head(head).and(Role::Current, Some(cursor));
                let label = ctx.value_label(Some(cursor));
                ctx.narrate(format!(
                    "Traversing to position {}: at node {} (step {}).",
                    self.position - 1,
                    label,
                    self.hops + 1
                ));
                self.phase = PositionPhase::Advance;
                return Step::wait();
            }
        }

        let Some(cursor) = self.cursor else {
            ctx.narrate(format!(
                "Position {} is out of bounds. Operation cancelled.",
                self.position
            ));
            return Step::abort(AbortReason::OutOfBounds);
        };

        let successor = ctx.list.next_of(cursor);
        let new_index = ctx.list.push_detached(self.value, NodeStatus::NewNode);
        ctx.list.paint(|i| match i {
            i if i == new_index => NodeStatus::NewNode,
            i if i == cursor || Some(i) == successor => NodeStatus::Highlight,
            _ => NodeStatus::Default,
        });
        ctx.list.set_next(cursor, Some(new_index));
        ctx.list.set_prev(new_index, Some(cursor));
        ctx.list.set_next(new_index, successor);
        if let Some(successor) = successor {
            ctx.list.set_prev(successor, Some(new_index));
        }
        *ctx.markers = Markers::with_head(head)
            .and(Role::Current, Some(cursor))
            .and(Role::NewNode, Some(new_index));
        ctx.narrate(
            "Wiring 4 pointers: prev→next=new, new→prev=prev, new→next=next, next→prev=new.",
        );
        self.phase = PositionPhase::Settle;
        Step::wait()
    }
}

impl StepOperation for InsertAtPosition {
    fn kind(&self) -> OperationKind {
        OperationKind::InsertPosition
    }

    fn step(&mut self, ctx: &mut StepContext<'_>) -> Step {
        match self.phase {
            PositionPhase::Start => {
                let Some(value) = ctx.insert_value(&self.input) else {
                    return Step::abort(AbortReason::InvalidParameter);
                };
                self.value = value;
                self.cursor = ctx.list.head();
                self.walk(ctx)
            }
            PositionPhase::Advance => {
                self.cursor = self.cursor.and_then(|c| ctx.list.next_of(c));
                self.hops += 1;
                self.walk(ctx)
            }
            PositionPhase::Settle => {
                ctx.settle();
                ctx.narrate(format!(
                    "Inserted {} at position {}. 4 pointer updates complete! Done!",
                    self.value, self.position
                ));
                ctx.record(
                    HistoryEntry::new(OperationKind::InsertPosition, self.value).at(self.position),
                );
                Step::done()
            }
        }
    }
}

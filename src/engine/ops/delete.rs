//! Deletion operations
//!
//! All three end with [`StepContext::remove_node`], which drops the slot and
//! re-indexes every link and marker after it. Whatever the removal leaves
//! dangling is fixed up explicitly before the list settles.

use super::{Delay, Step, StepContext, StepOperation};
use crate::catalog::OperationKind;
use crate::engine::errors::AbortReason;
use crate::history::HistoryEntry;
use crate::structure::{Link, Markers, NodeStatus, Remap, Role};

const EMPTY_LIST: &str = "List is empty. Nothing to delete.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HeadPhase {
    Target,
    FadeOut,
    Remove,
}

/// Target the head, fade it, move the head to its successor
#[derive(Debug)]
pub struct DeleteFromHead {
    phase: HeadPhase,
    head: usize,
    value: i32,
    new_head: Link,
}

impl DeleteFromHead {
    pub fn new() -> Self {
        DeleteFromHead {
            phase: HeadPhase::Target,
            head: 0,
            value: 0,
            new_head: None,
        }
    }
}

impl Default for DeleteFromHead {
    fn default() -> Self {
        Self::new()
    }
}

impl StepOperation for DeleteFromHead {
    fn kind(&self) -> OperationKind {
        OperationKind::DeleteHead
    }

    fn step(&mut self, ctx: &mut StepContext<'_>) -> Step {
        match self.phase {
            HeadPhase::Target => {
                let Some(head) = ctx.list.head() else {
                    ctx.narrate(EMPTY_LIST);
                    return Step::done();
                };
                self.head = head;
                self.value = ctx.list.value_of(head).unwrap_or_default();

                ctx.set_step(1);
                ctx.narrate(format!(
                    "Step 1: Target head node ({}) for deletion.",
                    self.value
                ));
                ctx.list.paint(|i| {
                    if i == head {
                        NodeStatus::Target
                    } else {
                        NodeStatus::Default
                    }
                });
                *ctx.markers = Markers::with_head(Some(head)).and(Role::Target, Some(head));
                self.phase = HeadPhase::FadeOut;
                Step::wait()
            }
            HeadPhase::FadeOut => {
                let head = self.head;
                let new_head = ctx.list.next_of(head);
                self.new_head = new_head;

                ctx.set_step(2);
                let label = ctx.value_label(new_head);
                ctx.narrate(format!(
                    "Step 2: Move head to next node ({}). Clear new head's prev pointer.",
                    label
                ));
                ctx.list.paint(|i| match i {
                    i if i == head => NodeStatus::FadeOut,
                    i if Some(i) == new_head => NodeStatus::Highlight,
                    _ => NodeStatus::Default,
                });
                self.phase = HeadPhase::Remove;
                Step::wait()
            }
            HeadPhase::Remove => {
                remove_head(ctx, self.head, self.new_head);
                ctx.settle();
                ctx.narrate(format!(
                    "Deleted head ({}). New head→prev = null. Done!",
                    self.value
                ));
                ctx.record(HistoryEntry::new(OperationKind::DeleteHead, self.value));
                Step::done()
            }
        }
    }
}

/// Remove the head slot and promote `successor`
fn remove_head(ctx: &mut StepContext<'_>, head: usize, successor: Link) {
    let remap = Remap::new(head);
    ctx.remove_node(head);
    let new_head = remap.apply(successor);
    // a head never has a predecessor
    if let Some(h) = new_head {
        ctx.list.set_prev(h, None);
    }
    ctx.list.set_head(new_head);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TailPhase {
    Start,
    ClearSingle,
    Advance,
    FadeOut,
    Remove,
}

/// Walk to the second-to-last node, then remove the tail after it
#[derive(Debug)]
pub struct DeleteFromTail {
    phase: TailPhase,
    /// Node the next walk step visits
    cursor: usize,
    /// Successor of `cursor` while walking, the node to remove afterwards
    tail: usize,
    value: i32,
    step: usize,
}

impl DeleteFromTail {
    pub fn new() -> Self {
        DeleteFromTail {
            phase: TailPhase::Start,
            cursor: 0,
            tail: 0,
            value: 0,
            step: 0,
        }
    }

    /// Visit `cursor`, whose successor is `next`
    fn walk(&mut self, ctx: &mut StepContext<'_>, cursor: usize, next: usize) -> Step {
        let head = ctx.list.head();
        if let Some(after) = ctx.list.next_of(next) {
            self.step += 1;
            ctx.set_step(self.step);
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
                "Traversing: at {}. Looking for second-to-last.",
                label
            ));
            self.cursor = next;
            self.tail = after;
            self.phase = TailPhase::Advance;
            return Step::wait();
        }

        let tail = next;
        self.step += 1;
        ctx.set_step(self.step);
        self.tail = tail;
        self.value = ctx.list.value_of(tail).unwrap_or_default();
        let label = ctx.value_label(Some(cursor));
        ctx.narrate(format!(
            "Found second-to-last: {}. Removing tail ({}) using prev pointer.",
            label, self.value
        ));
        ctx.list.paint(|i| match i {
            i if i == tail => NodeStatus::Target,
            i if i == cursor => NodeStatus::Highlight,
            _ => NodeStatus::Default,
        });
        *ctx.markers = Markers::with_head(head)
            .and(Role::Current, Some(cursor))
            .and(Role::Target, Some(tail));
        self.phase = TailPhase::FadeOut;
        Step::wait()
    }
}

impl Default for DeleteFromTail {
    fn default() -> Self {
        Self::new()
    }
}

impl StepOperation for DeleteFromTail {
    fn kind(&self) -> OperationKind {
        OperationKind::DeleteTail
    }

    fn step(&mut self, ctx: &mut StepContext<'_>) -> Step {
        match self.phase {
            TailPhase::Start => {
                let Some(head) = ctx.list.head() else {
                    ctx.narrate(EMPTY_LIST);
                    return Step::done();
                };

                let Some(next) = ctx.list.next_of(head) else {
                    self.value = ctx.list.value_of(head).unwrap_or_default();
                    ctx.set_step(1);
                    ctx.narrate(format!(
                        "Only one node ({}). Marking for deletion...",
                        self.value
                    ));
                    ctx.list.paint(|i| {
                        if i == head {
                            NodeStatus::FadeOut
                        } else {
                            NodeStatus::Default
                        }
                    });
                    self.phase = TailPhase::ClearSingle;
                    return Step::wait();
                };

                self.walk(ctx, head, next)
            }
            TailPhase::ClearSingle => {
                ctx.list.clear();
                *ctx.markers = Markers::empty();
                ctx.narrate(format!(
                    "Deleted tail ({}). List is now empty. Done!",
                    self.value
                ));
                ctx.record(HistoryEntry::new(OperationKind::DeleteTail, self.value));
                Step::done()
            }
            TailPhase::Advance => self.walk(ctx, self.cursor, self.tail),
            TailPhase::FadeOut => {
                let tail = self.tail;
                ctx.list.paint(|i| {
                    if i == tail {
                        NodeStatus::FadeOut
                    } else {
                        NodeStatus::Default
                    }
                });
                self.phase = TailPhase::Remove;
                Step::Suspend(Delay::FadeOut)
            }
            TailPhase::Remove => {
                ctx.remove_node(self.tail);
                ctx.settle();
                ctx.narrate(format!(
                    "Deleted tail ({}). Used the prev pointer, no second traversal pointer needed. Done!",
                    self.value
                ));
                ctx.record(HistoryEntry::new(OperationKind::DeleteTail, self.value));
                Step::done()
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValuePhase {
    Start,
    HeadFadeOut,
    HeadRemove,
    Advance,
    FadeOut,
    Remove,
}

/// Search from the head and bypass the first node holding the target
///
/// A miss is not an error: the run completes with a "not found" narration.
#[derive(Debug)]
pub struct DeleteByValue {
    target: Option<i32>,
    phase: ValuePhase,
    cursor: Link,
    step: usize,
}

impl DeleteByValue {
    pub fn new(target: Option<i32>) -> Self {
        DeleteByValue {
            target,
            phase: ValuePhase::Start,
            cursor: None,
            step: 0,
        }
    }

    /// Look at the node under the cursor
    fn examine(&mut self, ctx: &mut StepContext<'_>, target: i32) -> Step {
        let head = ctx.list.head();
        let Some(cursor) = self.cursor else {
            ctx.settle();
            ctx.narrate(format!("Value {} not found in the list.", target));
            return Step::done();
        };

        self.step += 1;
        ctx.set_step(self.step);

        if ctx.list.value_of(cursor) == Some(target) {
            ctx.narrate(format!(
                "Found {}! Using curr→prev, no second pointer needed.",
                target
            ));
            ctx.list.paint(|i| {
                if i == cursor {
                    NodeStatus::Target
                } else {
                    NodeStatus::Default
                }
            });
            *ctx.markers = Markers::with_head(head).and(Role::Target, Some(cursor));
            self.phase = ValuePhase::FadeOut;
            return Step::wait();
        }

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
            "Checking node {}... not {}. Moving forward.",
            label, target
        ));
        self.phase = ValuePhase::Advance;
        Step::wait()
    }

    fn fade(ctx: &mut StepContext<'_>, index: usize) {
        ctx.list.paint(|i| {
            if i == index {
                NodeStatus::FadeOut
            } else {
                NodeStatus::Default
            }
        });
    }
}

impl StepOperation for DeleteByValue {
    fn kind(&self) -> OperationKind {
        OperationKind::DeleteByValue
    }

    fn step(&mut self, ctx: &mut StepContext<'_>) -> Step {
        let Some(target) = self.target else {
            ctx.narrate("Please enter a value to delete.");
            return Step::abort(AbortReason::InvalidParameter);
        };

        match self.phase {
            ValuePhase::Start => {
                let Some(head) = ctx.list.head() else {
                    ctx.narrate(EMPTY_LIST);
                    return Step::done();
                };
                self.cursor = Some(head);
                self.step = 1;
                ctx.set_step(1);

                if ctx.list.value_of(head) == Some(target) {
                    ctx.narrate(format!(
                        "Head node matches target {}! Removing head...",
                        target
                    ));
                    ctx.list.paint(|i| {
                        if i == head {
                            NodeStatus::Target
                        } else {
                            NodeStatus::Default
                        }
                    });
                    *ctx.markers = Markers::with_head(Some(head)).and(Role::Target, Some(head));
                    self.phase = ValuePhase::HeadFadeOut;
                    return Step::wait();
                }

                ctx.list.paint(|i| {
                    if i == head {
                        NodeStatus::Current
                    } else {
                        NodeStatus::Default
                    }
                });
                *ctx.markers = Markers::with_head(Some(head)).and(Role::Current, Some(head));
                let label = ctx.value_label(Some(head));
                ctx.narrate(format!(
                    "Searching for {}. Checking head ({})... not a match.",
                    target, label
                ));
                self.phase = ValuePhase::Advance;
                Step::wait()
            }
            ValuePhase::HeadFadeOut => {
                if let Some(head) = self.cursor {
                    Self::fade(ctx, head);
                }
                self.phase = ValuePhase::HeadRemove;
                Step::wait()
            }
            ValuePhase::HeadRemove => {
                if let Some(head) = self.cursor {
                    let successor = ctx.list.next_of(head);
                    remove_head(ctx, head, successor);
                }
                ctx.settle();
                ctx.narrate(format!("Deleted {} (was head). Done!", target));
                ctx.record(HistoryEntry::new(OperationKind::DeleteByValue, target));
                Step::done()
            }
            ValuePhase::Advance => {
                self.cursor = self.cursor.and_then(|c| ctx.list.next_of(c));
                self.examine(ctx, target)
            }
            ValuePhase::FadeOut => {
                if let Some(found) = self.cursor {
                    Self::fade(ctx, found);
                }
                self.phase = ValuePhase::Remove;
                Step::wait()
            }
            ValuePhase::Remove => {
                if let Some(found) = self.cursor {
                    ctx.list.unlink(found);
                    ctx.remove_node(found);
                }
                ctx.settle();
                ctx.narrate(format!(
                    "Deleted {}. Used curr→prev for an O(1) bypass. Done!",
                    target
                ));
                ctx.record(HistoryEntry::new(OperationKind::DeleteByValue, target));
                Step::done()
            }
        }
    }
}

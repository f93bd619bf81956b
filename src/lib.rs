//! # Introduction
//!
//! dllviz animates the classic doubly linked list operations step by step.
//! Every operation runs as a sequence of small mutations separated by
//! suspensions, so the half-linked states in between can be watched in a
//! terminal UI built with [ratatui](https://docs.rs/ratatui), or printed by
//! the headless runner.
//!
//! ## Pipeline
//!
//! ```text
//! RunController ─start─▶ StepOperation ─step─▶ ListStore + Markers + Narration
//!       ▲                      │
//!       └──── tick(dt) ◀── Suspend(delay)
//! ```
//!
//! 1. [`structure`]: the index-addressed list, its role markers, value sources.
//! 2. [`engine`]: the six operations as resumable state machines, the
//!    cooperative scheduler and the [`engine::RunController`].
//! 3. [`history`]: log of completed operations.
//! 4. [`catalog`]: operation metadata and code snippets with export.
//! 5. [`config`]: list size, speed and seed.
//! 6. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Operations
//!
//! Insert at head, at tail and at a position; delete from head, from tail
//! and by value.

pub mod catalog;
pub mod config;
pub mod engine;
pub mod history;
pub mod structure;
pub mod ui;

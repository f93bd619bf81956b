//! Operation history
//!
//! An append-only log of completed operations. Entries are never edited
//! after they are recorded; the UI shows them newest first. The log is owned
//! by the run controller and is only cleared when a new list is generated.

use crate::catalog::OperationKind;
use std::fmt;

/// One completed operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub kind: OperationKind,
    pub value: i32,
    /// Set for position inserts only
    pub position: Option<usize>,
}

impl HistoryEntry {
    pub fn new(kind: OperationKind, value: i32) -> Self {
        HistoryEntry {
            kind,
            value,
            position: None,
        }
    }

    pub fn at(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.kind.is_insertion() { '+' } else { '-' };
        write!(f, "{} {}  val: {}", sign, self.kind.title(), self.value)?;
        if let Some(position) = self.position {
            write!(f, " @ pos {}", position)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct OperationHistory {
    entries: Vec<HistoryEntry>,
}

impl OperationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, entry: HistoryEntry) {
        tracing::info!(operation = %entry.kind, value = entry.value, position = ?entry.position, "recorded operation");
        self.entries.push(entry);
    }

    /// Entries, oldest first
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn newest_first(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

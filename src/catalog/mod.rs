//! Operation catalog
//!
//! Names, descriptions and complexity figures for the six list operations,
//! plus the multi-language snippet lookup in [`snippets`]. None of this
//! affects how an operation runs; it is what the UI shows next to the list.

pub mod snippets;

use crate::engine::errors::SimError;
use std::fmt;
use std::str::FromStr;

pub use snippets::{BuiltinSnippets, Language, SnippetBank};

/// The six operations the visualizer animates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OperationKind {
    #[default]
    InsertHead,
    InsertTail,
    InsertPosition,
    DeleteHead,
    DeleteTail,
    DeleteByValue,
}

/// Whether an operation grows or shrinks the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Insertion,
    Deletion,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Insertion => "Insertion",
            Category::Deletion => "Deletion",
        }
    }
}

/// Static description of an operation
#[derive(Debug)]
pub struct OperationInfo {
    pub title: &'static str,
    pub description: &'static str,
    pub time_complexity: &'static str,
    pub space_complexity: &'static str,
    pub category: Category,
    pub learner_tip: &'static str,
}

const INSERT_HEAD: OperationInfo = OperationInfo {
    title: "Insert at Head",
    description: "Create a new node. Set new→next = head, head→prev = new. Update head pointer. Both directions are linked!",
    time_complexity: "O(1)",
    space_complexity: "O(1)",
    category: Category::Insertion,
    learner_tip: "A doubly linked list can be walked in both directions. Inserting at the head is O(1): only new→next and old head→prev change.",
};

const INSERT_TAIL: OperationInfo = OperationInfo {
    title: "Insert at Tail",
    description: "Traverse to the last node. Set tail→next = new, new→prev = tail. The new node becomes the tail.",
    time_complexity: "O(n)",
    space_complexity: "O(1)",
    category: Category::Insertion,
    learner_tip: "With a dedicated tail pointer this becomes O(1). Watch how two pointers are linked during the animation.",
};

const INSERT_POSITION: OperationInfo = OperationInfo {
    title: "Insert at Position",
    description: "Traverse to pos−1. Wire: prev→next = new, new→prev = prev, new→next = next, next→prev = new. Four pointer updates!",
    time_complexity: "O(n)",
    space_complexity: "O(1)",
    category: Category::Insertion,
    learner_tip: "Insertion at a position needs four pointer updates (two in a singly linked list) because of the extra prev link.",
};

const DELETE_HEAD: OperationInfo = OperationInfo {
    title: "Delete from Head",
    description: "Move head to head→next. Set new head's prev = null. O(1), no traversal needed.",
    time_complexity: "O(1)",
    space_complexity: "O(1)",
    category: Category::Deletion,
    learner_tip: "Remember to null out the new head's prev pointer, or it keeps pointing at the deleted node.",
};

const DELETE_TAIL: OperationInfo = OperationInfo {
    title: "Delete from Tail",
    description: "Traverse to the tail. Use tail→prev to reach the second-to-last node, then set its next = null.",
    time_complexity: "O(n)",
    space_complexity: "O(1)",
    category: Category::Deletion,
    learner_tip: "Simpler than in a singly linked list: tail→prev reaches the second-to-last node directly.",
};

const DELETE_BY_VALUE: OperationInfo = OperationInfo {
    title: "Delete by Value",
    description: "Search for the target. Bypass: prev→next = curr→next, next→prev = curr→prev.",
    time_complexity: "O(n)",
    space_complexity: "O(1)",
    category: Category::Deletion,
    learner_tip: "Only one traversal pointer is needed because curr→prev gives the previous node directly.",
};

impl OperationKind {
    pub const ALL: [OperationKind; 6] = [
        OperationKind::InsertHead,
        OperationKind::InsertTail,
        OperationKind::InsertPosition,
        OperationKind::DeleteHead,
        OperationKind::DeleteTail,
        OperationKind::DeleteByValue,
    ];

    pub fn info(self) -> &'static OperationInfo {
        match self {
            OperationKind::InsertHead => &INSERT_HEAD,
            OperationKind::InsertTail => &INSERT_TAIL,
            OperationKind::InsertPosition => &INSERT_POSITION,
            OperationKind::DeleteHead => &DELETE_HEAD,
            OperationKind::DeleteTail => &DELETE_TAIL,
            OperationKind::DeleteByValue => &DELETE_BY_VALUE,
        }
    }

    pub fn title(self) -> &'static str {
        self.info().title
    }

    /// Command-line name, e.g. `insert-head`
    pub fn key(self) -> &'static str {
        match self {
            OperationKind::InsertHead => "insert-head",
            OperationKind::InsertTail => "insert-tail",
            OperationKind::InsertPosition => "insert-position",
            OperationKind::DeleteHead => "delete-head",
            OperationKind::DeleteTail => "delete-tail",
            OperationKind::DeleteByValue => "delete-value",
        }
    }

    pub fn is_insertion(self) -> bool {
        self.info().category == Category::Insertion
    }

    /// Operations that read the value input
    pub fn needs_value(self) -> bool {
        matches!(
            self,
            OperationKind::InsertHead
                | OperationKind::InsertTail
                | OperationKind::InsertPosition
                | OperationKind::DeleteByValue
        )
    }

    pub fn needs_position(self) -> bool {
        self == OperationKind::InsertPosition
    }

    /// Next operation in menu order, wrapping
    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|k| *k == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    /// Previous operation in menu order, wrapping
    pub fn prev(self) -> Self {
        let i = Self::ALL.iter().position(|k| *k == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for OperationKind {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        OperationKind::ALL
            .into_iter()
            .find(|kind| kind.key() == wanted)
            .ok_or_else(|| SimError::UnknownOperation(s.to_string()))
    }
}

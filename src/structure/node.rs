//! List node representation

use std::fmt;

/// Stable identity of a node. Unlike its index, it survives removals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// Presentational state of a node during an animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeStatus {
    #[default]
    Default,
    Current,
    Highlight,
    NewNode,
    Target,
    FadeOut,
    Done,
    Prev,
}

impl NodeStatus {
    pub fn name(self) -> &'static str {
        match self {
            NodeStatus::Default => "default",
            NodeStatus::Current => "current",
            NodeStatus::Highlight => "highlight",
            NodeStatus::NewNode => "new",
            NodeStatus::Target => "target",
            NodeStatus::FadeOut => "fade-out",
            NodeStatus::Done => "done",
            NodeStatus::Prev => "prev",
        }
    }
}

/// A single data-holding slot of the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: NodeId,
    pub value: i32,
    pub status: NodeStatus,
}

impl Node {
    pub fn new(id: NodeId, value: i32) -> Self {
        Node {
            id,
            value,
            status: NodeStatus::Default,
        }
    }
}

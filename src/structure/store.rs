//! Index-addressed doubly linked list storage
//!
//! [`ListStore`] keeps the list as four parallel pieces of state:
//! - `nodes`: the node slots, `0..n`
//! - `next_links[i]`: successor of slot `i`, `None` for the tail
//! - `prev_links[i]`: predecessor of slot `i`, `None` for the head
//! - `head`: first slot of the list, `None` when empty
//!
//! The store never enforces bidirectional consistency on its own: the
//! operation algorithms deliberately set one direction of a link before the
//! other so the intermediate state can be shown. [`ListStore::validate`]
//! checks the invariants that must hold once an operation has completed.

use super::node::{Node, NodeId, NodeStatus};
use super::values::ValueSource;
use rustc_hash::FxHashSet;

/// A link to another slot, or `None`
pub type Link = Option<usize>;

/// Index translation applied after a slot has been removed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Remap {
    removed: usize,
}

impl Remap {
    pub fn new(removed: usize) -> Self {
        Remap { removed }
    }

    /// The slot that was removed
    pub fn removed(&self) -> usize {
        self.removed
    }

    /// Translate a link that referred to the pre-removal layout
    pub fn apply(&self, link: Link) -> Link {
        match link {
            Some(i) if i == self.removed => None,
            Some(i) if i > self.removed => Some(i - 1),
            other => other,
        }
    }
}

/// The canonical list representation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListStore {
    nodes: Vec<Node>,
    next_links: Vec<Link>,
    prev_links: Vec<Link>,
    head: Link,
    next_id: u64,
}

impl ListStore {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a linear chain from explicit values, head at slot 0
    pub fn from_values(values: &[i32]) -> Self {
        let mut store = ListStore::new();
        store.build_chain(values.iter().copied());
        store
    }

    /// Replace the whole store with a fresh chain of `size` generated values
    pub fn initialize<V: ValueSource + ?Sized>(&mut self, size: usize, values: &mut V) {
        let generated: Vec<i32> = (0..size).map(|_| values.next_value()).collect();
        self.build_chain(generated);
    }

    fn build_chain<I: IntoIterator<Item = i32>>(&mut self, values: I) {
        self.nodes.clear();
        for value in values {
            let id = self.allocate_id();
            self.nodes.push(Node::new(id, value));
        }
        let size = self.nodes.len();
        self.next_links = (0..size)
            .map(|i| if i + 1 < size { Some(i + 1) } else { None })
            .collect();
        self.prev_links = (0..size).map(|i| i.checked_sub(1)).collect();
        self.head = if size > 0 { Some(0) } else { None };
    }

    fn allocate_id(&mut self) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    pub fn next_links(&self) -> &[Link] {
        &self.next_links
    }

    pub fn prev_links(&self) -> &[Link] {
        &self.prev_links
    }

    pub fn head(&self) -> Link {
        self.head
    }

    pub fn set_head(&mut self, head: Link) {
        self.head = head;
    }

    /// Successor of `index`; `None` for the tail or an unknown slot
    pub fn next_of(&self, index: usize) -> Link {
        self.next_links.get(index).copied().flatten()
    }

    /// Predecessor of `index`; `None` for the head or an unknown slot
    pub fn prev_of(&self, index: usize) -> Link {
        self.prev_links.get(index).copied().flatten()
    }

    pub fn value_of(&self, index: usize) -> Option<i32> {
        self.nodes.get(index).map(|n| n.value)
    }

    pub fn set_next(&mut self, index: usize, link: Link) {
        if let Some(slot) = self.next_links.get_mut(index) {
            *slot = link;
        }
    }

    pub fn set_prev(&mut self, index: usize, link: Link) {
        if let Some(slot) = self.prev_links.get_mut(index) {
            *slot = link;
        }
    }

    /// Append a node with no links. Returns its slot.
    pub fn push_detached(&mut self, value: i32, status: NodeStatus) -> usize {
        let id = self.allocate_id();
        let mut node = Node::new(id, value);
        node.status = status;
        self.nodes.push(node);
        self.next_links.push(None);
        self.prev_links.push(None);
        self.nodes.len() - 1
    }

    pub fn set_status(&mut self, index: usize, status: NodeStatus) {
        if let Some(node) = self.nodes.get_mut(index) {
            node.status = status;
        }
    }

    /// Recolor every node from its slot
    pub fn paint<F: Fn(usize) -> NodeStatus>(&mut self, status_of: F) {
        for (i, node) in self.nodes.iter_mut().enumerate() {
            node.status = status_of(i);
        }
    }

    pub fn clear_statuses(&mut self) {
        self.paint(|_| NodeStatus::Default);
    }

    /// Drop every node and link
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.next_links.clear();
        self.prev_links.clear();
        self.head = None;
    }

    /// Bypass `index`: its neighbours are linked to each other.
    ///
    /// The node keeps its own links until it is removed.
    pub fn unlink(&mut self, index: usize) {
        let prev = self.prev_of(index);
        let next = self.next_of(index);
        if let Some(p) = prev {
            self.set_next(p, next);
        }
        if let Some(n) = next {
            self.set_prev(n, prev);
        }
    }

    /// Remove the node at `index` and re-index everything after it.
    ///
    /// Every link and the head go through the returned [`Remap`] in the same
    /// call; links that pointed at the removed slot become `None`. Callers
    /// holding other indices (markers) must apply the same remap.
    pub fn remove_at(&mut self, index: usize) -> Option<(Node, Remap)> {
        if index >= self.nodes.len() {
            return None;
        }
        let remap = Remap::new(index);
        let node = self.nodes.remove(index);
        self.next_links.remove(index);
        self.prev_links.remove(index);
        for link in self.next_links.iter_mut().chain(self.prev_links.iter_mut()) {
            *link = remap.apply(*link);
        }
        self.head = remap.apply(self.head);
        Some((node, remap))
    }

    /// Slots in list order, following `next_links` from the head
    pub fn traverse_forward(&self) -> Traversal<'_> {
        Traversal {
            next_links: &self.next_links,
            cursor: self.head,
            visited: FxHashSet::default(),
        }
    }

    /// Values in list order
    pub fn values_in_order(&self) -> Vec<i32> {
        self.traverse_forward()
            .filter_map(|i| self.value_of(i))
            .collect()
    }

    /// Last slot reachable from the head
    pub fn tail(&self) -> Link {
        self.traverse_forward().last()
    }

    /// Check the invariants that hold between operations
    pub fn validate(&self) -> Result<(), String> {
        let n = self.nodes.len();
        if self.next_links.len() != n || self.prev_links.len() != n {
            return Err(format!(
                "Link arrays out of step: {} nodes, {} next links, {} prev links",
                n,
                self.next_links.len(),
                self.prev_links.len()
            ));
        }
        match self.head {
            None if n > 0 => return Err(format!("Head is none but {} nodes exist", n)),
            Some(h) if h >= n => return Err(format!("Head {} is out of range ({} nodes)", h, n)),
            Some(h) if self.prev_links[h].is_some() => {
                return Err(format!("Head {} has a prev link", h));
            }
            _ => {}
        }

        let mut visited = FxHashSet::default();
        let mut cursor = self.head;
        while let Some(i) = cursor {
            if !visited.insert(i) {
                return Err(format!("Cycle detected at slot {}", i));
            }
            let next = self.next_links[i];
            if let Some(j) = next {
                if j >= n {
                    return Err(format!("Slot {} links to missing slot {}", i, j));
                }
                if self.prev_links[j] != Some(i) {
                    return Err(format!(
                        "Slot {} links forward to {} but {} links back to {:?}",
                        i, j, j, self.prev_links[j]
                    ));
                }
            }
            cursor = next;
        }
        if visited.len() != n {
            return Err(format!(
                "{} of {} nodes are not reachable from the head",
                n - visited.len(),
                n
            ));
        }
        Ok(())
    }

    /// Render the list the way the snippets print it
    pub fn describe(&self) -> String {
        let parts: Vec<String> = self
            .values_in_order()
            .iter()
            .map(|v| v.to_string())
            .collect();
        if parts.is_empty() {
            "null".to_string()
        } else {
            format!("null <-> {} <-> null", parts.join(" <-> "))
        }
    }
}

/// Lazy walk over the list order with a cycle guard
///
/// Stops at the first `None` link, at an out-of-range slot, or when a slot
/// comes round a second time.
pub struct Traversal<'a> {
    next_links: &'a [Link],
    cursor: Link,
    visited: FxHashSet<usize>,
}

impl Iterator for Traversal<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let index = self.cursor?;
        if index >= self.next_links.len() || !self.visited.insert(index) {
            self.cursor = None;
            return None;
        }
        self.cursor = self.next_links[index];
        Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_traversal_stops_on_cycle() {
        let mut list = ListStore::from_values(&[1, 2, 3]);
        list.set_next(2, Some(0));
        assert_eq!(list.traverse_forward().collect::<Vec<_>>(), vec![0, 1, 2]);
        assert!(list.validate().is_err());
    }

    #[test]
    fn test_traversal_stops_on_dangling_link() {
        let mut list = ListStore::from_values(&[1, 2]);
        list.next_links[1] = Some(7);
        assert_eq!(list.values_in_order(), vec![1, 2]);
    }

    #[test]
    fn test_validate_reports_half_linked_node() {
        let mut list = ListStore::from_values(&[1, 2]);
        let new = list.push_detached(3, NodeStatus::NewNode);
        assert!(list.validate().is_err());

        list.set_next(1, Some(new));
        assert!(list.validate().is_err());

        list.set_prev(new, Some(1));
        assert_eq!(list.validate(), Ok(()));
    }

    #[test]
    fn test_unlink_then_remove_keeps_chain() {
        let mut list = ListStore::from_values(&[1, 2, 3]);
        list.unlink(1);
        assert_eq!(list.values_in_order(), vec![1, 3]);

        list.remove_at(1);
        assert_eq!(list.values_in_order(), vec![1, 3]);
        assert_eq!(list.validate(), Ok(()));
    }

    #[test]
    fn test_remove_without_unlink_cuts_the_chain() {
        let mut list = ListStore::from_values(&[1, 2, 3]);
        list.remove_at(1);
        assert_eq!(list.values_in_order(), vec![1]);
    }

    #[test]
    fn test_node_ids_survive_removal() {
        let mut list = ListStore::from_values(&[1, 2, 3]);
        let id = list.nodes()[2].id;
        list.remove_at(0);
        assert_eq!(list.nodes()[1].id, id);
    }

    #[test]
    fn test_describe() {
        assert_eq!(ListStore::new().describe(), "null");
        assert_eq!(
            ListStore::from_values(&[10, 20]).describe(),
            "null <-> 10 <-> 20 <-> null"
        );
    }
}

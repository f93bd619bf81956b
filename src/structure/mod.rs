//! Linked structure model for the visualizer
//!
//! This module provides the data the simulation engine mutates:
//! - [`node`]: list nodes with a stable [`node::NodeId`] and a presentational status
//! - [`store`]: the index-addressed [`store::ListStore`] (nodes, next/prev links, head)
//! - [`markers`]: the [`markers::Markers`] role annotations (head, current, target, ...)
//! - [`values`]: the [`values::ValueSource`] used to fill new nodes
//!
//! # Indices vs identity
//!
//! Nodes live in one growable `Vec` and every relationship is a plain `usize` index.
//! Removing a node shifts every later node down by one slot, so each index-valued
//! field has to be translated through a [`store::Remap`]:
//!
//! ```text
//! remap(i) = none   if i is none or i == removed
//!            i - 1  if i >  removed
//!            i      otherwise
//! ```
//!
//! [`node::NodeId`] never changes and is what a renderer should key on.

pub mod markers;
pub mod node;
pub mod store;
pub mod values;

pub use markers::{Markers, Role};
pub use node::{Node, NodeId, NodeStatus};
pub use store::{Link, ListStore, Remap, Traversal};
pub use values::{RandomValues, ValueSource};

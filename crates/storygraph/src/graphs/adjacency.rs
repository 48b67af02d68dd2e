// SPDX-License-Identifier: MIT OR Apache-2.0
//! Edge storage shared by the bundled adapters.
//!
//! Keeps a successor list and a predecessor list per node and updates both
//! in the same call, so the two views never disagree.

use crate::node::GraphNode;
use indexmap::{IndexMap, IndexSet};

/// Paired child/parent lists keyed by node handle
#[derive(Debug, Clone)]
pub struct Adjacency<E: GraphNode> {
    children: IndexMap<E, IndexSet<E>>,
    parents: IndexMap<E, IndexSet<E>>,
}

impl<E: GraphNode> Adjacency<E> {
    /// Create empty storage
    pub fn new() -> Self {
        Self {
            children: IndexMap::new(),
            parents: IndexMap::new(),
        }
    }

    /// Register a node with no edges. Registering twice is harmless.
    pub fn insert_node(&mut self, node: E) {
        self.children.entry(node).or_default();
        self.parents.entry(node).or_default();
    }

    /// Check whether a node has been registered
    pub fn contains_node(&self, node: E) -> bool {
        self.children.contains_key(&node)
    }

    /// Link `child` below `parent`.
    ///
    /// Refuses self-edges, unknown nodes, duplicates and the direct reverse
    /// of an existing edge.
    pub fn link(&mut self, child: E, parent: E) -> bool {
        if child == parent || !self.contains_node(child) || !self.contains_node(parent) {
            return false;
        }
        if self.has_edge(child, parent) {
            return false;
        }
        let added = self
            .children
            .get_mut(&parent)
            .is_some_and(|children| children.insert(child));
        if added {
            self.parents.entry(child).or_default().insert(parent);
        }
        added
    }

    /// Remove the `parent` → `child` edge
    pub fn unlink(&mut self, child: E, parent: E) -> bool {
        let removed = self
            .children
            .get_mut(&parent)
            .is_some_and(|children| children.shift_remove(&child));
        if removed {
            if let Some(parents) = self.parents.get_mut(&child) {
                parents.shift_remove(&parent);
            }
        }
        removed
    }

    /// Check for a direct `parent` → `child` edge
    pub fn has_edge(&self, parent: E, child: E) -> bool {
        self.children
            .get(&parent)
            .is_some_and(|children| children.contains(&child))
    }

    /// Children of a node, in link order
    pub fn children(&self, node: E) -> IndexSet<E> {
        self.children.get(&node).cloned().unwrap_or_default()
    }

    /// Parents of a node, in link order
    pub fn parents(&self, node: E) -> IndexSet<E> {
        self.parents.get(&node).cloned().unwrap_or_default()
    }

    /// Number of parents of a node
    pub fn parent_count(&self, node: E) -> usize {
        self.parents.get(&node).map_or(0, IndexSet::len)
    }

    /// Number of registered nodes, reachable or not
    pub fn node_count(&self) -> usize {
        self.children.len()
    }

    /// Number of stored edges
    pub fn edge_count(&self) -> usize {
        self.children.values().map(IndexSet::len).sum()
    }
}

impl<E: GraphNode> Default for Adjacency<E> {
    fn default() -> Self {
        Self::new()
    }
}

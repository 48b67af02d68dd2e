// SPDX-License-Identifier: MIT OR Apache-2.0
//! Minimal adapter over integer handles for unit tests.

use crate::adapter::NodeAdapter;
use crate::graphs::adjacency::Adjacency;
use indexmap::{IndexMap, IndexSet};

/// Integer-handle adapter with a text payload per node
#[derive(Debug, Default)]
pub(crate) struct TestAdapter {
    pub(crate) edges: Adjacency<u32>,
    pub(crate) labels: IndexMap<u32, String>,
    next: u32,
    /// Every `add_child` call fails while set
    pub(crate) refuse_links: bool,
    /// Only the n-th `add_child` call from now on fails
    pub(crate) refuse_nth_link: Option<usize>,
    /// `remove_child` fails for edges coming from this parent
    pub(crate) refuse_unlink_from: Option<u32>,
}

impl TestAdapter {
    /// Create a node without going through the engine
    pub(crate) fn node(&mut self) -> u32 {
        self.create_new_node()
    }

    /// Link without going through the engine
    pub(crate) fn link(&mut self, child: u32, parent: u32) {
        assert!(self.edges.link(child, parent), "test fixture link failed");
    }
}

impl NodeAdapter<u32> for TestAdapter {
    fn create_new_node(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        self.edges.insert_node(id);
        self.labels.insert(id, format!("node {id}"));
        id
    }

    fn add_child(&mut self, child: u32, parent: u32) -> bool {
        if self.refuse_links {
            return false;
        }
        if let Some(n) = self.refuse_nth_link.as_mut() {
            if *n == 0 {
                self.refuse_nth_link = None;
                return false;
            }
            *n -= 1;
        }
        self.edges.link(child, parent)
    }

    fn remove_child(&mut self, child: u32, parent: u32) -> bool {
        if self.refuse_unlink_from == Some(parent) {
            return false;
        }
        self.edges.unlink(child, parent)
    }

    fn children(&self, node: u32) -> IndexSet<u32> {
        self.edges.children(node)
    }

    fn parents(&self, node: u32) -> IndexSet<u32> {
        self.edges.parents(node)
    }

    fn overwrite_node_data(&mut self, existing: u32, source: u32) -> bool {
        match self.labels.get(&source).cloned() {
            Some(label) if self.labels.contains_key(&existing) => {
                self.labels.insert(existing, label);
                true
            }
            _ => false,
        }
    }
}

/// Start `S` with children `A`, `B`, both of which lead to `C`.
/// Returns the adapter and `[S, A, B, C]`.
pub(crate) fn diamond() -> (TestAdapter, [u32; 4]) {
    let mut adapter = TestAdapter::default();
    let s = adapter.node();
    let a = adapter.node();
    let b = adapter.node();
    let c = adapter.node();
    adapter.link(a, s);
    adapter.link(b, s);
    adapter.link(c, a);
    adapter.link(c, b);
    (adapter, [s, a, b, c])
}

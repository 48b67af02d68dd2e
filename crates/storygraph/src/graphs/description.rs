// SPDX-License-Identifier: MIT OR Apache-2.0
//! Description alternative graphs.
//!
//! Each path from the start node spells out one way of describing something
//! in the game world. Nodes carry a label and, optionally, the key of the
//! game binding that resolves them at export time.

use crate::adapter::NodeAdapter;
use crate::graphs::adjacency::Adjacency;
use crate::node::NodeId;
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// Payload of one description node
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptionNode {
    /// Text shown in the editor
    pub label: String,
    /// Binding key resolved at export time
    pub binding: Option<String>,
}

/// Adapter for description alternative graphs
#[derive(Debug, Clone, Default)]
pub struct DescriptionGraph {
    nodes: IndexMap<NodeId, DescriptionNode>,
    edges: Adjacency<NodeId>,
}

impl DescriptionGraph {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an unattached node with the given payload
    pub fn create(&mut self, node: DescriptionNode) -> NodeId {
        let id = NodeId::new();
        self.nodes.insert(id, node);
        self.edges.insert_node(id);
        id
    }

    /// Look up a node's payload
    pub fn node(&self, id: NodeId) -> Option<&DescriptionNode> {
        self.nodes.get(&id)
    }

    /// Bind a node to a game binding key, or clear the binding
    pub fn bind(&mut self, id: NodeId, binding: Option<String>) -> bool {
        match self.nodes.get_mut(&id) {
            Some(node) => {
                node.binding = binding;
                true
            }
            None => false,
        }
    }
}

impl NodeAdapter<NodeId> for DescriptionGraph {
    fn create_new_node(&mut self) -> NodeId {
        self.create(DescriptionNode::default())
    }

    fn add_child(&mut self, child: NodeId, parent: NodeId) -> bool {
        self.edges.link(child, parent)
    }

    fn remove_child(&mut self, child: NodeId, parent: NodeId) -> bool {
        self.edges.unlink(child, parent)
    }

    fn children(&self, node: NodeId) -> IndexSet<NodeId> {
        self.edges.children(node)
    }

    fn parents(&self, node: NodeId) -> IndexSet<NodeId> {
        self.edges.parents(node)
    }

    fn overwrite_node_data(&mut self, existing: NodeId, source: NodeId) -> bool {
        if existing == source {
            return self.nodes.contains_key(&existing);
        }
        let Some(payload) = self.nodes.get(&source).cloned() else {
            return false;
        };
        match self.nodes.get_mut(&existing) {
            Some(node) => {
                *node = payload;
                true
            }
            None => false,
        }
    }
}

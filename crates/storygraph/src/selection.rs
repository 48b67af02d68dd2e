// SPDX-License-Identifier: MIT OR Apache-2.0
//! Selection tracking and user-level edit intents.
//!
//! The [`SelectionController`] sits between input handling and the
//! [`GraphEngine`]. It keeps an ordered selection (the first node is the
//! anchor, the last is the end of the current path), turns intents such as
//! "insert a node here" or "select up to this node" into engine calls, and
//! tells observers what changed.

use crate::adapter::NodeAdapter;
use crate::edge::Edge;
use crate::engine::{Disconnection, EditError, GraphEngine, Removal};
use crate::events::{GraphCallback, GraphEvent, ObserverId, Observers};
use crate::node::GraphNode;

/// Ordered, duplicate-free node selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<E> {
    nodes: Vec<E>,
}

impl<E: GraphNode> Selection<E> {
    /// A selection holding a single node
    pub fn single(node: E) -> Self {
        Self { nodes: vec![node] }
    }

    /// Build from nodes in order, dropping repeats
    pub fn from_nodes(nodes: impl IntoIterator<Item = E>) -> Self {
        let mut selection = Self { nodes: Vec::new() };
        for node in nodes {
            selection.add(node);
        }
        selection
    }

    /// Check if a node is selected
    pub fn contains(&self, node: &E) -> bool {
        self.nodes.contains(node)
    }

    /// Append a node (idempotent)
    pub fn add(&mut self, node: E) {
        if !self.contains(&node) {
            self.nodes.push(node);
        }
    }

    /// Append nodes in order, skipping those already selected
    pub fn extend(&mut self, nodes: impl IntoIterator<Item = E>) {
        for node in nodes {
            self.add(node);
        }
    }

    /// The anchor (first selected node)
    pub fn first(&self) -> Option<&E> {
        self.nodes.first()
    }

    /// The end of the current path (last selected node)
    pub fn last(&self) -> Option<&E> {
        self.nodes.last()
    }

    /// Check if the selection is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get the number of selected nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Iterate over selected nodes in order
    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.nodes.iter()
    }

    /// Selected nodes in order
    pub fn as_slice(&self) -> &[E] {
        &self.nodes
    }
}

/// Stateful layer over a [`GraphEngine`] that owns the selection
#[derive(Debug)]
pub struct SelectionController<E: GraphNode, A: NodeAdapter<E>> {
    engine: GraphEngine<E, A>,
    selection: Selection<E>,
    observers: Observers<E>,
}

impl<E: GraphNode, A: NodeAdapter<E>> SelectionController<E, A> {
    /// Wrap an engine; the start node is selected initially
    pub fn new(engine: GraphEngine<E, A>) -> Self {
        let selection = Selection::single(engine.start_node());
        Self {
            engine,
            selection,
            observers: Observers::new(),
        }
    }

    /// The underlying engine
    pub fn engine(&self) -> &GraphEngine<E, A> {
        &self.engine
    }

    /// Mutable access to the engine. Changes made through it are not
    /// announced to observers and do not revalidate the selection.
    pub fn engine_mut(&mut self) -> &mut GraphEngine<E, A> {
        &mut self.engine
    }

    /// Register a change callback
    pub fn on_event(&mut self, callback: GraphCallback<E>) -> ObserverId {
        self.observers.add(callback)
    }

    /// Unregister a change callback
    pub fn remove_observer(&mut self, id: ObserverId) -> bool {
        self.observers.remove(id)
    }

    // -- Selection ----------------------------------------------------------

    /// The current selection
    pub fn selection(&self) -> &Selection<E> {
        &self.selection
    }

    /// Selected nodes, anchor first
    pub fn selected_nodes(&self) -> &[E] {
        self.selection.as_slice()
    }

    /// The first selected node
    pub fn anchor(&self) -> E {
        self.selection
            .first()
            .copied()
            .unwrap_or_else(|| self.engine.start_node())
    }

    /// The last selected node
    pub fn tail(&self) -> E {
        self.selection
            .last()
            .copied()
            .unwrap_or_else(|| self.engine.start_node())
    }

    /// Replace the selection.
    ///
    /// Repeated nodes are dropped. An empty list, or one naming a node
    /// outside the graph, is refused. Returns whether the selection changed.
    pub fn set_selected_nodes(&mut self, nodes: impl IntoIterator<Item = E>) -> bool {
        let selection = Selection::from_nodes(nodes);
        if selection.is_empty() {
            return false;
        }
        if let Some(stray) = selection.iter().find(|node| !self.engine.contains(**node)) {
            tracing::debug!(node = ?stray, "Refusing to select a node outside the graph");
            return false;
        }
        self.replace_selection(selection)
    }

    /// Select the chain of nodes leading to `target`.
    ///
    /// Selecting the start node collapses the selection to it. Otherwise
    /// `target` has to be below the anchor: with a single node selected the
    /// selection becomes the chain from the anchor to `target`; with a path
    /// selected the path is extended from its end when possible, and
    /// recomputed from the anchor when not.
    pub fn select_nodes_until(&mut self, target: E) -> Result<(), EditError<E>> {
        let start = self.engine.start_node();
        if target == start {
            self.replace_selection(Selection::single(start));
            return Ok(());
        }

        let anchor = self.anchor();
        if !self.engine.descendants(anchor).contains(&target) {
            return Err(EditError::NoPath {
                from: anchor,
                to: target,
            });
        }

        let tail = self.tail();
        let selection = if anchor == tail {
            Selection::from_nodes(self.engine.path_between(anchor, target))
        } else {
            let extension = self.engine.path_between(tail, target);
            if extension.is_empty() {
                Selection::from_nodes(self.engine.path_between(anchor, target))
            } else {
                let mut grown = self.selection.clone();
                grown.extend(extension);
                grown
            }
        };

        self.replace_selection(selection);
        Ok(())
    }

    // -- Edits --------------------------------------------------------------

    /// Create a node and attach it below `parent`
    pub fn add_new_node_to(&mut self, parent: E) -> Result<E, EditError<E>> {
        if !self.engine.contains(parent) {
            return Err(EditError::NotInGraph(parent));
        }

        let node = self.engine.create_node();
        self.engine.add_child(node, parent)?;
        self.announce_added(node);
        Ok(node)
    }

    /// Create a node and splice it in between `a` and `b`
    pub fn add_new_node_between(&mut self, a: E, b: E) -> Result<E, EditError<E>> {
        self.engine.check_pair(a, b)?;

        let node = self.engine.create_node();
        self.engine.add_node_between(node, a, b)?;
        self.announce_added(node);
        Ok(node)
    }

    /// Retarget `existing` to the payload of `replacement`, keeping its edges
    pub fn replace_node(&mut self, existing: E, replacement: E) -> Result<(), EditError<E>> {
        self.engine.overwrite_node_data(existing, replacement)?;
        self.observers
            .notify(&GraphEvent::NodeOverwritten { node: existing });
        Ok(())
    }

    /// Remove a node, then drop back to the start node if the selection
    /// lost contact with the graph
    pub fn remove_node(&mut self, node: E) -> Option<Removal<E>> {
        let removal = self.engine.remove_node(node)?;

        self.observers.notify(&GraphEvent::NodeRemoved { node });
        for &swept in &removal.swept {
            self.observers
                .notify(&GraphEvent::NodeRemoved { node: swept });
        }
        self.validate_selection();
        Some(removal)
    }

    /// Connect two nodes
    pub fn connect_nodes(&mut self, a: E, b: E) -> Result<Edge<E>, EditError<E>> {
        let edge = self.engine.connect_nodes(a, b)?;
        self.observers.notify(&GraphEvent::NodesConnected {
            child: edge.child,
            parent: edge.parent,
        });
        Ok(edge)
    }

    /// Disconnect two nodes
    pub fn disconnect_nodes(&mut self, a: E, b: E) -> Result<Disconnection<E>, EditError<E>> {
        let disconnection = self.engine.disconnect_nodes(a, b)?;
        self.observers.notify(&GraphEvent::NodesDisconnected {
            child: disconnection.edge.child,
            parent: disconnection.edge.parent,
        });
        for &swept in &disconnection.swept {
            self.observers
                .notify(&GraphEvent::NodeRemoved { node: swept });
        }
        self.validate_selection();
        Ok(disconnection)
    }

    // -- Internals ----------------------------------------------------------

    fn announce_added(&mut self, node: E) {
        let event = GraphEvent::NodeAdded {
            node,
            children: self.engine.children(node).into_iter().collect(),
            parents: self.engine.parents(node).into_iter().collect(),
        };
        self.observers.notify(&event);
    }

    fn replace_selection(&mut self, selection: Selection<E>) -> bool {
        if selection == self.selection {
            return false;
        }

        self.selection = selection;
        tracing::trace!(selection = ?self.selection.as_slice(), "Selection changed");
        self.observers.notify(&GraphEvent::NodesSelected {
            selection: self.selection.as_slice().to_vec(),
        });
        true
    }

    fn validate_selection(&mut self) {
        let start = self.engine.start_node();
        let lost = self
            .selection
            .iter()
            .any(|&node| node != start && !self.engine.contains(node));
        if lost {
            self.replace_selection(Selection::single(start));
        }
    }
}

// SPDX-License-Identifier: MIT OR Apache-2.0
//! The invariant-preserving graph engine.
//!
//! A [`GraphEngine`] holds the start node and an adapter, and performs every
//! structural edit as a short sequence of adapter hook calls. Before and
//! after each successful edit:
//! - the start node is part of the graph and is never removed
//! - the graph is acyclic
//! - every reachable node other than the start node has a parent
//!
//! A failed edit returns an [`EditError`] and leaves the graph as it was.

use crate::adapter::NodeAdapter;
use crate::config::{EngineConfig, OrphanPolicy};
use crate::edge::Edge;
use crate::node::GraphNode;
use crate::traversal::{self, DepthMap};
use indexmap::IndexSet;
use std::collections::{HashSet, VecDeque};
use std::fmt;

/// Generic DAG editing engine over one adapter
#[derive(Debug)]
pub struct GraphEngine<E: GraphNode, A: NodeAdapter<E>> {
    /// Root of the graph
    start: E,
    /// Edge storage and payload owner
    adapter: A,
    /// Engine settings
    config: EngineConfig,
}

/// Outcome of a node removal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removal<E> {
    /// The removed node
    pub node: E,
    /// Parents it was detached from
    pub former_parents: Vec<E>,
    /// Descendants that lost their last parent and were swept with it
    pub swept: Vec<E>,
}

/// Outcome of a disconnection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disconnection<E> {
    /// The edge that was removed
    pub edge: Edge<E>,
    /// Nodes that lost their last parent and were swept, child first
    pub swept: Vec<E>,
}

impl<E: GraphNode, A: NodeAdapter<E>> GraphEngine<E, A> {
    /// Create an engine around an already created start node
    pub fn new(start: E, adapter: A) -> Self {
        Self::with_config(start, adapter, EngineConfig::default())
    }

    /// Create an engine with explicit settings
    pub fn with_config(start: E, adapter: A, config: EngineConfig) -> Self {
        tracing::debug!(?start, orphan_policy = ?config.orphan_policy, "Created graph engine");
        Self {
            start,
            adapter,
            config,
        }
    }

    /// The start node
    pub fn start_node(&self) -> E {
        self.start
    }

    /// Engine settings
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The adapter
    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// Mutable access to the adapter, for payload edits.
    ///
    /// Edges changed through this handle bypass every check the engine makes.
    pub fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    /// Give up the engine and keep the adapter
    pub fn into_adapter(self) -> A {
        self.adapter
    }

    // -- Queries ------------------------------------------------------------

    /// The start node and everything reachable from it
    pub fn nodes(&self) -> IndexSet<E> {
        let mut nodes = IndexSet::from([self.start]);
        nodes.extend(self.descendants(self.start));
        nodes
    }

    /// Check whether a node is reachable from the start node
    pub fn contains(&self, node: E) -> bool {
        node == self.start || self.ancestors(node).contains(&self.start)
    }

    /// Direct children of a node
    pub fn children(&self, node: E) -> IndexSet<E> {
        self.adapter.children(node)
    }

    /// Direct parents of a node
    pub fn parents(&self, node: E) -> IndexSet<E> {
        self.adapter.parents(node)
    }

    /// Everything below a node
    pub fn descendants(&self, node: E) -> IndexSet<E> {
        traversal::descendants(&self.adapter, node)
    }

    /// Everything above a node
    pub fn ancestors(&self, node: E) -> IndexSet<E> {
        traversal::ancestors(&self.adapter, node)
    }

    /// Longest-path depth of every node below `node`, `node` itself at 0.
    ///
    /// Recomputed on every call.
    pub fn depth_map(&self, node: E) -> DepthMap<E> {
        traversal::depth_map(&self.adapter, node)
    }

    /// Nodes in a given layout column, counted from the start node
    pub fn nodes_for_level(&self, level: usize) -> Vec<E> {
        self.depth_map(self.start)
            .into_iter()
            .filter(|&(_, depth)| depth == level)
            .map(|(node, _)| node)
            .collect()
    }

    /// Every layout column, starting with the one holding the start node
    pub fn levels(&self) -> Vec<Vec<E>> {
        let mut levels: Vec<Vec<E>> = Vec::new();
        for (node, depth) in self.depth_map(self.start) {
            if levels.len() <= depth {
                levels.resize_with(depth + 1, Vec::new);
            }
            levels[depth].push(node);
        }
        levels
    }

    /// A single chain from `from` down to `to`, both included
    pub fn path_between(&self, from: E, to: E) -> Vec<E> {
        traversal::path_between(&self.adapter, from, to)
    }

    /// Nodes where all paths leaving `node` come back together
    pub fn groupable_end_nodes(&self, node: E) -> IndexSet<E> {
        traversal::groupable_end_nodes(&self.adapter, node)
    }

    // -- Edits --------------------------------------------------------------

    /// Create a new, unattached node through the adapter
    pub fn create_node(&mut self) -> E {
        self.adapter.create_new_node()
    }

    /// Attach `child` directly below `parent`
    pub fn add_child(&mut self, child: E, parent: E) -> Result<Edge<E>, EditError<E>> {
        self.require(parent)?;
        if child == parent {
            return Err(EditError::SelfLoop);
        }
        if self.children(parent).contains(&child) {
            return Err(EditError::AlreadyConnected);
        }
        if self.descendants(child).contains(&parent) {
            return Err(EditError::WouldCycle);
        }
        if !self.adapter.add_child(child, parent) {
            return Err(EditError::Rejected);
        }

        tracing::debug!(?parent, ?child, "Added child");
        Ok(Edge::new(parent, child))
    }

    /// Connect two nodes, working out which one goes on top.
    ///
    /// If one is already below the other, the upper one becomes the parent.
    /// Otherwise the shallower node (by depth from the start node) becomes
    /// the parent; on equal depth `a` does.
    pub fn connect_nodes(&mut self, a: E, b: E) -> Result<Edge<E>, EditError<E>> {
        self.require(a)?;
        self.require(b)?;
        if a == b {
            return Err(EditError::SelfLoop);
        }

        let edge = self.orient(a, b);
        if self.children(edge.parent).contains(&edge.child) {
            return Err(EditError::AlreadyConnected);
        }
        if !self.adapter.add_child(edge.child, edge.parent) {
            return Err(EditError::Rejected);
        }

        tracing::debug!(parent = ?edge.parent, child = ?edge.child, "Connected nodes");
        Ok(edge)
    }

    /// Remove the direct edge between two nodes, in whichever direction it runs
    pub fn disconnect_nodes(&mut self, a: E, b: E) -> Result<Disconnection<E>, EditError<E>> {
        self.require(a)?;
        self.require(b)?;

        let edge = if self.children(a).contains(&b) {
            Edge::new(a, b)
        } else if self.children(b).contains(&a) {
            Edge::new(b, a)
        } else {
            return Err(EditError::NotConnected);
        };

        if !self.adapter.remove_child(edge.child, edge.parent) {
            return Err(EditError::Rejected);
        }

        let mut swept = Vec::new();
        if self.config.orphan_policy == OrphanPolicy::Sweep && self.is_orphan(edge.child) {
            swept.push(edge.child);
            swept.extend(self.sweep_orphans(edge.child));
        }

        tracing::debug!(
            parent = ?edge.parent,
            child = ?edge.child,
            swept = swept.len(),
            "Disconnected nodes"
        );
        Ok(Disconnection { edge, swept })
    }

    /// Splice `node` in between `a` and `b`.
    ///
    /// The pair is oriented exactly as in [`connect_nodes`](Self::connect_nodes);
    /// `node` becomes a child of the upper one and a parent of the lower one.
    /// Returns the oriented pair.
    pub fn add_node_between(&mut self, node: E, a: E, b: E) -> Result<Edge<E>, EditError<E>> {
        self.check_pair(a, b)?;
        if self.contains(node) {
            return Err(EditError::AlreadyInGraph(node));
        }

        let edge = self.orient(a, b);
        if self.descendants(node).contains(&edge.parent) {
            return Err(EditError::WouldCycle);
        }

        if !self.adapter.add_child(node, edge.parent) {
            return Err(EditError::Rejected);
        }
        if !self.adapter.add_child(edge.child, node) {
            self.adapter.remove_child(node, edge.parent);
            return Err(EditError::Rejected);
        }

        tracing::debug!(?node, upper = ?edge.parent, lower = ?edge.child, "Added node between");
        Ok(edge)
    }

    /// Detach a node from all of its parents.
    ///
    /// Removing the start node, or a node that is not in the graph, does
    /// nothing and returns `None`. So does a removal the adapter only
    /// partly accepts while the node stays reachable; the edges it did
    /// drop are restored. What happens to the node's children is up to
    /// the adapter and the configured [`OrphanPolicy`].
    pub fn remove_node(&mut self, node: E) -> Option<Removal<E>> {
        if node == self.start {
            tracing::debug!(?node, "Ignoring removal of the start node");
            return None;
        }
        if !self.contains(node) {
            return None;
        }

        let (former_parents, refused): (Vec<E>, Vec<E>) = self
            .parents(node)
            .into_iter()
            .partition(|&parent| self.adapter.remove_child(node, parent));

        if !refused.is_empty() && self.contains(node) {
            for &parent in &former_parents {
                self.adapter.add_child(node, parent);
            }
            tracing::warn!(?node, ?refused, "Adapter kept parent edges, removal rolled back");
            return None;
        }

        let swept = match self.config.orphan_policy {
            OrphanPolicy::Retain => Vec::new(),
            OrphanPolicy::Sweep => self.sweep_orphans(node),
        };

        tracing::debug!(?node, parents = former_parents.len(), swept = swept.len(), "Removed node");
        Some(Removal {
            node,
            former_parents,
            swept,
        })
    }

    /// Copy the payload of `source` onto `existing`, keeping its edges
    pub fn overwrite_node_data(&mut self, existing: E, source: E) -> Result<(), EditError<E>> {
        self.require(existing)?;
        if !self.adapter.overwrite_node_data(existing, source) {
            return Err(EditError::Rejected);
        }

        tracing::debug!(?existing, ?source, "Overwrote node data");
        Ok(())
    }

    // -- Internals ----------------------------------------------------------

    fn require(&self, node: E) -> Result<(), EditError<E>> {
        if self.contains(node) {
            Ok(())
        } else {
            Err(EditError::NotInGraph(node))
        }
    }

    /// Both ends are in the graph and distinct
    pub(crate) fn check_pair(&self, a: E, b: E) -> Result<(), EditError<E>> {
        self.require(a)?;
        self.require(b)?;
        if a == b {
            return Err(EditError::SelfLoop);
        }
        Ok(())
    }

    fn is_orphan(&self, node: E) -> bool {
        node != self.start && self.parents(node).is_empty()
    }

    /// Upper/lower orientation of two distinct graph nodes
    fn orient(&self, a: E, b: E) -> Edge<E> {
        if self.descendants(a).contains(&b) {
            return Edge::new(a, b);
        }
        if self.descendants(b).contains(&a) {
            return Edge::new(b, a);
        }

        let depths = self.depth_map(self.start);
        let depth_a = depths.get(&a).copied().unwrap_or_default();
        let depth_b = depths.get(&b).copied().unwrap_or_default();
        if depth_b < depth_a {
            Edge::new(b, a)
        } else {
            Edge::new(a, b)
        }
    }

    /// Detach `orphan` from its children, then do the same for every child
    /// left without parents. Returns the children swept this way.
    fn sweep_orphans(&mut self, orphan: E) -> Vec<E> {
        let mut swept = Vec::new();
        let mut seen = HashSet::from([orphan]);
        let mut queue = VecDeque::from([orphan]);

        while let Some(current) = queue.pop_front() {
            for child in self.adapter.children(current) {
                self.adapter.remove_child(child, current);
                if self.is_orphan(child) && seen.insert(child) {
                    swept.push(child);
                    queue.push_back(child);
                }
            }
        }

        swept
    }
}

/// Why an edit was refused
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError<E: fmt::Debug> {
    /// Node is not reachable from the start node
    #[error("Node not in graph: {0:?}")]
    NotInGraph(E),

    /// Node is already reachable from the start node
    #[error("Node already in graph: {0:?}")]
    AlreadyInGraph(E),

    /// Both ends are the same node
    #[error("Self-loop not allowed")]
    SelfLoop,

    /// The edge would close a cycle
    #[error("Edge would create a cycle")]
    WouldCycle,

    /// The nodes are already directly connected
    #[error("Nodes are already connected")]
    AlreadyConnected,

    /// The nodes share no direct edge
    #[error("Nodes are not directly connected")]
    NotConnected,

    /// No chain leads from one node to the other
    #[error("No path from {from:?} to {to:?}")]
    NoPath {
        /// Upper end
        from: E,
        /// Lower end
        to: E,
    },

    /// The adapter refused the change
    #[error("Adapter rejected the change")]
    Rejected,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{diamond, TestAdapter};

    fn diamond_engine() -> (GraphEngine<u32, TestAdapter>, [u32; 4]) {
        let (adapter, nodes) = diamond();
        (GraphEngine::new(nodes[0], adapter), nodes)
    }

    fn sweeping(adapter: TestAdapter, start: u32) -> GraphEngine<u32, TestAdapter> {
        GraphEngine::with_config(
            start,
            adapter,
            EngineConfig::with_orphan_policy(OrphanPolicy::Sweep),
        )
    }

    #[test]
    fn test_nodes_always_include_start() {
        let mut adapter = TestAdapter::default();
        let start = adapter.node();
        let engine = GraphEngine::new(start, adapter);

        assert_eq!(engine.nodes(), IndexSet::from([start]));
        assert_eq!(engine.start_node(), start);
        assert_eq!(engine.depth_map(start)[&start], 0);
    }

    #[test]
    fn test_diamond_queries() {
        let (engine, [s, a, b, c]) = diamond_engine();

        assert_eq!(engine.nodes(), IndexSet::from([s, a, b, c]));
        assert_eq!(engine.descendants(s), IndexSet::from([a, b, c]));
        assert_eq!(engine.ancestors(c), IndexSet::from([s, a, b]));

        let depths = engine.depth_map(s);
        assert_eq!(
            depths.into_iter().collect::<Vec<_>>(),
            vec![(s, 0), (a, 1), (b, 1), (c, 2)]
        );
    }

    #[test]
    fn test_levels() {
        let (engine, [s, a, b, c]) = diamond_engine();

        assert_eq!(engine.levels(), vec![vec![s], vec![a, b], vec![c]]);
        assert_eq!(engine.nodes_for_level(1), vec![a, b]);
        assert!(engine.nodes_for_level(7).is_empty());
    }

    #[test]
    fn test_remove_start_is_noop() {
        let (mut engine, [s, ..]) = diamond_engine();
        let before = engine.nodes();

        assert!(engine.remove_node(s).is_none());
        assert_eq!(engine.nodes(), before);
        assert_eq!(engine.adapter().edges.edge_count(), 4);
    }

    #[test]
    fn test_remove_node_with_two_parents() {
        let (mut engine, [s, a, b, c]) = diamond_engine();

        let removal = engine.remove_node(c).unwrap();
        assert_eq!(removal.former_parents, vec![a, b]);
        assert!(removal.swept.is_empty());
        assert!(!engine.children(a).contains(&c));
        assert!(!engine.children(b).contains(&c));
        assert_eq!(engine.nodes(), IndexSet::from([s, a, b]));
    }

    #[test]
    fn test_remove_node_outside_graph() {
        let (mut engine, _) = diamond_engine();
        let stray = engine.create_node();

        assert!(engine.remove_node(stray).is_none());
    }

    #[test]
    fn test_remove_node_refused_edge_rolls_back() {
        let (mut engine, [s, a, b, c]) = diamond_engine();
        engine.adapter_mut().refuse_unlink_from = Some(b);

        assert!(engine.remove_node(c).is_none());
        assert!(engine.adapter().edges.has_edge(a, c));
        assert!(engine.adapter().edges.has_edge(b, c));
        assert_eq!(engine.adapter().edges.edge_count(), 4);
        assert_eq!(engine.nodes(), IndexSet::from([s, a, b, c]));
    }

    #[test]
    fn test_remove_node_lists_only_dropped_parents() {
        let (mut adapter, [s, a, b, c]) = diamond();
        let stray = adapter.node();
        adapter.link(c, stray);
        adapter.refuse_unlink_from = Some(stray);
        let mut engine = GraphEngine::new(s, adapter);

        let removal = engine.remove_node(c).unwrap();
        assert_eq!(removal.former_parents, vec![a, b]);
        assert!(engine.adapter().edges.has_edge(stray, c));
        assert_eq!(engine.nodes(), IndexSet::from([s, a, b]));
    }

    #[test]
    fn test_retain_keeps_orphan_child_edges() {
        let (mut engine, [s, a, b, c]) = diamond_engine();
        let below = engine.create_node();
        engine.add_child(below, a).unwrap();

        engine.remove_node(a).unwrap();
        // `below` is unreachable but its edge from `a` survives in storage
        assert!(engine.adapter().edges.has_edge(a, below));
        assert!(engine.adapter().edges.has_edge(a, c));
        assert_eq!(engine.nodes(), IndexSet::from([s, b, c]));
    }

    #[test]
    fn test_sweep_cascades_through_orphans() {
        let (mut adapter, [s, a, b, c]) = diamond();
        let below = adapter.node();
        let deeper = adapter.node();
        adapter.link(below, a);
        adapter.link(deeper, below);
        let mut engine = sweeping(adapter, s);

        let removal = engine.remove_node(a).unwrap();
        assert_eq!(removal.swept, vec![below, deeper]);
        // `c` still has `b` as a parent and stays
        assert!(engine.children(b).contains(&c));
        assert!(engine.parents(c).contains(&b));
        assert!(!engine.adapter().edges.has_edge(a, c));
        assert_eq!(engine.adapter().edges.edge_count(), 2);
    }

    #[test]
    fn test_connect_descendant_becomes_child() {
        let (mut engine, [s, _, _, c]) = diamond_engine();

        let edge = engine.connect_nodes(c, s).unwrap();
        assert_eq!(edge, Edge::new(s, c));
        assert!(engine.children(s).contains(&c));
        assert!(!engine.children(c).contains(&s));
    }

    #[test]
    fn test_connect_unrelated_uses_depth() {
        let (mut engine, [_, a, b, _]) = diamond_engine();

        // `side` sits at depth 2 under `b`, unrelated to `a` at depth 1
        let side = engine.create_node();
        engine.add_child(side, b).unwrap();

        let edge = engine.connect_nodes(side, a).unwrap();
        assert_eq!(edge, Edge::new(a, side));
        assert!(engine.children(a).contains(&side));
        assert!(!engine.children(side).contains(&a));
    }

    #[test]
    fn test_connect_equal_depth_first_argument_is_parent() {
        let (mut engine, [_, a, b, _]) = diamond_engine();

        let edge = engine.connect_nodes(b, a).unwrap();
        assert_eq!(edge, Edge::new(b, a));
        assert!(engine.children(b).contains(&a));
    }

    #[test]
    fn test_connect_refusals() {
        let (mut engine, [s, a, _, c]) = diamond_engine();
        let stray = engine.create_node();

        assert_eq!(engine.connect_nodes(a, a), Err(EditError::SelfLoop));
        assert_eq!(engine.connect_nodes(s, a), Err(EditError::AlreadyConnected));
        assert_eq!(engine.connect_nodes(c, a), Err(EditError::AlreadyConnected));
        assert_eq!(engine.connect_nodes(stray, a), Err(EditError::NotInGraph(stray)));

        engine.adapter_mut().refuse_links = true;
        assert_eq!(engine.connect_nodes(s, c), Err(EditError::Rejected));
        assert_eq!(engine.adapter().edges.edge_count(), 4);
    }

    #[test]
    fn test_connect_never_creates_both_directions() {
        let (mut engine, [s, a, b, c]) = diamond_engine();
        let nodes = [s, a, b, c];

        for &x in &nodes {
            for &y in &nodes {
                if let Ok(edge) = engine.connect_nodes(x, y) {
                    let forward = engine.children(x).contains(&y);
                    let backward = engine.children(y).contains(&x);
                    assert!(forward ^ backward, "{edge:?}");
                }
            }
        }
        assert!(engine.ancestors(s).is_empty());
    }

    #[test]
    fn test_disconnect_either_order() {
        let (mut engine, [_, a, b, c]) = diamond_engine();

        let disconnection = engine.disconnect_nodes(c, a).unwrap();
        assert_eq!(disconnection.edge, Edge::new(a, c));
        assert!(disconnection.swept.is_empty());
        assert!(!engine.children(a).contains(&c));
        assert!(engine.children(b).contains(&c));
    }

    #[test]
    fn test_disconnect_unrelated_leaves_graph_untouched() {
        let (mut engine, [s, a, b, c]) = diamond_engine();
        let before: Vec<_> = engine
            .nodes()
            .into_iter()
            .map(|n| (n, engine.children(n), engine.parents(n)))
            .collect();

        assert_eq!(engine.disconnect_nodes(a, b), Err(EditError::NotConnected));
        assert_eq!(engine.disconnect_nodes(s, c), Err(EditError::NotConnected));

        let after: Vec<_> = engine
            .nodes()
            .into_iter()
            .map(|n| (n, engine.children(n), engine.parents(n)))
            .collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_disconnect_last_parent_sweeps() {
        let (mut adapter, [s, a, b, c]) = diamond();
        let below = adapter.node();
        adapter.link(below, a);
        let mut engine = sweeping(adapter, s);

        let disconnection = engine.disconnect_nodes(s, a).unwrap();
        assert_eq!(disconnection.swept, vec![a, below]);
        assert!(engine.children(a).is_empty());
        assert_eq!(engine.nodes(), IndexSet::from([s, b, c]));
    }

    #[test]
    fn test_add_node_between_unrelated_pair() {
        let (mut engine, [_, a, b, _]) = diamond_engine();
        let deep = engine.create_node();
        engine.add_child(deep, b).unwrap();

        // `a` (depth 1) and `deep` (depth 2) are unrelated
        let node = engine.create_node();
        let edge = engine.add_node_between(node, deep, a).unwrap();

        assert_eq!(edge, Edge::new(a, deep));
        assert!(engine.children(a).contains(&node));
        assert!(engine.children(node).contains(&deep));
    }

    #[test]
    fn test_add_node_between_related_pair_keeps_direct_edge() {
        let (mut engine, [s, a, _, c]) = diamond_engine();
        let node = engine.create_node();

        engine.add_node_between(node, c, a).unwrap();
        assert!(engine.children(a).contains(&node));
        assert!(engine.children(node).contains(&c));
        assert!(engine.children(a).contains(&c));
        assert_eq!(engine.depth_map(s)[&c], 3);
    }

    #[test]
    fn test_add_node_between_rolls_back() {
        let (mut engine, [_, a, _, c]) = diamond_engine();
        let node = engine.create_node();
        engine.adapter_mut().refuse_nth_link = Some(1);

        assert_eq!(engine.add_node_between(node, a, c), Err(EditError::Rejected));
        assert!(!engine.children(a).contains(&node));
        assert!(engine.parents(node).is_empty());
        assert_eq!(engine.adapter().edges.edge_count(), 4);
    }

    #[test]
    fn test_add_node_between_refusals() {
        let (mut engine, [s, a, b, _]) = diamond_engine();
        let node = engine.create_node();
        let stray = engine.create_node();

        assert_eq!(engine.add_node_between(a, s, b), Err(EditError::AlreadyInGraph(a)));
        assert_eq!(engine.add_node_between(node, a, a), Err(EditError::SelfLoop));
        assert_eq!(engine.add_node_between(node, stray, a), Err(EditError::NotInGraph(stray)));
    }

    #[test]
    fn test_add_child_refuses_cycles() {
        let (mut engine, [s, a, _, c]) = diamond_engine();

        assert_eq!(engine.add_child(s, c), Err(EditError::WouldCycle));
        assert_eq!(engine.add_child(a, a), Err(EditError::SelfLoop));
        assert_eq!(engine.add_child(c, a), Err(EditError::AlreadyConnected));
    }

    #[test]
    fn test_new_child_sits_one_below_parent() {
        let (mut engine, [s, ..]) = diamond_engine();
        let node = engine.create_node();

        engine.add_child(node, s).unwrap();
        assert!(engine.children(s).contains(&node));
        assert_eq!(engine.depth_map(s)[&node], 1);
    }

    #[test]
    fn test_overwrite_node_data() {
        let (mut engine, [_, a, _, _]) = diamond_engine();
        let source = engine.create_node();
        engine.adapter_mut().labels.insert(source, "retargeted".to_string());

        engine.overwrite_node_data(a, source).unwrap();
        assert_eq!(engine.adapter().labels[&a], "retargeted");
        assert_eq!(engine.overwrite_node_data(source, a), Err(EditError::NotInGraph(source)));
    }
}

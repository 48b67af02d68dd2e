// SPDX-License-Identifier: MIT OR Apache-2.0
//! Structural queries over an adapter's edges.
//!
//! Everything here is recomputed from the adapter on every call. Traversals
//! use an explicit worklist and a visited set, so shared subtrees are walked
//! once and a cycle left behind by a misbehaving adapter cannot hang them.

use crate::adapter::NodeAdapter;
use crate::node::GraphNode;
use indexmap::{IndexMap, IndexSet};
use std::collections::{HashMap, HashSet, VecDeque};

/// Longest-path distance, in edges, from a root to every node below it.
///
/// Entries are in topological order, root first.
pub type DepthMap<E> = IndexMap<E, usize>;

/// All nodes reachable from `node` through child edges, breadth-first.
///
/// `node` itself is not included.
pub fn descendants<E, A>(adapter: &A, node: E) -> IndexSet<E>
where
    E: GraphNode,
    A: NodeAdapter<E> + ?Sized,
{
    walk(node, |n| adapter.children(n))
}

/// All nodes `node` is reachable from, breadth-first through parent edges.
///
/// `node` itself is not included.
pub fn ancestors<E, A>(adapter: &A, node: E) -> IndexSet<E>
where
    E: GraphNode,
    A: NodeAdapter<E> + ?Sized,
{
    walk(node, |n| adapter.parents(n))
}

fn walk<E, F>(node: E, next: F) -> IndexSet<E>
where
    E: GraphNode,
    F: Fn(E) -> IndexSet<E>,
{
    let mut found = IndexSet::new();
    let mut queue = VecDeque::from([node]);

    while let Some(current) = queue.pop_front() {
        for neighbor in next(current) {
            if neighbor != node && found.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    found
}

/// Map every node reachable from `root` (and `root` itself, at depth 0) to
/// the length of the longest path leading to it from `root`.
///
/// Where branches reconverge the deepest branch wins, so a merge node is
/// ranked after everything that feeds into it.
pub fn depth_map<E, A>(adapter: &A, root: E) -> DepthMap<E>
where
    E: GraphNode,
    A: NodeAdapter<E> + ?Sized,
{
    let mut region = IndexSet::from([root]);
    region.extend(descendants(adapter, root));

    // Only parents inside the region can delay a node.
    let mut waiting_on: HashMap<E, usize> = region
        .iter()
        .map(|&node| {
            let inside = adapter
                .parents(node)
                .iter()
                .filter(|parent| region.contains(*parent))
                .count();
            (node, inside)
        })
        .collect();
    waiting_on.insert(root, 0);

    let mut depths = DepthMap::with_capacity(region.len());
    let mut best: HashMap<E, usize> = HashMap::from([(root, 0)]);
    let mut queue = VecDeque::from([root]);

    while let Some(node) = queue.pop_front() {
        let depth = best.get(&node).copied().unwrap_or_default();
        depths.insert(node, depth);

        for child in adapter.children(node) {
            if depths.contains_key(&child) {
                continue;
            }
            let entry = best.entry(child).or_insert(0);
            *entry = (*entry).max(depth + 1);

            if let Some(remaining) = waiting_on.get_mut(&child) {
                *remaining = remaining.saturating_sub(1);
                if *remaining == 0 {
                    queue.push_back(child);
                }
            }
        }
    }

    if depths.len() < region.len() {
        tracing::warn!(
            unranked = region.len() - depths.len(),
            "Cycle below {root:?}; some nodes left out of the depth map"
        );
    }

    depths
}

/// The chain of nodes leading from `from` down to `to`, both included.
///
/// Empty when `to` is not a descendant of `from`. When several chains exist
/// the shortest is returned; among equally short ones, the one that follows
/// the earliest-registered child at every step.
pub fn path_between<E, A>(adapter: &A, from: E, to: E) -> Vec<E>
where
    E: GraphNode,
    A: NodeAdapter<E> + ?Sized,
{
    if from == to {
        return Vec::new();
    }

    let mut came_from: HashMap<E, E> = HashMap::new();
    let mut visited = HashSet::from([from]);
    let mut queue = VecDeque::from([from]);

    while let Some(node) = queue.pop_front() {
        for child in adapter.children(node) {
            if !visited.insert(child) {
                continue;
            }
            came_from.insert(child, node);

            if child == to {
                let mut path = vec![to];
                let mut current = to;
                while let Some(&previous) = came_from.get(&current) {
                    path.push(previous);
                    current = previous;
                }
                path.reverse();
                return path;
            }
            queue.push_back(child);
        }
    }

    Vec::new()
}

/// Nodes at which every path leaving `node` has reconverged.
///
/// These are the places a region starting at `node` can be closed off, e.g.
/// to collapse it into a group. The sweep only moves past a node once all of
/// its parents have been reached, and stops at the first descendant that
/// also has a parent outside the region.
pub fn groupable_end_nodes<E, A>(adapter: &A, node: E) -> IndexSet<E>
where
    E: GraphNode,
    A: NodeAdapter<E> + ?Sized,
{
    let region = descendants(adapter, node);
    let entered_from_outside: HashSet<E> = region
        .iter()
        .copied()
        .filter(|&descendant| {
            adapter
                .parents(descendant)
                .iter()
                .any(|parent| *parent != node && !region.contains(parent))
        })
        .collect();

    let mut arrivals: HashMap<E, usize> = HashMap::new();
    let mut end_nodes = IndexSet::new();
    let mut queue = VecDeque::from([node]);
    let mut stalled = 0;

    while let Some(current) = queue.pop_front() {
        if entered_from_outside.contains(&current) {
            break;
        }

        let ready = current == node
            || arrivals.get(&current).copied().unwrap_or_default()
                >= adapter.parents(current).len();

        if ready {
            stalled = 0;
            for child in adapter.children(current) {
                *arrivals.entry(child).or_insert(0) += 1;
                if !queue.contains(&child) {
                    queue.push_back(child);
                }
            }
        } else {
            queue.push_back(current);
            stalled += 1;
            if stalled > queue.len() {
                tracing::warn!("Groupable end node search below {node:?} stopped making progress");
                break;
            }
        }

        if queue.len() == 1 {
            end_nodes.extend(queue.front().copied());
        }
    }

    end_nodes
}

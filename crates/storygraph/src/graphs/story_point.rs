// SPDX-License-Identifier: MIT OR Apache-2.0
//! Story point graphs.
//!
//! A story point is one beat of a branching narrative. Its fan-in is the
//! number of parent points that must have succeeded before it becomes
//! active, so it always lies between 1 and the number of parents.

use crate::adapter::NodeAdapter;
use crate::graphs::adjacency::Adjacency;
use crate::node::NodeId;
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// Name given to points created without one
pub const NEW_STORY_POINT: &str = "New Story Point";

/// Fan-in of a freshly created point
pub const DEFAULT_FAN_IN: u32 = 1;

/// Payload of a story point
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryPoint {
    /// Display name
    pub name: String,
    /// Parents that must succeed before this point activates
    pub fan_in: u32,
}

impl StoryPoint {
    /// Create a point with the default fan-in. An empty name falls back to
    /// [`NEW_STORY_POINT`].
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            name: if name.is_empty() {
                NEW_STORY_POINT.to_string()
            } else {
                name
            },
            fan_in: DEFAULT_FAN_IN,
        }
    }
}

/// Adapter storing story points and their successor lists
#[derive(Debug, Clone, Default)]
pub struct StoryPointGraph {
    points: IndexMap<NodeId, StoryPoint>,
    edges: Adjacency<NodeId>,
}

impl StoryPointGraph {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an unattached point with the given name
    pub fn create_point(&mut self, name: impl Into<String>) -> NodeId {
        let id = NodeId::new();
        self.points.insert(id, StoryPoint::new(name));
        self.edges.insert_node(id);
        id
    }

    /// Look up a point
    pub fn point(&self, id: NodeId) -> Option<&StoryPoint> {
        self.points.get(&id)
    }

    /// Rename a point
    pub fn rename(&mut self, id: NodeId, name: impl Into<String>) -> bool {
        match self.points.get_mut(&id) {
            Some(point) => {
                point.name = name.into();
                true
            }
            None => false,
        }
    }

    /// Largest fan-in the point currently allows
    pub fn max_fan_in(&self, id: NodeId) -> u32 {
        let parents = u32::try_from(self.edges.parent_count(id)).unwrap_or(u32::MAX);
        parents.max(DEFAULT_FAN_IN)
    }

    /// Set the fan-in, clamped to what the point's parents allow.
    ///
    /// Returns the value actually stored.
    pub fn set_fan_in(&mut self, id: NodeId, fan_in: u32) -> Option<u32> {
        let max = self.max_fan_in(id);
        let point = self.points.get_mut(&id)?;
        point.fan_in = fan_in.clamp(DEFAULT_FAN_IN, max);
        Some(point.fan_in)
    }

    /// Number of stored points, reachable or not
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    fn clamp_fan_in(&mut self, id: NodeId) {
        let max = self.max_fan_in(id);
        if let Some(point) = self.points.get_mut(&id) {
            if point.fan_in > max {
                tracing::trace!(point = %id, from = point.fan_in, to = max, "Clamped fan-in");
                point.fan_in = max;
            }
        }
    }
}

impl NodeAdapter<NodeId> for StoryPointGraph {
    fn create_new_node(&mut self) -> NodeId {
        self.create_point(NEW_STORY_POINT)
    }

    fn add_child(&mut self, child: NodeId, parent: NodeId) -> bool {
        self.edges.link(child, parent)
    }

    fn remove_child(&mut self, child: NodeId, parent: NodeId) -> bool {
        let removed = self.edges.unlink(child, parent);
        if removed {
            self.clamp_fan_in(child);
        }
        removed
    }

    fn children(&self, node: NodeId) -> IndexSet<NodeId> {
        self.edges.children(node)
    }

    fn parents(&self, node: NodeId) -> IndexSet<NodeId> {
        self.edges.parents(node)
    }

    fn overwrite_node_data(&mut self, existing: NodeId, source: NodeId) -> bool {
        let Some(payload) = self.points.get(&source).cloned() else {
            return false;
        };
        let Some(point) = self.points.get_mut(&existing) else {
            return false;
        };
        *point = payload;
        self.clamp_fan_in(existing);
        true
    }
}

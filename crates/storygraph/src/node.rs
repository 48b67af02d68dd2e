// SPDX-License-Identifier: MIT OR Apache-2.0
//! Node handles.
//!
//! The engine never looks inside a node. It only needs a cheap handle it can
//! copy, hash and compare, and two handles are the same node exactly when
//! they compare equal.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use uuid::Uuid;

/// Handle type the engine can be generic over.
///
/// Equality is identity: the adapter must hand out distinct handles for
/// distinct nodes even when their payloads are equal.
pub trait GraphNode: Copy + Eq + Hash + fmt::Debug {}

impl<T> GraphNode for T where T: Copy + Eq + Hash + fmt::Debug {}

/// Unique identifier for a node in the bundled adapters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub Uuid);

impl NodeId {
    /// Create a new random node ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

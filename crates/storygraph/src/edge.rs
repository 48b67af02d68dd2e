// SPDX-License-Identifier: MIT OR Apache-2.0
//! Edge (parent → child relation) descriptions.

use serde::{Deserialize, Serialize};

/// A directed parent → child relation between two nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge<E> {
    /// Upstream node
    pub parent: E,
    /// Downstream node
    pub child: E,
}

impl<E> Edge<E> {
    /// Create a new edge description
    pub fn new(parent: E, child: E) -> Self {
        Self { parent, child }
    }
}

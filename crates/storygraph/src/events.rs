// SPDX-License-Identifier: MIT OR Apache-2.0
//! Change notifications for rendering, persistence and undo layers.

use indexmap::IndexMap;

/// Something that changed in a graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphEvent<E> {
    /// A node was created and attached
    NodeAdded {
        /// The new node
        node: E,
        /// Its children right after the edit
        children: Vec<E>,
        /// Its parents right after the edit
        parents: Vec<E>,
    },
    /// A node left the graph
    NodeRemoved {
        /// The removed node
        node: E,
    },
    /// A parent → child edge was added
    NodesConnected {
        /// Lower end
        child: E,
        /// Upper end
        parent: E,
    },
    /// A parent → child edge was removed
    NodesDisconnected {
        /// Lower end
        child: E,
        /// Upper end
        parent: E,
    },
    /// A node's payload was replaced in place
    NodeOverwritten {
        /// The retargeted node
        node: E,
    },
    /// The selection changed
    NodesSelected {
        /// New selection, anchor first
        selection: Vec<E>,
    },
}

/// Callback type for graph notifications
pub type GraphCallback<E> = Box<dyn FnMut(&GraphEvent<E>)>;

/// Handle for unregistering a callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Registered callbacks, called in registration order
pub struct Observers<E> {
    callbacks: IndexMap<ObserverId, GraphCallback<E>>,
    next_id: u64,
}

impl<E> Observers<E> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            callbacks: IndexMap::new(),
            next_id: 1,
        }
    }

    /// Register a callback
    pub fn add(&mut self, callback: GraphCallback<E>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.callbacks.insert(id, callback);
        id
    }

    /// Unregister a callback. Returns whether it was registered.
    pub fn remove(&mut self, id: ObserverId) -> bool {
        self.callbacks.shift_remove(&id).is_some()
    }

    /// Deliver an event to every callback
    pub fn notify(&mut self, event: &GraphEvent<E>) {
        for callback in self.callbacks.values_mut() {
            callback(event);
        }
    }
}

impl<E> Default for Observers<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> std::fmt::Debug for Observers<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("count", &self.callbacks.len())
            .finish()
    }
}

// SPDX-License-Identifier: MIT OR Apache-2.0
//! Graph editing engine for branching narrative tools.
//!
//! Story-point graphs, quest graphs and description alternatives are all
//! directed acyclic graphs hanging off a single start node. This crate
//! provides one engine that edits any of them:
//! - A [`NodeAdapter`] contract each graph flavour implements
//! - A [`GraphEngine`] that connects, disconnects, splices and removes nodes
//!   while keeping the graph acyclic and the start node in place
//! - Longest-path layering ([`GraphEngine::depth_map`]) for layout
//! - A [`SelectionController`] for path selection and change notification
//!
//! ## Architecture
//!
//! The engine never owns node payload or edge storage. It calls through the
//! adapter's hooks and recomputes every structural query from them.

pub mod adapter;
pub mod config;
pub mod edge;
pub mod engine;
pub mod events;
pub mod graphs;
pub mod node;
pub mod selection;
pub mod traversal;

#[cfg(test)]
mod testing;

pub use adapter::NodeAdapter;
pub use config::{ConfigError, EngineConfig, OrphanPolicy};
pub use edge::Edge;
pub use engine::{Disconnection, EditError, GraphEngine, Removal};
pub use events::{GraphCallback, GraphEvent, ObserverId};
pub use node::{GraphNode, NodeId};
pub use selection::{Selection, SelectionController};
pub use traversal::DepthMap;

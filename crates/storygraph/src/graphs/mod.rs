// SPDX-License-Identifier: MIT OR Apache-2.0
//! Node adapters for the graph flavours the tool edits.

pub mod adjacency;
pub mod description;
pub mod story_point;

pub use description::{DescriptionGraph, DescriptionNode};
pub use story_point::{StoryPoint, StoryPointGraph};

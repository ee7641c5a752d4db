//! Graph data structures for visualizing resource relationships
//!
//! This module provides the identity and graph types shared by the resolver
//! and the renderer: resource identities, node/edge records, and the
//! deduplicating accumulator the traversal writes into.

mod accumulator;
mod model;

pub use accumulator::DepGraph;
pub use model::{GraphEdge, GraphNode, NodeShape, ResourceRef, node_label};

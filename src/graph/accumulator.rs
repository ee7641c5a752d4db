//! Deduplicating accumulator for graph nodes and edges

use std::collections::{HashMap, HashSet};

use super::model::{GraphEdge, GraphNode};

/// The dependency graph being accumulated during a run
///
/// Node identity is the label, edge identity is the `(from, to)` pair; adding
/// either twice is a no-op. Insertion order is preserved so rendered output
/// is stable across runs against the same cluster state.
#[derive(Debug, Default)]
pub struct DepGraph {
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
    node_index: HashMap<String, usize>,
    edge_set: HashSet<(String, String)>,
}

impl DepGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node; a node with the same label already present wins.
    pub fn add_node(&mut self, node: GraphNode) {
        if self.node_index.contains_key(&node.label) {
            return;
        }
        self.node_index.insert(node.label.clone(), self.nodes.len());
        self.nodes.push(node);
    }

    /// Add a directed edge between two node labels; duplicates are dropped.
    pub fn add_edge(&mut self, from: &str, to: &str) {
        let key = (from.to_string(), to.to_string());
        if self.edge_set.contains(&key) {
            return;
        }
        self.edges.push(GraphEdge {
            from: key.0.clone(),
            to: key.1.clone(),
        });
        self.edge_set.insert(key);
    }

    pub fn has_node(&self, label: &str) -> bool {
        self.node_index.contains_key(label)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Nodes in insertion order, for the renderer.
    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    /// Edges in insertion order, for the renderer.
    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::NodeShape;

    #[test]
    fn duplicate_node_is_noop() {
        let mut graph = DepGraph::new();
        graph.add_node(GraphNode::new("Pod default/web", NodeShape::Box3d));
        graph.add_node(GraphNode::new("Pod default/web", NodeShape::Box));

        assert_eq!(graph.node_count(), 1);
        // first insertion wins, including its shape
        assert_eq!(graph.nodes()[0].shape, NodeShape::Box3d);
    }

    #[test]
    fn duplicate_edge_is_noop() {
        let mut graph = DepGraph::new();
        graph.add_node(GraphNode::new("a", NodeShape::Ellipse));
        graph.add_node(GraphNode::new("b", NodeShape::Ellipse));
        graph.add_edge("a", "b");
        graph.add_edge("a", "b");

        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn reversed_edge_is_distinct() {
        let mut graph = DepGraph::new();
        graph.add_edge("a", "b");
        graph.add_edge("b", "a");

        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut graph = DepGraph::new();
        graph.add_node(GraphNode::new("z", NodeShape::Ellipse));
        graph.add_node(GraphNode::new("a", NodeShape::Ellipse));
        graph.add_node(GraphNode::new("m", NodeShape::Ellipse));

        let labels: Vec<&str> = graph.nodes().iter().map(|n| n.label.as_str()).collect();
        assert_eq!(labels, ["z", "a", "m"]);
    }
}

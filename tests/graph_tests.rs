//! Graph accumulator and renderer tests
//!
//! Exercises the public graph surface: idempotent insertion, export order,
//! and the DOT projection of both.

use kubegraph::graph::{DepGraph, GraphNode, NodeShape};
use kubegraph::render::to_dot;

#[test]
fn graph_starts_empty() {
    let graph = DepGraph::new();
    assert_eq!(graph.node_count(), 0);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn same_identity_inserted_twice_exports_once() {
    let mut graph = DepGraph::new();
    graph.add_node(GraphNode::new("Pod default/web", NodeShape::Box3d));
    graph.add_node(GraphNode::new("Pod default/web", NodeShape::Box3d));
    graph.add_node(GraphNode::new("Secret default/creds", NodeShape::Note));
    graph.add_edge("Pod default/web", "Secret default/creds");
    graph.add_edge("Pod default/web", "Secret default/creds");

    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn distinct_namespaces_are_distinct_nodes() {
    let mut graph = DepGraph::new();
    graph.add_node(GraphNode::new("Secret default/creds", NodeShape::Note));
    graph.add_node(GraphNode::new("Secret staging/creds", NodeShape::Note));

    assert_eq!(graph.node_count(), 2);
}

#[test]
fn dot_projection_lists_every_node_and_edge() {
    let mut graph = DepGraph::new();
    graph.add_node(GraphNode::new("Deployment default/web", NodeShape::Box));
    graph.add_node(GraphNode::new("ReplicaSet default/web-5d9", NodeShape::Box));
    graph.add_node(GraphNode::new("Pod default/web-5d9-x2k", NodeShape::Box3d));
    graph.add_edge("Deployment default/web", "ReplicaSet default/web-5d9");
    graph.add_edge("ReplicaSet default/web-5d9", "Pod default/web-5d9-x2k");

    let dot = to_dot(&graph);
    assert!(dot.starts_with("strict digraph kubegraph {"));
    assert!(dot.contains("\"Deployment default/web\" [shape=box];"));
    assert!(dot.contains("\"Pod default/web-5d9-x2k\" [shape=box3d];"));
    assert!(dot.contains("\"Deployment default/web\" -> \"ReplicaSet default/web-5d9\";"));
    assert!(dot.contains("\"ReplicaSet default/web-5d9\" -> \"Pod default/web-5d9-x2k\";"));
}

#[test]
fn shape_hints_survive_into_dot() {
    let mut graph = DepGraph::new();
    graph.add_node(GraphNode::new("PVC default/data", NodeShape::Cylinder));
    graph.add_node(GraphNode::new("DNSEndpoint edge/site", NodeShape::Hexagon));
    graph.add_node(GraphNode::new("IngressRoute edge/site", NodeShape::InvHouse));
    graph.add_node(GraphNode::new("Middleware edge/auth", NodeShape::Tab));
    graph.add_node(GraphNode::new("Issuer edge/selfsigned", NodeShape::House));

    let dot = to_dot(&graph);
    assert!(dot.contains("[shape=cylinder];"));
    assert!(dot.contains("[shape=hexagon];"));
    assert!(dot.contains("[shape=invhouse];"));
    assert!(dot.contains("[shape=tab];"));
    assert!(dot.contains("[shape=house];"));
}

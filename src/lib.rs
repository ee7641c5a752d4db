//! kubegraph library
//!
//! Builds a dependency graph for the workloads in a Kubernetes namespace:
//! ownership chains plus the Secrets, ConfigMaps, volumes, service accounts,
//! RBAC bindings, ingress routes, DNS records, and TLS certificates they
//! reference. The binary renders the result to Graphviz DOT and/or SVG; the
//! library surface exists so the traversal can be tested against fixtures.

pub mod cli;
pub mod errors;
pub mod graph;
pub mod kube;
pub mod render;
pub mod resolve;

// Re-export commonly used types for convenience
pub use errors::Error;
pub use graph::{DepGraph, GraphEdge, GraphNode, NodeShape, ResourceRef};
pub use kube::{ClusterClient, KubeClusterClient, NamespaceScope};
pub use resolve::{ExtractContext, ResourceKind, Resolver, build_graph};

//! Identity and rendering primitives for the dependency graph

/// Identity of a cluster resource: kind, namespace, name.
///
/// `namespace` is the empty string for cluster-scoped resources. Equality is
/// exact and case-sensitive on all three fields; this is the key of the
/// resolver's visited set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceRef {
    pub kind: String,
    pub namespace: String,
    pub name: String,
}

impl ResourceRef {
    pub fn new(
        kind: impl Into<String>,
        namespace: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            namespace: namespace.into(),
            name: name.into(),
        }
    }
}

impl std::fmt::Display for ResourceRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.namespace.is_empty() {
            write!(f, "{} {}", self.kind, self.name)
        } else {
            write!(f, "{} {}/{}", self.kind, self.namespace, self.name)
        }
    }
}

/// Graphviz shape hint for a node, purely visual
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeShape {
    Box,
    Box3d,
    Cylinder,
    Ellipse,
    Hexagon,
    House,
    InvHouse,
    Note,
    Tab,
}

impl NodeShape {
    pub fn as_dot(&self) -> &'static str {
        match self {
            NodeShape::Box => "box",
            NodeShape::Box3d => "box3d",
            NodeShape::Cylinder => "cylinder",
            NodeShape::Ellipse => "ellipse",
            NodeShape::Hexagon => "hexagon",
            NodeShape::House => "house",
            NodeShape::InvHouse => "invhouse",
            NodeShape::Note => "note",
            NodeShape::Tab => "tab",
        }
    }
}

/// A node in the dependency graph
///
/// The label doubles as the node identity: two nodes with the same label are
/// the same node. Labels read `"<Kind> <namespace>/<name>"`, with the
/// namespace omitted for cluster-scoped resources.
#[derive(Debug, Clone)]
pub struct GraphNode {
    pub label: String,
    pub shape: NodeShape,
}

impl GraphNode {
    pub fn new(label: impl Into<String>, shape: NodeShape) -> Self {
        Self {
            label: label.into(),
            shape,
        }
    }
}

/// A directed edge between two node labels
///
/// Direction follows the source tool: owner -> dependant for ownership
/// edges, referrer -> referenced for everything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
}

/// Build a node label from its display kind, namespace, and name.
///
/// Pass an empty namespace for cluster-scoped resources.
pub fn node_label(kind: &str, namespace: &str, name: &str) -> String {
    if namespace.is_empty() {
        format!("{kind} {name}")
    } else {
        format!("{kind} {namespace}/{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn namespaced_label() {
        assert_eq!(node_label("Pod", "default", "web-0"), "Pod default/web-0");
    }

    #[test]
    fn cluster_scoped_label() {
        assert_eq!(node_label("PV", "", "pv-data"), "PV pv-data");
        assert_eq!(
            node_label("ClusterRoleBinding", "", "admin"),
            "ClusterRoleBinding admin"
        );
    }

    #[test]
    fn resource_ref_equality_is_case_sensitive() {
        let a = ResourceRef::new("Pod", "default", "web");
        let b = ResourceRef::new("pod", "default", "web");
        assert_ne!(a, b);
        assert_eq!(a, ResourceRef::new("Pod", "default", "web"));
    }
}

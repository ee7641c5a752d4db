//! Per-kind reference extraction rules
//!
//! Each function maps one fetched object to the graph nodes and edges it
//! implies. Extraction is pure: anything that needs another round trip to the
//! API server (a PVC's bound volume, a Service's Endpoints) is returned as a
//! [`Followup`] for the resolver to execute.
//!
//! Objects arrive as `serde_json::Value` so native and custom resources
//! travel the same path; typed views are deserialized locally where the
//! structure warrants it.

use serde::Deserialize;
use serde_json::Value;

use crate::graph::{GraphEdge, GraphNode, NodeShape, node_label};
use crate::resolve::kind::ResourceKind;

/// Bulk-listed RBAC bindings, consulted when a Pod names a ServiceAccount
#[derive(Debug, Default)]
pub struct ExtractContext {
    pub role_bindings: Vec<Value>,
    pub cluster_role_bindings: Vec<Value>,
}

/// Follow-up fetches an extraction asks the resolver to perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Followup {
    /// Get the PVC to discover its bound PersistentVolume
    PvcBinding { namespace: String, claim: String },
    /// Get the Endpoints object backing a Service
    Endpoints { namespace: String, service: String },
}

/// Nodes, edges, and follow-up fetches implied by one object
#[derive(Debug, Default)]
pub struct Extraction {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    pub followups: Vec<Followup>,
}

impl Extraction {
    fn node(&mut self, label: impl Into<String>, shape: NodeShape) {
        self.nodes.push(GraphNode::new(label, shape));
    }

    fn edge(&mut self, from: impl Into<String>, to: impl Into<String>) {
        self.edges.push(GraphEdge {
            from: from.into(),
            to: to.into(),
        });
    }

    /// Add a referenced leaf node plus the referrer -> referenced edge.
    fn leaf(&mut self, from: &str, label: String, shape: NodeShape) {
        self.node(label.clone(), shape);
        self.edge(from, label);
    }
}

pub(crate) fn meta_name(obj: &Value) -> Option<&str> {
    obj.pointer("/metadata/name").and_then(Value::as_str)
}

pub(crate) fn meta_namespace(obj: &Value) -> &str {
    obj.pointer("/metadata/namespace")
        .and_then(Value::as_str)
        .unwrap_or("")
}

/// Extract the references implied by one object of a registered kind.
///
/// Owner references are not handled here; the resolver follows them itself.
pub fn extract(kind: ResourceKind, obj: &Value, ctx: &ExtractContext) -> Extraction {
    match kind {
        ResourceKind::Pod => extract_pod(obj, ctx),
        ResourceKind::Service => extract_service(obj),
        ResourceKind::IngressRoute => extract_ingress_route(obj),
        ResourceKind::Certificate => extract_certificate(obj),
        // DNSEndpoint renders as a bare node; the remaining kinds carry no
        // intrinsic references beyond their owner chain.
        ResourceKind::DNSEndpoint
        | ResourceKind::CertificateRequest
        | ResourceKind::ReplicaSet
        | ResourceKind::Deployment
        | ResourceKind::StatefulSet
        | ResourceKind::DaemonSet
        | ResourceKind::Job
        | ResourceKind::CronJob
        | ResourceKind::Prometheus
        | ResourceKind::Endpoints
        | ResourceKind::PersistentVolumeClaim => extract_plain(kind, obj),
    }
}

/// Node for the object itself, nothing else.
fn extract_plain(kind: ResourceKind, obj: &Value) -> Extraction {
    let mut out = Extraction::default();
    let Some(name) = meta_name(obj) else {
        return out;
    };
    out.node(
        node_label(kind.label_kind(), meta_namespace(obj), name),
        kind.shape(),
    );
    out
}

fn extract_pod(obj: &Value, ctx: &ExtractContext) -> Extraction {
    let mut out = Extraction::default();
    let Some(name) = meta_name(obj) else {
        return out;
    };
    let ns = meta_namespace(obj).to_string();
    let pod = node_label("Pod", &ns, name);
    out.node(pod.clone(), NodeShape::Box3d);

    let Some(spec) = obj.get("spec") else {
        return out;
    };

    let init_containers = spec
        .get("initContainers")
        .and_then(Value::as_array)
        .into_iter()
        .flatten();
    let containers = spec
        .get("containers")
        .and_then(Value::as_array)
        .into_iter()
        .flatten();
    for container in init_containers.chain(containers) {
        extract_container_env(&mut out, &pod, &ns, container);
    }

    for volume in spec
        .get("volumes")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
    {
        extract_volume(&mut out, &pod, &ns, volume);
    }

    for secret in spec
        .get("imagePullSecrets")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
    {
        if let Some(secret_name) = secret.get("name").and_then(Value::as_str) {
            out.leaf(&pod, node_label("Secret", &ns, secret_name), NodeShape::Note);
        }
    }

    if let Some(sa) = spec.get("serviceAccountName").and_then(Value::as_str) {
        if !sa.is_empty() {
            let sa_label = node_label("ServiceAccount", &ns, sa);
            out.leaf(&pod, sa_label.clone(), NodeShape::Ellipse);
            bind_service_account(&mut out, ctx, &ns, sa, &sa_label);
        }
    }

    out
}

/// Env sources referencing Secrets or ConfigMaps, by key or wholesale
fn extract_container_env(out: &mut Extraction, pod: &str, ns: &str, container: &Value) {
    for env in container
        .get("env")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
    {
        if let Some(secret) = env
            .pointer("/valueFrom/secretKeyRef/name")
            .and_then(Value::as_str)
        {
            out.leaf(pod, node_label("Secret", ns, secret), NodeShape::Note);
        } else if let Some(config_map) = env
            .pointer("/valueFrom/configMapKeyRef/name")
            .and_then(Value::as_str)
        {
            out.leaf(pod, node_label("ConfigMap", ns, config_map), NodeShape::Note);
        }
    }

    for env_from in container
        .get("envFrom")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
    {
        if let Some(secret) = env_from.pointer("/secretRef/name").and_then(Value::as_str) {
            out.leaf(pod, node_label("Secret", ns, secret), NodeShape::Note);
        } else if let Some(config_map) = env_from
            .pointer("/configMapRef/name")
            .and_then(Value::as_str)
        {
            out.leaf(pod, node_label("ConfigMap", ns, config_map), NodeShape::Note);
        }
    }
}

fn extract_volume(out: &mut Extraction, pod: &str, ns: &str, volume: &Value) {
    if let Some(secret) = volume.pointer("/secret/secretName").and_then(Value::as_str) {
        out.leaf(pod, node_label("Secret", ns, secret), NodeShape::Note);
    } else if let Some(config_map) = volume.pointer("/configMap/name").and_then(Value::as_str) {
        out.leaf(pod, node_label("ConfigMap", ns, config_map), NodeShape::Note);
    } else if let Some(claim) = volume
        .pointer("/persistentVolumeClaim/claimName")
        .and_then(Value::as_str)
    {
        out.leaf(pod, node_label("PVC", ns, claim), NodeShape::Cylinder);
        out.followups.push(Followup::PvcBinding {
            namespace: ns.to_string(),
            claim: claim.to_string(),
        });
    }
}

#[derive(Debug, Deserialize)]
struct BindingSubject {
    kind: String,
    name: String,
    #[serde(default)]
    namespace: Option<String>,
}

#[derive(Debug, Deserialize)]
struct BindingRoleRef {
    kind: String,
    name: String,
}

/// Wire a ServiceAccount to every RoleBinding and ClusterRoleBinding whose
/// subject list names it, plus each binding's granted role.
fn bind_service_account(
    out: &mut Extraction,
    ctx: &ExtractContext,
    pod_ns: &str,
    sa: &str,
    sa_label: &str,
) {
    for binding in &ctx.role_bindings {
        let Some(binding_name) = meta_name(binding) else {
            continue;
        };
        let binding_ns = meta_namespace(binding);
        // A RoleBinding subject with no namespace names a ServiceAccount in
        // the binding's own namespace.
        if !subjects_contain(binding, sa, pod_ns, binding_ns) {
            continue;
        }
        let binding_label = node_label("RoleBinding", binding_ns, binding_name);
        out.node(binding_label.clone(), NodeShape::Ellipse);
        out.edge(binding_label.clone(), sa_label);
        if let Some(role_ref) = role_ref(binding) {
            // roleRef is a Role in the binding's namespace or a ClusterRole
            let role_label = if role_ref.kind == "Role" {
                node_label("Role", binding_ns, &role_ref.name)
            } else {
                node_label(&role_ref.kind, "", &role_ref.name)
            };
            out.node(role_label.clone(), NodeShape::Ellipse);
            out.edge(binding_label, role_label);
        }
    }

    for binding in &ctx.cluster_role_bindings {
        let Some(binding_name) = meta_name(binding) else {
            continue;
        };
        // ClusterRoleBinding subjects must spell out the namespace
        if !subjects_contain(binding, sa, pod_ns, "") {
            continue;
        }
        let binding_label = node_label("ClusterRoleBinding", "", binding_name);
        out.node(binding_label.clone(), NodeShape::Ellipse);
        out.edge(binding_label.clone(), sa_label);
        if let Some(role_ref) = role_ref(binding) {
            let role_label = node_label(&role_ref.kind, "", &role_ref.name);
            out.node(role_label.clone(), NodeShape::Ellipse);
            out.edge(binding_label, role_label);
        }
    }
}

fn subjects_contain(binding: &Value, sa: &str, sa_ns: &str, default_ns: &str) -> bool {
    binding
        .get("subjects")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(|s| BindingSubject::deserialize(s).ok())
        .any(|subject| {
            subject.kind == "ServiceAccount"
                && subject.name == sa
                && subject.namespace.as_deref().unwrap_or(default_ns) == sa_ns
        })
}

fn role_ref(binding: &Value) -> Option<BindingRoleRef> {
    binding
        .get("roleRef")
        .and_then(|r| BindingRoleRef::deserialize(r).ok())
}

fn extract_service(obj: &Value) -> Extraction {
    let mut out = Extraction::default();
    // ExternalName services point outside the cluster; nothing to resolve
    if obj.pointer("/spec/type").and_then(Value::as_str) == Some("ExternalName") {
        return out;
    }
    let Some(name) = meta_name(obj) else {
        return out;
    };
    let ns = meta_namespace(obj);
    out.node(node_label("Service", ns, name), NodeShape::Ellipse);
    out.followups.push(Followup::Endpoints {
        namespace: ns.to_string(),
        service: name.to_string(),
    });
    out
}

/// Wire a Service to its Endpoints object and each endpoint target.
///
/// Invoked by the resolver once the Endpoints follow-up get has landed.
pub fn extract_endpoints(obj: &Value, service_label: &str) -> Extraction {
    let mut out = Extraction::default();
    let Some(name) = meta_name(obj) else {
        return out;
    };
    let ns = meta_namespace(obj);
    let endpoint_label = node_label("Endpoint", ns, name);
    out.node(endpoint_label.clone(), NodeShape::Ellipse);
    out.edge(service_label, endpoint_label.clone());

    for subset in obj
        .get("subsets")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
    {
        for address in subset
            .get("addresses")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
        {
            let Some(target) = address.get("targetRef") else {
                continue;
            };
            let (Some(kind), Some(target_name)) = (
                target.get("kind").and_then(Value::as_str),
                target.get("name").and_then(Value::as_str),
            ) else {
                continue;
            };
            let target_ns = target
                .get("namespace")
                .and_then(Value::as_str)
                .unwrap_or(ns);
            let target_label = node_label(kind, target_ns, target_name);
            out.node(target_label.clone(), NodeShape::Ellipse);
            out.edge(endpoint_label.clone(), target_label);
        }
    }
    out
}

#[derive(Debug, Deserialize, Default)]
struct IngressRouteSpec {
    #[serde(default)]
    tls: Option<IngressRouteTls>,
    #[serde(default)]
    routes: Vec<IngressRouteRule>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IngressRouteTls {
    #[serde(default)]
    secret_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct IngressRouteRule {
    #[serde(default)]
    services: Vec<NamedRef>,
    #[serde(default)]
    middlewares: Vec<NamedRef>,
}

#[derive(Debug, Deserialize)]
struct NamedRef {
    name: String,
    #[serde(default)]
    namespace: Option<String>,
}

fn extract_ingress_route(obj: &Value) -> Extraction {
    let mut out = Extraction::default();
    let Some(name) = meta_name(obj) else {
        return out;
    };
    let ns = meta_namespace(obj);
    let route_label = node_label("IngressRoute", ns, name);
    out.node(route_label.clone(), NodeShape::InvHouse);

    let spec: IngressRouteSpec = obj
        .get("spec")
        .and_then(|s| IngressRouteSpec::deserialize(s).ok())
        .unwrap_or_default();

    if let Some(secret) = spec.tls.and_then(|tls| tls.secret_name) {
        out.leaf(&route_label, node_label("Secret", ns, &secret), NodeShape::Note);
    }

    for route in &spec.routes {
        for service in &route.services {
            let service_ns = service.namespace.as_deref().unwrap_or(ns);
            out.leaf(
                &route_label,
                node_label("Service", service_ns, &service.name),
                NodeShape::Ellipse,
            );
        }
        for middleware in &route.middlewares {
            let middleware_ns = middleware.namespace.as_deref().unwrap_or(ns);
            out.leaf(
                &route_label,
                node_label("Middleware", middleware_ns, &middleware.name),
                NodeShape::Tab,
            );
        }
    }
    out
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct CertificateSpec {
    #[serde(default)]
    issuer_ref: Option<IssuerRef>,
    #[serde(default)]
    secret_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct IssuerRef {
    #[serde(default)]
    kind: Option<String>,
    name: String,
}

fn extract_certificate(obj: &Value) -> Extraction {
    let mut out = Extraction::default();
    let Some(name) = meta_name(obj) else {
        return out;
    };
    let ns = meta_namespace(obj);
    let cert_label = node_label("Certificate", ns, name);
    out.node(cert_label.clone(), NodeShape::Ellipse);

    let spec: CertificateSpec = obj
        .get("spec")
        .and_then(|s| CertificateSpec::deserialize(s).ok())
        .unwrap_or_default();

    if let Some(issuer) = spec.issuer_ref {
        // Issuers are namespaced, ClusterIssuers are not; cert-manager
        // defaults an absent kind to Issuer
        let issuer_kind = issuer.kind.as_deref().unwrap_or("Issuer");
        let issuer_label = if issuer_kind == "Issuer" {
            node_label("Issuer", ns, &issuer.name)
        } else {
            node_label(issuer_kind, "", &issuer.name)
        };
        out.leaf(&cert_label, issuer_label, NodeShape::House);
    }

    if let Some(secret) = spec.secret_name {
        out.leaf(&cert_label, node_label("Secret", ns, &secret), NodeShape::Note);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn edge_pairs(out: &Extraction) -> Vec<(&str, &str)> {
        out.edges
            .iter()
            .map(|e| (e.from.as_str(), e.to.as_str()))
            .collect()
    }

    #[test]
    fn bare_pod_yields_single_node() {
        let pod = json!({
            "metadata": {"name": "web", "namespace": "default"},
            "spec": {"containers": [{"name": "app", "image": "nginx"}]}
        });
        let out = extract(ResourceKind::Pod, &pod, &ExtractContext::default());

        assert_eq!(out.nodes.len(), 1);
        assert_eq!(out.nodes[0].label, "Pod default/web");
        assert_eq!(out.nodes[0].shape, NodeShape::Box3d);
        assert!(out.edges.is_empty());
        assert!(out.followups.is_empty());
    }

    #[test]
    fn pod_env_sources_cover_init_containers() {
        let pod = json!({
            "metadata": {"name": "web", "namespace": "prod"},
            "spec": {
                "initContainers": [{
                    "name": "migrate",
                    "env": [
                        {"name": "DB_PASS", "valueFrom": {"secretKeyRef": {"name": "db-creds", "key": "password"}}}
                    ]
                }],
                "containers": [{
                    "name": "app",
                    "env": [
                        {"name": "LOG_LEVEL", "value": "info"},
                        {"name": "FLAGS", "valueFrom": {"configMapKeyRef": {"name": "app-flags", "key": "flags"}}}
                    ],
                    "envFrom": [
                        {"secretRef": {"name": "api-keys"}},
                        {"configMapRef": {"name": "app-defaults"}}
                    ]
                }]
            }
        });
        let out = extract(ResourceKind::Pod, &pod, &ExtractContext::default());

        let pairs = edge_pairs(&out);
        assert!(pairs.contains(&("Pod prod/web", "Secret prod/db-creds")));
        assert!(pairs.contains(&("Pod prod/web", "ConfigMap prod/app-flags")));
        assert!(pairs.contains(&("Pod prod/web", "Secret prod/api-keys")));
        assert!(pairs.contains(&("Pod prod/web", "ConfigMap prod/app-defaults")));
        assert_eq!(out.edges.len(), 4);
    }

    #[test]
    fn pod_volumes_and_pull_secrets() {
        let pod = json!({
            "metadata": {"name": "db", "namespace": "default"},
            "spec": {
                "containers": [{"name": "db"}],
                "imagePullSecrets": [{"name": "registry-auth"}],
                "volumes": [
                    {"name": "creds", "secret": {"secretName": "creds"}},
                    {"name": "conf", "configMap": {"name": "db-conf"}},
                    {"name": "data", "persistentVolumeClaim": {"claimName": "db-data"}}
                ]
            }
        });
        let out = extract(ResourceKind::Pod, &pod, &ExtractContext::default());

        let pairs = edge_pairs(&out);
        assert!(pairs.contains(&("Pod default/db", "Secret default/registry-auth")));
        assert!(pairs.contains(&("Pod default/db", "Secret default/creds")));
        assert!(pairs.contains(&("Pod default/db", "ConfigMap default/db-conf")));
        assert!(pairs.contains(&("Pod default/db", "PVC default/db-data")));
        assert_eq!(
            out.followups,
            vec![Followup::PvcBinding {
                namespace: "default".into(),
                claim: "db-data".into()
            }]
        );

        let pvc = out
            .nodes
            .iter()
            .find(|n| n.label == "PVC default/db-data")
            .unwrap();
        assert_eq!(pvc.shape, NodeShape::Cylinder);
    }

    #[test]
    fn service_account_matches_bindings_in_namespace() {
        let ctx = ExtractContext {
            role_bindings: vec![
                json!({
                    "metadata": {"name": "app-rb", "namespace": "prod"},
                    "subjects": [{"kind": "ServiceAccount", "name": "app-sa"}],
                    "roleRef": {"kind": "Role", "name": "app-role", "apiGroup": "rbac.authorization.k8s.io"}
                }),
                // same ServiceAccount name, different namespace: must not match
                json!({
                    "metadata": {"name": "other-rb", "namespace": "staging"},
                    "subjects": [{"kind": "ServiceAccount", "name": "app-sa"}],
                    "roleRef": {"kind": "Role", "name": "other-role", "apiGroup": "rbac.authorization.k8s.io"}
                }),
            ],
            cluster_role_bindings: vec![json!({
                "metadata": {"name": "app-crb"},
                "subjects": [{"kind": "ServiceAccount", "name": "app-sa", "namespace": "prod"}],
                "roleRef": {"kind": "ClusterRole", "name": "reader", "apiGroup": "rbac.authorization.k8s.io"}
            })],
        };
        let pod = json!({
            "metadata": {"name": "web", "namespace": "prod"},
            "spec": {"containers": [{"name": "app"}], "serviceAccountName": "app-sa"}
        });
        let out = extract(ResourceKind::Pod, &pod, &ctx);

        let pairs = edge_pairs(&out);
        assert!(pairs.contains(&("Pod prod/web", "ServiceAccount prod/app-sa")));
        assert!(pairs.contains(&("RoleBinding prod/app-rb", "ServiceAccount prod/app-sa")));
        assert!(pairs.contains(&("RoleBinding prod/app-rb", "Role prod/app-role")));
        assert!(pairs.contains(&("ClusterRoleBinding app-crb", "ServiceAccount prod/app-sa")));
        assert!(pairs.contains(&("ClusterRoleBinding app-crb", "ClusterRole reader")));
        assert!(!pairs.iter().any(|(from, _)| from.contains("other-rb")));
    }

    #[test]
    fn external_name_service_is_skipped() {
        let svc = json!({
            "metadata": {"name": "upstream", "namespace": "default"},
            "spec": {"type": "ExternalName", "externalName": "db.example.com"}
        });
        let out = extract(ResourceKind::Service, &svc, &ExtractContext::default());

        assert!(out.nodes.is_empty());
        assert!(out.followups.is_empty());
    }

    #[test]
    fn cluster_ip_service_requests_endpoints() {
        let svc = json!({
            "metadata": {"name": "web", "namespace": "default"},
            "spec": {"type": "ClusterIP"}
        });
        let out = extract(ResourceKind::Service, &svc, &ExtractContext::default());

        assert_eq!(out.nodes[0].label, "Service default/web");
        assert_eq!(
            out.followups,
            vec![Followup::Endpoints {
                namespace: "default".into(),
                service: "web".into()
            }]
        );
    }

    #[test]
    fn endpoints_wire_service_to_targets() {
        let endpoints = json!({
            "metadata": {"name": "web", "namespace": "default"},
            "subsets": [{
                "addresses": [
                    {"ip": "10.0.0.5", "targetRef": {"kind": "Pod", "name": "web-0", "namespace": "default"}},
                    {"ip": "10.0.0.6"}
                ]
            }]
        });
        let out = extract_endpoints(&endpoints, "Service default/web");

        let pairs = edge_pairs(&out);
        assert!(pairs.contains(&("Service default/web", "Endpoint default/web")));
        assert!(pairs.contains(&("Endpoint default/web", "Pod default/web-0")));
        assert_eq!(out.edges.len(), 2);
    }

    #[test]
    fn ingress_route_tls_services_and_middlewares() {
        let route = json!({
            "metadata": {"name": "site", "namespace": "edge"},
            "spec": {
                "tls": {"secretName": "site-tls"},
                "routes": [{
                    "match": "Host(`example.com`)",
                    "services": [{"name": "frontend", "port": 80}],
                    "middlewares": [{"name": "rate-limit"}, {"name": "auth", "namespace": "infra"}]
                }]
            }
        });
        let out = extract(ResourceKind::IngressRoute, &route, &ExtractContext::default());

        let pairs = edge_pairs(&out);
        assert!(pairs.contains(&("IngressRoute edge/site", "Secret edge/site-tls")));
        assert!(pairs.contains(&("IngressRoute edge/site", "Service edge/frontend")));
        assert!(pairs.contains(&("IngressRoute edge/site", "Middleware edge/rate-limit")));
        assert!(pairs.contains(&("IngressRoute edge/site", "Middleware infra/auth")));
    }

    #[test]
    fn certificate_issuer_scoping() {
        let namespaced = json!({
            "metadata": {"name": "site", "namespace": "edge"},
            "spec": {
                "issuerRef": {"kind": "Issuer", "name": "selfsigned"},
                "secretName": "site-tls"
            }
        });
        let out = extract(ResourceKind::Certificate, &namespaced, &ExtractContext::default());
        let pairs = edge_pairs(&out);
        assert!(pairs.contains(&("Certificate edge/site", "Issuer edge/selfsigned")));
        assert!(pairs.contains(&("Certificate edge/site", "Secret edge/site-tls")));

        let cluster = json!({
            "metadata": {"name": "wild", "namespace": "edge"},
            "spec": {
                "issuerRef": {"kind": "ClusterIssuer", "name": "letsencrypt"},
                "secretName": "wild-tls"
            }
        });
        let out = extract(ResourceKind::Certificate, &cluster, &ExtractContext::default());
        assert!(edge_pairs(&out).contains(&("Certificate edge/wild", "ClusterIssuer letsencrypt")));
    }

    #[test]
    fn dns_endpoint_is_node_only() {
        let record = json!({
            "metadata": {"name": "site-record", "namespace": "edge"},
            "spec": {"endpoints": [{"dnsName": "example.com"}]}
        });
        let out = extract(ResourceKind::DNSEndpoint, &record, &ExtractContext::default());

        assert_eq!(out.nodes.len(), 1);
        assert_eq!(out.nodes[0].label, "DNSEndpoint edge/site-record");
        assert_eq!(out.nodes[0].shape, NodeShape::Hexagon);
        assert!(out.edges.is_empty());
    }
}

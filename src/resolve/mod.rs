//! Graph resolution: kind registry, reference extraction, and traversal
//!
//! The entry point is [`build_graph`], which lists the root resources for
//! the selected scope and drives the [`Resolver`] over them.

mod extract;
mod kind;
mod resolver;

pub use extract::{ExtractContext, Extraction, Followup, extract, extract_endpoints};
pub use kind::ResourceKind;
pub use resolver::Resolver;

use crate::errors::Error;
use crate::graph::DepGraph;
use crate::kube::{ClusterClient, NamespaceScope};

/// Build the full dependency graph for the given scope.
///
/// The initial list calls are fatal on failure; traversal-time fetch
/// failures only cost the affected branch.
pub async fn build_graph(
    client: &dyn ClusterClient,
    scope: &NamespaceScope,
) -> Result<DepGraph, Error> {
    let bulk_list = |kind: &'static str, detail: String| Error::BulkList {
        kind,
        scope: scope.to_string(),
        detail,
    };

    let pods = client
        .list_pods(scope)
        .await
        .map_err(|e| bulk_list("Pod", format!("{e:#}")))?;
    let services = client
        .list_services(scope)
        .await
        .map_err(|e| bulk_list("Service", format!("{e:#}")))?;
    let role_bindings = client
        .list_role_bindings(scope)
        .await
        .map_err(|e| bulk_list("RoleBinding", format!("{e:#}")))?;
    let cluster_role_bindings = client
        .list_cluster_role_bindings()
        .await
        .map_err(|e| bulk_list("ClusterRoleBinding", format!("{e:#}")))?;

    let mut custom_roots = Vec::new();
    match scope {
        NamespaceScope::Namespace(ns) => {
            for kind in ResourceKind::custom_roots() {
                let items = client
                    .list_custom(*kind, ns)
                    .await
                    .map_err(|e| bulk_list(kind.as_str(), format!("{e:#}")))?;
                custom_roots.push((*kind, items));
            }
        }
        NamespaceScope::All => {
            tracing::warn!(
                "custom resources (IngressRoute, DNSEndpoint, Certificate, CertificateRequest) \
                 cannot be enumerated across all namespaces; skipping them"
            );
        }
    }

    let mut graph = DepGraph::new();
    let mut resolver = Resolver::new(
        client,
        ExtractContext {
            role_bindings,
            cluster_role_bindings,
        },
    );

    for pod in &pods {
        resolver.resolve_root(ResourceKind::Pod, pod, &mut graph).await?;
    }
    for service in &services {
        resolver
            .resolve_root(ResourceKind::Service, service, &mut graph)
            .await?;
    }
    for (kind, items) in &custom_roots {
        for item in items {
            resolver.resolve_root(*kind, item, &mut graph).await?;
        }
    }

    Ok(graph)
}

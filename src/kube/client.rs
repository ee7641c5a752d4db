//! Cluster read operations behind an abstract client
//!
//! The resolver only ever talks to [`ClusterClient`], so tests can drive the
//! traversal from canned fixtures. [`KubeClusterClient`] is the production
//! implementation over kube-rs: typed APIs for the native kinds,
//! `DynamicObject` APIs for the custom resources. Everything returns
//! `serde_json::Value` so both travel the same extraction path.

use anyhow::{Context, Result};
use async_trait::async_trait;
use k8s_openapi::api::apps::v1::{DaemonSet, Deployment, ReplicaSet, StatefulSet};
use k8s_openapi::api::batch::v1::{CronJob, Job};
use k8s_openapi::api::core::v1::{Endpoints, PersistentVolumeClaim, Pod, Service};
use k8s_openapi::api::rbac::v1::{ClusterRoleBinding, RoleBinding};
use kube::api::ListParams;
use kube::core::DynamicObject;
use kube::Api;
use serde_json::Value;

use crate::resolve::ResourceKind;

/// Which namespaces the root listing covers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamespaceScope {
    Namespace(String),
    All,
}

impl std::fmt::Display for NamespaceScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NamespaceScope::Namespace(ns) => write!(f, "namespace {ns}"),
            NamespaceScope::All => write!(f, "all namespaces"),
        }
    }
}

/// Read-only cluster access as the resolver sees it
#[async_trait]
pub trait ClusterClient {
    async fn list_pods(&self, scope: &NamespaceScope) -> Result<Vec<Value>>;
    async fn list_services(&self, scope: &NamespaceScope) -> Result<Vec<Value>>;
    async fn list_role_bindings(&self, scope: &NamespaceScope) -> Result<Vec<Value>>;
    async fn list_cluster_role_bindings(&self) -> Result<Vec<Value>>;
    /// List a custom-resource kind; only supported per namespace.
    async fn list_custom(&self, kind: ResourceKind, namespace: &str) -> Result<Vec<Value>>;
    /// Fetch a single object, dispatched through the kind registry.
    async fn get(&self, kind: ResourceKind, namespace: &str, name: &str) -> Result<Value>;
}

/// [`ClusterClient`] backed by a live kube-rs client
pub struct KubeClusterClient {
    client: kube::Client,
}

impl KubeClusterClient {
    pub fn new(client: kube::Client) -> Self {
        Self { client }
    }

    fn dynamic_api(&self, kind: ResourceKind, namespace: &str) -> Result<Api<DynamicObject>> {
        let api_resource = kind
            .api_resource()
            .with_context(|| format!("{kind} has no dynamic API coordinates"))?;
        Ok(Api::namespaced_with(
            self.client.clone(),
            namespace,
            &api_resource,
        ))
    }
}

#[async_trait]
impl ClusterClient for KubeClusterClient {
    async fn list_pods(&self, scope: &NamespaceScope) -> Result<Vec<Value>> {
        list_typed::<Pod>(&self.client, scope).await
    }

    async fn list_services(&self, scope: &NamespaceScope) -> Result<Vec<Value>> {
        list_typed::<Service>(&self.client, scope).await
    }

    async fn list_role_bindings(&self, scope: &NamespaceScope) -> Result<Vec<Value>> {
        list_typed::<RoleBinding>(&self.client, scope).await
    }

    async fn list_cluster_role_bindings(&self) -> Result<Vec<Value>> {
        // cluster-scoped, so no namespace variant exists
        let api: Api<ClusterRoleBinding> = Api::all(self.client.clone());
        let list = api.list(&ListParams::default()).await?;
        to_values(list.items)
    }

    async fn list_custom(&self, kind: ResourceKind, namespace: &str) -> Result<Vec<Value>> {
        let api = self.dynamic_api(kind, namespace)?;
        let list = api
            .list(&ListParams::default())
            .await
            .with_context(|| format!("listing {kind} in {namespace}"))?;
        to_values(list.items)
    }

    async fn get(&self, kind: ResourceKind, namespace: &str, name: &str) -> Result<Value> {
        macro_rules! get_typed {
            ($ty:ty) => {{
                let api: Api<$ty> = Api::namespaced(self.client.clone(), namespace);
                let obj = api
                    .get(name)
                    .await
                    .with_context(|| format!("fetching {kind} {namespace}/{name}"))?;
                Ok(serde_json::to_value(&obj)?)
            }};
        }

        match kind {
            ResourceKind::Pod => get_typed!(Pod),
            ResourceKind::Service => get_typed!(Service),
            ResourceKind::Endpoints => get_typed!(Endpoints),
            ResourceKind::PersistentVolumeClaim => get_typed!(PersistentVolumeClaim),
            ResourceKind::ReplicaSet => get_typed!(ReplicaSet),
            ResourceKind::Deployment => get_typed!(Deployment),
            ResourceKind::StatefulSet => get_typed!(StatefulSet),
            ResourceKind::DaemonSet => get_typed!(DaemonSet),
            ResourceKind::Job => get_typed!(Job),
            ResourceKind::CronJob => get_typed!(CronJob),
            ResourceKind::Prometheus
            | ResourceKind::IngressRoute
            | ResourceKind::DNSEndpoint
            | ResourceKind::Certificate
            | ResourceKind::CertificateRequest => {
                let api = self.dynamic_api(kind, namespace)?;
                let obj = api
                    .get(name)
                    .await
                    .with_context(|| format!("fetching {kind} {namespace}/{name}"))?;
                Ok(serde_json::to_value(&obj)?)
            }
        }
    }
}

async fn list_typed<K>(client: &kube::Client, scope: &NamespaceScope) -> Result<Vec<Value>>
where
    K: kube::Resource<Scope = k8s_openapi::NamespaceResourceScope>
        + Clone
        + serde::Serialize
        + serde::de::DeserializeOwned
        + std::fmt::Debug,
    K::DynamicType: Default,
{
    let api: Api<K> = match scope {
        NamespaceScope::Namespace(ns) => Api::namespaced(client.clone(), ns),
        NamespaceScope::All => Api::all(client.clone()),
    };
    let list = api.list(&ListParams::default()).await?;
    to_values(list.items)
}

fn to_values<T: serde::Serialize>(items: Vec<T>) -> Result<Vec<Value>> {
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        out.push(serde_json::to_value(&item)?);
    }
    Ok(out)
}

//! Worklist-driven ownership traversal
//!
//! Starting from the bulk-listed root objects, the resolver walks owner
//! references and follow-up fetches until the worklist drains. Every
//! distinct resource identity is fetched and extracted at most once; the
//! visited set, not any assumption about the cluster being acyclic, is what
//! guarantees termination.

use std::collections::{HashSet, VecDeque};

use serde_json::Value;

use crate::errors::Error;
use crate::graph::{DepGraph, GraphNode, NodeShape, ResourceRef, node_label};
use crate::kube::ClusterClient;
use crate::resolve::extract::{self, ExtractContext, Extraction, Followup, meta_name, meta_namespace};
use crate::resolve::kind::ResourceKind;

pub struct Resolver<'a> {
    client: &'a dyn ClusterClient,
    ctx: ExtractContext,
    visited: HashSet<ResourceRef>,
    queue: VecDeque<ResourceRef>,
}

impl<'a> Resolver<'a> {
    pub fn new(client: &'a dyn ClusterClient, ctx: ExtractContext) -> Self {
        Self {
            client,
            ctx,
            visited: HashSet::new(),
            queue: VecDeque::new(),
        }
    }

    /// Resolve one already-materialized root object and everything reachable
    /// from it. Roots come straight from the bulk list calls, so they are
    /// marked visited without another get.
    pub async fn resolve_root(
        &mut self,
        kind: ResourceKind,
        obj: &Value,
        graph: &mut DepGraph,
    ) -> Result<(), Error> {
        let Some(name) = meta_name(obj) else {
            tracing::warn!("skipping {kind} object without a name");
            return Ok(());
        };
        let r = ResourceRef::new(kind.as_str(), meta_namespace(obj), name);
        if !self.visited.insert(r) {
            return Ok(());
        }
        self.process_object(kind, obj, graph).await;
        self.drain(graph).await
    }

    /// Pop worklist entries until empty, fetching each at most once.
    ///
    /// A failed get drops that branch with a warning; a kind with no
    /// registered handler aborts the run.
    async fn drain(&mut self, graph: &mut DepGraph) -> Result<(), Error> {
        while let Some(r) = self.queue.pop_front() {
            if !self.visited.insert(r.clone()) {
                continue;
            }
            let kind =
                ResourceKind::parse(&r.kind).ok_or_else(|| Error::UnknownKind(r.kind.clone()))?;
            let obj = match self.client.get(kind, &r.namespace, &r.name).await {
                Ok(obj) => obj,
                Err(err) => {
                    tracing::warn!("unable to retrieve {r}: {err:#}");
                    continue;
                }
            };
            self.process_object(kind, &obj, graph).await;
        }
        Ok(())
    }

    async fn process_object(&mut self, kind: ResourceKind, obj: &Value, graph: &mut DepGraph) {
        if let Some(name) = meta_name(obj) {
            tracing::info!(
                "{}",
                node_label(kind.label_kind(), meta_namespace(obj), name)
            );
        }
        let followups = register(extract::extract(kind, obj, &self.ctx), graph);
        for followup in followups {
            self.run_followup(followup, graph).await;
        }
        self.collect_owners(kind, obj, graph);
    }

    /// Add owner nodes and owner -> dependant edges, and queue each owner
    /// for resolution. Owners inherit the owned object's namespace; none of
    /// the registered owner kinds are cluster-scoped.
    fn collect_owners(&mut self, kind: ResourceKind, obj: &Value, graph: &mut DepGraph) {
        let Some(name) = meta_name(obj) else {
            return;
        };
        let ns = meta_namespace(obj).to_string();
        let owned_label = node_label(kind.label_kind(), &ns, name);

        for owner in obj
            .pointer("/metadata/ownerReferences")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
        {
            let (Some(owner_kind), Some(owner_name)) = (
                owner.get("kind").and_then(Value::as_str),
                owner.get("name").and_then(Value::as_str),
            ) else {
                continue;
            };
            let owner_label = node_label(owner_kind, &ns, owner_name);
            tracing::info!("  owned by {owner_label}");
            graph.add_node(GraphNode::new(owner_label.clone(), NodeShape::Box));
            graph.add_edge(&owner_label, &owned_label);
            self.enqueue(ResourceRef::new(owner_kind, ns.clone(), owner_name));
        }
    }

    fn enqueue(&mut self, r: ResourceRef) {
        if !self.visited.contains(&r) {
            self.queue.push_back(r);
        }
    }

    async fn run_followup(&mut self, followup: Followup, graph: &mut DepGraph) {
        match followup {
            Followup::PvcBinding { namespace, claim } => {
                let r = ResourceRef::new("PersistentVolumeClaim", namespace.clone(), claim.clone());
                if !self.visited.insert(r) {
                    return;
                }
                let obj = match self
                    .client
                    .get(ResourceKind::PersistentVolumeClaim, &namespace, &claim)
                    .await
                {
                    Ok(obj) => obj,
                    Err(err) => {
                        tracing::warn!("unable to retrieve PVC {namespace}/{claim}: {err:#}");
                        return;
                    }
                };
                if let Some(volume) = obj.pointer("/spec/volumeName").and_then(Value::as_str) {
                    tracing::info!("  PVC {namespace}/{claim} bound to PV {volume}");
                    let pv_label = node_label("PV", "", volume);
                    graph.add_node(GraphNode::new(pv_label.clone(), NodeShape::Cylinder));
                    graph.add_edge(&node_label("PVC", &namespace, &claim), &pv_label);
                }
            }
            Followup::Endpoints { namespace, service } => {
                let r = ResourceRef::new("Endpoints", namespace.clone(), service.clone());
                if !self.visited.insert(r) {
                    return;
                }
                let obj = match self
                    .client
                    .get(ResourceKind::Endpoints, &namespace, &service)
                    .await
                {
                    Ok(obj) => obj,
                    Err(err) => {
                        tracing::warn!(
                            "unable to retrieve Endpoints {namespace}/{service}: {err:#}"
                        );
                        return;
                    }
                };
                let service_label = node_label("Service", &namespace, &service);
                register(extract::extract_endpoints(&obj, &service_label), graph);
            }
        }
    }
}

/// Register an extraction's nodes and edges, handing back its follow-ups.
fn register(extraction: Extraction, graph: &mut DepGraph) -> Vec<Followup> {
    for node in extraction.nodes {
        graph.add_node(node);
    }
    for edge in extraction.edges {
        graph.add_edge(&edge.from, &edge.to);
    }
    extraction.followups
}

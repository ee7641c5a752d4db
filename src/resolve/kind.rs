//! Resource kind registry
//!
//! Central enum for every resource kind the builder can fetch. Kind strings
//! found in owner references resolve through [`ResourceKind::parse`]; a
//! string with no variant fails the lookup instead of falling through, so a
//! cluster that has grown past the known schema surfaces an error rather
//! than a silently incomplete graph.

use std::fmt;

use kube::core::ApiResource;

use crate::graph::NodeShape;

/// Every kind with a registered fetch and extraction rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    // Core workloads and their controllers
    Pod,
    ReplicaSet,
    Deployment,
    StatefulSet,
    DaemonSet,
    Job,
    CronJob,
    // Core networking and storage
    Service,
    Endpoints,
    PersistentVolumeClaim,
    // Custom resources
    Prometheus,
    IngressRoute,
    DNSEndpoint,
    Certificate,
    CertificateRequest,
}

impl ResourceKind {
    /// Canonical Kubernetes kind name
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Pod => "Pod",
            ResourceKind::ReplicaSet => "ReplicaSet",
            ResourceKind::Deployment => "Deployment",
            ResourceKind::StatefulSet => "StatefulSet",
            ResourceKind::DaemonSet => "DaemonSet",
            ResourceKind::Job => "Job",
            ResourceKind::CronJob => "CronJob",
            ResourceKind::Service => "Service",
            ResourceKind::Endpoints => "Endpoints",
            ResourceKind::PersistentVolumeClaim => "PersistentVolumeClaim",
            ResourceKind::Prometheus => "Prometheus",
            ResourceKind::IngressRoute => "IngressRoute",
            ResourceKind::DNSEndpoint => "DNSEndpoint",
            ResourceKind::Certificate => "Certificate",
            ResourceKind::CertificateRequest => "CertificateRequest",
        }
    }

    /// Kind part of the node label. Follows the rendered output vocabulary,
    /// which abbreviates the storage kinds.
    pub fn label_kind(&self) -> &'static str {
        match self {
            ResourceKind::PersistentVolumeClaim => "PVC",
            ResourceKind::Endpoints => "Endpoint",
            other => other.as_str(),
        }
    }

    /// Try to resolve a kind string to a registered kind. Exact match; node
    /// identity in the graph is case-sensitive and owner references carry
    /// canonical casing.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Pod" => Some(ResourceKind::Pod),
            "ReplicaSet" => Some(ResourceKind::ReplicaSet),
            "Deployment" => Some(ResourceKind::Deployment),
            "StatefulSet" => Some(ResourceKind::StatefulSet),
            "DaemonSet" => Some(ResourceKind::DaemonSet),
            "Job" => Some(ResourceKind::Job),
            "CronJob" => Some(ResourceKind::CronJob),
            "Service" => Some(ResourceKind::Service),
            "Endpoints" => Some(ResourceKind::Endpoints),
            "PersistentVolumeClaim" => Some(ResourceKind::PersistentVolumeClaim),
            "Prometheus" => Some(ResourceKind::Prometheus),
            "IngressRoute" => Some(ResourceKind::IngressRoute),
            "DNSEndpoint" => Some(ResourceKind::DNSEndpoint),
            "Certificate" => Some(ResourceKind::Certificate),
            "CertificateRequest" => Some(ResourceKind::CertificateRequest),
            _ => None,
        }
    }

    /// Default node shape for this kind
    pub fn shape(&self) -> NodeShape {
        match self {
            ResourceKind::Pod => NodeShape::Box3d,
            ResourceKind::ReplicaSet
            | ResourceKind::Deployment
            | ResourceKind::StatefulSet
            | ResourceKind::DaemonSet
            | ResourceKind::Job
            | ResourceKind::CronJob
            | ResourceKind::Prometheus
            | ResourceKind::CertificateRequest => NodeShape::Box,
            ResourceKind::PersistentVolumeClaim => NodeShape::Cylinder,
            ResourceKind::IngressRoute => NodeShape::InvHouse,
            ResourceKind::DNSEndpoint => NodeShape::Hexagon,
            ResourceKind::Service | ResourceKind::Endpoints | ResourceKind::Certificate => {
                NodeShape::Ellipse
            }
        }
    }

    /// API coordinates for kinds served by a custom resource definition.
    /// Returns `None` for kinds with native typed clients.
    pub fn api_resource(&self) -> Option<ApiResource> {
        let (group, version, plural) = match self {
            ResourceKind::Prometheus => ("monitoring.coreos.com", "v1", "prometheuses"),
            ResourceKind::IngressRoute => ("traefik.containo.us", "v1alpha1", "ingressroutes"),
            ResourceKind::DNSEndpoint => ("externaldns.k8s.io", "v1alpha1", "dnsendpoints"),
            ResourceKind::Certificate => ("cert-manager.io", "v1", "certificates"),
            ResourceKind::CertificateRequest => ("cert-manager.io", "v1", "certificaterequests"),
            _ => return None,
        };
        Some(ApiResource {
            group: group.to_string(),
            version: version.to_string(),
            api_version: format!("{group}/{version}"),
            kind: self.as_str().to_string(),
            plural: plural.to_string(),
        })
    }

    /// The custom kinds listed as graph roots in single-namespace mode.
    /// None of these support all-namespaces listing.
    pub fn custom_roots() -> &'static [Self] {
        &[
            ResourceKind::IngressRoute,
            ResourceKind::DNSEndpoint,
            ResourceKind::Certificate,
            ResourceKind::CertificateRequest,
        ]
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_every_kind() {
        for kind in [
            ResourceKind::Pod,
            ResourceKind::ReplicaSet,
            ResourceKind::Deployment,
            ResourceKind::StatefulSet,
            ResourceKind::DaemonSet,
            ResourceKind::Job,
            ResourceKind::CronJob,
            ResourceKind::Service,
            ResourceKind::Endpoints,
            ResourceKind::PersistentVolumeClaim,
            ResourceKind::Prometheus,
            ResourceKind::IngressRoute,
            ResourceKind::DNSEndpoint,
            ResourceKind::Certificate,
            ResourceKind::CertificateRequest,
        ] {
            assert_eq!(ResourceKind::parse(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn parse_rejects_unknown_and_miscased_kinds() {
        assert_eq!(ResourceKind::parse("Widget"), None);
        assert_eq!(ResourceKind::parse("pod"), None);
        assert_eq!(ResourceKind::parse(""), None);
    }

    #[test]
    fn custom_kinds_carry_api_coordinates() {
        let ar = ResourceKind::Prometheus.api_resource().unwrap();
        assert_eq!(ar.api_version, "monitoring.coreos.com/v1");
        assert_eq!(ar.plural, "prometheuses");

        assert!(ResourceKind::Pod.api_resource().is_none());
        assert!(ResourceKind::Deployment.api_resource().is_none());
    }

    #[test]
    fn storage_kinds_use_abbreviated_labels() {
        assert_eq!(ResourceKind::PersistentVolumeClaim.label_kind(), "PVC");
        assert_eq!(ResourceKind::Endpoints.label_kind(), "Endpoint");
        assert_eq!(ResourceKind::Pod.label_kind(), "Pod");
    }
}

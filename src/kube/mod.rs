//! Kubernetes client module
//!
//! Handles connection to the Kubernetes API server and provides the
//! [`ClusterClient`] abstraction the resolver consumes.
//!
//! Supports HTTP/HTTPS proxy configuration via the standard environment
//! variables (`HTTP_PROXY`, `HTTPS_PROXY`, `NO_PROXY`). Internal cluster
//! hosts are added to `NO_PROXY` automatically so a corporate proxy never
//! sits between this tool and an in-house API server.

mod client;

pub use client::{ClusterClient, KubeClusterClient, NamespaceScope};

use kube::{Client, Config};
use url::Url;

use crate::errors::Error;

/// Initialize a Kubernetes client with automatic proxy bypass
///
/// Uses the default kubeconfig loading strategy: in-cluster config when
/// running in a pod, then `KUBECONFIG`, then `~/.kube/config`. The resolved
/// [`Config`] is returned alongside the client so the caller can read the
/// current context's default namespace.
pub async fn create_client() -> Result<(Client, Config), Error> {
    let config = Config::infer()
        .await
        .map_err(|e| Error::Config(e.to_string()))?;

    if let Ok(url) = Url::parse(&config.cluster_url.to_string()) {
        if let Some(host) = url.host_str() {
            ensure_no_proxy_bypass(host);
        }
    }

    let client = Client::try_from(config.clone()).map_err(|e| Error::Config(e.to_string()))?;
    Ok((client, config))
}

/// Add the API server host to `NO_PROXY` when it looks internal and is not
/// already covered.
fn ensure_no_proxy_bypass(host: &str) {
    if !is_internal_host(host) {
        return;
    }

    let current = std::env::var("NO_PROXY")
        .or_else(|_| std::env::var("no_proxy"))
        .unwrap_or_default();
    if no_proxy_contains(&current, host) {
        return;
    }

    let updated = if current.is_empty() {
        host.to_string()
    } else {
        format!("{current},{host}")
    };
    // SAFETY: called once during startup on the single runtime thread,
    // before any worker threads exist.
    unsafe {
        std::env::set_var("NO_PROXY", &updated);
        std::env::set_var("no_proxy", &updated);
    }
}

/// Private IPs, localhost, and the usual in-cluster and intranet TLDs
fn is_internal_host(host: &str) -> bool {
    if host.starts_with("10.")
        || host.starts_with("172.")
        || host.starts_with("192.168.")
        || host == "localhost"
        || host == "127.0.0.1"
        || host == "::1"
    {
        return true;
    }

    host.ends_with(".local")
        || host.ends_with(".internal")
        || host.ends_with(".cluster.local")
        || host.ends_with(".svc.cluster.local")
}

/// Check whether a `NO_PROXY` value already covers the host, including
/// `.example.com`-style suffix patterns.
fn no_proxy_contains(no_proxy: &str, host: &str) -> bool {
    no_proxy
        .split(',')
        .map(str::trim)
        .filter(|pattern| !pattern.is_empty())
        .any(|pattern| {
            let suffix = pattern.strip_prefix('.').unwrap_or(pattern);
            host == suffix || host.ends_with(&format!(".{suffix}"))
        })
}

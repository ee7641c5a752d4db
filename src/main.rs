//! kubegraph - graph the dependencies of the workloads in a namespace
//!
//! One-shot snapshot: list the root resources, resolve owner chains and
//! cross-resource references, write DOT and/or SVG, exit.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;

use kubegraph::kube::{KubeClusterClient, NamespaceScope, create_client};
use kubegraph::{cli, render, resolve};

/// Filename used when neither --dot nor --svg is given
const DEFAULT_SVG: &str = "kubegraph.svg";

/// Graph ownership and reference chains for the workloads in a Kubernetes namespace
#[derive(Parser, Debug)]
#[command(name = "kubegraph")]
#[command(about = "Graph ownership and reference chains for the workloads in a Kubernetes namespace", long_about = None)]
struct Args {
    /// Process one specific namespace
    #[arg(long, short = 'n')]
    namespace: Option<String>,

    /// Process all namespaces (custom resources are skipped in this mode)
    #[arg(long, short = 'A')]
    all_namespaces: bool,

    /// Write DOT to file
    #[arg(long, short = 'd', value_name = "PATH")]
    dot: Option<PathBuf>,

    /// Write SVG to file (requires the Graphviz "dot" binary)
    #[arg(long, short = 's', value_name = "PATH")]
    svg: Option<PathBuf>,

    /// Suppress traversal output
    #[arg(long, short = 'q')]
    quiet: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    cli::init_logging(args.quiet);

    let (client, config) = create_client().await?;

    let scope = if let Some(ns) = args.namespace {
        NamespaceScope::Namespace(ns)
    } else if args.all_namespaces {
        NamespaceScope::All
    } else {
        NamespaceScope::Namespace(config.default_namespace.clone())
    };
    tracing::info!("building dependency graph for {scope}");

    let cluster = KubeClusterClient::new(client);
    let graph = resolve::build_graph(&cluster, &scope).await?;
    tracing::info!(
        "graph complete: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    let mut wrote = false;
    if let Some(path) = &args.dot {
        render::write_dot(&graph, path)?;
        tracing::info!("wrote {}", path.display());
        wrote = true;
    }
    if let Some(path) = &args.svg {
        render::write_svg(&graph, path)?;
        tracing::info!("wrote {}", path.display());
        wrote = true;
    }
    if !wrote {
        render::write_svg(&graph, Path::new(DEFAULT_SVG))?;
        tracing::info!("wrote {DEFAULT_SVG}");
    }

    Ok(())
}

//! Error taxonomy for a graph-building run
//!
//! Fatal failures surface through this enum. A failed `get` for a single
//! resource during traversal is not represented here; the resolver logs it
//! at warn level and drops that branch of the graph.

/// Fatal errors for a run
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Cluster credentials or context could not be loaded. Nothing has been
    /// listed yet when this fires.
    #[error("failed to load cluster credentials: {0}")]
    Config(String),

    /// One of the initial bulk list calls failed. The run aborts before any
    /// traversal so no partial graph is emitted.
    #[error("listing {kind} ({scope}) failed: {detail}")]
    BulkList {
        kind: &'static str,
        scope: String,
        detail: String,
    },

    /// An owner reference or root named a kind with no registered handler.
    #[error("unknown resource kind \"{0}\"")]
    UnknownKind(String),

    /// Writing DOT or SVG output failed.
    #[error("graph output failed: {0}")]
    Render(String),
}

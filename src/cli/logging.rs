//! Logging initialization

/// Initialize tracing output on stderr.
///
/// Default level is `info` so the traversal narrates what it finds; `--quiet`
/// drops to `warn`. `RUST_LOG` overrides both.
pub fn init_logging(quiet: bool) {
    let default_level = if quiet { "warn" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_target(false)
        .without_time()
        .init();
}

use tracing_subscriber::EnvFilter;

/// Logs go to stderr so rendered output on stdout stays pipeable.
/// `RUST_LOG` wins over the verbosity flag when set.
pub fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

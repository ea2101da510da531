use tracing_subscriber::EnvFilter;

/// Logs go to stderr so they never mix with command output.
/// `RUST_LOG` takes precedence over `--verbose`.
pub fn init(verbose: bool) {
    let level = if verbose { "repotoggle=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

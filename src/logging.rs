use tracing_subscriber::EnvFilter;

/// Initialize tracing on stderr.
///
/// stdout carries the resolved build settings, so log output never goes
/// there. `RUST_LOG` takes precedence; otherwise `verbose` selects `debug`
/// and the default is `warn`.
pub fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .init();
}

use tracing_subscriber::{EnvFilter, fmt};

/// Installs a `fmt` subscriber that writes to standard error.
///
/// `level` is an [`EnvFilter`] directive such as `warn` or
/// `postfixer=debug`. A `RUST_LOG` environment variable takes precedence
/// over it, and an invalid directive falls back to `warn`.
///
/// Calling this more than once is harmless; only the first call installs a
/// subscriber.
pub fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))
                                                  .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = fmt().with_env_filter(filter)
                 .with_target(false)
                 .with_writer(std::io::stderr)
                 .try_init();
}

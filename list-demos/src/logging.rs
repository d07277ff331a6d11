use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs the global subscriber. `LISTS_LOG` wins over `default_level`.
/// Logs go to stderr so demo output on stdout stays readable.
pub fn init(default_level: &str) {
    let env_filter = EnvFilter::try_from_env("LISTS_LOG")
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();
}

use std::io;
use tracing_subscriber::{fmt, EnvFilter};

fn env_filter(default_directives: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives))
}

/// Compact stdout logging. Honors `RUST_LOG`, defaulting to info for the
/// application and the HTTP layers. Writes to stdout so environments that
/// hide stderr still show request logs.
pub fn init_logging_default() {
    let _ = fmt()
        .with_env_filter(env_filter("info,tower_http=info,axum=info"))
        .with_target(false)
        .compact()
        .with_writer(io::stdout)
        .try_init();
}

/// JSON stdout logging for container deployments. Honors `RUST_LOG`.
pub fn init_logging_json() {
    let _ = fmt()
        .with_env_filter(env_filter("info"))
        .with_target(false)
        .json()
        .with_writer(io::stdout)
        .try_init();
}

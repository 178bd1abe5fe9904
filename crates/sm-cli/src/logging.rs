use tracing_subscriber::{filter::LevelFilter, EnvFilter};

/// Log to stderr, filtered by `RUST_LOG` with "warn" as the fallback, so
/// stdout carries only results.
pub fn init_subscriber() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    tracing_subscriber::fmt()
        .with_env_filter(filter(&directives))
        .with_writer(std::io::stderr)
        .init();
}

/// Unparseable directives are dropped rather than rejected.
fn filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(directives)
}

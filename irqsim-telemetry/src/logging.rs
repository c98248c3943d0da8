//! Structured logging with tracing.

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global tracing subscriber.
///
/// Respects `RUST_LOG`; defaults to `info`. Call once from the binary.
pub fn init() {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_thread_names(true)
        .with_span_events(FmtSpan::NONE)
        .init()
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    #[traced_test]
    #[test]
    fn emits_through_tracing() {
        tracing::info!("interrupt queued");
        assert!(logs_contain("interrupt queued"));
    }
}

// File: crates/bench-chart/src/logging.rs
// Summary: Diagnostic logging to stderr; stdout is reserved for the usage line.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the stderr subscriber for the current thread. `RUST_LOG`
/// overrides the default `warn` level.
pub fn setup_logger() -> tracing::subscriber::DefaultGuard {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
                .with_ansi(std::io::IsTerminal::is_terminal(&std::io::stderr()))
                .compact()
                .with_file(false)
                .with_line_number(false),
        )
        .with(filter)
        .set_default()
}

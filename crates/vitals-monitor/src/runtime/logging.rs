use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber with optional JSON output.
///
/// Logs go to stderr so stdout stays a clean console stream. Keep the
/// returned guard alive until shutdown or buffered lines are lost.
pub fn init_tracing(json_output: bool) -> WorkerGuard {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,vitals_monitor=debug,vitals_core=info"));
    let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());

    if json_output {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(writer))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().pretty().with_writer(writer))
            .init();
    }
    guard
}

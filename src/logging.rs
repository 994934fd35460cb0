use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (`EnvFilter` syntax).
pub const LOG_ENV: &str = "AMORTIZE_LOG";

/// Initialize the tracing subscriber.
///
/// Logs go to stderr so stdout carries nothing but the rendered schedule.
/// Defaults to `info` level if `AMORTIZE_LOG` is not set.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .init();
}

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log filter (falls back to `RUST_LOG`).
pub const LOG_FILTER_ENV: &str = "PRODUCT_EDITOR_LOG";

/// Environment variable naming a log file; stderr is used when unset.
pub const LOG_FILE_ENV: &str = "PRODUCT_EDITOR_LOG_FILE";

/// Initialize tracing.
///
/// The filter comes from `PRODUCT_EDITOR_LOG`, then `RUST_LOG`, then
/// `default_level`. Output goes to stderr so stdout stays reserved for
/// command results, unless `PRODUCT_EDITOR_LOG_FILE` names a file.
pub fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    if let Ok(log_path) = std::env::var(LOG_FILE_ENV) {
        match std::fs::File::create(&log_path) {
            Ok(file) => {
                let file_layer = fmt::layer()
                    .with_writer(file)
                    .with_ansi(false)
                    .with_target(true)
                    .with_level(true);
                tracing_subscriber::registry()
                    .with(filter)
                    .with(file_layer)
                    .init();
                return;
            }
            Err(err) => {
                eprintln!("Warning: Failed to create log file {log_path}: {err}");
            }
        }
    }

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_target(false);
    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .init();
}

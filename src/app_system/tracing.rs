use tracing_subscriber::fmt::time::uptime;
use tracing_subscriber::EnvFilter;

use crate::app_config::LogFormat;

/// Installs the global tracing subscriber.
///
/// Levels come from `RUST_LOG` (default `info`):
///
/// ```text
/// RUST_LOG=debug order_service                                   # everything
/// RUST_LOG=order_service::services=debug,order_service=info order_service
/// ```
///
/// Safe to call more than once; later calls are no-ops.
pub fn setup_tracing(format: LogFormat) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(uptime());

    let _ = match format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}

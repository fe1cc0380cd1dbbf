use crate::config::LoggingSettings;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn env_filter(settings: &LoggingSettings) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.level))
}

/// Initialize logging for the HTTP service
///
/// `format = "pretty"` gives human-readable output, anything else JSON lines.
pub fn init_server_logger(settings: &LoggingSettings) {
    let registry = tracing_subscriber::registry().with(env_filter(settings));

    if settings.format == "pretty" {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(false).pretty())
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(false).json())
            .init();
    }
}

/// Initialize logging for the interactive client
///
/// Logs go to stderr so they never interleave with rendered results.
pub fn init_cli_logger(settings: &LoggingSettings) {
    tracing_subscriber::registry()
        .with(env_filter(settings))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

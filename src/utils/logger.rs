use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// `--verbose` wins over the configured level; unknown levels fall back to info.
pub fn resolve_level(verbose: bool, configured: &str) -> &'static str {
    if verbose {
        return "debug";
    }
    let configured = configured.trim().to_ascii_lowercase();
    LOG_LEVELS
        .iter()
        .copied()
        .find(|level| *level == configured)
        .unwrap_or("info")
}

fn filter_directive(level: &str) -> String {
    format!("business_model_generator={},warn", level)
}

fn default_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_directive(level)))
}

/// Logs go to stderr so the presentation on stdout stays clean.
pub fn init_cli_logger(level: &str) {
    tracing_subscriber::registry()
        .with(default_filter(level))
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

/// JSON log lines, for runs driven by a config file in automation.
pub fn init_json_logger(level: &str) {
    tracing_subscriber::registry()
        .with(default_filter(level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .init();
}

use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is not set.
pub(crate) fn default_filter() -> EnvFilter {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "gradeportal={lvl},gradeportal_access={lvl},gradeportal_auth={lvl},gradeportal_core={lvl},gradeportal_observability={lvl},tower_http=warn,hyper=warn",
            lvl = log_level
        ))
    })
}

/// Initialize basic console logging when observability is switched off.
///
/// # Configuration
///
/// - **Log Level**: `LOG_LEVEL` (default: "info"), overridden by `RUST_LOG`
/// - **Format**: Compact, with ANSI colors
///
/// Calling this twice is harmless; the second call keeps the first subscriber.
pub fn init_basic_console_logging() {
    let console_layer = fmt::layer()
        .compact()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(true)
        .with_filter(default_filter());

    if tracing_subscriber::registry().with(console_layer).try_init().is_ok() {
        tracing::info!("Observability disabled - console logging only");
    }
}

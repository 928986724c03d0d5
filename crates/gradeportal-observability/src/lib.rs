//! Grade portal observability
//!
//! Provides:
//! - Tracing subscriber setup (compact console or JSON lines)
//! - HTTP request/response logging middleware
//! - Prometheus metrics, including access decision counters
//!
//! Metrics can be compiled out via the `observability` feature flag. At
//! runtime they can be switched off with `OBSERVABILITY_ENABLED=false`, in
//! which case only console logging is installed.
//!
//! # Examples
//!
//! ```no_run
//! use gradeportal_observability::{init_metrics, init_tracing};
//!
//! #[tokio::main]
//! async fn main() {
//!     init_tracing();
//!     let _handle = init_metrics();
//!     // ... application code ...
//! }
//! ```

pub mod basic_logging;
pub mod logging;
#[cfg(feature = "observability")]
pub mod metrics;

pub use basic_logging::init_basic_console_logging;
pub use logging::{LogFormat, init_tracing, is_observability_enabled, logging_middleware};

#[cfg(feature = "observability")]
pub use metrics_exporter_prometheus::PrometheusHandle;

#[cfg(feature = "observability")]
pub use self::metrics::{
    init_metrics, metrics_middleware, track_access_decision, track_token_rejected,
};

// No-op stubs when metrics are compiled out
#[cfg(not(feature = "observability"))]
pub mod stubs {
    use axum::{extract::Request, middleware::Next, response::Response};

    /// Stand-in for the Prometheus handle; renders nothing.
    #[derive(Debug, Clone, Default)]
    pub struct PrometheusHandle;

    impl PrometheusHandle {
        pub fn render(&self) -> String {
            String::new()
        }
    }

    pub async fn metrics_middleware(req: Request, next: Next) -> Response {
        next.run(req).await
    }

    pub fn init_metrics() -> Option<PrometheusHandle> {
        None
    }

    pub fn track_access_decision(_outcome: &str) {}
    pub fn track_token_rejected(_extractor: &'static str) {}
}

#[cfg(not(feature = "observability"))]
pub use stubs::*;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use std::time::{Duration, Instant};
use tracing::error;

use crate::logging::is_observability_enabled;

/// Path label for requests no route matched.
const UNMATCHED_PATH: &str = "unmatched";

/// Initialize the Prometheus exporter and its upkeep task.
///
/// Returns `None` when observability is disabled or a recorder is already
/// installed. Must be called from within a Tokio runtime.
pub fn init_metrics() -> Option<PrometheusHandle> {
    if !is_observability_enabled() {
        return None;
    }

    let builder = PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full("http_request_duration_seconds".to_string()),
            &[
                0.001, 0.005, 0.01, 0.025, 0.05, 0.075, 0.1, 0.25, 0.5, 0.75, 1.0, 2.5, 5.0, 7.5,
                10.0,
            ],
        )
        .inspect_err(|e| error!("Failed to set histogram buckets: {}", e))
        .ok()?;

    let handle = builder
        .install_recorder()
        .inspect_err(|e| error!("Failed to install Prometheus recorder: {}", e))
        .ok()?;

    // Spawn upkeep task to drain histogram buffers
    let upkeep_handle = handle.clone();
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(Duration::from_secs(5)).await;
            upkeep_handle.run_upkeep();
        }
    });

    Some(handle)
}

/// Metrics middleware to track HTTP requests
pub async fn metrics_middleware(req: Request, next: Next) -> Response {
    if !is_observability_enabled() {
        return next.run(req).await;
    }

    let start = Instant::now();
    let method = req.method().as_str().to_owned();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| UNMATCHED_PATH.to_owned());

    gauge!("http_requests_active").increment(1.0);

    let response = next.run(req).await;

    let latency = start.elapsed().as_secs_f64();
    let status = response.status().as_u16().to_string();

    counter!("http_requests_total", "method" => method.clone(), "path" => path.clone(), "status" => status).increment(1);
    histogram!("http_request_duration_seconds", "method" => method, "path" => path).record(latency);

    gauge!("http_requests_active").decrement(1.0);

    response
}

/// Counts one resolver decision, labelled `render`, `redirect`, `blocked`
/// or `loading`.
pub fn track_access_decision(outcome: &str) {
    if !is_observability_enabled() {
        return;
    }
    counter!("access_decisions_total", "outcome" => outcome.to_string()).increment(1);
}

/// Counts a bearer token that failed verification, labelled with the
/// extractor that rejected it.
pub fn track_token_rejected(extractor: &'static str) {
    if !is_observability_enabled() {
        return;
    }
    counter!("access_tokens_rejected_total", "extractor" => extractor).increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, middleware, routing::get};
    use metrics_exporter_prometheus::PrometheusRecorder;
    use tower::ServiceExt;

    fn series(rendered: &str, name: &str) -> usize {
        let prefix = format!("{}{{", name);
        rendered.lines().filter(|line| line.starts_with(&prefix)).count()
    }

    fn run_requests(recorder: &PrometheusRecorder, paths: &[String]) {
        let app = Router::new()
            .route("/pages/{*path}", get(|| async { "page" }))
            .layer(middleware::from_fn(metrics_middleware));

        metrics::with_local_recorder(recorder, || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            runtime.block_on(async {
                for path in paths {
                    let request = axum::http::Request::builder()
                        .uri(path.as_str())
                        .body(Body::empty())
                        .unwrap();
                    app.clone().oneshot(request).await.unwrap();
                }
            });
        });
    }

    #[test]
    fn test_request_series_do_not_grow_with_distinct_paths() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        let first: Vec<String> = (0..5)
            .flat_map(|i| [format!("/pages/a-{}", i), format!("/missing-{}", i)])
            .collect();
        run_requests(&recorder, &first);
        let before = series(&handle.render(), "http_requests_total");

        let second: Vec<String> = (5..50)
            .flat_map(|i| [format!("/pages/a-{}", i), format!("/missing-{}", i)])
            .collect();
        run_requests(&recorder, &second);
        let rendered = handle.render();

        assert_eq!(series(&rendered, "http_requests_total"), before);
        assert!(!rendered.contains("/missing-"));
        assert!(!rendered.contains("/pages/a-"));
    }

    #[test]
    fn test_rejected_tokens_are_labelled_by_extractor() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        metrics::with_local_recorder(&recorder, || {
            for _ in 0..20 {
                track_token_rejected("current_session");
            }
            track_token_rejected("auth_user");
        });

        let rendered = handle.render();
        assert_eq!(series(&rendered, "access_tokens_rejected_total"), 2);
        assert!(rendered.contains(r#"access_tokens_rejected_total{extractor="current_session"} 20"#));
    }
}

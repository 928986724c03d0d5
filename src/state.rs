use gradeportal_config::{CorsConfig, JwtConfig};
use gradeportal_observability::{PrometheusHandle, init_metrics};

#[derive(Clone)]
pub struct AppState {
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    /// Renders `/metrics`; `None` when observability is off.
    pub metrics: Option<PrometheusHandle>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("cors_config", &self.cors_config)
            .field("metrics", &self.metrics.is_some())
            .finish_non_exhaustive()
    }
}

/// Builds the state from the environment. Must run inside the Tokio runtime
/// because the metrics exporter spawns its upkeep task.
pub fn init_app_state() -> AppState {
    AppState {
        jwt_config: JwtConfig::from_env(),
        cors_config: CorsConfig::from_env(),
        metrics: init_metrics(),
    }
}

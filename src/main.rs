use anyhow::Context;
use dotenvy::dotenv;
use gradeportal::router::init_router;
use gradeportal::state::init_app_state;
use gradeportal_config::ServerConfig;
use gradeportal_observability::init_tracing;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing();

    let state = init_app_state();
    let app = init_router(state);

    let server_config = ServerConfig::from_env();
    let addr = server_config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("🚀 Server running on http://{}", addr);
    info!("📚 Swagger UI available at http://{}/swagger-ui", addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}

use anyhow::Context;

use magazyn_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    magazyn_observability::init();

    let config = ApiConfig::from_env().context("invalid configuration")?;
    tracing::info!(
        session_idle_secs = config.session_idle.as_secs(),
        prune_interval_secs = config.prune_interval.as_secs(),
        "configuration loaded"
    );

    let app = magazyn_api::app::build_app(config.clone()).await;

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server crashed")?;
    Ok(())
}

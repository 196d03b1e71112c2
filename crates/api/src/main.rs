use anyhow::Context;

use catalog_api::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    catalog_observability::init();

    let config = Config::from_env().context("invalid configuration")?;
    let app = catalog_api::app::build_app(&config);

    let listener = tokio::net::TcpListener::bind(config.http_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.http_addr))?;

    tracing::info!(
        addr = %listener.local_addr()?,
        default_page_size = config.page_limits.default_size,
        max_page_size = config.page_limits.max_size,
        "listening"
    );

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

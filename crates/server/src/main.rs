use anyhow::Context;
use dela_server::{AppConfig, AppState, storage};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dela_server=info,tower_http=info".into()),
        )
        .init();

    let config = AppConfig::from_env();
    tracing::info!("data directory: {}", config.data_dir.display());
    tracing::info!("uploads directory: {}", config.uploads_dir.display());
    tracing::info!("templates directory: {}", config.templates_dir.display());
    tracing::info!("showing tasks of user {}", config.user_id);

    let db = storage::init_db(&config.data_dir)?;
    tracing::info!("database initialized");

    std::fs::create_dir_all(&config.uploads_dir).with_context(|| {
        format!("creating uploads directory {}", config.uploads_dir.display())
    })?;

    let addr = format!("0.0.0.0:{}", config.port);
    let app = dela_server::app(AppState::new(db, config));

    tracing::info!("starting server at http://{addr}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}

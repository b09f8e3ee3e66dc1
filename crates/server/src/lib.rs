pub mod config;
pub mod error;
pub mod pages;
pub mod render;
pub mod routes;
pub mod storage;
pub mod uploads;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub use config::AppConfig;
use render::Templates;
use storage::Db;
use uploads::Uploads;

/// Template the page is rendered into.
pub const LAYOUT_TEMPLATE: &str = "layout.html";

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: Db,
    pub config: AppConfig,
    pub templates: Templates,
    pub uploads: Uploads,
}

impl AppState {
    pub fn new(db: Db, config: AppConfig) -> Self {
        Self {
            templates: Templates::new(&config.templates_dir),
            uploads: Uploads::new(&config.uploads_dir),
            db,
            config,
        }
    }
}

/// Build the router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    let config = state.config.clone();

    let mut app = Router::new()
        .route("/", get(routes::index::index))
        .route(
            "/upload",
            post(routes::upload::upload).layer(DefaultBodyLimit::max(config.upload_limit)),
        )
        .route("/health", get(routes::health::health))
        .nest_service("/uploads", ServeDir::new(&config.uploads_dir));

    if config.public_dir.exists() {
        tracing::info!("serving static files from {}", config.public_dir.display());
        app = app.fallback_service(ServeDir::new(&config.public_dir));
    }

    app.layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

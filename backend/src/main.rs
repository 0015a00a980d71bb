use dotenvy::dotenv;
use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use tower_http::cors::{CorsLayer, AllowOrigin};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::Level;
use std::sync::Arc;
mod handlers {
    pub mod collection_dtos;
    pub mod collection_handlers;
}
mod models {
    pub mod lead_models;
}
mod repositories {
    pub mod lead_repository;
}
mod config;
mod error;
mod schema;
use repositories::lead_repository::LeadRepository;
use handlers::collection_handlers;
pub type DbPool = r2d2::Pool<ConnectionManager<SqliteConnection>>;
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");
async fn health_check() -> &'static str {
    "OK"
}
pub struct AppState {
    lead_repository: Arc<LeadRepository>,
}
pub fn build_pool(database_url: &str) -> anyhow::Result<DbPool> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool = r2d2::Pool::builder().build(manager)?;
    Ok(pool)
}
pub fn run_migrations(pool: &DbPool) -> anyhow::Result<()> {
    let mut conn = pool.get()?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| anyhow::anyhow!("Failed to run migrations: {}", e))?;
    for version in applied {
        tracing::info!("Applied migration {}", version);
    }
    Ok(())
}
/// API routes. Static hosting, tracing and CORS are layered on in `main`.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/collections/{collection}", post(collection_handlers::insert_record))
        .with_state(state)
}
#[cfg(test)]
pub fn test_pool() -> DbPool {
    // one connection, otherwise every checkout would see a different in-memory database
    let manager = ConnectionManager::<SqliteConnection>::new(":memory:");
    let pool = r2d2::Pool::builder()
        .max_size(1)
        .build(manager)
        .expect("Failed to create test pool");
    run_migrations(&pool).expect("Failed to migrate test pool");
    pool
}
#[cfg(test)]
pub fn test_state() -> Arc<AppState> {
    Arc::new(AppState {
        lead_repository: Arc::new(LeadRepository::new(test_pool())),
    })
}
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    use tracing_subscriber::{fmt, EnvFilter};
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tbr_backend=debug,tower_http=info"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();
    let config = config::Config::from_env();
    let pool = build_pool(&config.database_url)?;
    run_migrations(&pool)?;
    let state = Arc::new(AppState {
        lead_repository: Arc::new(LeadRepository::new(pool)),
    });
    let allow_origin = if config.is_development() {
        AllowOrigin::any()
    } else {
        AllowOrigin::exact(config.frontend_url.parse::<HeaderValue>()?)
    };
    // unknown paths fall back to index.html so client-side routes survive a reload
    let index_file = format!("{}/index.html", config.static_dir);
    let app = build_router(state)
        .fallback_service(ServeDir::new(&config.static_dir).not_found_service(ServeFile::new(index_file)))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .layer(
            CorsLayer::new()
                .allow_methods([axum::http::Method::GET, axum::http::Method::POST, axum::http::Method::OPTIONS])
                .allow_origin(allow_origin)
                .allow_headers([
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                    axum::http::header::ORIGIN,
                ])
        );
    use tokio::net::TcpListener;
    tracing::info!("Starting server on port {} ({})", config.port, config.environment);
    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

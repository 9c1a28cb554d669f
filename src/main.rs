//src/main.rs

use axum::{
    routing::{get, put},
    Json, Router,
};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;

mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod middleware;
mod models;
mod services;

use crate::config::AppState;
use crate::docs::ApiDoc;

fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .route("/api/fichas"
               ,get(handlers::fichas::list_visible_fichas)
               .post(handlers::fichas::create_ficha)
        )
        .route("/api/fichas/{id}"
               ,put(handlers::fichas::update_ficha)
               .delete(handlers::fichas::delete_ficha)
        )
        .route("/api/customers", get(handlers::crm::list_customers))
        .route("/api/dashboard/date", put(handlers::dashboard::select_date))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    let app_state = AppState::new().await?;
    let addr = app_state.config.server_addr.clone();
    let app = router(app_state);

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}

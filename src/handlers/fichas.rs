// src/handlers/fichas.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    handlers::dashboard::render_view,
    middleware::i18n::Locale,
    models::{
        dashboard::DashboardView,
        ficha::{Ficha, FichaDraft},
    },
};

// GET /api/fichas
#[utoipa::path(
    get,
    path = "/api/fichas",
    tag = "Fichas",
    responses(
        (status = 200, description = "Fichas visíveis para a data selecionada", body = DashboardView)
    )
)]
pub async fn list_visible_fichas(
    State(app_state): State<AppState>,
    locale: Locale,
) -> impl IntoResponse {

    let dashboard = app_state.dashboard.lock().await;
    (StatusCode::OK, Json(render_view(&dashboard, locale)))
}

// POST /api/fichas
#[utoipa::path(
    post,
    path = "/api/fichas",
    tag = "Fichas",
    request_body = FichaDraft,
    responses(
        (status = 201, description = "Ficha criada", body = Ficha),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn create_ficha(
    State(app_state): State<AppState>,
    Json(payload): Json<FichaDraft>,
) -> Result<impl IntoResponse, AppError> {

    payload.validate()?;

    let ficha = app_state.dashboard.lock().await.on_add_ficha(payload);
    tracing::info!("📝 Ficha {} criada para o cliente {}", ficha.id, ficha.customer_code);

    Ok((StatusCode::CREATED, Json(ficha)))
}

// PUT /api/fichas/{id}
#[utoipa::path(
    put,
    path = "/api/fichas/{id}",
    tag = "Fichas",
    request_body = FichaDraft,
    responses(
        (status = 204, description = "Ficha atualizada (ID desconhecido é ignorado)"),
        (status = 400, description = "Dados inválidos")
    ),
    params(
        ("id" = String, Path, description = "ID da Ficha")
    )
)]
pub async fn update_ficha(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<FichaDraft>,
) -> Result<impl IntoResponse, AppError> {

    payload.validate()?;

    let mut dashboard = app_state.dashboard.lock().await;
    if dashboard.contains_ficha(&id) {
        tracing::info!("✏️ Ficha {} atualizada", id);
    } else {
        tracing::debug!("Ficha {} não encontrada; nada a atualizar", id);
    }
    dashboard.amend_ficha(&id, payload);

    Ok(StatusCode::NO_CONTENT)
}

// DELETE /api/fichas/{id}
#[utoipa::path(
    delete,
    path = "/api/fichas/{id}",
    tag = "Fichas",
    responses(
        (status = 204, description = "Ficha removida (ID desconhecido é ignorado)")
    ),
    params(
        ("id" = String, Path, description = "ID da Ficha")
    )
)]
pub async fn delete_ficha(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {

    let mut dashboard = app_state.dashboard.lock().await;
    if dashboard.contains_ficha(&id) {
        tracing::info!("🗑️ Ficha {} removida", id);
    }
    dashboard.on_delete_ficha(&id);

    StatusCode::NO_CONTENT
}

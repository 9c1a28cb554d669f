// src/handlers/dashboard.rs

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    common::date_format::long_date,
    config::AppState,
    middleware::i18n::Locale,
    models::dashboard::{DashboardView, SelectDatePayload},
    services::DashboardService,
};

// Monta a resposta a partir do estado atual; nada aqui fica guardado.
pub(crate) fn render_view(dashboard: &DashboardService, locale: Locale) -> DashboardView {
    let selected_date = dashboard.selected_date();
    let fichas: Vec<_> = dashboard.visible_fichas().into_iter().cloned().collect();

    DashboardView {
        selected_date,
        selected_date_label: selected_date.map(|d| long_date(d, locale)),
        total: dashboard.total(),
        visible_count: fichas.len(),
        fichas,
    }
}

// PUT /api/dashboard/date
#[utoipa::path(
    put,
    path = "/api/dashboard/date",
    tag = "Dashboard",
    request_body = SelectDatePayload,
    responses(
        (status = 200, description = "Data selecionada; fichas do dia", body = DashboardView),
    )
)]
pub async fn select_date(
    State(app_state): State<AppState>,
    locale: Locale,
    Json(payload): Json<SelectDatePayload>,
) -> impl IntoResponse {

    let mut dashboard = app_state.dashboard.lock().await;
    dashboard.on_select_date(payload.date);

    match payload.date {
        Some(date) => tracing::info!("📅 Filtro de data: {}", date),
        None => tracing::info!("📅 Filtro de data removido"),
    }

    (StatusCode::OK, Json(render_view(&dashboard, locale)))
}

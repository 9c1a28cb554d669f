// src/handlers/crm.rs

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{config::AppState, models::crm::Customer};

// GET /api/customers
#[utoipa::path(
    get,
    path = "/api/customers",
    tag = "CRM",
    responses(
        (status = 200, description = "Clientes cadastrados, em ordem de registro", body = Vec<Customer>)
    )
)]
pub async fn list_customers(State(app_state): State<AppState>) -> impl IntoResponse {
    let customers = app_state.dashboard.lock().await.customers().to_vec();
    (StatusCode::OK, Json(customers))
}

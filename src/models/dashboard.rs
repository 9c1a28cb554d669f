// src/models/dashboard.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::ficha::Ficha;

// O que a tela "Fichas do Dia" recebe
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    #[schema(value_type = Option<String>, format = Date, example = "2024-03-01")]
    pub selected_date: Option<NaiveDate>,

    // Data já formatada no idioma do cliente (Accept-Language)
    #[schema(example = "1 de março de 2024")]
    pub selected_date_label: Option<String>,

    // Total de fichas na sessão, com ou sem filtro
    pub total: usize,
    pub visible_count: usize,

    pub fichas: Vec<Ficha>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SelectDatePayload {
    // null limpa o filtro
    #[serde(default)]
    #[schema(value_type = Option<String>, format = Date, example = "2024-03-01")]
    pub date: Option<NaiveDate>,
}

// src/db/seed.rs

use std::path::Path;

use serde::Deserialize;

use crate::{
    common::error::AppError,
    models::{crm::Customer, ficha::Ficha},
};

// Dados de demonstração embutidos no binário
const DEMO_SEED: &str = include_str!("../../data/seed.json");

/// Carga inicial da sessão: fichas (mais recente primeiro) e clientes.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedData {
    #[serde(default)]
    pub fichas: Vec<Ficha>,
    #[serde(default)]
    pub customers: Vec<Customer>,
}

impl SeedData {
    pub fn from_json(raw: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn demo() -> Result<Self, AppError> {
        Self::from_json(DEMO_SEED)
    }

    /// Lê o arquivo informado ou, sem caminho, usa os dados de demonstração.
    pub async fn load(path: Option<&Path>) -> Result<Self, AppError> {
        match path {
            Some(path) => {
                let raw = tokio::fs::read_to_string(path).await?;
                let seed = Self::from_json(&raw)?;
                tracing::info!(
                    "📦 Seed carregado de {}: {} fichas, {} clientes",
                    path.display(),
                    seed.fichas.len(),
                    seed.customers.len()
                );
                Ok(seed)
            }
            None => {
                let seed = Self::demo()?;
                tracing::info!(
                    "📦 Usando dados de demonstração: {} fichas, {} clientes",
                    seed.fichas.len(),
                    seed.customers.len()
                );
                Ok(seed)
            }
        }
    }
}

// src/models/crm.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// --- CLIENTE ---

/// Entrada do cadastro de clientes. O `code` é a chave; o primeiro nome
/// registrado para um código é o que fica.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[schema(example = "C001")]
    pub code: String,

    #[schema(example = "Maria da Silva")]
    pub name: String,
}

impl Customer {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

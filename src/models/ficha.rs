// src/models/ficha.rs

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

// --- FICHA (O Registro) ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Ficha {
    #[schema(example = "F001")]
    pub id: String,

    #[schema(example = "C001")]
    pub customer_code: String,

    // Cópia do nome no momento da criação
    #[schema(example = "Maria da Silva")]
    pub customer_name: String,

    // Guarda o offset local em que foi criada; o filtro por dia usa esse offset.
    #[schema(value_type = String, format = DateTime, example = "2024-03-01T09:30:00-03:00")]
    pub creation_date: DateTime<FixedOffset>,

    // Campos de negócio que o núcleo não interpreta.
    // No JSON ficam no mesmo nível dos campos acima.
    #[serde(flatten)]
    pub details: BTreeMap<String, Value>,
}

// Chaves que o servidor define; nunca vêm do cliente
const RESERVED_KEYS: [&str; 2] = ["id", "creationDate"];

/// O que o operador preenche: tudo menos `id` e `creationDate`.
/// Usado tanto na criação quanto na edição de uma ficha.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FichaDraft {
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "C001")]
    pub customer_code: String,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Maria da Silva")]
    pub customer_name: String,

    #[serde(flatten)]
    pub details: BTreeMap<String, Value>,
}

impl FichaDraft {
    pub fn new(customer_code: impl Into<String>, customer_name: impl Into<String>) -> Self {
        Self {
            customer_code: customer_code.into(),
            customer_name: customer_name.into(),
            details: BTreeMap::new(),
        }
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: Value) -> Self {
        self.details.insert(key.into(), value);
        self
    }

    /// Monta a ficha com `id` e `creation_date` definidos aqui. Cópias dessas
    /// chaves enviadas pelo cliente são descartadas.
    pub(crate) fn complete(self, id: String, creation_date: DateTime<FixedOffset>) -> Ficha {
        let mut details = self.details;
        for key in RESERVED_KEYS {
            details.remove(key);
        }

        Ficha {
            id,
            customer_code: self.customer_code,
            customer_name: self.customer_name,
            creation_date,
            details,
        }
    }
}

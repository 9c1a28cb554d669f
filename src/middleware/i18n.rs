// src/middleware/i18n.rs

use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts};

/// Idioma em que as datas são exibidas. Só a formatação de data depende dele.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    PtBr,
    En,
}

impl Locale {
    /// Escolhe pelo primeiro idioma do `Accept-Language`. Sem cabeçalho ou
    /// sem idioma reconhecido, fica em pt-BR.
    pub fn from_accept_language(header_str: &str) -> Self {
        accept_language::parse(header_str)
            .first()
            .map(|tag| {
                // "pt-BR" -> "pt", "en" -> "en"
                let primary = tag.split('-').next().unwrap_or(tag);
                match primary.to_ascii_lowercase().as_str() {
                    "en" => Locale::En,
                    _ => Locale::PtBr,
                }
            })
            .unwrap_or_default()
    }
}

impl<S> FromRequestParts<S> for Locale
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let locale = parts
            .headers
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|header_value| header_value.to_str().ok())
            .map(Locale::from_accept_language)
            .unwrap_or_default();

        Ok(locale)
    }
}

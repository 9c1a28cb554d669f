// src/docs.rs

use utoipa::OpenApi;
use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Fichas ---
        handlers::fichas::list_visible_fichas,
        handlers::fichas::create_ficha,
        handlers::fichas::update_ficha,
        handlers::fichas::delete_ficha,

        // --- CRM ---
        handlers::crm::list_customers,

        // --- Dashboard ---
        handlers::dashboard::select_date,
    ),
    components(
        schemas(
            models::ficha::Ficha,
            models::ficha::FichaDraft,
            models::crm::Customer,
            models::dashboard::DashboardView,
            models::dashboard::SelectDatePayload,
        )
    ),
    tags(
        (name = "Fichas", description = "Cadastro e edição de fichas"),
        (name = "CRM", description = "Cadastro de clientes"),
        (name = "Dashboard", description = "Filtro de data do painel")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        assert_eq!(
            paths,
            ["/api/customers", "/api/dashboard/date", "/api/fichas", "/api/fichas/{id}"]
        );
    }
}

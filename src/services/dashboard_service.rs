// src/services/dashboard_service.rs

use chrono::{DateTime, FixedOffset, NaiveDate};

use crate::{
    db::{CustomerRegistry, FichaStore, SeedData},
    models::{
        crm::Customer,
        ficha::{Ficha, FichaDraft},
    },
    services::{date_filter, id_generator::IdPolicy},
};

/// Estado da sessão do painel: fichas, clientes e o dia selecionado.
///
/// É o único dono dessas três peças; quem está de fora só age pelas
/// intenções `on_*` e lê o resultado por [`visible_fichas`](Self::visible_fichas).
#[derive(Debug, Clone)]
pub struct DashboardService {
    fichas: FichaStore,
    customers: CustomerRegistry,
    selected_date: Option<NaiveDate>,
}

impl DashboardService {
    pub fn new(seed: SeedData, policy: IdPolicy, selected_date: Option<NaiveDate>) -> Self {
        Self {
            fichas: FichaStore::seeded(policy, seed.fichas),
            customers: CustomerRegistry::seeded(seed.customers),
            selected_date,
        }
    }

    // =========================================================================
    //  INTENÇÕES
    // =========================================================================

    pub fn on_add_ficha(&mut self, draft: FichaDraft) -> Ficha {
        let ficha = self.fichas.insert(draft);
        self.customers.register(&ficha.customer_code, &ficha.customer_name);
        ficha
    }

    /// Como [`on_add_ficha`](Self::on_add_ficha), com o instante de criação informado.
    pub fn add_ficha_at(&mut self, draft: FichaDraft, now: DateTime<FixedOffset>) -> Ficha {
        let ficha = self.fichas.insert_at(draft, now);
        self.customers.register(&ficha.customer_code, &ficha.customer_name);
        ficha
    }

    pub fn on_update_ficha(&mut self, updated: Ficha) {
        self.fichas.update(updated);
    }

    /// Troca os campos editáveis de uma ficha mantendo `id` e `creation_date`.
    /// ID desconhecido não faz nada.
    pub fn amend_ficha(&mut self, id: &str, changes: FichaDraft) {
        let Some(current) = self.fichas.get(id) else {
            return;
        };
        let updated = changes.complete(current.id.clone(), current.creation_date);
        self.on_update_ficha(updated);
    }

    pub fn on_delete_ficha(&mut self, id: &str) {
        self.fichas.delete(id);
    }

    pub fn on_select_date(&mut self, date: Option<NaiveDate>) {
        self.selected_date = date;
    }

    // =========================================================================
    //  LEITURA
    // =========================================================================

    // Recalculado a cada leitura
    pub fn visible_fichas(&self) -> Vec<&Ficha> {
        date_filter::visible(self.fichas.all(), self.selected_date)
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    pub fn customers(&self) -> &[Customer] {
        self.customers.list()
    }

    pub fn total(&self) -> usize {
        self.fichas.len()
    }

    pub fn contains_ficha(&self, id: &str) -> bool {
        self.fichas.get(id).is_some()
    }
}

// src/db/ficha_store.rs

use std::collections::VecDeque;

use chrono::{DateTime, FixedOffset, Local};

use crate::{
    models::ficha::{Ficha, FichaDraft},
    services::id_generator::{next_id, sequence_of, IdPolicy},
};

/// Fichas da sessão, da mais recente para a mais antiga (ordem de inserção,
/// não de `creation_date`).
///
/// Atualizar ou excluir um ID que não existe não faz nada e não gera erro.
#[derive(Debug, Clone, Default)]
pub struct FichaStore {
    fichas: VecDeque<Ficha>,
    policy: IdPolicy,
    // Próxima contagem para `IdPolicy::Monotonic`; nunca desce
    issued: usize,
}

impl FichaStore {
    pub fn new(policy: IdPolicy) -> Self {
        Self {
            fichas: VecDeque::new(),
            policy,
            issued: 0,
        }
    }

    /// Carrega fichas já prontas, na ordem em que vieram.
    pub fn seeded(policy: IdPolicy, fichas: Vec<Ficha>) -> Self {
        let highest = fichas
            .iter()
            .filter_map(|f| sequence_of(&f.id))
            .max()
            .unwrap_or(0);
        let issued = highest.max(fichas.len());

        Self {
            fichas: fichas.into(),
            policy,
            issued,
        }
    }

    pub fn insert(&mut self, draft: FichaDraft) -> Ficha {
        self.insert_at(draft, Local::now().fixed_offset())
    }

    /// Como [`insert`](Self::insert), com o instante de criação informado.
    pub fn insert_at(&mut self, draft: FichaDraft, now: DateTime<FixedOffset>) -> Ficha {
        let id = self.issue_id();
        let ficha = draft.complete(id, now);
        self.fichas.push_front(ficha.clone());
        ficha
    }

    pub fn update(&mut self, updated: Ficha) {
        if let Some(slot) = self.fichas.iter_mut().find(|f| f.id == updated.id) {
            *slot = updated;
        }
    }

    pub fn delete(&mut self, id: &str) {
        if let Some(pos) = self.fichas.iter().position(|f| f.id == id) {
            self.fichas.remove(pos);
        }
    }

    pub fn get(&self, id: &str) -> Option<&Ficha> {
        self.fichas.iter().find(|f| f.id == id)
    }

    pub fn all(&self) -> impl Iterator<Item = &Ficha> {
        self.fichas.iter()
    }

    pub fn len(&self) -> usize {
        self.fichas.len()
    }

    fn issue_id(&mut self) -> String {
        match self.policy {
            IdPolicy::StoreSize => next_id(self.fichas.len()),
            IdPolicy::Monotonic => {
                let id = next_id(self.issued);
                self.issued = self.issued.saturating_add(1);
                id
            }
        }
    }
}

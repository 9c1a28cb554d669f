// src/db/customer_registry.rs

use crate::models::crm::Customer;

/// Cadastro de clientes em memória. Só cresce: um código registrado nunca
/// sai nem tem o nome trocado.
#[derive(Debug, Clone, Default)]
pub struct CustomerRegistry {
    // Ordem de registro (seed primeiro)
    customers: Vec<Customer>,
}

impl CustomerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Monta o cadastro passando cada cliente por [`register`](Self::register);
    /// códigos repetidos ficam com o primeiro nome.
    pub fn seeded<I>(customers: I) -> Self
    where
        I: IntoIterator<Item = Customer>,
    {
        let mut registry = Self::new();
        for customer in customers {
            registry.register(&customer.code, &customer.name);
        }
        registry
    }

    pub fn contains(&self, code: &str) -> bool {
        self.customers.iter().any(|c| c.code == code)
    }

    pub fn register(&mut self, code: &str, name: &str) {
        if !self.contains(code) {
            self.customers.push(Customer::new(code, name));
        }
    }

    pub fn get(&self, code: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.code == code)
    }

    pub fn list(&self) -> &[Customer] {
        &self.customers
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_adds_unknown_code() {
        let mut registry = CustomerRegistry::new();
        assert!(!registry.contains("C1"));

        registry.register("C1", "Alice");

        assert!(registry.contains("C1"));
        assert_eq!(registry.list(), [Customer::new("C1", "Alice")]);
    }

    #[test]
    fn first_name_wins() {
        let mut registry = CustomerRegistry::new();
        registry.register("C1", "Alice");
        registry.register("C1", "Alicia");

        assert_eq!(registry.list().len(), 1);
        assert_eq!(registry.get("C1").map(|c| c.name.as_str()), Some("Alice"));
    }

    #[test]
    fn seed_duplicates_collapse() {
        let registry = CustomerRegistry::seeded([
            Customer::new("C1", "Alice"),
            Customer::new("C2", "Bruno"),
            Customer::new("C1", "Outra Alice"),
        ]);

        let codes: Vec<&str> = registry.list().iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, ["C1", "C2"]);
        assert_eq!(registry.get("C1").unwrap().name, "Alice");
    }
}

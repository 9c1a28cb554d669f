pub mod customer_registry;
pub use customer_registry::CustomerRegistry;
pub mod ficha_store;
pub use ficha_store::FichaStore;
pub mod seed;
pub use seed::SeedData;

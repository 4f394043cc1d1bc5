// Adapters layer: concrete implementations for external systems (storage, seed data, version metadata).

pub mod memory_catalog;
pub mod seed;
pub mod storage;
pub mod version;

pub use memory_catalog::InMemoryCatalog;
pub use storage::LocalStorage;

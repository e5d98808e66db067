mod connection;
mod memory;
mod postgres;
mod seed;
mod store;

pub use connection::{check_health, create_pool};
pub use memory::MemoryStore;
pub use postgres::PgStore;
pub use seed::{sample_catalog, seed_if_empty};
pub use store::{ProductStore, UserStore};

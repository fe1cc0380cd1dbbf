// Service exports
pub mod advocates_api;
pub mod memory;
pub mod postgres;
pub mod seed;
pub mod store;

pub use advocates_api::{AdvocateFetcher, FetchError, HttpAdvocateClient};
pub use memory::InMemoryStore;
pub use postgres::PostgresClient;
pub use seed::seed_advocates;
pub use store::{AdvocateStore, StoreError};

use crate::models::{Advocate, NewAdvocate};
use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur when reading or writing advocates
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Duplicate record: {0}")]
    UniqueViolation(String),

    #[error("Constraint violated: {0}")]
    CheckViolation(String),
}

/// Persistence for the advocates table
#[async_trait]
pub trait AdvocateStore: Send + Sync {
    /// All advocates ordered by id
    async fn list_advocates(&self) -> Result<Vec<Advocate>, StoreError>;

    async fn count_advocates(&self) -> Result<i64, StoreError>;

    /// Insert all records atomically, returning them with ids assigned
    async fn insert_advocates(&self, records: &[NewAdvocate]) -> Result<Vec<Advocate>, StoreError>;

    async fn health_check(&self) -> Result<bool, StoreError>;
}

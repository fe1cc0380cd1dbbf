use crate::models::{Advocate, NewAdvocate};
use crate::services::store::{AdvocateStore, StoreError};
use async_trait::async_trait;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::types::Json;
use sqlx::{PgPool, Row};
use std::time::Duration;

const UNIQUE_VIOLATION: &str = "23505";
const CHECK_VIOLATION: &str = "23514";

/// Map constraint failures to their own variants
fn classify(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        match db_err.code().as_deref() {
            Some(UNIQUE_VIOLATION) => return StoreError::UniqueViolation(db_err.message().to_string()),
            Some(CHECK_VIOLATION) => return StoreError::CheckViolation(db_err.message().to_string()),
            _ => {}
        }
    }
    StoreError::SqlxError(err)
}

fn advocate_from_row(row: &PgRow) -> Result<Advocate, sqlx::Error> {
    let specialties: Json<Vec<String>> = row.try_get("specialties")?;

    Ok(Advocate {
        id: row.try_get("id")?,
        first_name: row.try_get("first_name")?,
        last_name: row.try_get("last_name")?,
        city: row.try_get("city")?,
        degree: row.try_get("degree")?,
        specialties: specialties.0,
        years_of_experience: row.try_get("years_of_experience")?,
        phone_number: row.try_get("phone_number")?,
        created_at: row.try_get("created_at")?,
    })
}

/// PostgreSQL-backed advocate store
pub struct PostgresClient {
    pool: PgPool,
}

impl PostgresClient {
    /// Connect and run embedded migrations
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
        acquire_timeout: Duration,
        idle_timeout: Duration,
    ) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(acquire_timeout)
            .idle_timeout(idle_timeout)
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a new PostgreSQL client from settings
    pub async fn from_settings(
        settings: &crate::config::DatabaseSettings,
    ) -> Result<Self, StoreError> {
        tracing::info!(
            "Connecting to PostgreSQL (max: {}, min: {})",
            settings.max_connections,
            settings.min_connections
        );

        Self::new(
            &settings.url,
            settings.max_connections,
            settings.min_connections,
            Duration::from_secs(settings.acquire_timeout_secs),
            Duration::from_secs(settings.idle_timeout_secs),
        )
        .await
    }
}

#[async_trait]
impl AdvocateStore for PostgresClient {
    async fn list_advocates(&self) -> Result<Vec<Advocate>, StoreError> {
        let query = r#"
            SELECT id, first_name, last_name, city, degree, specialties,
                   years_of_experience, phone_number, created_at
            FROM advocates
            ORDER BY id
        "#;

        let rows = sqlx::query(query).fetch_all(&self.pool).await?;

        let advocates = rows
            .iter()
            .map(advocate_from_row)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!("Loaded {} advocates", advocates.len());

        Ok(advocates)
    }

    async fn count_advocates(&self) -> Result<i64, StoreError> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM advocates")
            .fetch_one(&self.pool)
            .await?;

        Ok(row.try_get("count")?)
    }

    async fn insert_advocates(&self, records: &[NewAdvocate]) -> Result<Vec<Advocate>, StoreError> {
        let query = r#"
            INSERT INTO advocates
                (first_name, last_name, city, degree, specialties, years_of_experience, phone_number)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, first_name, last_name, city, degree, specialties,
                      years_of_experience, phone_number, created_at
        "#;

        let mut tx = self.pool.begin().await?;
        let mut inserted = Vec::with_capacity(records.len());

        for record in records {
            let row = sqlx::query(query)
                .bind(&record.first_name)
                .bind(&record.last_name)
                .bind(&record.city)
                .bind(&record.degree)
                .bind(Json(&record.specialties))
                .bind(record.years_of_experience)
                .bind(&record.phone_number)
                .fetch_one(&mut *tx)
                .await
                .map_err(classify)?;

            inserted.push(advocate_from_row(&row)?);
        }

        tx.commit().await?;

        tracing::info!("Inserted {} advocates", inserted.len());

        Ok(inserted)
    }

    async fn health_check(&self) -> Result<bool, StoreError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}

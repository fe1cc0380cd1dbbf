use crate::models::{Advocate, NewAdvocate};
use crate::services::store::{AdvocateStore, StoreError};
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

/// Process-local advocate store
///
/// Used when PostgreSQL is unreachable in development. Enforces the same
/// check constraints as the database schema.
#[derive(Default)]
pub struct InMemoryStore {
    advocates: Mutex<Vec<Advocate>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_advocates(advocates: Vec<Advocate>) -> Self {
        Self {
            advocates: Mutex::new(advocates),
        }
    }
}

fn check_constraints(record: &NewAdvocate) -> Result<(), StoreError> {
    if !(0..=50).contains(&record.years_of_experience) {
        return Err(StoreError::CheckViolation(
            "years_of_experience_check".to_string(),
        ));
    }

    let phone = &record.phone_number;
    if !(10..=15).contains(&phone.len()) || !phone.bytes().all(|b| b.is_ascii_digit()) {
        return Err(StoreError::CheckViolation("phone_number_check".to_string()));
    }

    Ok(())
}

#[async_trait]
impl AdvocateStore for InMemoryStore {
    async fn list_advocates(&self) -> Result<Vec<Advocate>, StoreError> {
        Ok(self.advocates.lock().await.clone())
    }

    async fn count_advocates(&self) -> Result<i64, StoreError> {
        Ok(self.advocates.lock().await.len() as i64)
    }

    async fn insert_advocates(&self, records: &[NewAdvocate]) -> Result<Vec<Advocate>, StoreError> {
        for record in records {
            check_constraints(record)?;
        }

        let mut advocates = self.advocates.lock().await;
        let mut next_id = advocates.iter().map(|a| a.id).max().unwrap_or(0);
        let now = Utc::now();

        let inserted: Vec<Advocate> = records
            .iter()
            .cloned()
            .map(|record| {
                next_id += 1;
                record.into_advocate(next_id, now)
            })
            .collect();

        advocates.extend(inserted.iter().cloned());

        Ok(inserted)
    }

    async fn health_check(&self) -> Result<bool, StoreError> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(years: i32, phone: &str) -> NewAdvocate {
        NewAdvocate {
            first_name: "Laura".to_string(),
            last_name: "Clark".to_string(),
            city: "Dallas".to_string(),
            degree: "MSW".to_string(),
            specialties: vec![],
            years_of_experience: years,
            phone_number: phone.to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let store = InMemoryStore::new();
        let inserted = store
            .insert_advocates(&[record(4, "5550123456"), record(5, "5550123457")])
            .await
            .unwrap();

        assert_eq!(inserted.iter().map(|a| a.id).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(store.count_advocates().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_check_constraints_reject_whole_batch() {
        let store = InMemoryStore::new();

        let err = store
            .insert_advocates(&[record(4, "5550123456"), record(51, "5550123456")])
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::CheckViolation(_)));

        let err = store
            .insert_advocates(&[record(4, "555-012-3456")])
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::CheckViolation(_)));

        assert_eq!(store.count_advocates().await.unwrap(), 0);
    }
}

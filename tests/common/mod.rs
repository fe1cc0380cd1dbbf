// Shared fixtures for integration tests

#![allow(dead_code)]

use advocate_directory::{
    Advocate, AdvocateFetcher, AdvocatesResponse, ControllerPhase, ControllerSnapshot, FetchError,
    SearchDataController,
};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

pub fn create_test_advocate(id: i32, first: &str, last: &str, city: &str, degree: &str) -> Advocate {
    Advocate {
        id,
        first_name: first.to_string(),
        last_name: last.to_string(),
        city: city.to_string(),
        degree: degree.to_string(),
        specialties: vec!["Mental Health".to_string()],
        years_of_experience: 10,
        phone_number: "5551234567".to_string(),
        created_at: Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap(),
    }
}

pub fn list_response(data: Vec<Advocate>) -> AdvocatesResponse {
    AdvocatesResponse {
        count: data.len(),
        data,
        filters: None,
    }
}

/// A canned reply with simulated latency
#[derive(Clone)]
pub struct Reply {
    pub delay: Duration,
    pub result: Result<AdvocatesResponse, FetchError>,
}

impl Reply {
    pub fn ok(data: Vec<Advocate>) -> Self {
        Self { delay: Duration::ZERO, result: Ok(list_response(data)) }
    }

    pub fn err(error: FetchError) -> Self {
        Self { delay: Duration::ZERO, result: Err(error) }
    }

    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// Fetcher that records request paths and answers from a script
///
/// Replies are consumed in request order; once the script is empty the
/// fallback reply is used.
pub struct ScriptedFetcher {
    calls: Mutex<Vec<String>>,
    script: Mutex<VecDeque<Reply>>,
    fallback: Reply,
}

impl ScriptedFetcher {
    pub fn new(fallback: Reply) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            script: Mutex::new(VecDeque::new()),
            fallback,
        }
    }

    pub fn with_script(fallback: Reply, script: Vec<Reply>) -> Self {
        let fetcher = Self::new(fallback);
        *fetcher.script.lock().unwrap() = script.into();
        fetcher
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AdvocateFetcher for ScriptedFetcher {
    async fn fetch(&self, path: &str) -> Result<AdvocatesResponse, FetchError> {
        self.calls.lock().unwrap().push(path.to_string());
        let reply = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone());

        if !reply.delay.is_zero() {
            tokio::time::sleep(reply.delay).await;
        }
        reply.result
    }
}

/// Wait until no request is in flight and no search is pending
pub async fn settle(controller: &SearchDataController) -> ControllerSnapshot {
    let mut updates = controller.subscribe();
    let settled = tokio::time::timeout(
        Duration::from_secs(60),
        updates.wait_for(|s| !s.loading.is_loading && s.phase != ControllerPhase::Debouncing),
    )
    .await
    .expect("controller did not settle")
    .expect("controller dropped");
    settled.clone()
}

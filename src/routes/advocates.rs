use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::apply_filters;
use crate::models::{AdvocateQuery, AdvocatesResponse, AppliedFilters, ErrorResponse, HealthResponse, SeedResponse};
use crate::services::{seed_advocates, AdvocateStore, StoreError};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn AdvocateStore>,
    /// Include internal error text in 500 responses
    pub expose_errors: bool,
}

impl AppState {
    pub fn new(store: Arc<dyn AdvocateStore>, expose_errors: bool) -> Self {
        Self { store, expose_errors }
    }

    fn internal_error(&self, error: &str, err: &StoreError) -> HttpResponse {
        let message = if self.expose_errors {
            err.to_string()
        } else {
            "Internal server error".to_string()
        };
        HttpResponse::InternalServerError().json(ErrorResponse::new(error, message, 500))
    }
}

/// Configure all advocate-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/advocates", web::get().to(list_advocates))
        .route("/seed", web::post().to(seed));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let healthy = state.store.health_check().await.unwrap_or(false);

    let status = if healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// List advocates endpoint
///
/// GET /api/advocates?search={text}&city={city}&degree={degree}
///
/// All parameters are optional. Returns `{ data, count, filters }`.
async fn list_advocates(
    state: web::Data<AppState>,
    query: web::Query<AdvocateQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        tracing::info!("Validation failed for list_advocates request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse::new(
            "Validation failed",
            errors.to_string(),
            400,
        ));
    }

    let all = match state.store.list_advocates().await {
        Ok(advocates) => advocates,
        Err(e) => {
            tracing::error!("Error fetching advocates: {}", e);
            return state.internal_error("Failed to fetch advocates", &e);
        }
    };

    let total = all.len();
    let query = query.into_inner();
    let data = apply_filters(all, &query);

    tracing::info!(
        "Returning {} of {} advocates (search={:?}, city={:?}, degree={:?})",
        data.len(),
        total,
        query.search,
        query.city,
        query.degree
    );

    HttpResponse::Ok().json(AdvocatesResponse {
        count: data.len(),
        data,
        filters: Some(AppliedFilters {
            search: query.search,
            city: query.city,
            degree: query.degree,
        }),
    })
}

/// Seed endpoint
///
/// POST /api/seed
///
/// Refuses with 409 when the table already has rows.
async fn seed(state: web::Data<AppState>) -> impl Responder {
    let existing = match state.store.count_advocates().await {
        Ok(count) => count,
        Err(e) => {
            tracing::error!("Error seeding database: {}", e);
            return state.internal_error("Failed to seed database", &e);
        }
    };

    if existing > 0 {
        return HttpResponse::Conflict().json(ErrorResponse {
            error: "Data already exists".to_string(),
            message: "Advocates table is not empty. Clear existing data first.".to_string(),
            status_code: 409,
            count: Some(existing as usize),
        });
    }

    let records = seed_advocates();
    if records.is_empty() {
        return HttpResponse::BadRequest().json(ErrorResponse::new("Invalid seed data", "Seed set is empty", 400));
    }

    match state.store.insert_advocates(&records).await {
        Ok(advocates) => {
            tracing::info!("Seeded {} advocates", advocates.len());
            HttpResponse::Ok().json(SeedResponse {
                success: true,
                count: advocates.len(),
                message: format!("Successfully seeded {} advocate records", advocates.len()),
                advocates,
            })
        }
        Err(StoreError::UniqueViolation(detail)) => {
            tracing::warn!("Seed hit unique constraint: {}", detail);
            HttpResponse::Conflict().json(ErrorResponse::new(
                "Duplicate data detected",
                "Some records already exist in the database",
                409,
            ))
        }
        Err(StoreError::CheckViolation(detail)) => {
            tracing::warn!("Seed hit check constraint: {}", detail);
            HttpResponse::BadRequest().json(ErrorResponse::new(
                "Data validation failed",
                "Some records don't meet database constraints",
                400,
            ))
        }
        Err(e) => {
            tracing::error!("Error seeding database: {}", e);
            state.internal_error("Failed to seed database", &e)
        }
    }
}

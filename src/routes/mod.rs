// Route exports
pub mod advocates;

use actix_web::{error, web, HttpRequest};

use crate::models::ErrorResponse;

pub use advocates::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(advocates::configure),
    );
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Query payload error on {}: {}", req.path(), err);
    let body = ErrorResponse::new("invalid_query", format!("Invalid query: {}", err), 400);
    error::InternalError::from_response(err, actix_web::HttpResponse::BadRequest().json(body)).into()
}

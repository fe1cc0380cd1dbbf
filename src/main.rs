use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use advocate_directory::config::Settings;
use advocate_directory::logging;
use advocate_directory::routes::{self, AppState};
use advocate_directory::services::{AdvocateStore, InMemoryStore, PostgresClient};
use std::sync::Arc;
use tracing::{error, info, warn};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    logging::init_server_logger(&settings.logging);

    info!("Starting advocate directory service...");

    let development = settings.server.is_development();

    // Initialize PostgreSQL client (in development, fall back to memory)
    let store: Arc<dyn AdvocateStore> = match PostgresClient::from_settings(&settings.database).await {
        Ok(client) => {
            info!(
                "PostgreSQL client initialized (max: {} connections)",
                settings.database.max_connections
            );
            Arc::new(client)
        }
        Err(e) if development => {
            warn!("Failed to connect to PostgreSQL ({}), using in-memory store for development", e);
            Arc::new(InMemoryStore::new())
        }
        Err(e) => {
            error!("Failed to connect to PostgreSQL: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::Other, e.to_string()));
        }
    };

    let app_state = AppState::new(store, development);

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{} ({})", host, port, settings.server.environment);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::QueryConfig::default().error_handler(routes::handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}

//! Advocate Directory - healthcare advocate search service and client
//!
//! The server side exposes a filterable list of advocates over HTTP. The
//! client side is [`SearchDataController`], a debounced, cancellation-safe
//! search state machine that drives a UI from that API.

pub mod config;
pub mod core;
pub mod logging;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{ControllerPhase, ControllerSnapshot, FilterState, LoadingState, LoadingView, SearchDataController, SearchOptions};
pub use models::{Advocate, AdvocatesResponse, NewAdvocate};
pub use services::{AdvocateFetcher, AdvocateStore, FetchError, HttpAdvocateClient};

// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Advocate, NewAdvocate};
pub use requests::AdvocateQuery;
pub use responses::{AdvocatesResponse, AppliedFilters, ErrorResponse, HealthResponse, SeedResponse};

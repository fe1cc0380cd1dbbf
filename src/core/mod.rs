// Core exports
pub mod controller;
pub mod filters;
pub mod query;
pub mod timer;
pub mod view;

pub use controller::{
    ControllerPhase, ControllerSnapshot, LoadingState, LoadingView, SearchDataController,
    SearchOptions,
};
pub use filters::{apply_filters, matches_city, matches_degree, matches_search};
pub use query::{FilterState, ADVOCATES_PATH};
pub use timer::{schedule, TimerHandle};
pub use view::{filter_options, results_summary, FilterOptions};

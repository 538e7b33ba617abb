pub mod app;
pub mod error;
pub mod extractors;
mod routes;

pub use app::{build_router, run_server, AppState};

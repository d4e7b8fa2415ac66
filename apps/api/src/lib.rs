#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod infra;
pub mod logging;
pub mod middleware;
pub mod repos;
pub mod routes;
pub mod state;
pub mod telemetry;
pub mod trace_ctx;

// Re-exports for public API
pub use config::db::database_url;
pub use config::server::ServerConfig;
pub use error::AppError;
pub use errors::ErrorCode;
pub use infra::db::connect_db;
pub use infra::state::build_state;
pub use middleware::request_trace::RequestTrace;
pub use middleware::structured_logger::StructuredLogger;
pub use middleware::trace_span::TraceSpan;
pub use state::app_state::AppState;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    api_test_support::test_logging::init();
}

use std::env;

use galaxy_api::infra::state::{build_state, StateBuilder};
use galaxy_api::state::app_state::AppState;
use galaxy_api::AppError;

/// Default test store: a private in-memory SQLite database per state.
pub const IN_MEMORY_SQLITE: &str = "sqlite::memory:";

/// `TEST_DATABASE_URL` when set, otherwise a fresh in-memory SQLite database.
pub fn test_database_url() -> String {
    env::var("TEST_DATABASE_URL")
        .ok()
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| IN_MEMORY_SQLITE.to_string())
}

pub fn test_state_builder() -> StateBuilder {
    build_state().with_database_url(test_database_url())
}

/// Connected and migrated state for a single test.
pub async fn build_test_state() -> Result<AppState, AppError> {
    test_state_builder().build().await
}

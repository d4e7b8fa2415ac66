use crate::config::db::database_url;
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    database_url: Option<String>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self { database_url: None }
    }

    /// Use an explicit connection string instead of `DATABASE_URL`.
    pub fn with_database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        let url = self.database_url.unwrap_or_else(database_url);
        // single entrypoint: connect + migrate
        let conn = bootstrap_db(&url).await?;
        Ok(AppState::new(conn))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}

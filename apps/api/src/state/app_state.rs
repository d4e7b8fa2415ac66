use sea_orm::DatabaseConnection;

/// Application state containing shared resources.
///
/// Built once at startup and handed to every handler through `web::Data`;
/// there is no global database handle.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Pooled database connection
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

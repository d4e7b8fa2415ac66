use std::env;

/// Connection string used when `DATABASE_URL` is not set: a local SQLite file,
/// created on first use.
pub const DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/test.db?mode=rwc";

/// Resolve the database connection string from the environment.
///
/// `DATABASE_URL` selects the backend; when absent the local SQLite file store
/// is used. Heroku-style `postgres://` URLs are normalized to `postgresql://`.
pub fn database_url() -> String {
    resolve_database_url(env::var("DATABASE_URL").ok())
}

fn resolve_database_url(raw: Option<String>) -> String {
    match raw.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()) {
        Some(url) => normalize_postgres_scheme(&url),
        None => DEFAULT_DATABASE_URL.to_string(),
    }
}

fn normalize_postgres_scheme(url: &str) -> String {
    match url.strip_prefix("postgres://") {
        Some(rest) => format!("postgresql://{rest}"),
        None => url.to_string(),
    }
}

/// True for SQLite URLs that point at an in-memory database.
pub fn is_sqlite_memory(url: &str) -> bool {
    url.starts_with("sqlite:") && url.contains(":memory:")
}

pub use sea_orm_migration::prelude::*;
pub use sea_orm_migration::sea_orm::{ConnectionTrait, DatabaseConnection};

mod m20250901_000001_init; // keep filename + module name in sync

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250901_000001_init::Migration)]
    }
}

/// Apply all pending migrations (idempotent).
///
/// Logs how many migrations are defined and applied before and after the run.
pub async fn migrate_up(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let defined = Migrator::migrations().len();
    let applied_before = count_applied_migrations(db).await.unwrap_or(0);

    tracing::info!(
        backend = ?backend,
        defined,
        applied = applied_before,
        "migration.up.start"
    );

    match Migrator::up(db, None).await {
        Ok(()) => {
            let applied_after = count_applied_migrations(db).await.unwrap_or(0);
            tracing::info!(backend = ?backend, applied = applied_after, "migration.up.ok");
            Ok(())
        }
        Err(e) => {
            tracing::error!(backend = ?backend, error = %e, "migration.up.failed");
            Err(e)
        }
    }
}

/// Count the number of migrations that have been applied to the database.
/// Returns 0 if the migration table doesn't exist yet.
pub async fn count_applied_migrations(db: &DatabaseConnection) -> Result<usize, DbErr> {
    match Migrator::get_applied_migrations(db).await {
        Ok(migrations) => Ok(migrations.len()),
        Err(DbErr::Exec(_)) => Ok(0), // Migration table doesn't exist yet
        Err(e) => Err(e),
    }
}

use std::future::Future;
use std::pin::Pin;

use sea_orm::{DatabaseTransaction, TransactionTrait};
use tracing::warn;

use crate::error::AppError;
use crate::state::app_state::AppState;

/// Execute a function within a database transaction.
///
/// Begins a transaction on the pooled connection, runs the closure, commits on
/// `Ok` and rolls back on `Err`. The closure's error is returned unchanged.
pub async fn with_txn<R, F>(state: &AppState, f: F) -> Result<R, AppError>
where
    F: for<'a> FnOnce(
        &'a DatabaseTransaction,
    ) -> Pin<Box<dyn Future<Output = Result<R, AppError>> + Send + 'a>>,
{
    let txn = state.db.begin().await?;
    let out = f(&txn).await;

    match out {
        Ok(val) => {
            txn.commit().await?;
            Ok(val)
        }
        Err(err) => {
            // Best-effort rollback; preserve original error
            if let Err(rollback_err) = txn.rollback().await {
                warn!(error = %rollback_err, "txn.rollback_failed");
            }
            Err(err)
        }
    }
}

use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::errors::domain::DomainError;

/// Execute a function within a database transaction.
///
/// Begins a transaction, runs the closure, commits on Ok and rolls back on
/// Err. Multi-row writes (session creation plus its initial roster) go
/// through here so a reader never observes a partially created session.
pub async fn with_txn<R, F>(db: &DatabaseConnection, f: F) -> Result<R, DomainError>
where
    F: for<'c> FnOnce(
        &'c DatabaseTransaction,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<R, DomainError>> + Send + 'c>,
    >,
{
    let txn = db.begin().await?;
    let out = f(&txn).await;

    match out {
        Ok(val) => {
            txn.commit().await?;
            Ok(val)
        }
        Err(err) => {
            // Best-effort rollback; preserve original error
            let _ = txn.rollback().await;
            Err(err)
        }
    }
}

use futures::future::BoxFuture;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use tracing::warn;

use super::txn_policy::{self, TxnPolicy};
use crate::error::AppError;

/// Run `f` inside one database transaction.
///
/// On `Ok` the process `TxnPolicy` decides between commit and rollback; on
/// `Err` the transaction is rolled back and the original error returned.
pub async fn with_txn<R, F>(db: &DatabaseConnection, f: F) -> Result<R, AppError>
where
    R: Send,
    F: for<'c> FnOnce(&'c DatabaseTransaction) -> BoxFuture<'c, Result<R, AppError>> + Send,
{
    let txn = db.begin().await?;

    match f(&txn).await {
        Ok(val) => {
            match txn_policy::current() {
                TxnPolicy::CommitOnOk => txn.commit().await?,
                TxnPolicy::RollbackOnOk => txn.rollback().await?,
            }
            Ok(val)
        }
        Err(err) => {
            // Best-effort rollback; the closure's error wins.
            if let Err(rollback_err) = txn.rollback().await {
                warn!(error = %rollback_err, "rollback after failed transaction also failed");
            }
            Err(err)
        }
    }
}

use sqlx::{Postgres, Transaction};
use std::error::Error;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared handle to one open transaction.
///
/// Every repository created from the same executor writes through the same
/// transaction, so an entity and its translations become visible together
/// on [`Executor::commit`]. Dropping the last handle without committing
/// rolls the transaction back.
#[derive(Clone)]
pub struct Executor {
    pub tx: Arc<Mutex<Option<Transaction<'static, Postgres>>>>,
}

impl Executor {
    pub fn new(tx: Transaction<'static, Postgres>) -> Self {
        Self {
            tx: Arc::new(Mutex::new(Some(tx))),
        }
    }

    pub async fn commit(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let tx = self.tx.lock().await.take().ok_or("Transaction has been consumed")?;
        tx.commit().await?;
        Ok(())
    }

    pub async fn rollback(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let tx = self.tx.lock().await.take().ok_or("Transaction has been consumed")?;
        tx.rollback().await?;
        Ok(())
    }
}

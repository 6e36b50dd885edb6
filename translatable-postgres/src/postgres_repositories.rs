use sqlx::PgPool;
use std::sync::Arc;
use tracing::debug;

use crate::executor::Executor;
use crate::repository::record_repository::RecordRepositoryImpl;

pub struct PostgresRepositories {
    pool: Arc<PgPool>,
}

impl PostgresRepositories {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &Arc<PgPool> {
        &self.pool
    }

    /// Create the repositories sharing a single transaction
    pub async fn create_translatable_repositories(
        &self,
    ) -> Result<TranslatableRepositories, sqlx::Error> {
        let tx = self.pool.begin().await?;
        let executor = Executor::new(tx);
        debug!("Began transaction for translatable repositories");

        let record_repository = Arc::new(RecordRepositoryImpl::new(executor.clone()));

        Ok(TranslatableRepositories {
            executor,
            record_repository,
        })
    }
}

pub struct TranslatableRepositories {
    pub executor: Executor,
    pub record_repository: Arc<RecordRepositoryImpl>,
}

impl TranslatableRepositories {
    pub async fn commit(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.executor.commit().await
    }

    pub async fn rollback(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.executor.rollback().await
    }
}

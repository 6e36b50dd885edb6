//! Schema setup and teardown for the tables records and translations live in.
//!
//! Both run the SQL files shipped with this crate: `migrations/` in ascending
//! file name order, `cleanup/` in descending order.

use sqlx::PgPool;
use std::fs;
use std::path::Path;
use tracing::info;

/// Creates the schema by executing every file under `migrations/`.
///
/// # Example
///
/// ```rust,no_run
/// use sqlx::PgPool;
/// use translatable_postgres::repository::db_init::init_database;
///
/// # async fn example(pool: &PgPool) -> Result<(), Box<dyn std::error::Error>> {
/// init_database(pool).await?;
/// # Ok(())
/// # }
/// ```
pub async fn init_database(pool: &PgPool) -> Result<(), sqlx::Error> {
    let migrations_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("migrations");
    execute_sql_files_in_order(pool, &migrations_dir, true).await
}

/// Drops the schema by executing every file under `cleanup/`.
///
/// # Example
///
/// ```rust,no_run
/// use sqlx::PgPool;
/// use translatable_postgres::repository::db_init::cleanup_database;
///
/// # async fn example(pool: &PgPool) -> Result<(), Box<dyn std::error::Error>> {
/// cleanup_database(pool).await?;
/// # Ok(())
/// # }
/// ```
pub async fn cleanup_database(pool: &PgPool) -> Result<(), sqlx::Error> {
    let cleanup_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("cleanup");
    execute_sql_files_in_order(pool, &cleanup_dir, false).await
}

async fn execute_sql_files_in_order(
    pool: &PgPool,
    dir: &Path,
    ascending: bool,
) -> Result<(), sqlx::Error> {
    let mut paths: Vec<_> = fs::read_dir(dir)
        .map_err(sqlx::Error::Io)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("sql"))
        .collect();

    paths.sort();
    if !ascending {
        paths.reverse();
    }

    for path in paths {
        let sql = fs::read_to_string(&path).map_err(sqlx::Error::Io)?;
        info!(file = %path.display(), "Executing SQL file");
        sqlx::raw_sql(&sql).execute(pool).await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helper::database_url;

    #[tokio::test]
    #[ignore]
    #[serial_test::serial]
    async fn test_init_and_cleanup() -> Result<(), Box<dyn std::error::Error>> {
        let pool = PgPool::connect(&database_url()).await?;

        init_database(&pool).await?;
        // running twice is harmless
        init_database(&pool).await?;

        cleanup_database(&pool).await?;

        init_database(&pool).await?;

        Ok(())
    }
}

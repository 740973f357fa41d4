//! Schema setup and teardown from the SQL files shipped with this crate
//!
//! `init_database` runs `migrations/` in ascending file-name order and
//! `cleanup_database` runs `cleanup/` in descending order.

use sqlx::PgPool;
use std::fs;
use std::path::Path;

/// Initialize the database by executing migration files in ascending order
///
/// # Example
///
/// ```rust,no_run
/// use sqlx::PgPool;
/// use coa_core_postgres::repository::db_init::init_database;
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

/// Cleanup the database by executing cleanup files in descending order
pub async fn cleanup_database(pool: &PgPool) -> Result<(), sqlx::Error> {
    let cleanup_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("cleanup");
    execute_sql_files_in_order(pool, &cleanup_dir, false).await
}

async fn execute_sql_files_in_order(
    pool: &PgPool,
    dir: &Path,
    ascending: bool,
) -> Result<(), sqlx::Error> {
    let mut entries: Vec<_> = fs::read_dir(dir)
        .map_err(sqlx::Error::Io)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().extension().and_then(|s| s.to_str()) == Some("sql"))
        .collect();

    entries.sort_by(|a, b| {
        let ordering = a.file_name().cmp(&b.file_name());
        if ascending {
            ordering
        } else {
            ordering.reverse()
        }
    });

    for entry in entries {
        let path = entry.path();
        let sql = fs::read_to_string(&path).map_err(sqlx::Error::Io)?;
        tracing::debug!(file = %path.display(), "executing schema script");
        sqlx::raw_sql(&sql).execute(pool).await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;
    use serial_test::serial;

    async fn table_exists(pool: &PgPool, table: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM information_schema.tables WHERE table_name = $1)",
        )
        .bind(table)
        .fetch_one(pool)
        .await
    }

    #[tokio::test]
    #[ignore]
    #[serial]
    async fn test_init_and_cleanup() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let pool = DatabaseConfig::from_env()?.connect().await?;

        // Running twice must be harmless
        init_database(&pool).await?;
        init_database(&pool).await?;
        assert!(table_exists(&pool, "coa_template_items").await?);

        cleanup_database(&pool).await?;
        assert!(!table_exists(&pool, "coa_template_items").await?);
        assert!(!table_exists(&pool, "account_classes").await?);

        // Leave the schema in place for the other database tests
        init_database(&pool).await?;
        assert!(table_exists(&pool, "coa_templates").await?);

        Ok(())
    }
}

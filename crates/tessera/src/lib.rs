//! Database migrations and seeds for Postgres, MySQL and SQLite.
//!
//! Migrations are `.sql` files with `-- up` and `-- down` sections, or Rust
//! types implementing [`Migration`]. Applied files are recorded in a ledger
//! table so each one runs exactly once until it is rolled back.
//!
//! ```no_run
//! use tessera::{ClientI, Dialect, RollbackAmount, TesseraConfig};
//!
//! # async fn demo() -> Result<(), tessera::ClientError> {
//! let config = TesseraConfig::template(Dialect::Sqlite);
//! let mut client = tessera::client_from_config(&config)?;
//! client.prepare().await?;
//! client.migrate(None).await?;
//! client.rollback(RollbackAmount::Count(1)).await?;
//! client.close().await?;
//! # Ok(())
//! # }
//! ```

pub use tessera_client::{
    Client, ClientI, DialectAdapter, MySqlAdapter, MySqlClient, PostgresAdapter, PostgresClient,
    SqliteAdapter, SqliteClient, client_from_config,
};
pub use tessera_config::{ClientConfig, ClientOptions, TesseraConfig};
pub use tessera_core::{
    ClientError, Dialect, Info, Logger, MigrateAmount, Migration, MigrationFile, MigrationStatus,
    Query, QueryHandler, QueryOutput, RollbackAmount, Row, Seed, SeedFile, SqlMigration, SqlSeed,
    default_logger, silent_logger,
};
pub use tessera_loader::load_config;
pub use tessera_query::{QueryBuilder, sea_query};

/// Apply every pending migration for `config`, then close the connection.
///
/// Meant for application startup. Returns the names of the applied files.
pub async fn run_migrations(config: &TesseraConfig) -> Result<Vec<String>, ClientError> {
    let mut client = client_from_config(config)?;
    client.set_logger(silent_logger());
    let result = match client.prepare().await {
        Ok(()) => client.migrate(None).await,
        Err(err) => Err(err),
    };
    client.close().await?;
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn sqlite_config(dir: &std::path::Path) -> TesseraConfig {
        let mut config = TesseraConfig::new(ClientConfig::new(Dialect::Sqlite));
        config.client.options.migration_folder = Some(dir.join("migrations"));
        config.client.options.seed_folder = Some(dir.join("seeds"));
        config
            .client
            .options
            .set("path", dir.join("app.db").to_string_lossy().into_owned());
        config
    }

    #[tokio::test]
    async fn run_migrations_is_repeatable() {
        let tmp = TempDir::new().unwrap();
        let folder = tmp.path().join("migrations");
        fs::create_dir_all(&folder).unwrap();
        fs::write(
            folder.join("001_users.sql"),
            "-- up\nCREATE TABLE users (id INTEGER);\n-- down\nDROP TABLE users;\n",
        )
        .unwrap();
        let config = sqlite_config(tmp.path());

        assert_eq!(run_migrations(&config).await.unwrap(), vec!["001_users.sql"]);
        assert!(run_migrations(&config).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn run_migrations_surfaces_prepare_errors() {
        let tmp = TempDir::new().unwrap();
        let mut config = sqlite_config(tmp.path());
        config.client.options.set("createIfMissing", false);
        config
            .client
            .options
            .set("path", tmp.path().join("no/such/dir.db").to_string_lossy().into_owned());

        let err = run_migrations(&config).await.unwrap_err();
        assert!(matches!(err, ClientError::Connection(_)));
    }
}

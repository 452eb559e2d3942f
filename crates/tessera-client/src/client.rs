use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use regex::Regex;
use tessera_config::ClientOptions;
use tessera_core::{
    AppliedMigration, ClientError, Dialect, Info, Logger, MigrateAmount, MigrationFile,
    MigrationStatus, Query, QueryHandler, QueryOutput, RollbackAmount, SeedFile,
    default_logger, plural, resolve_migrate_amount, sort_migration_files,
};
use tessera_loader::{load_migrations, load_seeds};
use tessera_query::ledger::{COL_FILE_NAME, COL_ID};
use tessera_query::{DatabaseBackend, LedgerQueries};
use tracing::{debug, info, warn};

use crate::adapters::{DialectAdapter, MySqlAdapter, PostgresAdapter, SqliteAdapter};
use crate::connection::ConnectionHandle;

/// Operations every dialect client provides.
///
/// Call [`prepare`](ClientI::prepare) before anything that touches the
/// database and [`close`](ClientI::close) when done. `migrate`, `rollback`
/// and `seed` return the names of the files they ran, in execution order.
#[async_trait]
pub trait ClientI: Send + Sync {
    fn dialect(&self) -> Dialect;

    fn migration_folder(&self) -> &Path;

    fn seed_folder(&self) -> &Path;

    /// Known migrations, sorted by name. Empty until prepared.
    fn migration_files(&self) -> &[MigrationFile];

    /// Known seeds, sorted by name. Empty until prepared.
    fn seed_files(&self) -> &[SeedFile];

    fn expose_query_builder(&self) -> bool;

    /// Load the folders, connect, and create the ledger table if needed.
    async fn prepare(&mut self) -> Result<(), ClientError>;

    /// Release the connection. Safe to call repeatedly or after a failed prepare.
    async fn close(&mut self) -> Result<(), ClientError>;

    async fn migrate(&self, amount: MigrateAmount) -> Result<Vec<String>, ClientError>;

    async fn rollback(&self, amount: RollbackAmount) -> Result<Vec<String>, ClientError>;

    /// Run seeds whose name matches the `matcher` regex, or all of them.
    async fn seed(&self, matcher: Option<&str>) -> Result<Vec<String>, ClientError>;

    async fn query(&self, query: &Query) -> Result<QueryOutput, ClientError>;

    async fn status(&self) -> Result<MigrationStatus, ClientError>;

    fn set_logger(&mut self, logger: Logger);
}

/// Migration client for one dialect.
pub struct Client<A: DialectAdapter> {
    adapter: A,
    migration_folder: PathBuf,
    seed_folder: PathBuf,
    ledger: LedgerQueries,
    expose_query_builder: bool,
    registered_migrations: Vec<MigrationFile>,
    registered_seeds: Vec<SeedFile>,
    migrations: Vec<MigrationFile>,
    seeds: Vec<SeedFile>,
    connection: Arc<ConnectionHandle>,
    logger: Logger,
}

pub type PostgresClient = Client<PostgresAdapter>;
pub type MySqlClient = Client<MySqlAdapter>;
pub type SqliteClient = Client<SqliteAdapter>;

impl<A: DialectAdapter> Client<A> {
    pub fn new(adapter: A, options: &ClientOptions) -> Result<Self, ClientError> {
        let ledger = match options.ledger_table() {
            Some(table) => LedgerQueries::new(table)
                .map_err(|e| ClientError::InvalidOption(format!("ledgerTable: {e}")))?,
            None => LedgerQueries::default(),
        };
        Ok(Self {
            adapter,
            migration_folder: options.migration_folder(),
            seed_folder: options.seed_folder(),
            ledger,
            expose_query_builder: false,
            registered_migrations: Vec::new(),
            registered_seeds: Vec::new(),
            migrations: Vec::new(),
            seeds: Vec::new(),
            connection: Arc::new(ConnectionHandle::new()),
            logger: default_logger(),
        })
    }

    /// Parse the adapter's typed options out of `options`, then build the client.
    pub fn from_options(options: &ClientOptions) -> Result<Self, ClientError> {
        let adapter = A::from_options(options)?;
        Self::new(adapter, options)
    }

    pub fn with_expose_query_builder(mut self, expose: bool) -> Self {
        self.expose_query_builder = expose;
        self
    }

    /// Register a migration defined in code. It is merged with the folder
    /// contents on `prepare`; a name clash is a load error.
    pub fn with_migration(mut self, file: MigrationFile) -> Self {
        self.registered_migrations.push(file);
        self
    }

    pub fn with_seed(mut self, file: SeedFile) -> Self {
        self.registered_seeds.push(file);
        self
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    pub fn ledger_table(&self) -> &str {
        self.ledger.table()
    }

    fn backend(&self) -> DatabaseBackend {
        self.adapter.dialect().backend()
    }

    fn log(&self, output: &str, title: Option<&str>) {
        (self.logger)(output, title);
    }

    fn info(&self) -> Info {
        Info::new(
            self.adapter.dialect(),
            self.connection.clone(),
            self.expose_query_builder,
        )
    }

    fn load_files(&self) -> Result<(Vec<MigrationFile>, Vec<SeedFile>), ClientError> {
        let mut migrations = load_migrations(&self.migration_folder)
            .map_err(|e| ClientError::Load(format!("{e:#}")))?;
        migrations.extend(self.registered_migrations.iter().cloned());
        sort_migration_files(&mut migrations)?;

        let mut seeds = load_seeds(&self.seed_folder)
            .map_err(|e| ClientError::Load(format!("{e:#}")))?;
        seeds.extend(self.registered_seeds.iter().cloned());
        seeds.sort_by(|a, b| a.name().cmp(b.name()));
        if let Some(pair) = seeds.windows(2).find(|w| w[0].name() == w[1].name()) {
            return Err(ClientError::Load(format!(
                "duplicate seed name: {}",
                pair[0].name()
            )));
        }
        Ok((migrations, seeds))
    }

    async fn applied_migrations(&self) -> Result<Vec<AppliedMigration>, ClientError> {
        let sql = self.ledger.select_applied(self.backend());
        let output = self.connection.execute(&sql).await.map_err(ledger_error)?;
        output
            .rows
            .iter()
            .map(|row| {
                let file_name = row.get_str(COL_FILE_NAME).ok_or_else(|| {
                    ClientError::Schema(format!("ledger row without a {COL_FILE_NAME}"))
                })?;
                let id = row.get_i64(COL_ID).ok_or_else(|| {
                    ClientError::Schema(format!(
                        "ledger row '{file_name}' without an integer {COL_ID}"
                    ))
                })?;
                Ok(AppliedMigration {
                    id,
                    file_name: file_name.to_string(),
                })
            })
            .collect()
    }

    /// Run `query` and the optional ledger statement as one transaction.
    async fn run_in_transaction(
        &self,
        query: &Query,
        ledger_sql: Option<&str>,
    ) -> Result<(), ClientError> {
        let backend = self.backend();
        self.connection.execute(backend.begin_transaction()).await?;

        let result = async {
            self.connection.query(query).await?;
            if let Some(sql) = ledger_sql {
                self.connection.execute(sql).await?;
            }
            self.connection
                .execute(backend.commit_transaction())
                .await
                .map(|_| ())
        }
        .await;

        if result.is_err()
            && let Err(err) = self.connection.execute(backend.rollback_transaction()).await
        {
            warn!(error = %err, "transaction rollback failed");
        }
        result
    }

    async fn apply(&self, file: &MigrationFile) -> Result<(), ClientError> {
        let query = file.migration().up(&self.info()).await?;
        let record = self
            .ledger
            .record(self.backend(), file.name())
            .map_err(|e| ClientError::Schema(e.to_string()))?;
        debug!(file = file.name(), statements = query.statements().count(), "up");
        self.run_in_transaction(&query, Some(&record)).await
    }

    async fn revert(&self, file: &MigrationFile) -> Result<(), ClientError> {
        let query = file.migration().down(&self.info()).await?;
        let remove = self.ledger.remove(self.backend(), file.name());
        debug!(file = file.name(), statements = query.statements().count(), "down");
        self.run_in_transaction(&query, Some(&remove)).await
    }

    async fn run_seed(&self, file: &SeedFile) -> Result<(), ClientError> {
        let query = file.seed().run().await?;
        self.run_in_transaction(&query, None).await
    }

    fn fail(&self, name: &str, err: &ClientError) {
        self.log(&format!("{name}: {err}"), Some("Failed"));
        warn!(file = name, error = %err, "file failed, stopping");
    }
}

fn ledger_error(err: ClientError) -> ClientError {
    match err {
        ClientError::NotPrepared => err,
        other => ClientError::Schema(other.to_string()),
    }
}

#[async_trait]
impl<A: DialectAdapter> ClientI for Client<A> {
    fn dialect(&self) -> Dialect {
        self.adapter.dialect()
    }

    fn migration_folder(&self) -> &Path {
        &self.migration_folder
    }

    fn seed_folder(&self) -> &Path {
        &self.seed_folder
    }

    fn migration_files(&self) -> &[MigrationFile] {
        &self.migrations
    }

    fn seed_files(&self) -> &[SeedFile] {
        &self.seeds
    }

    fn expose_query_builder(&self) -> bool {
        self.expose_query_builder
    }

    async fn prepare(&mut self) -> Result<(), ClientError> {
        let (migrations, seeds) = self.load_files()?;
        debug!(
            migrations = migrations.len(),
            seeds = seeds.len(),
            "loaded files"
        );

        let url = self.adapter.connection_url()?;
        info!(dialect = %self.adapter.dialect(), "connecting");
        self.connection.connect(&url).await?;

        for statement in self.adapter.session_statements() {
            self.connection
                .execute(statement)
                .await
                .map_err(|e| ClientError::Connection(e.to_string()))?;
        }

        let create = self.ledger.create_table(self.backend());
        self.connection
            .execute(&create)
            .await
            .map_err(ledger_error)?;

        self.migrations = migrations;
        self.seeds = seeds;
        Ok(())
    }

    async fn close(&mut self) -> Result<(), ClientError> {
        if let Err(err) = self.connection.close().await {
            warn!(error = %err, "closing connection failed");
        }
        Ok(())
    }

    async fn migrate(&self, amount: MigrateAmount) -> Result<Vec<String>, ClientError> {
        let applied = self.applied_migrations().await?;
        let applied_names: HashSet<&str> =
            applied.iter().map(|a| a.file_name.as_str()).collect();
        let pending: Vec<&MigrationFile> = self
            .migrations
            .iter()
            .filter(|file| !applied_names.contains(file.name()))
            .collect();

        if let (Some(first), Some(latest)) = (pending.first(), applied_names.iter().max())
            && first.name() < *latest
        {
            warn!(
                file = first.name(),
                latest = *latest,
                "pending migration sorts before the latest applied one"
            );
        }

        let count = resolve_migrate_amount(amount, pending.len());
        if count == 0 {
            self.log("Nothing to migrate", None);
            return Ok(Vec::new());
        }
        self.log(&plural(count, "migration"), Some("Migrate"));

        let mut done = Vec::with_capacity(count);
        for file in pending.into_iter().take(count) {
            self.log(file.name(), Some("Migrating"));
            info!(file = file.name(), "applying migration");
            if let Err(err) = self.apply(file).await {
                self.fail(file.name(), &err);
                return Err(ClientError::migration(file.name(), err));
            }
            self.log(file.name(), Some("Done"));
            done.push(file.name().to_string());
        }
        Ok(done)
    }

    async fn rollback(&self, amount: RollbackAmount) -> Result<Vec<String>, ClientError> {
        let applied = self.applied_migrations().await?;
        let count = amount.resolve(applied.len());
        if count == 0 {
            self.log("Nothing to roll back", None);
            return Ok(Vec::new());
        }

        // Every targeted record must still have its file before anything is reversed.
        let targets = applied
            .iter()
            .rev()
            .take(count)
            .map(|record| {
                self.migrations
                    .iter()
                    .find(|file| file.name() == record.file_name)
                    .ok_or_else(|| ClientError::NoSuchMigration(record.file_name.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        self.log(&plural(count, "migration"), Some("Rollback"));

        let mut done = Vec::with_capacity(count);
        for file in targets {
            self.log(file.name(), Some("Rolling back"));
            info!(file = file.name(), "reverting migration");
            if let Err(err) = self.revert(file).await {
                self.fail(file.name(), &err);
                return Err(ClientError::migration(file.name(), err));
            }
            self.log(file.name(), Some("Done"));
            done.push(file.name().to_string());
        }
        Ok(done)
    }

    async fn seed(&self, matcher: Option<&str>) -> Result<Vec<String>, ClientError> {
        if !self.connection.is_connected().await {
            return Err(ClientError::NotPrepared);
        }
        let pattern = matcher
            .map(Regex::new)
            .transpose()
            .map_err(|e| ClientError::InvalidOption(format!("seed matcher: {e}")))?;

        let selected: Vec<&SeedFile> = self
            .seeds
            .iter()
            .filter(|file| pattern.as_ref().is_none_or(|re| re.is_match(file.name())))
            .collect();
        if selected.is_empty() {
            match matcher {
                Some(m) => self.log(&format!("No seeds match '{m}'"), None),
                None => self.log("No seeds to run", None),
            }
            return Ok(Vec::new());
        }
        self.log(&plural(selected.len(), "seed"), Some("Seed"));

        let mut done = Vec::with_capacity(selected.len());
        for file in selected {
            self.log(file.name(), Some("Seeding"));
            info!(file = file.name(), "running seed");
            if let Err(err) = self.run_seed(file).await {
                self.fail(file.name(), &err);
                return Err(ClientError::seed(file.name(), err));
            }
            self.log(file.name(), Some("Done"));
            done.push(file.name().to_string());
        }
        Ok(done)
    }

    async fn query(&self, query: &Query) -> Result<QueryOutput, ClientError> {
        self.connection.query(query).await
    }

    async fn status(&self) -> Result<MigrationStatus, ClientError> {
        let applied = self.applied_migrations().await?;
        let available: Vec<&str> = self.migrations.iter().map(|f| f.name()).collect();
        Ok(MigrationStatus::from_parts(&applied, &available))
    }

    fn set_logger(&mut self, logger: Logger) {
        self.logger = logger;
    }
}

impl<A: DialectAdapter + fmt::Debug> fmt::Debug for Client<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("adapter", &self.adapter)
            .field("migration_folder", &self.migration_folder)
            .field("seed_folder", &self.seed_folder)
            .field("ledger", &self.ledger)
            .field("expose_query_builder", &self.expose_query_builder)
            .field("migrations", &self.migrations)
            .field("seeds", &self.seeds)
            .finish_non_exhaustive()
    }
}

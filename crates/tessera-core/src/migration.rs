use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::ClientError;
use crate::info::Info;
use crate::query::Query;

/// A reversible schema change.
///
/// Each direction must be deterministic: the same [`Info`] yields the same SQL.
#[async_trait]
pub trait Migration: Send + Sync {
    async fn up(&self, info: &Info) -> Result<Query, ClientError>;

    async fn down(&self, info: &Info) -> Result<Query, ClientError>;
}

/// Migration whose SQL is fixed text, e.g. read from a `.sql` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlMigration {
    pub up: Query,
    pub down: Query,
}

impl SqlMigration {
    pub fn new(up: impl Into<Query>, down: impl Into<Query>) -> Self {
        Self {
            up: up.into(),
            down: down.into(),
        }
    }
}

#[async_trait]
impl Migration for SqlMigration {
    async fn up(&self, _info: &Info) -> Result<Query, ClientError> {
        Ok(self.up.clone())
    }

    async fn down(&self, _info: &Info) -> Result<Query, ClientError> {
        Ok(self.down.clone())
    }
}

/// A named migration. The name orders migrations and keys the ledger.
#[derive(Clone)]
pub struct MigrationFile {
    name: String,
    migration: Arc<dyn Migration>,
}

impl MigrationFile {
    pub fn new(name: impl Into<String>, migration: impl Migration + 'static) -> Self {
        Self {
            name: name.into(),
            migration: Arc::new(migration),
        }
    }

    pub fn from_arc(name: impl Into<String>, migration: Arc<dyn Migration>) -> Self {
        Self {
            name: name.into(),
            migration,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn migration(&self) -> &dyn Migration {
        self.migration.as_ref()
    }
}

impl fmt::Debug for MigrationFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MigrationFile")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Sort by name and reject duplicates.
pub fn sort_migration_files(files: &mut [MigrationFile]) -> Result<(), ClientError> {
    files.sort_by(|a, b| a.name.cmp(&b.name));
    if let Some(pair) = files.windows(2).find(|w| w[0].name == w[1].name) {
        return Err(ClientError::Load(format!(
            "duplicate migration name: {}",
            pair[0].name
        )));
    }
    Ok(())
}

use tessera_config::{ClientOptions, SqliteOptions};
use tessera_core::{ClientError, Dialect};

use super::{DialectAdapter, option_error};

#[derive(Debug, Clone, Default)]
pub struct SqliteAdapter {
    options: SqliteOptions,
}

impl SqliteAdapter {
    pub fn new(options: SqliteOptions) -> Self {
        Self { options }
    }

    /// Adapter for a private in-memory database.
    pub fn memory() -> Self {
        Self::new(SqliteOptions::memory())
    }

    pub fn options(&self) -> &SqliteOptions {
        &self.options
    }
}

impl DialectAdapter for SqliteAdapter {
    fn dialect(&self) -> Dialect {
        Dialect::Sqlite
    }

    fn from_options(options: &ClientOptions) -> Result<Self, ClientError> {
        options
            .dialect_options(Dialect::Sqlite)
            .map(Self::new)
            .map_err(option_error)
    }

    fn connection_url(&self) -> Result<String, ClientError> {
        self.options.connection_url().map_err(option_error)
    }

    fn session_statements(&self) -> &'static [&'static str] {
        &["PRAGMA foreign_keys = ON"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_adapter_url() {
        let adapter = SqliteAdapter::memory();
        assert_eq!(adapter.dialect(), Dialect::Sqlite);
        assert_eq!(adapter.connection_url().unwrap(), "sqlite::memory:");
    }

    #[test]
    fn builds_from_path_key() {
        let mut options = ClientOptions::default();
        options.set("path", "data/app.db");
        let adapter = SqliteAdapter::from_options(&options).unwrap();
        assert_eq!(
            adapter.connection_url().unwrap(),
            "sqlite://data/app.db?mode=rwc"
        );
    }
}

use tessera_config::{ClientOptions, PostgresOptions};
use tessera_core::{ClientError, Dialect};

use super::{DialectAdapter, option_error};

#[derive(Debug, Clone, Default)]
pub struct PostgresAdapter {
    options: PostgresOptions,
}

impl PostgresAdapter {
    pub fn new(options: PostgresOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &PostgresOptions {
        &self.options
    }
}

impl DialectAdapter for PostgresAdapter {
    fn dialect(&self) -> Dialect {
        Dialect::Postgres
    }

    fn from_options(options: &ClientOptions) -> Result<Self, ClientError> {
        options
            .dialect_options(Dialect::Postgres)
            .map(Self::new)
            .map_err(option_error)
    }

    fn connection_url(&self) -> Result<String, ClientError> {
        self.options.connection_url().map_err(option_error)
    }

    // `CREATE TABLE IF NOT EXISTS` raises a NOTICE on every run otherwise.
    fn session_statements(&self) -> &'static [&'static str] {
        &["SET client_min_messages TO WARNING"]
    }
}

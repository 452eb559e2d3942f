use tessera_config::{ClientOptions, MySqlOptions};
use tessera_core::{ClientError, Dialect};

use super::{DialectAdapter, option_error};

/// MySQL commits DDL implicitly, so a failed migration may leave part of its
/// schema changes behind even though the ledger row is not written.
#[derive(Debug, Clone, Default)]
pub struct MySqlAdapter {
    options: MySqlOptions,
}

impl MySqlAdapter {
    pub fn new(options: MySqlOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &MySqlOptions {
        &self.options
    }
}

impl DialectAdapter for MySqlAdapter {
    fn dialect(&self) -> Dialect {
        Dialect::MySql
    }

    fn from_options(options: &ClientOptions) -> Result<Self, ClientError> {
        options
            .dialect_options(Dialect::MySql)
            .map(Self::new)
            .map_err(option_error)
    }

    fn connection_url(&self) -> Result<String, ClientError> {
        self.options.connection_url().map_err(option_error)
    }
}

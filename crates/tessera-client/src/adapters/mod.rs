//! One adapter per dialect: typed options, connection URL and session setup.

mod mysql;
mod postgres;
mod sqlite;

pub use mysql::MySqlAdapter;
pub use postgres::PostgresAdapter;
pub use sqlite::SqliteAdapter;

use tessera_config::{ClientOptions, ConfigError};
use tessera_core::{ClientError, Dialect};

/// Dialect-specific half of a [`Client`](crate::Client).
pub trait DialectAdapter: Send + Sync + 'static {
    fn dialect(&self) -> Dialect;

    /// Build the adapter from the free-form keys of the client options.
    fn from_options(options: &ClientOptions) -> Result<Self, ClientError>
    where
        Self: Sized;

    fn connection_url(&self) -> Result<String, ClientError>;

    /// Statements run once right after connecting.
    fn session_statements(&self) -> &'static [&'static str] {
        &[]
    }
}

pub(crate) fn option_error(err: ConfigError) -> ClientError {
    ClientError::InvalidOption(err.to_string())
}

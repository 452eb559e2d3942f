pub mod backend;
pub mod builder;
pub mod error;
pub mod helpers;
pub mod ledger;

pub use backend::DatabaseBackend;
pub use builder::QueryBuilder;
pub use error::QueryError;
pub use helpers::{build_query_statement, build_schema_statement};
pub use ledger::{DEFAULT_LEDGER_TABLE, LedgerQueries};

/// Re-exported so migrations can build statements without a direct dependency.
pub use sea_query;

pub mod amount;
pub mod dialect;
pub mod error;
pub mod info;
pub mod ledger;
pub mod logger;
pub mod migration;
pub mod query;
pub mod seed;

pub use amount::{MigrateAmount, RollbackAmount, resolve_migrate_amount};
pub use dialect::Dialect;
pub use error::{BoxError, ClientError};
pub use info::{Info, QueryHandler};
pub use ledger::{AppliedMigration, MigrationStatus};
pub use logger::{Logger, default_logger, plural, silent_logger};
pub use migration::{Migration, MigrationFile, SqlMigration, sort_migration_files};
pub use query::{Query, QueryOutput, Row};
pub use seed::{Seed, SeedFile, SqlSeed};
pub use tessera_query::QueryBuilder;

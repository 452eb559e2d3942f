use sea_query::{QueryStatementWriter, SchemaStatementBuilder};

use crate::backend::DatabaseBackend;
use crate::helpers::{build_query_statement, build_schema_statement};

/// Query builder handed to migrations when `exposeQueryBuilder` is enabled.
///
/// Statements are assembled with [`sea_query`] and rendered for the backend
/// the client is connected to.
///
/// ```
/// use tessera_query::sea_query::{Alias, ColumnDef, Table};
/// use tessera_query::{DatabaseBackend, QueryBuilder};
///
/// let qb = QueryBuilder::new(DatabaseBackend::MySql);
/// let sql = qb.schema(
///     &Table::create()
///         .table(Alias::new("users"))
///         .col(ColumnDef::new(Alias::new("id")).integer())
///         .to_owned(),
/// );
/// assert!(sql.contains("`users`"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryBuilder {
    backend: DatabaseBackend,
}

impl QueryBuilder {
    pub fn new(backend: DatabaseBackend) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> DatabaseBackend {
        self.backend
    }

    /// Render a schema statement (CREATE/ALTER/DROP ...).
    pub fn schema<T: SchemaStatementBuilder>(&self, stmt: &T) -> String {
        build_schema_statement(stmt, self.backend)
    }

    /// Render a data statement (SELECT/INSERT/UPDATE/DELETE) with inlined values.
    pub fn query<T: QueryStatementWriter>(&self, stmt: &T) -> String {
        build_query_statement(stmt, self.backend)
    }
}

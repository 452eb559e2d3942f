//! Statements for the ledger table that records applied migration files.
//!
//! Layout: `id` (auto-increment primary key, gives application order),
//! `file_name` (unique) and `created_at`.

use sea_query::{Alias, ColumnDef, Expr, Order, Query, Table};

use crate::backend::DatabaseBackend;
use crate::error::QueryError;
use crate::helpers::{build_query_statement, build_schema_statement};

pub const DEFAULT_LEDGER_TABLE: &str = "tessera_migrations";

pub const COL_ID: &str = "id";
pub const COL_FILE_NAME: &str = "file_name";
pub const COL_CREATED_AT: &str = "created_at";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerQueries {
    table: String,
}

impl Default for LedgerQueries {
    fn default() -> Self {
        Self {
            table: DEFAULT_LEDGER_TABLE.to_string(),
        }
    }
}

impl LedgerQueries {
    /// Ledger statements for a custom table name.
    ///
    /// Only ASCII letters, digits and underscores are accepted, and the name
    /// must not start with a digit.
    pub fn new(table: impl Into<String>) -> Result<Self, QueryError> {
        let table = table.into();
        let valid = table
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
            && table.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
        if !valid {
            return Err(QueryError::InvalidIdentifier(table));
        }
        Ok(Self { table })
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn create_table(&self, backend: DatabaseBackend) -> String {
        let stmt = Table::create()
            .table(Alias::new(&self.table))
            .if_not_exists()
            .col(
                ColumnDef::new(Alias::new(COL_ID))
                    .integer()
                    .not_null()
                    .auto_increment()
                    .primary_key(),
            )
            .col(
                ColumnDef::new(Alias::new(COL_FILE_NAME))
                    .string_len(255)
                    .not_null()
                    .unique_key(),
            )
            .col(
                ColumnDef::new(Alias::new(COL_CREATED_AT))
                    .timestamp()
                    .not_null()
                    .default(Expr::current_timestamp()),
            )
            .to_owned();
        build_schema_statement(&stmt, backend)
    }

    pub fn record(&self, backend: DatabaseBackend, file_name: &str) -> Result<String, QueryError> {
        let stmt = Query::insert()
            .into_table(Alias::new(&self.table))
            .columns([Alias::new(COL_FILE_NAME)])
            .values([file_name.into()])
            .map_err(|e| QueryError::Build(e.to_string()))?
            .to_owned();
        Ok(build_query_statement(&stmt, backend))
    }

    pub fn remove(&self, backend: DatabaseBackend, file_name: &str) -> String {
        let stmt = Query::delete()
            .from_table(Alias::new(&self.table))
            .and_where(Expr::col(Alias::new(COL_FILE_NAME)).eq(file_name))
            .to_owned();
        build_query_statement(&stmt, backend)
    }

    /// Applied records in application order (oldest first).
    pub fn select_applied(&self, backend: DatabaseBackend) -> String {
        let stmt = Query::select()
            .columns([Alias::new(COL_ID), Alias::new(COL_FILE_NAME)])
            .from(Alias::new(&self.table))
            .order_by(Alias::new(COL_ID), Order::Asc)
            .to_owned();
        build_query_statement(&stmt, backend)
    }
}

/// Database backend for SQL generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatabaseBackend {
    Postgres,
    MySql,
    Sqlite,
}

impl DatabaseBackend {
    /// Statement that opens a transaction on this backend.
    pub fn begin_transaction(self) -> &'static str {
        match self {
            DatabaseBackend::MySql => "START TRANSACTION",
            DatabaseBackend::Postgres | DatabaseBackend::Sqlite => "BEGIN",
        }
    }

    pub fn commit_transaction(self) -> &'static str {
        "COMMIT"
    }

    pub fn rollback_transaction(self) -> &'static str {
        "ROLLBACK"
    }
}

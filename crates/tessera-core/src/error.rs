use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("connection error: {0}")]
    Connection(String),
    #[error("ledger error: {0}")]
    Schema(String),
    #[error("migration '{file}' failed: {source}")]
    MigrationExecution {
        file: String,
        #[source]
        source: Box<ClientError>,
    },
    #[error("no such migration: {0}")]
    NoSuchMigration(String),
    #[error("seed '{file}' failed: {source}")]
    Seed {
        file: String,
        #[source]
        source: Box<ClientError>,
    },
    #[error("query failed: {0}")]
    Query(String),
    #[error("failed to load files: {0}")]
    Load(String),
    #[error("invalid client option: {0}")]
    InvalidOption(String),
    #[error("client is not prepared; call prepare() first")]
    NotPrepared,
    #[error("{0}")]
    Other(#[from] BoxError),
}

impl ClientError {
    pub fn other(err: impl Into<BoxError>) -> Self {
        ClientError::Other(err.into())
    }

    pub fn migration(file: impl Into<String>, source: ClientError) -> Self {
        ClientError::MigrationExecution {
            file: file.into(),
            source: Box::new(source),
        }
    }

    pub fn seed(file: impl Into<String>, source: ClientError) -> Self {
        ClientError::Seed {
            file: file.into(),
            source: Box::new(source),
        }
    }

    /// File name carried by execution failures.
    pub fn file(&self) -> Option<&str> {
        match self {
            ClientError::MigrationExecution { file, .. } | ClientError::Seed { file, .. } => {
                Some(file.as_str())
            }
            ClientError::NoSuchMigration(file) => Some(file.as_str()),
            _ => None,
        }
    }
}

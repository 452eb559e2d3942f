use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("invalid identifier: '{0}'")]
    InvalidIdentifier(String),
    #[error("failed to build statement: {0}")]
    Build(String),
}

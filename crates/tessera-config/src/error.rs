use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing client option '{0}'")]
    MissingOption(&'static str),
    #[error("invalid client option '{key}': {message}")]
    InvalidOption { key: String, message: String },
    #[error("invalid {dialect} options: {source}")]
    Options {
        dialect: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

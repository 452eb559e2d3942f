pub mod config;
pub mod error;
pub mod file_format;
pub mod options;

pub use config::{
    CONFIG_FILE_STEM, ClientConfig, ClientOptions, TesseraConfig, default_migration_folder,
    default_seed_folder,
};
pub use error::ConfigError;
pub use file_format::FileFormat;
pub use options::{MySqlOptions, PostgresOptions, ServerOptions, SqliteOptions};

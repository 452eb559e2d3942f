//! Typed connection options for each dialect, parsed from the free-form keys
//! of [`ClientOptions`](crate::ClientOptions).

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ConfigError;

/// Connection keys shared by server-based dialects.
///
/// Either `url` or `database` (with optional host, port and credentials) is
/// required. `url` wins when both are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerOptions {
    pub url: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub database: Option<String>,
}

impl ServerOptions {
    fn to_url(&self, scheme: &str, default_port: u16) -> Result<Url, ConfigError> {
        if let Some(url) = &self.url {
            return Url::parse(url).map_err(|e| ConfigError::InvalidOption {
                key: "url".to_string(),
                message: e.to_string(),
            });
        }

        let database = self
            .database
            .as_deref()
            .ok_or(ConfigError::MissingOption("database"))?;
        let host = self.host.as_deref().unwrap_or("localhost");
        let invalid = |key: &str, message: String| ConfigError::InvalidOption {
            key: key.to_string(),
            message,
        };

        let mut url = Url::parse(&format!("{scheme}://localhost"))
            .map_err(|e| invalid("host", e.to_string()))?;
        url.set_host(Some(host))
            .map_err(|e| invalid("host", e.to_string()))?;
        url.set_port(Some(self.port.unwrap_or(default_port)))
            .map_err(|_| invalid("port", "cannot be set".to_string()))?;
        if let Some(user) = &self.user {
            url.set_username(user)
                .map_err(|_| invalid("user", "cannot be set".to_string()))?;
        }
        if let Some(password) = &self.password {
            url.set_password(Some(password))
                .map_err(|_| invalid("password", "cannot be set".to_string()))?;
        }
        url.set_path(database);
        Ok(url)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostgresOptions {
    #[serde(flatten)]
    pub server: ServerOptions,
    /// Passed through as the `sslmode` connection parameter.
    pub ssl_mode: Option<String>,
}

impl PostgresOptions {
    pub const DEFAULT_PORT: u16 = 5432;

    pub fn connection_url(&self) -> Result<String, ConfigError> {
        let mut url = self.server.to_url("postgres", Self::DEFAULT_PORT)?;
        if let Some(mode) = &self.ssl_mode {
            url.query_pairs_mut().append_pair("sslmode", mode);
        }
        Ok(url.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MySqlOptions {
    #[serde(flatten)]
    pub server: ServerOptions,
}

impl MySqlOptions {
    pub const DEFAULT_PORT: u16 = 3306;

    pub fn connection_url(&self) -> Result<String, ConfigError> {
        Ok(self.server.to_url("mysql", Self::DEFAULT_PORT)?.to_string())
    }
}

fn default_create_if_missing() -> bool {
    true
}

/// SQLite accepts a file `path` (`:memory:` for an in-memory database) or a
/// full `url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SqliteOptions {
    pub path: Option<PathBuf>,
    pub url: Option<String>,
    #[serde(default = "default_create_if_missing")]
    pub create_if_missing: bool,
}

impl Default for SqliteOptions {
    fn default() -> Self {
        Self {
            path: None,
            url: None,
            create_if_missing: default_create_if_missing(),
        }
    }
}

impl SqliteOptions {
    pub const MEMORY: &'static str = ":memory:";

    pub fn memory() -> Self {
        Self {
            path: Some(PathBuf::from(Self::MEMORY)),
            ..Default::default()
        }
    }

    pub fn connection_url(&self) -> Result<String, ConfigError> {
        if let Some(url) = &self.url {
            return Ok(url.clone());
        }
        let path = self.path.as_ref().ok_or(ConfigError::MissingOption("path"))?;
        if path.as_os_str() == Self::MEMORY {
            return Ok("sqlite::memory:".to_string());
        }
        let mode = if self.create_if_missing { "rwc" } else { "rw" };
        // sqlx percent-decodes the file part, so each segment is encoded.
        let file = path
            .to_string_lossy()
            .split('/')
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect::<Vec<_>>()
            .join("/");
        Ok(format!("sqlite://{file}?mode={mode}"))
    }
}

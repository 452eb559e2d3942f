use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use tessera_client::{ClientI, client_from_config};
use tessera_config::TesseraConfig;
use tessera_core::ClientError;
use tracing::{debug, warn};

/// Load the config named by `--config`, or the one in the current directory.
pub fn load_config(path: Option<&Path>) -> Result<TesseraConfig> {
    let config = tessera_loader::load_config(path)?;
    debug!(
        dialect = %config.dialect(),
        migrations = %config.migration_folder().display(),
        seeds = %config.seed_folder().display(),
        "loaded config"
    );
    Ok(config)
}

/// `YYYYMMDDHHMMSS` in UTC, the prefix of generated migration files.
pub fn timestamp() -> String {
    Utc::now().format("%Y%m%d%H%M%S").to_string()
}

/// Build and prepare the client for the configured dialect.
pub async fn open_client(config: &TesseraConfig) -> Result<Box<dyn ClientI>> {
    let mut client = client_from_config(config).context("configure client")?;
    if let Err(err) = client.prepare().await {
        warn!(error = %err, "prepare failed, closing client");
        client.close().await?;
        return Err(err).context("prepare client");
    }
    Ok(client)
}

/// Close the client, then hand back the operation's result.
pub async fn finish<T>(
    mut client: Box<dyn ClientI>,
    result: Result<T, ClientError>,
) -> Result<T> {
    client.close().await?;
    Ok(result?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_naming::TIMESTAMP_LEN;

    #[test]
    fn timestamp_shape() {
        let ts = timestamp();
        assert_eq!(ts.len(), TIMESTAMP_LEN);
        assert!(ts.chars().all(|c| c.is_ascii_digit()));
    }
}

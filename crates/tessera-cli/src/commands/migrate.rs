use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use tessera_core::{MigrateAmount, plural};

use crate::utils::{finish, load_config, open_client};

pub async fn cmd_migrate(config: Option<&Path>, amount: MigrateAmount) -> Result<()> {
    let config = load_config(config)?;
    let client = open_client(&config).await?;
    let result = client.migrate(amount).await;
    let applied = finish(client, result).await?;

    if !applied.is_empty() {
        println!(
            "{} {}",
            "Applied".bright_green().bold(),
            plural(applied.len(), "migration")
        );
    }
    Ok(())
}

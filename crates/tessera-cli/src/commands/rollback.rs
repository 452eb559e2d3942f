use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use tessera_core::{RollbackAmount, plural};

use crate::utils::{finish, load_config, open_client};

pub async fn cmd_rollback(config: Option<&Path>, amount: RollbackAmount) -> Result<()> {
    let config = load_config(config)?;
    let client = open_client(&config).await?;
    let result = client.rollback(amount).await;
    let reverted = finish(client, result).await?;

    if !reverted.is_empty() {
        println!(
            "{} {}",
            "Rolled back".bright_green().bold(),
            plural(reverted.len(), "migration")
        );
    }
    Ok(())
}

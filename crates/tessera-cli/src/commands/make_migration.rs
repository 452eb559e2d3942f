use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use tessera_loader::create_migration_file;

use crate::utils::{load_config, timestamp};

pub fn cmd_make_migration(config: Option<&Path>, name: &str) -> Result<()> {
    let config = load_config(config)?;
    let path = create_migration_file(&config.migration_folder(), &timestamp(), name)?;
    println!(
        "{} {}",
        "Created migration:".bright_green().bold(),
        path.display()
    );
    Ok(())
}

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use colored::Colorize;
use tessera_config::{FileFormat, TesseraConfig};
use tessera_core::Dialect;
use tessera_loader::{find_config, write_config};

pub fn cmd_init(dialect: Dialect, format: FileFormat) -> Result<()> {
    let root = Path::new(".");
    if let Some(existing) = find_config(root) {
        bail!("config already exists: {}", existing.display());
    }

    let config = TesseraConfig::template(dialect);
    let path = write_config(root, &config, format)?;
    for folder in [config.migration_folder(), config.seed_folder()] {
        fs::create_dir_all(&folder)
            .with_context(|| format!("create folder: {}", folder.display()))?;
    }

    println!(
        "{} {} ({})",
        "Created".bright_green().bold(),
        path.display(),
        dialect.to_string().bright_white()
    );
    Ok(())
}

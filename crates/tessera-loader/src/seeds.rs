use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tessera_core::{SeedFile, SqlSeed};
use tessera_naming::{SQL_EXTENSION, seed_filename};

/// Body written for a new seed file.
pub const SEED_TEMPLATE: &str = "-- seed data\n";

/// Load all `.sql` seeds from `folder`, sorted by filename.
pub fn load_seeds(folder: &Path) -> Result<Vec<SeedFile>> {
    if !folder.exists() {
        return Ok(Vec::new());
    }

    let mut seeds = Vec::new();
    let entries =
        fs::read_dir(folder).with_context(|| format!("read seed folder: {}", folder.display()))?;

    for entry in entries {
        let entry = entry.context("read directory entry")?;
        let path = entry.path();
        if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some(SQL_EXTENSION) {
            continue;
        }
        let Some(name) = path.file_name().and_then(|s| s.to_str()) else {
            continue;
        };
        let content = fs::read_to_string(&path)
            .with_context(|| format!("read seed file: {}", path.display()))?;
        seeds.push(SeedFile::new(name, SqlSeed(content.into())));
    }

    seeds.sort_by(|a, b| a.name().cmp(b.name()));
    Ok(seeds)
}

/// Write an empty seed named `<name>.sql` into `folder`.
pub fn create_seed_file(folder: &Path, name: &str) -> Result<PathBuf> {
    let file_name = seed_filename(name);
    if file_name == format!(".{SQL_EXTENSION}") {
        anyhow::bail!("seed name '{}' has no usable characters", name);
    }
    if !folder.exists() {
        fs::create_dir_all(folder)
            .with_context(|| format!("create seed folder: {}", folder.display()))?;
    }
    let path = folder.join(file_name);
    if path.exists() {
        anyhow::bail!("seed already exists: {}", path.display());
    }
    fs::write(&path, SEED_TEMPLATE)
        .with_context(|| format!("write seed file: {}", path.display()))?;
    Ok(path)
}

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tessera_config::{CONFIG_FILE_STEM, FileFormat, TesseraConfig};

/// Look for `tessera.json`, `tessera.yaml` or `tessera.yml` in `dir`.
pub fn find_config(dir: &Path) -> Option<PathBuf> {
    [FileFormat::Json, FileFormat::Yaml, FileFormat::Yml]
        .into_iter()
        .map(|format| dir.join(format!("{CONFIG_FILE_STEM}.{}", format.extension())))
        .find(|path| path.exists())
}

/// Load the config from an explicit path or, when `None`, from the current directory.
///
/// Relative migration and seed folders, and a relative SQLite `path`, are
/// resolved against the config file's directory.
pub fn load_config(path: Option<&Path>) -> Result<TesseraConfig> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => find_config(Path::new(".")).ok_or_else(|| {
            anyhow::anyhow!("tessera.json not found. Run 'tessera init' first.")
        })?,
    };
    load_config_from_path(&path)
}

/// Load config from a specific path.
pub fn load_config_from_path(path: &Path) -> Result<TesseraConfig> {
    if !path.exists() {
        anyhow::bail!("config file not found at: {}", path.display());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("read config file: {}", path.display()))?;
    let mut config: TesseraConfig = match FileFormat::from_path(path) {
        Some(FileFormat::Json) | None => serde_json::from_str(&content)
            .with_context(|| format!("parse config file: {}", path.display()))?,
        Some(FileFormat::Yaml | FileFormat::Yml) => serde_yaml::from_str(&content)
            .with_context(|| format!("parse config file: {}", path.display()))?,
    };

    let root = path.parent().unwrap_or_else(|| Path::new("."));
    config.client.resolve_paths(root);
    Ok(config)
}

/// Serialize `config` into `dir` using `format`; returns the written path.
pub fn write_config(dir: &Path, config: &TesseraConfig, format: FileFormat) -> Result<PathBuf> {
    let path = dir.join(format!("{CONFIG_FILE_STEM}.{}", format.extension()));
    let text = match format {
        FileFormat::Json => {
            serde_json::to_string_pretty(config).context("serialize config")?
        }
        FileFormat::Yaml | FileFormat::Yml => {
            serde_yaml::to_string(config).context("serialize config")?
        }
    };
    fs::write(&path, text).with_context(|| format!("write config file: {}", path.display()))?;
    Ok(path)
}

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tessera_core::{MigrationFile, SqlMigration, sort_migration_files};
use tessera_naming::{SQL_EXTENSION, is_valid_migration_filename, migration_filename};

/// Body written for a new migration file.
pub const MIGRATION_TEMPLATE: &str = "-- up\n\n-- down\n";

#[derive(Clone, Copy, PartialEq, Eq)]
enum Section {
    Preamble,
    Up,
    Down,
}

fn marker(line: &str) -> Option<Section> {
    let lowered = line.trim().to_lowercase();
    let rest = lowered.strip_prefix("--")?.trim_start();
    let word = rest.split_whitespace().next()?;
    match word {
        "up" | "+up" => Some(Section::Up),
        "down" | "+down" => Some(Section::Down),
        _ => None,
    }
}

/// Split a `.sql` migration into its `-- up` and `-- down` sections.
///
/// Only comments and blank lines may appear before `-- up`. A missing
/// `-- down` section yields an empty down query.
pub fn parse_migration(content: &str) -> Result<SqlMigration> {
    if !content.lines().any(|line| marker(line) == Some(Section::Up)) {
        anyhow::bail!("missing '-- up' marker");
    }

    let mut up = Vec::new();
    let mut down = Vec::new();
    let mut section = Section::Preamble;
    let mut seen_up = false;

    for (index, line) in content.lines().enumerate() {
        if let Some(next) = marker(line) {
            match next {
                Section::Up if seen_up => {
                    anyhow::bail!("line {}: duplicate '-- up' marker", index + 1)
                }
                Section::Up => seen_up = true,
                Section::Down if !seen_up => {
                    anyhow::bail!("line {}: '-- down' before '-- up'", index + 1)
                }
                Section::Down if section == Section::Down => {
                    anyhow::bail!("line {}: duplicate '-- down' marker", index + 1)
                }
                _ => {}
            }
            section = next;
            continue;
        }

        match section {
            Section::Preamble => {
                let trimmed = line.trim();
                if !trimmed.is_empty() && !trimmed.starts_with("--") {
                    anyhow::bail!("line {}: SQL before '-- up' marker", index + 1);
                }
            }
            Section::Up => up.push(line),
            Section::Down => down.push(line),
        }
    }

    Ok(SqlMigration::new(
        up.join("\n").trim().to_string(),
        down.join("\n").trim().to_string(),
    ))
}

/// Load all `.sql` migrations from `folder`, sorted by filename.
///
/// A missing folder yields no migrations.
pub fn load_migrations(folder: &Path) -> Result<Vec<MigrationFile>> {
    if !folder.exists() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    let entries = fs::read_dir(folder)
        .with_context(|| format!("read migration folder: {}", folder.display()))?;

    for entry in entries {
        let entry = entry.context("read directory entry")?;
        let path = entry.path();
        if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some(SQL_EXTENSION) {
            continue;
        }
        let Some(name) = path.file_name().and_then(|s| s.to_str()) else {
            continue;
        };
        if !is_valid_migration_filename(name) {
            anyhow::bail!(
                "invalid migration filename '{}': expected '<digits>_<name>.sql'",
                name
            );
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("read migration file: {}", path.display()))?;
        let migration = parse_migration(&content)
            .with_context(|| format!("parse migration: {}", path.display()))?;
        files.push(MigrationFile::new(name, migration));
    }

    sort_migration_files(&mut files)?;
    Ok(files)
}

/// Write an empty migration named `<timestamp>_<name>.sql` into `folder`.
pub fn create_migration_file(folder: &Path, timestamp: &str, name: &str) -> Result<PathBuf> {
    if !folder.exists() {
        fs::create_dir_all(folder)
            .with_context(|| format!("create migration folder: {}", folder.display()))?;
    }
    let path = folder.join(migration_filename(timestamp, name));
    if path.exists() {
        anyhow::bail!("migration already exists: {}", path.display());
    }
    fs::write(&path, MIGRATION_TEMPLATE)
        .with_context(|| format!("write migration file: {}", path.display()))?;
    Ok(path)
}

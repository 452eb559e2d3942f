use std::fmt::Write as _;
use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use tessera_config::TesseraConfig;
use tessera_core::MigrationStatus;
use tessera_naming::display_name;

use crate::utils::{finish, load_config, open_client};

pub async fn cmd_status(config: Option<&Path>) -> Result<()> {
    let config = load_config(config)?;
    let client = open_client(&config).await?;
    let result = client.status().await;
    let status = finish(client, result).await?;
    print_status(&config, &status);
    Ok(())
}

fn print_status(config: &TesseraConfig, status: &MigrationStatus) {
    print!("{}", render_status(config, status));
}

fn render_status(config: &TesseraConfig, status: &MigrationStatus) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "Configuration:".bright_cyan().bold());
    let _ = writeln!(
        out,
        "  {} {}",
        "Dialect:".cyan(),
        config.dialect().to_string().bright_white()
    );
    let _ = writeln!(
        out,
        "  {} {}",
        "Migration folder:".cyan(),
        config.migration_folder().display().to_string().bright_white()
    );
    let _ = writeln!(
        out,
        "  {} {}",
        "Seed folder:".cyan(),
        config.seed_folder().display().to_string().bright_white()
    );
    let _ = writeln!(out);

    render_section(&mut out, "Applied migrations:", &status.applied, |name| {
        name.bright_green().to_string()
    });
    render_section(&mut out, "Pending migrations:", &status.pending, |name| {
        name.bright_yellow().to_string()
    });
    if !status.missing.is_empty() {
        render_section(&mut out, "Missing files:", &status.missing, |name| {
            name.bright_red().to_string()
        });
    }

    if status.pending.is_empty() {
        let _ = writeln!(out, "{}", "Database is up to date.".bright_green());
    }
    out
}

fn render_section(
    out: &mut String,
    title: &str,
    names: &[String],
    paint: impl Fn(&str) -> String,
) {
    let _ = writeln!(
        out,
        "{} {}",
        title.bright_cyan().bold(),
        names.len().to_string().bright_yellow()
    );
    for name in names {
        let _ = writeln!(
            out,
            "  {} {} {}",
            "-".bright_white(),
            paint(name),
            format!("({})", display_name(name)).bright_black()
        );
    }
    let _ = writeln!(out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::cmd_init;
    use crate::commands::test_support::{CwdGuard, write_migration};
    use tempfile::tempdir;
    use tessera_config::FileFormat;
    use tessera_core::Dialect;

    #[tokio::test]
    #[serial_test::serial]
    async fn status_on_fresh_project() {
        let tmp = tempdir().unwrap();
        let _guard = CwdGuard::new(tmp.path());
        cmd_init(Dialect::Sqlite, FileFormat::Json).unwrap();
        write_migration("001_users.sql", "users");

        cmd_status(None).await.unwrap();
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn status_requires_config() {
        let tmp = tempdir().unwrap();
        let _guard = CwdGuard::new(tmp.path());
        assert!(cmd_status(None).await.is_err());
    }

    #[test]
    #[serial_test::serial]
    fn renders_every_section() {
        colored::control::set_override(false);
        let config = TesseraConfig::template(Dialect::Sqlite);
        let status = MigrationStatus {
            applied: vec!["001_create_users.sql".into()],
            pending: vec![],
            missing: vec!["000_gone.sql".into()],
        };
        let out = render_status(&config, &status);
        colored::control::unset_override();

        assert!(out.contains("Dialect: sqlite3"));
        assert!(out.contains("Applied migrations: 1"));
        assert!(out.contains("- 001_create_users.sql (create users)"));
        assert!(out.contains("Pending migrations: 0"));
        assert!(out.contains("Missing files: 1"));
        assert!(out.contains("- 000_gone.sql (gone)"));
        assert!(out.contains("Database is up to date."));
    }

    #[test]
    #[serial_test::serial]
    fn pending_work_hides_up_to_date_line() {
        colored::control::set_override(false);
        let config = TesseraConfig::template(Dialect::Sqlite);
        let status = MigrationStatus {
            applied: vec![],
            pending: vec!["001_a.sql".into()],
            missing: vec![],
        };
        let out = render_status(&config, &status);
        colored::control::unset_override();

        assert!(out.contains("Pending migrations: 1"));
        assert!(!out.contains("Missing files"));
        assert!(!out.contains("up to date"));
    }
}

use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use tessera_core::plural;

use crate::utils::{finish, load_config, open_client};

pub async fn cmd_seed(config: Option<&Path>, matcher: Option<&str>) -> Result<()> {
    let config = load_config(config)?;
    let client = open_client(&config).await?;
    let result = client.seed(matcher).await;
    let seeded = finish(client, result).await?;

    if !seeded.is_empty() {
        println!(
            "{} {}",
            "Ran".bright_green().bold(),
            plural(seeded.len(), "seed")
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{CwdGuard, write_migration};
    use crate::commands::{cmd_init, cmd_migrate};
    use std::fs;
    use tempfile::tempdir;
    use tessera_config::FileFormat;
    use tessera_core::{Dialect, Query};

    async fn count(table: &str) -> i64 {
        let config = load_config(None).unwrap();
        let client = open_client(&config).await.unwrap();
        let out = client
            .query(&Query::from(format!("SELECT COUNT(*) AS c FROM {table}")))
            .await;
        let out = finish(client, out).await.unwrap();
        out.rows[0].get_i64("c").unwrap()
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn runs_matching_seeds() {
        let tmp = tempdir().unwrap();
        let _guard = CwdGuard::new(tmp.path());
        cmd_init(Dialect::Sqlite, FileFormat::Json).unwrap();
        write_migration("001_users.sql", "users");
        cmd_migrate(None, None).await.unwrap();
        fs::write("db/seeds/users.sql", "INSERT INTO users VALUES (1), (2);").unwrap();
        fs::write("db/seeds/other.sql", "INSERT INTO users VALUES (3);").unwrap();

        cmd_seed(None, Some("^users")).await.unwrap();
        assert_eq!(count("users").await, 2);

        cmd_seed(None, None).await.unwrap();
        assert_eq!(count("users").await, 5);
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn invalid_matcher_is_an_error() {
        let tmp = tempdir().unwrap();
        let _guard = CwdGuard::new(tmp.path());
        cmd_init(Dialect::Sqlite, FileFormat::Json).unwrap();

        let err = cmd_seed(None, Some("[")).await.unwrap_err();
        assert!(err.to_string().contains("seed matcher"));
    }
}

use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use tessera_loader::create_seed_file;

use crate::utils::load_config;

pub fn cmd_make_seed(config: Option<&Path>, name: &str) -> Result<()> {
    let config = load_config(config)?;
    let path = create_seed_file(&config.seed_folder(), name)?;
    println!("{} {}", "Created seed:".bright_green().bold(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::cmd_init;
    use crate::commands::test_support::CwdGuard;
    use std::path::PathBuf;
    use tempfile::tempdir;
    use tessera_config::FileFormat;
    use tessera_core::Dialect;

    #[test]
    #[serial_test::serial]
    fn creates_seed_once() {
        let tmp = tempdir().unwrap();
        let _guard = CwdGuard::new(tmp.path());
        cmd_init(Dialect::MySql, FileFormat::Json).unwrap();

        cmd_make_seed(None, "Demo Users").unwrap();
        assert!(PathBuf::from("db/seeds/demo_users.sql").exists());

        let err = cmd_make_seed(None, "demo users").unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }
}

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

fn tessera(dir: &Path) -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("tessera"));
    cmd.current_dir(dir).env_remove("RUST_LOG").env("NO_COLOR", "1");
    cmd
}

fn init_sqlite(dir: &Path) {
    tessera(dir)
        .args(["init", "--dialect", "sqlite3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tessera.json"));
}

fn write_migration(dir: &Path, name: &str, table: &str) {
    fs::write(
        dir.join("db/migrations").join(name),
        format!("-- up\nCREATE TABLE {table} (id INTEGER);\n-- down\nDROP TABLE {table};\n"),
    )
    .unwrap();
}

#[test]
fn test_main_with_help_flag() {
    let tmp = TempDir::new().unwrap();
    tessera(tmp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tessera"))
        .stdout(predicate::str::contains("make-migration"));
}

#[test]
fn test_commands_require_config() {
    let tmp = TempDir::new().unwrap();
    tessera(tmp.path())
        .arg("migrate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("tessera init"));
}

#[test]
fn test_missing_explicit_config() {
    let tmp = TempDir::new().unwrap();
    tessera(tmp.path())
        .args(["status", "--config", "elsewhere/tessera.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn test_rejects_bad_rollback_amount() {
    let tmp = TempDir::new().unwrap();
    tessera(tmp.path())
        .args(["rollback", "some"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid rollback amount"));
}

#[test]
fn test_init_then_make_files() {
    let tmp = TempDir::new().unwrap();
    init_sqlite(tmp.path());

    tessera(tmp.path())
        .args(["make-migration", "create users"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_create_users.sql"));
    tessera(tmp.path())
        .args(["make-seed", "users"])
        .assert()
        .success()
        .stdout(predicate::str::contains("users.sql"));

    assert!(tmp.path().join("db/seeds/users.sql").exists());
    tessera(tmp.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_migrate_status_seed_rollback_round_trip() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path();
    init_sqlite(dir);
    write_migration(dir, "001_users.sql", "users");
    write_migration(dir, "002_posts.sql", "posts");
    fs::write(dir.join("db/seeds/users.sql"), "INSERT INTO users VALUES (1);").unwrap();

    tessera(dir)
        .arg("migrate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Migrating"))
        .stdout(predicate::str::contains("002_posts.sql"))
        .stdout(predicate::str::contains("Applied 2 migrations"));

    tessera(dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Applied migrations:"))
        .stdout(predicate::str::contains("Database is up to date."));

    tessera(dir)
        .args(["seed", "users"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ran 1 seed"));

    tessera(dir)
        .args(["rollback", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rolled back 2 migrations"));

    tessera(dir)
        .arg("migrate")
        .arg("1")
        .assert()
        .success()
        .stdout(predicate::str::contains("Applied 1 migration"));
}

#[test]
fn test_debug_flag_logs_statements() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path();
    init_sqlite(dir);
    write_migration(dir, "001_users.sql", "users");

    tessera(dir)
        .args(["--debug", "migrate"])
        .assert()
        .success()
        .stderr(predicate::str::contains("loaded config"))
        .stderr(predicate::str::contains("executing statement"));
}

#[test]
fn test_config_flag_from_parent_directory() {
    let tmp = TempDir::new().unwrap();
    let project = tmp.path().join("proj");
    fs::create_dir(&project).unwrap();
    init_sqlite(&project);
    write_migration(&project, "001_users.sql", "users");

    tessera(tmp.path())
        .args(["--config", "proj/tessera.json", "migrate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Applied 1 migration"));
    assert!(project.join("db/app.sqlite3").exists());

    tessera(tmp.path())
        .args(["--config", "proj/tessera.json", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Database is up to date."));
}

#[test]
fn test_failed_migration_exits_non_zero() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path();
    init_sqlite(dir);
    fs::write(
        dir.join("db/migrations/001_broken.sql"),
        "-- up\nINSERT INTO nowhere VALUES (1);\n",
    )
    .unwrap();

    tessera(dir)
        .arg("migrate")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Failed"))
        .stderr(predicate::str::contains("001_broken.sql"));
}

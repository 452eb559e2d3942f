use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tessera_config::FileFormat;
use tessera_core::{Dialect, RollbackAmount};

mod commands;
mod telemetry;
mod utils;
use commands::{
    cmd_init, cmd_make_migration, cmd_make_seed, cmd_migrate, cmd_rollback, cmd_seed, cmd_status,
};

/// tessera command-line interface.
#[derive(Parser, Debug)]
#[command(name = "tessera", author, version, about)]
struct Cli {
    /// Config file to use instead of tessera.json/.yaml/.yml in the current directory.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log debug output, including every executed statement.
    #[arg(long, global = true)]
    debug: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a starter config and create the migration and seed folders.
    Init {
        #[arg(long, value_enum, default_value_t = Dialect::Sqlite)]
        dialect: Dialect,
        #[arg(long, value_enum, default_value = "json")]
        format: FileFormat,
    },
    /// Create an empty timestamped migration file.
    MakeMigration { name: String },
    /// Create an empty seed file.
    MakeSeed { name: String },
    /// Apply pending migrations (all of them unless an amount is given).
    Migrate { amount: Option<usize> },
    /// Reverse applied migrations: a number, or `all`. Defaults to 1.
    Rollback { amount: Option<RollbackAmount> },
    /// Run seeds whose name matches the regex, or all seeds.
    Seed { matcher: Option<String> },
    /// Show applied, pending and missing migrations.
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init_tracing(cli.debug)?;

    let config = cli.config.as_deref();
    match cli.command {
        Commands::Init { dialect, format } => cmd_init(dialect, format),
        Commands::MakeMigration { name } => cmd_make_migration(config, &name),
        Commands::MakeSeed { name } => cmd_make_seed(config, &name),
        Commands::Migrate { amount } => cmd_migrate(config, amount).await,
        Commands::Rollback { amount } => cmd_rollback(config, amount.unwrap_or_default()).await,
        Commands::Seed { matcher } => cmd_seed(config, matcher.as_deref()).await,
        Commands::Status => cmd_status(config).await,
    }
}

pub mod config;
pub mod migrations;
pub mod seeds;

pub use config::{find_config, load_config, load_config_from_path, write_config};
pub use migrations::{
    MIGRATION_TEMPLATE, create_migration_file, load_migrations, parse_migration,
};
pub use seeds::{SEED_TEMPLATE, create_seed_file, load_seeds};

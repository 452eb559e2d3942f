pub mod init;
pub mod make_migration;
pub mod make_seed;
pub mod migrate;
pub mod rollback;
pub mod seed;
pub mod status;

pub use init::cmd_init;
pub use make_migration::cmd_make_migration;
pub use make_seed::cmd_make_seed;
pub use migrate::cmd_migrate;
pub use rollback::cmd_rollback;
pub use seed::cmd_seed;
pub use status::cmd_status;

//! Dialect clients: connect, keep the ledger, and run migrations, rollbacks
//! and seeds in order.

pub mod adapters;
pub mod client;
pub mod connection;
pub mod factory;

pub use adapters::{DialectAdapter, MySqlAdapter, PostgresAdapter, SqliteAdapter};
pub use client::{Client, ClientI, MySqlClient, PostgresClient, SqliteClient};
pub use connection::ConnectionHandle;
pub use factory::client_from_config;

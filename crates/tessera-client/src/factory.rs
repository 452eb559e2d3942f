use tessera_config::TesseraConfig;
use tessera_core::{ClientError, Dialect};

use crate::adapters::{DialectAdapter, MySqlAdapter, PostgresAdapter, SqliteAdapter};
use crate::client::{Client, ClientI};

/// Build the client for the configured dialect.
///
/// The returned client is not connected yet; call `prepare` first.
pub fn client_from_config(config: &TesseraConfig) -> Result<Box<dyn ClientI>, ClientError> {
    match config.dialect() {
        Dialect::Postgres => boxed::<PostgresAdapter>(config),
        Dialect::MySql => boxed::<MySqlAdapter>(config),
        Dialect::Sqlite => boxed::<SqliteAdapter>(config),
    }
}

fn boxed<A: DialectAdapter>(config: &TesseraConfig) -> Result<Box<dyn ClientI>, ClientError> {
    let client = Client::<A>::from_options(&config.client.options)?
        .with_expose_query_builder(config.expose_query_builder);
    Ok(Box::new(client))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::path::Path;

    #[rstest]
    #[case(Dialect::Postgres)]
    #[case(Dialect::MySql)]
    #[case(Dialect::Sqlite)]
    fn builds_client_for_each_dialect(#[case] dialect: Dialect) {
        let mut config = TesseraConfig::template(dialect);
        config.expose_query_builder = true;
        let client = client_from_config(&config).unwrap();
        assert_eq!(client.dialect(), dialect);
        assert!(client.expose_query_builder());
        assert_eq!(client.migration_folder(), Path::new("db/migrations"));
    }

    #[test]
    fn bad_dialect_options_surface_as_invalid_option() {
        let mut config = TesseraConfig::template(Dialect::Postgres);
        config.client.options.set("port", "not a port");
        let err = client_from_config(&config).err().unwrap();
        assert!(matches!(err, ClientError::InvalidOption(_)));
    }
}

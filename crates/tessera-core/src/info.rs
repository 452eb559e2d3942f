use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tessera_query::QueryBuilder;

use crate::dialect::Dialect;
use crate::error::ClientError;
use crate::query::{Query, QueryOutput};

/// Executes SQL against the live connection.
///
/// Statements of a [`Query::Many`] run in order; the first failure stops the
/// batch. Nothing is retried.
#[async_trait]
pub trait QueryHandler: Send + Sync {
    async fn query(&self, query: &Query) -> Result<QueryOutput, ClientError>;
}

/// Context passed to every `up`/`down` call.
///
/// A new `Info` is built for each call. The connection handle is shared for
/// the whole run; the query builder is only present when the client was
/// configured with `exposeQueryBuilder`.
#[derive(Clone)]
pub struct Info {
    dialect: Dialect,
    connection: Arc<dyn QueryHandler>,
    query_builder: Option<QueryBuilder>,
}

impl Info {
    pub fn new(
        dialect: Dialect,
        connection: Arc<dyn QueryHandler>,
        expose_query_builder: bool,
    ) -> Self {
        Self {
            dialect,
            connection,
            query_builder: expose_query_builder.then(|| QueryBuilder::new(dialect.backend())),
        }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn connection(&self) -> &dyn QueryHandler {
        self.connection.as_ref()
    }

    pub fn query_builder(&self) -> Option<&QueryBuilder> {
        self.query_builder.as_ref()
    }
}

impl fmt::Debug for Info {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Info")
            .field("dialect", &self.dialect)
            .field("query_builder", &self.query_builder)
            .finish_non_exhaustive()
    }
}

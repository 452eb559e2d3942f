use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::ClientError;
use crate::query::Query;

/// Repeatable data population. Seeds are never recorded in the ledger.
#[async_trait]
pub trait Seed: Send + Sync {
    async fn run(&self) -> Result<Query, ClientError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlSeed(pub Query);

#[async_trait]
impl Seed for SqlSeed {
    async fn run(&self) -> Result<Query, ClientError> {
        Ok(self.0.clone())
    }
}

#[derive(Clone)]
pub struct SeedFile {
    name: String,
    seed: Arc<dyn Seed>,
}

impl SeedFile {
    pub fn new(name: impl Into<String>, seed: impl Seed + 'static) -> Self {
        Self {
            name: name.into(),
            seed: Arc::new(seed),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn seed(&self) -> &dyn Seed {
        self.seed.as_ref()
    }
}

impl fmt::Debug for SeedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeedFile")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

use std::sync::Arc;

use rosetta_core::{config::DatabaseConfig, Database, DatabaseError, Domain, NetworkSet};
use rosetta_postgres::PgDatabase;

/// The data store backing the server
#[derive(Clone)]
#[non_exhaustive]
pub enum DatabaseAdapter {
    Postgres(PgDatabase),
}

impl DatabaseAdapter {
    pub fn open(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        let db = PgDatabase::open(config)?;
        Ok(Self::Postgres(db))
    }
}

impl From<PgDatabase> for DatabaseAdapter {
    fn from(value: PgDatabase) -> Self {
        Self::Postgres(value)
    }
}

impl Database for DatabaseAdapter {
    async fn ping(&self) -> Result<(), DatabaseError> {
        match self {
            DatabaseAdapter::Postgres(x) => x.ping().await,
        }
    }

    async fn close(self) -> Result<(), DatabaseError> {
        match self {
            DatabaseAdapter::Postgres(x) => x.close().await,
        }
    }
}

#[derive(Clone)]
pub struct DomainAdapter {
    pub networks: Arc<NetworkSet>,
    pub database: DatabaseAdapter,
}

impl DomainAdapter {
    pub fn new(networks: NetworkSet, database: impl Into<DatabaseAdapter>) -> Self {
        Self {
            networks: Arc::new(networks),
            database: database.into(),
        }
    }
}

impl Domain for DomainAdapter {
    type Database = DatabaseAdapter;

    fn networks(&self) -> &NetworkSet {
        &self.networks
    }

    fn database(&self) -> &Self::Database {
        &self.database
    }
}

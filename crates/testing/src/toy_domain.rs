use std::sync::{
    atomic::{AtomicBool, AtomicUsize, Ordering},
    Arc,
};

use rosetta_core::{Database, DatabaseError, Domain, NetworkSet};

/// In-memory [`Database`] double that records how it was used
#[derive(Clone, Default)]
pub struct ToyDatabase {
    pings: Arc<AtomicUsize>,
    closed: Arc<AtomicBool>,
}

impl ToyDatabase {
    pub fn pings(&self) -> usize {
        self.pings.load(Ordering::SeqCst)
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

impl Database for ToyDatabase {
    async fn ping(&self) -> Result<(), DatabaseError> {
        if self.is_closed() {
            return Err(DatabaseError::Closed);
        }

        self.pings.fetch_add(1, Ordering::SeqCst);

        Ok(())
    }

    async fn close(self) -> Result<(), DatabaseError> {
        if self.closed.swap(true, Ordering::SeqCst) {
            return Err(DatabaseError::Closed);
        }

        Ok(())
    }
}

#[derive(Clone)]
pub struct ToyDomain {
    networks: Arc<NetworkSet>,
    database: ToyDatabase,
}

impl ToyDomain {
    pub fn new(networks: NetworkSet) -> Self {
        Self {
            networks: Arc::new(networks),
            database: ToyDatabase::default(),
        }
    }
}

impl Default for ToyDomain {
    fn default() -> Self {
        Self::new(NetworkSet::cardano_mainnet())
    }
}

impl Domain for ToyDomain {
    type Database = ToyDatabase;

    fn networks(&self) -> &NetworkSet {
        &self.networks
    }

    fn database(&self) -> &Self::Database {
        &self.database
    }
}

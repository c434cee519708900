use std::{
    str::FromStr,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Duration,
};

use bb8::Pool;
use bb8_postgres::PostgresConnectionManager;
use tokio_postgres::NoTls;
use tracing::{debug, info};

use rosetta_core::{config::DatabaseConfig, Database, DatabaseError};

pub type PgPool = Pool<PostgresConnectionManager<NoTls>>;

/// Postgres-backed [`Database`] built on a bb8 connection pool.
///
/// The pool is lazy: opening it only validates the connection settings,
/// connections are established on first use. Must be opened from within a
/// tokio runtime.
#[derive(Clone)]
pub struct PgDatabase {
    pool: PgPool,
    closed: Arc<AtomicBool>,
}

impl PgDatabase {
    pub fn open(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        let pg_config = tokio_postgres::Config::from_str(&config.connection_string)
            .map_err(|err| DatabaseError::InvalidConfig(err.to_string()))?;

        let manager = PostgresConnectionManager::new(pg_config, NoTls);

        let pool = bb8::Pool::builder()
            .max_size(config.max_connections())
            .connection_timeout(Duration::from_secs(config.connect_timeout_secs()))
            .build_unchecked(manager);

        info!(
            max_connections = config.max_connections(),
            "database pool opened"
        );

        Ok(Self {
            pool,
            closed: Arc::new(AtomicBool::new(false)),
        })
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    pub fn pool(&self) -> Result<&PgPool, DatabaseError> {
        if self.is_closed() {
            return Err(DatabaseError::Closed);
        }

        Ok(&self.pool)
    }
}

impl Database for PgDatabase {
    async fn ping(&self) -> Result<(), DatabaseError> {
        let conn = self
            .pool()?
            .get()
            .await
            .map_err(DatabaseError::unavailable)?;

        conn.simple_query("SELECT 1")
            .await
            .map_err(DatabaseError::unavailable)?;

        debug!("database ping succeeded");

        Ok(())
    }

    async fn close(self) -> Result<(), DatabaseError> {
        if self.closed.swap(true, Ordering::SeqCst) {
            return Err(DatabaseError::Closed);
        }

        let state = self.pool.state();
        info!(
            connections = state.connections,
            idle = state.idle_connections,
            "closing database pool"
        );

        // idle connections are dropped together with the last pool handle
        drop(self.pool);

        Ok(())
    }
}

use thiserror::Error;

pub mod config;
mod network;

pub use network::*;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("at least one network must be configured")]
    NoNetworks,

    #[error("network {0} is configured more than once")]
    DuplicateNetwork(NetworkIdentifier),

    #[error("blockchain of network '{0}' can't be blank")]
    BlankBlockchain(String),

    #[error("network of blockchain '{0}' can't be blank")]
    BlankNetwork(String),
}

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("invalid database config: {0}")]
    InvalidConfig(String),

    #[error("database unavailable")]
    Unavailable(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("database has been closed")]
    Closed,
}

impl DatabaseError {
    pub fn unavailable(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Box::new(error))
    }
}

#[derive(Debug, Error)]
pub enum ServeError {
    #[error("failed to bind listener")]
    BindError(std::io::Error),

    #[error("failed to shutdown")]
    ShutdownError(std::io::Error),
}

/// Handle to the data store that backs the Rosetta endpoints.
///
/// Implementations are cheap to clone; all clones share the same underlying
/// pool. Closing consumes the handle and makes every remaining clone report
/// [`DatabaseError::Closed`].
#[trait_variant::make(Send)]
pub trait Database: Clone + Send + Sync + 'static {
    /// Checks that a connection can be acquired and used
    async fn ping(&self) -> Result<(), DatabaseError>;

    async fn close(self) -> Result<(), DatabaseError>;
}

pub trait Domain: Clone + Send + Sync + 'static {
    type Database: Database;

    fn networks(&self) -> &NetworkSet;
    fn database(&self) -> &Self::Database;
}

#[trait_variant::make(Send)]
pub trait CancelToken: Send + Sync + 'static + Clone {
    async fn cancelled(&self);
}

#[trait_variant::make(Send)]
pub trait Driver<D: Domain, C: CancelToken>: Send + Sync + 'static {
    type Config: Clone;

    async fn run(config: Self::Config, domain: D, cancel: C) -> Result<(), ServeError>;
}

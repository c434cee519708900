use std::net::SocketAddr;

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};

use crate::NetworkSet;

#[derive(Serialize, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub connection_string: String,

    /// Upper bound of pooled connections
    pub max_connections: Option<u32>,

    /// Seconds to wait for a connection before giving up
    pub connect_timeout_secs: Option<u64>,
}

impl DatabaseConfig {
    pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;
    pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

    pub fn max_connections(&self) -> u32 {
        self.max_connections.unwrap_or(Self::DEFAULT_MAX_CONNECTIONS)
    }

    pub fn connect_timeout_secs(&self) -> u64 {
        self.connect_timeout_secs.unwrap_or(Self::DEFAULT_CONNECT_TIMEOUT_SECS)
    }
}

#[derive(Deserialize, Serialize, Clone)]
pub struct RosettaConfig {
    pub listen_address: SocketAddr,
    pub permissive_cors: Option<bool>,

    /// Version of the Cardano node backing this deployment, as reported by
    /// `/network/options`
    pub node_version: Option<String>,
}

impl RosettaConfig {
    pub fn node_version(&self) -> &str {
        self.node_version.as_deref().unwrap_or("unknown")
    }
}

#[derive(Deserialize, Serialize, Clone, Default)]
pub struct ServeConfig {
    pub rosetta: Option<RosettaConfig>,
}

#[serde_as]
#[derive(Serialize, Deserialize, Debug)]
pub struct LoggingConfig {
    #[serde_as(as = "DisplayFromStr")]
    pub max_level: tracing::Level,

    #[serde(default)]
    pub include_tokio: bool,

    #[serde(default)]
    pub include_tower_http: bool,

    #[serde(default)]
    pub include_postgres: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            max_level: tracing::Level::INFO,
            include_tokio: Default::default(),
            include_tower_http: Default::default(),
            include_postgres: Default::default(),
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct RootConfig {
    #[serde(default)]
    pub networks: NetworkSet,

    pub database: DatabaseConfig,

    #[serde(default)]
    pub serve: ServeConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

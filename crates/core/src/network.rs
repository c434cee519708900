use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::ConfigError;

pub const CARDANO: &str = "cardano";
pub const MAINNET: &str = "mainnet";

/// A (blockchain, network) pair identifying a specific chain environment
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NetworkIdentifier {
    pub blockchain: String,
    pub network: String,
}

impl NetworkIdentifier {
    pub fn new(blockchain: impl Into<String>, network: impl Into<String>) -> Self {
        Self {
            blockchain: blockchain.into(),
            network: network.into(),
        }
    }

    pub fn cardano_mainnet() -> Self {
        Self::new(CARDANO, MAINNET)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.blockchain.trim().is_empty() {
            return Err(ConfigError::BlankBlockchain(self.network.clone()));
        }

        if self.network.trim().is_empty() {
            return Err(ConfigError::BlankNetwork(self.blockchain.clone()));
        }

        Ok(())
    }
}

impl Display for NetworkIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.blockchain, self.network)
    }
}

/// The networks served by a deployment.
///
/// Built once at startup and never mutated afterwards. Construction enforces
/// that the set is non-empty, that every identifier has non-blank fields and
/// that no identifier appears twice. Iteration follows the configured order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<NetworkIdentifier>", into = "Vec<NetworkIdentifier>")]
pub struct NetworkSet(Vec<NetworkIdentifier>);

impl NetworkSet {
    pub fn new(networks: Vec<NetworkIdentifier>) -> Result<Self, ConfigError> {
        if networks.is_empty() {
            return Err(ConfigError::NoNetworks);
        }

        for (idx, network) in networks.iter().enumerate() {
            network.validate()?;

            if networks[..idx].contains(network) {
                return Err(ConfigError::DuplicateNetwork(network.clone()));
            }
        }

        Ok(Self(networks))
    }

    pub fn single(network: NetworkIdentifier) -> Result<Self, ConfigError> {
        Self::new(vec![network])
    }

    pub fn cardano_mainnet() -> Self {
        Self(vec![NetworkIdentifier::cardano_mainnet()])
    }

    pub fn iter(&self) -> impl Iterator<Item = &NetworkIdentifier> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    // always false once constructed
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[NetworkIdentifier] {
        &self.0
    }

    pub fn contains(&self, network: &NetworkIdentifier) -> bool {
        self.0.contains(network)
    }

    pub fn serves_blockchain(&self, blockchain: &str) -> bool {
        self.0.iter().any(|x| x.blockchain == blockchain)
    }
}

impl Default for NetworkSet {
    fn default() -> Self {
        Self::cardano_mainnet()
    }
}

impl TryFrom<Vec<NetworkIdentifier>> for NetworkSet {
    type Error = ConfigError;

    fn try_from(value: Vec<NetworkIdentifier>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NetworkSet> for Vec<NetworkIdentifier> {
    fn from(value: NetworkSet) -> Self {
        value.0
    }
}

impl<'a> IntoIterator for &'a NetworkSet {
    type Item = &'a NetworkIdentifier;
    type IntoIter = std::slice::Iter<'a, NetworkIdentifier>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

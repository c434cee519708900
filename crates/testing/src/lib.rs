use std::time::Duration;

use rosetta_core::*;

pub mod toy_domain;

pub use toy_domain::{ToyDatabase, ToyDomain};

pub fn cardano_preprod() -> NetworkIdentifier {
    NetworkIdentifier::new(CARDANO, "preprod")
}

pub fn cardano_preview() -> NetworkIdentifier {
    NetworkIdentifier::new(CARDANO, "preview")
}

/// A network set serving several Cardano environments, in a fixed order
pub fn multi_network_set() -> NetworkSet {
    NetworkSet::new(vec![
        NetworkIdentifier::cardano_mainnet(),
        cardano_preprod(),
        cardano_preview(),
    ])
    .expect("valid multi-network set")
}

#[derive(Clone, Default)]
/// Cancel token that cancels after a set amount of time.
pub struct ToyCancelToken {
    duration: Duration,
}

impl ToyCancelToken {
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }
}

impl CancelToken for ToyCancelToken {
    async fn cancelled(&self) {
        tokio::time::sleep(self.duration).await;
    }
}

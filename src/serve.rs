use miette::{Context, IntoDiagnostic};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use rosetta_core::{config::ServeConfig, CancelToken, Domain, Driver};

#[derive(Clone)]
pub struct CancelTokenImpl(pub CancellationToken);

impl CancelToken for CancelTokenImpl {
    async fn cancelled(&self) {
        self.0.cancelled().await;
    }
}

/// Serve remote requests
///
/// Starts every API present in the config and waits until all of them finish,
/// which happens once the exit token gets cancelled.
pub async fn serve<D: Domain>(
    config: ServeConfig,
    domain: D,
    exit: CancellationToken,
) -> miette::Result<()> {
    let Some(cfg) = config.rosetta else {
        warn!("no api configured, nothing to serve");
        return Ok(());
    };

    info!("found rosetta config");

    <rosetta_api::Driver as Driver<D, CancelTokenImpl>>::run(cfg, domain, CancelTokenImpl(exit))
        .await
        .into_diagnostic()
        .context("serving rosetta api")
}

use miette::{Context, IntoDiagnostic};
use rosetta_core::{Database as _, Domain as _};
use tracing::{info, warn};

#[derive(Debug, clap::Args)]
pub struct Args {}

#[tokio::main]
pub async fn run(config: super::Config, _args: &Args) -> miette::Result<()> {
    crate::common::setup_tracing(&config.logging)?;

    let domain = crate::common::setup_domain(&config)?;

    for network in domain.networks() {
        info!(%network, "serving network");
    }

    match domain.database().ping().await {
        Ok(()) => info!("database is reachable"),
        Err(err) => warn!(%err, "database is not reachable yet"),
    }

    let exit = crate::common::hook_exit_token();

    cardano_rosetta::serve::serve(config.serve, domain.clone(), exit)
        .await
        .context("serving clients")?;

    domain
        .database
        .close()
        .await
        .into_diagnostic()
        .context("closing database")?;

    warn!("shutdown complete");

    Ok(())
}

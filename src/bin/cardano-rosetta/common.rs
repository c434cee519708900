use miette::{Context as _, IntoDiagnostic};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use tracing_subscriber::{filter::Targets, prelude::*};

use cardano_rosetta::adapters::{DatabaseAdapter, DomainAdapter};
use rosetta_core::config::LoggingConfig;

pub fn setup_tracing(config: &LoggingConfig) -> miette::Result<()> {
    let level = config.max_level;

    let mut filter = Targets::new()
        .with_target("cardano_rosetta", level)
        .with_target("rosetta_core", level)
        .with_target("rosetta_api", level)
        .with_target("rosetta_postgres", level);

    if config.include_tokio {
        filter = filter
            .with_target("tokio", level)
            .with_target("runtime", level);
    }

    if config.include_tower_http {
        filter = filter.with_target("tower_http", level);
    }

    if config.include_postgres {
        filter = filter
            .with_target("tokio_postgres", level)
            .with_target("bb8", level);
    }

    tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(level)
        .finish()
        .with(filter)
        .try_init()
        .into_diagnostic()
        .context("initializing tracing")?;

    Ok(())
}

pub fn setup_domain(config: &crate::Config) -> miette::Result<DomainAdapter> {
    let database = DatabaseAdapter::open(&config.database)
        .into_diagnostic()
        .context("opening database")?;

    Ok(DomainAdapter::new(config.networks.clone(), database))
}

pub fn hook_exit_token() -> CancellationToken {
    let cancel = CancellationToken::new();

    let cancel2 = cancel.clone();
    tokio::spawn(async move {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(%err, "can't listen for exit signal");
            return;
        }

        warn!("exit signal detected");
        debug!("notifying exit");
        cancel2.cancel();
    });

    cancel
}

use axum::{extract::Request, routing::post, Router, ServiceExt};
use std::ops::Deref;
use tower::Layer;
use tower_http::{
    cors::CorsLayer,
    normalize_path::{NormalizePath, NormalizePathLayer},
    trace,
};
use tracing::Level;

use rosetta_core::{config::RosettaConfig, CancelToken, Domain, ServeError};

pub mod error;
pub mod extract;
pub mod routes;

#[cfg(test)]
mod test_support;

#[derive(Clone)]
pub struct Facade<D: Domain> {
    pub inner: D,
    pub config: RosettaConfig,
}

impl<D: Domain> Deref for Facade<D> {
    type Target = D;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

pub fn build_router_with_facade<D: Domain>(facade: Facade<D>) -> Router {
    let permissive_cors = facade.config.permissive_cors.unwrap_or_default();

    Router::new()
        .route("/network/list", post(routes::network::list::<D>))
        .route("/network/options", post(routes::network::options::<D>))
        .with_state(facade)
        .layer(
            trace::TraceLayer::new_for_http()
                .make_span_with(trace::DefaultMakeSpan::new().level(Level::INFO))
                .on_response(trace::DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(if permissive_cors {
            CorsLayer::permissive()
        } else {
            CorsLayer::new()
        })
}

/// Router with trailing slashes trimmed before routing
pub type App = NormalizePath<Router>;

pub fn build_app_with_facade<D: Domain>(facade: Facade<D>) -> App {
    NormalizePathLayer::trim_trailing_slash().layer(build_router_with_facade(facade))
}

pub fn build_app<D: Domain>(cfg: RosettaConfig, domain: D) -> App {
    build_app_with_facade(Facade {
        inner: domain,
        config: cfg,
    })
}

pub struct Driver;

impl<D: Domain, C: CancelToken> rosetta_core::Driver<D, C> for Driver {
    type Config = RosettaConfig;

    async fn run(cfg: Self::Config, domain: D, cancel: C) -> Result<(), ServeError> {
        let listen_address = cfg.listen_address;

        let app = build_app(cfg, domain);

        let listener = tokio::net::TcpListener::bind(listen_address)
            .await
            .map_err(ServeError::BindError)?;

        tracing::info!(%listen_address, "rosetta api listening");

        axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
            .with_graceful_shutdown(async move { cancel.cancelled().await })
            .await
            .map_err(ServeError::ShutdownError)?;

        Ok(())
    }
}

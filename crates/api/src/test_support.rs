use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use rosetta_core::{config::RosettaConfig, NetworkSet};
use rosetta_testing::ToyDomain;
use tower::util::ServiceExt;

use crate::{build_app_with_facade, App, Facade};

pub struct TestApp {
    router: App,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_networks(NetworkSet::cardano_mainnet())
    }

    pub fn with_networks(networks: NetworkSet) -> Self {
        let cfg = RosettaConfig {
            listen_address: "[::]:0".parse().expect("invalid listen address"),
            permissive_cors: None,
            node_version: Some("test".into()),
        };

        let facade = Facade {
            inner: ToyDomain::new(networks),
            config: cfg,
        };

        Self {
            router: build_app_with_facade(facade),
        }
    }

    async fn send(&self, req: Request<Body>) -> (StatusCode, Vec<u8>) {
        let res = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("request failed");

        let status = res.status();
        let bytes = res
            .into_body()
            .collect()
            .await
            .expect("failed to read response body")
            .to_bytes();

        (status, bytes.to_vec())
    }

    pub async fn get_bytes(&self, path: &str) -> (StatusCode, Vec<u8>) {
        let req = Request::builder()
            .method(Method::GET)
            .uri(path)
            .body(Body::empty())
            .expect("failed to build request");

        self.send(req).await
    }

    pub async fn post_bytes(&self, path: &str, body: Vec<u8>) -> (StatusCode, Vec<u8>) {
        let req = Request::builder()
            .method(Method::POST)
            .uri(path)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .expect("failed to build request");

        self.send(req).await
    }
}

use axum::{extract::State, Json};
use rosetta_core::{Domain, NetworkIdentifier, NetworkSet};
use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, RosettaError},
    extract::RosettaJson,
    Facade,
};

pub const ROSETTA_VERSION: &str = "1.4.13";

pub const OPERATION_TYPES: &[&str] = &[
    "input",
    "output",
    "stakeKeyRegistration",
    "stakeKeyDeregistration",
    "stakeDelegation",
    "withdrawal",
    "poolRegistration",
    "poolRetirement",
];

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct MetadataRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NetworkRequest {
    pub network_identifier: NetworkIdentifier,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkListResponse {
    pub network_identifiers: Vec<NetworkIdentifier>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Version {
    pub rosetta_version: String,
    pub node_version: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub middleware_version: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OperationStatus {
    pub status: String,
    pub successful: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Allow {
    pub operation_statuses: Vec<OperationStatus>,
    pub operation_types: Vec<String>,
    pub errors: Vec<RosettaError>,
    pub historical_balance_lookup: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NetworkOptionsResponse {
    pub version: Version,
    pub allow: Allow,
}

/// Lists every network this deployment serves, in configured order.
///
/// A pure projection of the configured set: the request carries no required
/// fields and is otherwise ignored.
pub fn network_list(networks: &NetworkSet, _request: &MetadataRequest) -> NetworkListResponse {
    NetworkListResponse {
        network_identifiers: networks.iter().cloned().collect(),
    }
}

/// Checks that the requested network is one this deployment serves
pub fn ensure_network(networks: &NetworkSet, requested: &NetworkIdentifier) -> Result<(), Error> {
    if !networks.serves_blockchain(&requested.blockchain) {
        return Err(Error::InvalidBlockchain);
    }

    if !networks.contains(requested) {
        return Err(Error::NetworkNotFound);
    }

    Ok(())
}

pub fn network_options(
    networks: &NetworkSet,
    node_version: &str,
    request: &NetworkRequest,
) -> Result<NetworkOptionsResponse, Error> {
    ensure_network(networks, &request.network_identifier)?;

    Ok(NetworkOptionsResponse {
        version: Version {
            rosetta_version: ROSETTA_VERSION.to_string(),
            node_version: node_version.to_string(),
            middleware_version: Some(env!("CARGO_PKG_VERSION").to_string()),
        },
        allow: Allow {
            operation_statuses: vec![
                OperationStatus {
                    status: "success".into(),
                    successful: true,
                },
                OperationStatus {
                    status: "invalid".into(),
                    successful: false,
                },
            ],
            operation_types: OPERATION_TYPES.iter().map(|x| x.to_string()).collect(),
            errors: Error::catalog(),
            historical_balance_lookup: true,
        },
    })
}

pub async fn list<D: Domain>(
    State(facade): State<Facade<D>>,
    RosettaJson(request): RosettaJson<MetadataRequest>,
) -> Json<NetworkListResponse> {
    Json(network_list(facade.networks(), &request))
}

pub async fn options<D: Domain>(
    State(facade): State<Facade<D>>,
    RosettaJson(request): RosettaJson<NetworkRequest>,
) -> Result<Json<NetworkOptionsResponse>, Error> {
    let response = network_options(facade.networks(), facade.config.node_version(), &request)?;

    Ok(Json(response))
}
